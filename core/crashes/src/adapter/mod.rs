//! アダプター（ports の標準実装）
//!
//! ユースケースは ports の trait 経由でのみ環境・ファイル・ログに触れる。
//! 実装は標準実装（Std*）やテスト用のフェイクを注入する。

pub mod file_json_log;
pub mod std_app_environment;
pub mod std_fs;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_app_environment::StdAppEnvironment;
pub use std_fs::StdFileSystem;
