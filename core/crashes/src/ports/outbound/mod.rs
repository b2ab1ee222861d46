//! Outbound ポート: ユースケースが外界（環境・FS・ログ）を使うための trait

pub mod app_environment;
pub mod fs;
pub mod log;

pub use app_environment::AppEnvironment;
pub use fs::{FileMetadata, FileSystem};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
