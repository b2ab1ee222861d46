//! クラッシュレポート SDK のストレージ・実行環境ユーティリティ
//!
//! - クラッシュレポートの保存ディレクトリ
//! - クラッシュ時にイベントを失わないためのログバッファディレクトリ
//! - アプリ拡張として動いているかの判定
//!
//! 公開関数はプロセス共有の [`usecase::CrashesUtil`] に委譲する。
//! 環境を差し替えたい場合は `CrashesUtil::new` に独自の ports 実装を渡す。

/// エラーハンドリング
pub mod error;

pub mod adapter;
pub mod domain;
pub mod ports;
pub mod usecase;
pub mod wiring;

#[cfg(test)]
mod tests;

pub use domain::{CrashesDir, Dirs, LogBufferDir, ProcessKind};
pub use usecase::CrashesUtil;

/// クラッシュレポートの保存・読み出しディレクトリ。
///
/// 同一プロセス内では常に同じ値を返す。解決・作成できなければ `None`。
pub fn crashes_dir() -> Option<CrashesDir> {
    wiring::default_util().crashes_dir()
}

/// バッファ済みイベントの保存ディレクトリ。`crashes_dir()` とは必ず異なる。
pub fn log_buffer_dir() -> Option<LogBufferDir> {
    wiring::default_util().log_buffer_dir()
}

/// SDK がアプリ拡張の中で使われていれば true
pub fn is_app_extension() -> bool {
    wiring::default_util().is_app_extension()
}
