//! SDK ルート配下のディレクトリ構成
//!
//! AppEnvironment::resolve_dirs() で取得し、クラッシュ・バッファ・診断ログのパス計算に使う。

use std::path::PathBuf;

/// クラッシュレポートの格納先（root 直下）
pub const CRASHES_DIR_NAME: &str = "crashes";

/// バッファ済みイベントの格納先（root 直下）
pub const LOG_BUFFER_DIR_NAME: &str = "crasheslogbuffer";

/// SDK 自身の JSONL 診断ログ
pub const LOGS_DIR_NAME: &str = "logs";

/// 解決済みの SDK ルート（例: ~/.cache/com.crashes.sdk）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub root: PathBuf,
}

impl Dirs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// クラッシュレポート格納ディレクトリ（root/crashes）
    pub fn crashes_dir(&self) -> PathBuf {
        self.root.join(CRASHES_DIR_NAME)
    }

    /// ログバッファ格納ディレクトリ（root/crasheslogbuffer）
    ///
    /// crashes_dir() とは兄弟ディレクトリで、片方を掃除してももう片方には触れない。
    pub fn log_buffer_dir(&self) -> PathBuf {
        self.root.join(LOG_BUFFER_DIR_NAME)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join(LOGS_DIR_NAME)
    }
}
