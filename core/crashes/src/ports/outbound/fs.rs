//! ファイルシステム Outbound ポート
//!
//! ユースケースはこの trait 経由でのみファイル I/O を行う。

use crate::error::Error;
use std::path::Path;

/// ファイルメタデータ（種別）
#[derive(Debug, Clone)]
pub struct FileMetadata {
    is_dir: bool,
}

impl FileMetadata {
    pub fn new(is_dir: bool) -> Self {
        Self { is_dir }
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `crashes::adapter::StdFileSystem` やテスト用のフェイクなど。
pub trait FileSystem: Send + Sync {
    /// ディレクトリを親ごと作成する。既に存在していれば成功（冪等）。
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error>;
    /// 現在のプロセスが書き込めるか
    fn is_writable(&self, path: &Path) -> bool;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;

    /// パスが存在するか（metadata が取れれば true）
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }
}
