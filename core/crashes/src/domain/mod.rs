//! ドメイン型（Newtype）
//!
//! PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

pub mod dirs;
pub mod process_kind;

use std::path::{Path, PathBuf};

pub use dirs::Dirs;
pub use process_kind::ProcessKind;

/// クラッシュレポートの保存・読み出しディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashesDir(PathBuf);

impl CrashesDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl std::ops::Deref for CrashesDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for CrashesDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for CrashesDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

/// クラッシュ時に失われないようイベントを退避しておくバッファディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogBufferDir(PathBuf);

impl LogBufferDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl std::ops::Deref for LogBufferDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for LogBufferDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for LogBufferDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}
