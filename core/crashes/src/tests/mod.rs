//! crate 内テスト共通のヘルパとフェイク


use crate::adapter::StdFileSystem;
use crate::domain::{Dirs, ProcessKind};
use crate::error::Error;
use crate::ports::outbound::{AppEnvironment, FileMetadata, FileSystem, Log, LogRecord};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock};

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// 環境変数を一時的に書き換えて f を実行し、終了時（panic 含む）に元へ戻す。
/// 環境変数を触るテストはすべてこれを通して直列化する。入れ子にしないこと。
pub(crate) fn with_env_vars<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
    struct Restore<'a> {
        saved: Vec<(String, Option<String>)>,
        _guard: MutexGuard<'a, ()>,
    }

    impl Drop for Restore<'_> {
        fn drop(&mut self) {
            for (key, value) in self.saved.drain(..).rev() {
                match value {
                    Some(v) => std::env::set_var(&key, v),
                    None => std::env::remove_var(&key),
                }
            }
        }
    }

    let guard = env_lock().lock().unwrap_or_else(|e| e.into_inner());
    let mut restore = Restore {
        saved: Vec::new(),
        _guard: guard,
    };
    for (key, value) in vars {
        restore
            .saved
            .push((key.to_string(), std::env::var(key).ok()));
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }
    f();
}

/// 固定値を返す AppEnvironment（resolve_dirs の呼び出し回数を数える）
#[derive(Default)]
pub(crate) struct FakeEnv {
    pub root: Option<PathBuf>,
    pub executable: Option<PathBuf>,
    pub kind_override: Option<ProcessKind>,
    pub resolve_calls: AtomicUsize,
}

impl FakeEnv {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Default::default()
        }
    }

    pub fn with_executable(exe: impl Into<PathBuf>) -> Self {
        Self {
            executable: Some(exe.into()),
            ..Default::default()
        }
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }
}

impl AppEnvironment for FakeEnv {
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        self.root
            .clone()
            .map(Dirs::new)
            .ok_or_else(|| Error::env("HOME is not set"))
    }

    fn executable_path(&self) -> Option<PathBuf> {
        self.executable.clone()
    }

    fn process_kind_override(&self) -> Option<ProcessKind> {
        self.kind_override
    }
}

/// StdFileSystem に委譲しつつ create_dir_all の回数を数える FileSystem
pub(crate) struct CountingFs {
    inner: StdFileSystem,
    pub writable: bool,
    pub create_calls: AtomicUsize,
}

impl CountingFs {
    pub fn new() -> Self {
        Self {
            inner: StdFileSystem,
            writable: true,
            create_calls: AtomicUsize::new(0),
        }
    }

    pub fn read_only() -> Self {
        Self {
            writable: false,
            ..Self::new()
        }
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

impl FileSystem for CountingFs {
    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create_dir_all(path)
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error> {
        self.inner.metadata(path)
    }

    fn is_writable(&self, path: &Path) -> bool {
        self.writable && self.inner.is_writable(path)
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        self.inner.open_append(path)
    }
}

/// 受け取ったレコードをメモリに溜める Log
#[derive(Default)]
pub(crate) struct RecordingLog {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl Log for RecordingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
