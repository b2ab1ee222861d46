//! 配線: 標準アダプタで CrashesUtil を組み立てる

use std::sync::{Arc, OnceLock};

use crate::adapter::file_json_log::LOG_FILE_NAME;
use crate::adapter::{FileJsonLog, NoopLog, StdAppEnvironment, StdFileSystem};
use crate::ports::outbound::{AppEnvironment, FileSystem, Log};
use crate::usecase::CrashesUtil;

/// 配線: 標準アダプタで CrashesUtil を組み立てる
///
/// 診断ログは SDK ルートが解決でき、CRASHES_LOG=0 でなければ logs/crashes.jsonl に書く。
pub fn wire_crashes_util() -> CrashesUtil {
    let env: Arc<dyn AppEnvironment> = Arc::new(StdAppEnvironment);
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let log = wire_log(env.as_ref(), Arc::clone(&fs));
    CrashesUtil::new(env, fs, log)
}

fn wire_log(env: &dyn AppEnvironment, fs: Arc<dyn FileSystem>) -> Arc<dyn Log> {
    if !env.logging_enabled() {
        return Arc::new(NoopLog);
    }
    match env.resolve_dirs() {
        Ok(dirs) => Arc::new(FileJsonLog::new(fs, dirs.logs_dir().join(LOG_FILE_NAME))),
        Err(_) => Arc::new(NoopLog),
    }
}

/// プロセス全体で共有する CrashesUtil（初回アクセス時に配線する）
pub fn default_util() -> &'static CrashesUtil {
    static DEFAULT: OnceLock<CrashesUtil> = OnceLock::new();
    DEFAULT.get_or_init(wire_crashes_util)
}
