//! 標準アプリ実行環境（std::env を委譲）

use crate::domain::{Dirs, ProcessKind};
use crate::error::Error;
use crate::ports::outbound::AppEnvironment;
use std::env;
use std::path::{Path, PathBuf};

/// キャッシュルート直下に作る SDK フォルダ名の既定値
pub const DEFAULT_SDK_FOLDER: &str = "com.crashes.sdk";

/// 標準アプリ実行環境
#[derive(Debug, Clone, Default)]
pub struct StdAppEnvironment;

impl AppEnvironment for StdAppEnvironment {
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        if let Some(home) = absolute_path_var("CRASHES_HOME") {
            return Ok(Dirs::new(home));
        }

        let cache_base = absolute_path_var("XDG_CACHE_HOME")
            .or_else(|| absolute_path_var("HOME").map(platform_cache_dir))
            .ok_or_else(|| Error::env("HOME is not set to an absolute path"))?;

        Ok(Dirs::new(cache_base.join(sdk_folder())))
    }

    fn executable_path(&self) -> Option<PathBuf> {
        env::current_exe().ok()
    }

    fn process_kind_override(&self) -> Option<ProcessKind> {
        non_empty_var("CRASHES_PROCESS_KIND").and_then(|v| ProcessKind::parse_override(&v))
    }

    fn logging_enabled(&self) -> bool {
        non_empty_var("CRASHES_LOG").as_deref() != Some("0")
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// 相対パスは作業ディレクトリで位置が変わるので無視する
fn absolute_path_var(key: &str) -> Option<PathBuf> {
    non_empty_var(key)
        .map(PathBuf::from)
        .filter(|p| Path::is_absolute(p))
}

/// CRASHES_SDK_FOLDER が単一のパス要素でなければ既定値を使う
fn sdk_folder() -> String {
    non_empty_var("CRASHES_SDK_FOLDER")
        .filter(|name| is_single_component(name))
        .unwrap_or_else(|| DEFAULT_SDK_FOLDER.to_string())
}

fn is_single_component(name: &str) -> bool {
    name != "." && name != ".." && !name.contains('/') && !name.contains('\\')
}

#[cfg(target_vendor = "apple")]
fn platform_cache_dir(home: PathBuf) -> PathBuf {
    home.join("Library").join("Caches")
}

#[cfg(not(target_vendor = "apple"))]
fn platform_cache_dir(home: PathBuf) -> PathBuf {
    home.join(".cache")
}
