//! プロセス種別（通常アプリ / アプリ拡張）

use std::path::{Component, Path};

/// 拡張バンドルのディレクトリ名の接尾辞
const APP_EXTENSION_SUFFIX: &str = ".appex";

/// ホストプロセスの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessKind {
    Application,
    AppExtension,
}

impl ProcessKind {
    /// 実行ファイルのパスから種別を判定する。
    ///
    /// `Share.appex/Share` のように、`.appex` で終わるバンドルディレクトリの中に
    /// 実行ファイルがあれば拡張とみなす。末尾要素自体が `.appex` の場合や、
    /// 名前が `.appex` だけの場合は通常アプリ扱い。
    pub fn from_executable_path(path: &Path) -> Self {
        let inside_bundle = path
            .parent()
            .map(|dir| dir.components().any(is_appex_bundle))
            .unwrap_or(false);
        if inside_bundle {
            ProcessKind::AppExtension
        } else {
            ProcessKind::Application
        }
    }

    /// `CRASHES_PROCESS_KIND` の値を解釈する（extension / app 以外は None）
    pub fn parse_override(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "extension" => Some(ProcessKind::AppExtension),
            "app" => Some(ProcessKind::Application),
            _ => None,
        }
    }

    pub fn is_app_extension(self) -> bool {
        self == ProcessKind::AppExtension
    }
}

fn is_appex_bundle(component: Component<'_>) -> bool {
    match component {
        Component::Normal(name) => {
            let name = name.to_string_lossy();
            name.len() > APP_EXTENSION_SUFFIX.len() && name.ends_with(APP_EXTENSION_SUFFIX)
        }
        _ => false,
    }
}
