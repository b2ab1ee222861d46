//! クラッシュ保存先・ログバッファ・アプリ拡張判定のユースケース
//!
//! パスの解決結果はインスタンスごとに一度だけ計算して保持する。
//! ディレクトリの作成と検証は呼び出しのたびに行う（途中で消されても作り直す）。

use crate::domain::{CrashesDir, Dirs, LogBufferDir, ProcessKind};
use crate::error::Error;
use crate::ports::outbound::{now_iso8601, AppEnvironment, FileSystem, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// SDK のストレージ・実行環境ユーティリティ
///
/// 失敗は `None` で返す（呼び出し側は「永続化できない」として機能を縮退させる）。
pub struct CrashesUtil {
    env: Arc<dyn AppEnvironment>,
    fs: Arc<dyn FileSystem>,
    log: Arc<dyn Log>,
    crashes_path: OnceLock<Option<PathBuf>>,
    log_buffer_path: OnceLock<Option<PathBuf>>,
    process_kind: OnceLock<ProcessKind>,
}

impl CrashesUtil {
    pub fn new(env: Arc<dyn AppEnvironment>, fs: Arc<dyn FileSystem>, log: Arc<dyn Log>) -> Self {
        Self {
            env,
            fs,
            log,
            crashes_path: OnceLock::new(),
            log_buffer_path: OnceLock::new(),
            process_kind: OnceLock::new(),
        }
    }

    /// クラッシュレポートの保存・読み出しディレクトリ。
    ///
    /// 同じインスタンスでは常に同じパスを返し、返す時点でディレクトリは存在する。
    pub fn crashes_dir(&self) -> Option<CrashesDir> {
        let path = self
            .crashes_path
            .get_or_init(|| self.resolve("crashes", Dirs::crashes_dir))
            .as_deref()?;
        self.ensure_ready("crashes", path).map(CrashesDir::new)
    }

    /// バッファ済みイベントの保存ディレクトリ（crashes_dir とは別）
    pub fn log_buffer_dir(&self) -> Option<LogBufferDir> {
        let path = self
            .log_buffer_path
            .get_or_init(|| self.resolve("log_buffer", Dirs::log_buffer_dir))
            .as_deref()?;
        self.ensure_ready("log_buffer", path).map(LogBufferDir::new)
    }

    /// アプリ拡張の中で動いているか。
    ///
    /// ファイル作成もログ出力もしないので、SDK 初期化前に呼んでよい。
    pub fn is_app_extension(&self) -> bool {
        self.process_kind().is_app_extension()
    }

    pub fn process_kind(&self) -> ProcessKind {
        *self.process_kind.get_or_init(|| {
            if let Some(kind) = self.env.process_kind_override() {
                return kind;
            }
            self.env
                .executable_path()
                .map(|exe| ProcessKind::from_executable_path(&exe))
                .unwrap_or(ProcessKind::Application)
        })
    }

    fn resolve(&self, purpose: &str, select: fn(&Dirs) -> PathBuf) -> Option<PathBuf> {
        match self.env.resolve_dirs() {
            Ok(dirs) => Some(select(&dirs)),
            Err(e) => {
                self.log_unavailable(purpose, &e);
                None
            }
        }
    }

    fn ensure_ready(&self, purpose: &str, dir: &Path) -> Option<PathBuf> {
        match self.ensure_dir(dir) {
            Ok(created) => {
                if created {
                    self.log_event(
                        LogLevel::Debug,
                        format!("{} directory created", purpose),
                        "lifecycle",
                        purpose,
                        Some(dir),
                    );
                }
                Some(dir.to_path_buf())
            }
            Err(e) => {
                self.log_unavailable(purpose, &e);
                None
            }
        }
    }

    /// ディレクトリを作成し、書き込めるディレクトリであることを確かめる。
    /// 今回の呼び出しで新たに作ったときは true。
    fn ensure_dir(&self, dir: &Path) -> Result<bool, Error> {
        let existed = self.fs.exists(dir);
        self.fs.create_dir_all(dir)?;
        if !self.fs.metadata(dir)?.is_dir() {
            return Err(Error::io_msg(format!(
                "'{}' exists but is not a directory",
                dir.display()
            )));
        }
        if !self.fs.is_writable(dir) {
            return Err(Error::io_msg(format!(
                "'{}' is not writable",
                dir.display()
            )));
        }
        Ok(!existed)
    }

    fn log_unavailable(&self, purpose: &str, e: &Error) {
        self.log_event(
            LogLevel::Warn,
            format!("{} directory unavailable: {}", purpose, e),
            e.kind(),
            purpose,
            None,
        );
    }

    fn log_event(
        &self,
        level: LogLevel,
        message: String,
        kind: &str,
        purpose: &str,
        dir: Option<&Path>,
    ) {
        let mut fields = BTreeMap::new();
        fields.insert("dir".to_string(), serde_json::json!(purpose));
        if let Some(dir) = dir {
            fields.insert(
                "path".to_string(),
                serde_json::json!(dir.display().to_string()),
            );
        }
        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level,
            message,
            layer: Some("usecase".to_string()),
            kind: Some(kind.to_string()),
            fields: Some(fields),
        });
    }
}
