//! アプリ実行環境 Outbound ポート
//!
//! SDK ルート・実行ファイルパス・設定用の環境変数を解決する。
//! ユースケースはこの trait 経由でのみ環境にアクセスする。

use crate::domain::{Dirs, ProcessKind};
use crate::error::Error;
use std::path::PathBuf;

/// アプリ実行環境の抽象（Outbound ポート）
///
/// 実装は `crashes::adapter::StdAppEnvironment` やテスト用のフェイクなど。
pub trait AppEnvironment: Send + Sync {
    /// SDK ルートを解決する
    ///
    /// 優先順位:
    /// 1. CRASHES_HOME（設定されていればそのまま root）
    /// 2. $XDG_CACHE_HOME/<SDK フォルダ>
    /// 3. $HOME/Library/Caches/<SDK フォルダ>（Apple）、$HOME/.cache/<SDK フォルダ>（その他）
    fn resolve_dirs(&self) -> Result<Dirs, Error>;

    /// 現在のプロセスの実行ファイルパス（取得できなければ None）
    fn executable_path(&self) -> Option<PathBuf>;

    /// 種別判定を上書きする設定（CRASHES_PROCESS_KIND）
    fn process_kind_override(&self) -> Option<ProcessKind> {
        None
    }

    /// JSONL 診断ログを書くかどうか（CRASHES_LOG=0 で無効）
    fn logging_enabled(&self) -> bool {
        true
    }
}
