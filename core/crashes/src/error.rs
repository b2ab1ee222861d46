//! エラーハンドリング
//!
//! ports / adapter は `Result<_, Error>` を返し、公開 API の境界で `Option` に落とす。

/// crate 内部で共通に使うエラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// ファイルシステム操作の失敗
    #[error("I/O error: {0}")]
    Io(String),
    /// 環境（HOME 等）からパスを解決できない
    #[error("Environment error: {0}")]
    Env(String),
    /// ログレコードのシリアライズ失敗
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// ログの `kind` フィールドに使う短い分類名
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Env(_) => "env",
            Error::Json(_) => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::io_msg("disk full");
        assert_eq!(err, Error::Io("disk full".to_string()));
        assert_eq!(err.to_string(), "I/O error: disk full");
        assert_eq!(err.kind(), "io");

        let err = Error::env("HOME is not set");
        assert_eq!(err.to_string(), "Environment error: HOME is not set");
        assert_eq!(err.kind(), "env");
    }
}
