//! エラーハンドリング
//!
//! CLI・配線レイヤーで扱う統一エラー型。終了コードは sysexits.h に合わせる。

/// ワークスペース共通のエラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// 環境変数の解決に失敗
    #[error("{0}")]
    Env(String),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Json(String),
    /// ローカルストア（SQLite）の失敗
    #[error("{0}")]
    Storage(String),
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => 64,
            Self::Json(_) => 65,
            Self::System(_) => 70,
            Self::Io(_) | Self::Storage(_) => 74,
        }
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("test");
        assert_eq!(err.to_string(), "test");
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage());

        let err = Error::system("test");
        assert_eq!(err.exit_code(), 70);
        assert!(!err.is_usage());

        assert_eq!(Error::storage("db").exit_code(), 74);
        assert_eq!(Error::io_msg("io").exit_code(), 74);
        assert_eq!(Error::env("HOME").exit_code(), 64);
    }
}
