//! 環境変数解決 Outbound ポート
//!
//! データ・ログのディレクトリと API URL を環境変数から解決する。
//! usecase・配線はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::Dirs;
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// data / state ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. JOKEBOOK_HOME（設定されていれば $JOKEBOOK_HOME/data, $JOKEBOOK_HOME/state）
    /// 2. $XDG_DATA_HOME/jokebook, $XDG_STATE_HOME/jokebook
    /// 3. $HOME/.local/share/jokebook, $HOME/.local/state/jokebook
    fn resolve_dirs(&self) -> Result<Dirs, Error>;

    /// JOKEBOOK_API_URL（空文字は未設定扱い）
    fn api_url_from_env(&self) -> Option<String>;
}
