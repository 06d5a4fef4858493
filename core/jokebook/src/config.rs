//! 実行時設定の解決
//!
//! 優先順位は CLI 引数 → 環境変数 → 既定値。

use std::path::PathBuf;

use common::error::Error;
use common::ports::outbound::EnvResolver;

use crate::adapter::DEFAULT_API_URL;
use crate::cli::Config;

/// 配線に渡す解決済みの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub api_url: String,
    /// None のときログは出さない（NoopLog）
    pub log_path: Option<PathBuf>,
}

pub fn resolve_app_config(cli: &Config, env: &dyn EnvResolver) -> Result<AppConfig, Error> {
    let dirs = env.resolve_dirs();
    let db_path = match &cli.db_path {
        Some(path) => path.clone(),
        None => dirs.as_ref().map_err(Clone::clone)?.db_path(),
    };
    let api_url = cli
        .api_url
        .clone()
        .or_else(|| env.api_url_from_env())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let log_path = dirs.ok().map(|d| d.log_file_path());
    Ok(AppConfig {
        db_path,
        api_url,
        log_path,
    })
}
