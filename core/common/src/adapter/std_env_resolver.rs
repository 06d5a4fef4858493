//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::Dirs;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "jokebook";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        resolve_dirs_with(|name| env::var(name).ok())
    }

    fn api_url_from_env(&self) -> Option<String> {
        non_empty(env::var("JOKEBOOK_API_URL").ok())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// 環境変数の参照関数を受け取って Dirs を解決する（テストでは環境を汚さずに呼べる）
pub fn resolve_dirs_with<F>(lookup: F) -> Result<Dirs, Error>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(home) = non_empty(lookup("JOKEBOOK_HOME")) {
        let base = PathBuf::from(home);
        return Ok(Dirs {
            data_dir: base.join("data"),
            state_dir: base.join("state"),
        });
    }

    let home = non_empty(lookup("HOME")).map(PathBuf::from);
    let xdg_or_home = |xdg: &str, fallback: &[&str]| -> Result<PathBuf, Error> {
        if let Some(dir) = non_empty(lookup(xdg)) {
            return Ok(PathBuf::from(dir).join(APP_DIR));
        }
        let mut path = home
            .clone()
            .ok_or_else(|| Error::env(format!("Neither {} nor HOME is set", xdg)))?;
        for part in fallback {
            path.push(part);
        }
        path.push(APP_DIR);
        Ok(path)
    };

    Ok(Dirs {
        data_dir: xdg_or_home("XDG_DATA_HOME", &[".local", "share"])?,
        state_dir: xdg_or_home("XDG_STATE_HOME", &[".local", "state"])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_jokebook_home_takes_precedence() {
        let dirs = resolve_dirs_with(lookup_from(&[
            ("JOKEBOOK_HOME", "/opt/jb"),
            ("XDG_DATA_HOME", "/xdg/data"),
            ("HOME", "/home/u"),
        ]))
        .unwrap();
        assert_eq!(dirs.data_dir, PathBuf::from("/opt/jb/data"));
        assert_eq!(dirs.state_dir, PathBuf::from("/opt/jb/state"));
    }

    #[test]
    fn test_xdg_dirs_then_home_fallback() {
        let dirs = resolve_dirs_with(lookup_from(&[
            ("XDG_DATA_HOME", "/xdg/data"),
            ("HOME", "/home/u"),
        ]))
        .unwrap();
        assert_eq!(dirs.data_dir, PathBuf::from("/xdg/data/jokebook"));
        assert_eq!(dirs.state_dir, PathBuf::from("/home/u/.local/state/jokebook"));
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let dirs = resolve_dirs_with(lookup_from(&[
            ("JOKEBOOK_HOME", ""),
            ("XDG_DATA_HOME", ""),
            ("HOME", "/home/u"),
        ]))
        .unwrap();
        assert_eq!(dirs.data_dir, PathBuf::from("/home/u/.local/share/jokebook"));
    }

    #[test]
    fn test_missing_home_is_env_error() {
        let err = resolve_dirs_with(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, Error::Env(_)));
        assert!(err.to_string().contains("HOME"));
    }
}
