use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;

/// CLI から受け取った生の設定
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    pub home_dir: Option<String>,
    /// データベースファイル（未指定なら data_dir/jokes.db）
    pub db_path: Option<PathBuf>,
    /// ジョーク API の URL（未指定なら JOKEBOOK_API_URL → 既定値）
    pub api_url: Option<String>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("jokebook")
        .about("Fetch random jokes, keep them in a local SQLite history")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("home-dir")
                .short('d')
                .long("home-dir")
                .value_name("directory")
                .help("Specify a home directory (sets JOKEBOOK_HOME for this process)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("db")
                .long("db")
                .value_name("path")
                .help("Database file to use instead of the default")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("api-url")
                .long("api-url")
                .value_name("url")
                .help("Joke endpoint (GET, JSON with type/setup/punchline)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        home_dir: matches.get_one::<String>("home-dir").cloned(),
        db_path: matches.get_one::<PathBuf>("db").cloned(),
        api_url: matches
            .get_one::<String>("api-url")
            .filter(|s| !s.is_empty())
            .cloned(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

/// 任意の引数列を解析する（先頭はプログラム名）
pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "jokebook", &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_of(args: &[&str]) -> Config {
        match parse_args_from(args.iter().copied()).unwrap() {
            ParseOutcome::Config(c) => c,
            other => panic!("expected Config, got {:?}", other),
        }
    }

    #[test]
    fn test_no_args_is_default_config() {
        assert_eq!(config_of(&["jokebook"]), Config::default());
    }

    #[test]
    fn test_all_options() {
        let c = config_of(&[
            "jokebook",
            "-d",
            "/tmp/jb",
            "--db",
            "/tmp/jb/x.db",
            "--api-url",
            "http://localhost:8080/joke",
        ]);
        assert_eq!(c.home_dir.as_deref(), Some("/tmp/jb"));
        assert_eq!(c.db_path, Some(PathBuf::from("/tmp/jb/x.db")));
        assert_eq!(c.api_url.as_deref(), Some("http://localhost:8080/joke"));
        assert!(!c.help);
    }

    #[test]
    fn test_help_flag() {
        assert!(config_of(&["jokebook", "--help"]).help);
        assert!(config_of(&["jokebook", "-h"]).help);
    }

    #[test]
    fn test_generate_completion() {
        let outcome = parse_args_from(["jokebook", "--generate", "bash"]).unwrap();
        assert!(matches!(outcome, ParseOutcome::GenerateCompletion(Shell::Bash)));
    }

    #[test]
    fn test_unknown_option_is_usage_error() {
        let err = parse_args_from(["jokebook", "--bogus"]).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.exit_code(), 64);
    }
}
