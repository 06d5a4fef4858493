mod adapter;
mod cli;
mod config;
mod domain;
mod ports;
mod terminal;
mod usecase;
mod view;
mod wiring;

#[cfg(test)]
mod tests;

use std::io::IsTerminal;
use std::process;
use std::sync::Arc;

use cli::{parse_args, print_completion, Config, ParseOutcome};
use common::adapter::StdEnvResolver;
use common::error::Error;
use common::ports::outbound::{EnvResolver, LogLevel, LogRecord};
use config::resolve_app_config;
use ports::inbound::UseCaseRunner;
use terminal::{run_screen, ScreenOptions};
use wiring::wire_jokebook;

/// 解析済み Config から画面を起動する Runner
struct Runner {
    env: Arc<dyn EnvResolver>,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        if config.help {
            print_help();
            return Ok(0);
        }
        let app_config = resolve_app_config(&config, self.env.as_ref())?;
        let mut app = wire_jokebook(&app_config)?;
        let _ = app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "app started")
                .with_field(
                    "db_path",
                    serde_json::json!(app_config.db_path.display().to_string()),
                )
                .with_field("api_url", serde_json::json!(app_config.api_url)),
        );

        if let Err(e) = app.screen.initialize() {
            let _ = app.logger.log(
                &LogRecord::new(LogLevel::Error, "cli", "error", "initialize failed")
                    .with_field("error", serde_json::json!(e.cause())),
            );
            return Err(e.into());
        }

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let options = ScreenOptions {
            clear_screen: stdout.is_terminal(),
        };
        let result = run_screen(&mut app.screen, stdin.lock(), &mut stdout.lock(), &options);

        let _ = app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "app stopped")
                .with_field("jokes", serde_json::json!(app.screen.state().records.len())),
        );
        result.map(|()| 0)
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("jokebook: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn print_usage() {
    eprintln!("Usage: jokebook [-h] [-d|--home-dir directory] [--db path] [--api-url url] [--generate shell]");
}

fn print_help() {
    println!("Usage: jokebook [-h] [-d|--home-dir directory] [--db path] [--api-url url] [--generate shell]");
    println!("  -h, --help            Display this help message.");
    println!("  -d, --home-dir        Specify a home directory (sets JOKEBOOK_HOME for this process).");
    println!("  --db <path>           Database file (default: <data dir>/jokes.db).");
    println!("  --api-url <url>       Joke endpoint (default: https://official-joke-api.appspot.com/random_joke).");
    println!("  --generate <shell>    Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Screen commands:");
    println!("  g, get       Fetch a random joke and save it (Get Joke)");
    println!("  c, clear     Delete all saved jokes (Clear Screen)");
    println!("  <number>     Show that joke in the detail panel");
    println!("  q, quit      Exit");
    println!();
    println!("Environment:");
    println!("  JOKEBOOK_HOME      Base directory (data/ and state/ below it).");
    println!("                     Default: $XDG_DATA_HOME/jokebook and $XDG_STATE_HOME/jokebook.");
    println!("  JOKEBOOK_API_URL   Joke endpoint when --api-url is not given.");
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    // -d/--home-dir 指定時は JOKEBOOK_HOME を設定し、resolve_dirs() がその配下を使うようにする
    if let Some(ref h) = config.home_dir {
        std::env::set_var("JOKEBOOK_HOME", h);
    }
    let runner = Runner {
        env: Arc::new(StdEnvResolver),
    };
    runner.run(config)
}
