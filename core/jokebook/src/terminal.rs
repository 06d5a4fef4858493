//! 端末の入出力ループ
//!
//! 画面を描画してから 1 行読み、ScreenCommand に解析して JokeScreen に渡す。
//! 入力が尽きるか quit で終了する。

use std::io::{BufRead, Write};

use common::error::Error;

use crate::domain::ScreenCommand;
use crate::usecase::JokeScreen;
use crate::view::render;

/// 画面クリア（ANSI: 全消去 + カーソルを左上へ）
const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

const HELP_TEXT: &str = "\
Commands:
  g, get       Fetch a random joke and save it
  c, clear     Delete all saved jokes
  <number>     Show the joke with that number in the detail panel
  h, help      Show this help
  q, quit      Exit";

pub struct ScreenOptions {
    /// 描画のたびに端末をクリアする（TTY のときのみ有効にする）
    pub clear_screen: bool,
}

/// 入力が尽きるか quit まで画面を回す
pub fn run_screen<R, W>(
    screen: &mut JokeScreen,
    mut input: R,
    out: &mut W,
    options: &ScreenOptions,
) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    let mut notice: Option<String> = None;
    let mut buf = Vec::new();
    loop {
        if options.clear_screen {
            write!(out, "{}", CLEAR_SEQUENCE).map_err(write_error)?;
        }
        write!(out, "{}", render(screen.state())).map_err(write_error)?;
        if let Some(text) = notice.take() {
            writeln!(out, "{}", text).map_err(write_error)?;
        }
        write!(out, "> ").map_err(write_error)?;
        out.flush().map_err(write_error)?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::io_msg(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            break;
        }
        // UTF-8 でない行は置換文字を含む未知コマンドとして扱う
        let line = String::from_utf8_lossy(&buf);

        match ScreenCommand::parse(&line) {
            ScreenCommand::GetJoke => screen.request_joke(),
            ScreenCommand::Clear => screen.clear(),
            ScreenCommand::Select(n) => {
                let selected = n.checked_sub(1).map(|i| screen.select(i)).unwrap_or(false);
                if !selected {
                    notice = Some(format!("No joke #{}", n));
                }
            }
            ScreenCommand::Help => notice = Some(HELP_TEXT.to_string()),
            ScreenCommand::Quit => break,
            ScreenCommand::Empty => {}
            ScreenCommand::Unknown(name) => {
                notice = Some(format!("Unknown command '{}' (h for help)", name));
            }
        }
    }
    writeln!(out).map_err(write_error)?;
    Ok(())
}

fn write_error(e: std::io::Error) -> Error {
    Error::io_msg(format!("Failed to write output: {}", e))
}
