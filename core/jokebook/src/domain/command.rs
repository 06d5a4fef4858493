//! 画面で受け付けるコマンドの enum（Command Pattern）
//!
//! 入力行を enum に落とし、terminal 側の match でディスパッチする。

/// 1 行の入力から解析した画面操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCommand {
    /// "Get Joke"
    GetJoke,
    /// "Clear Screen"
    Clear,
    /// 一覧の N 番目（1 始まり）を選択
    Select(usize),
    Help,
    Quit,
    /// 空行（再描画のみ）
    Empty,
    /// 未知のコマンド（エラー表示用）
    Unknown(String),
}

impl ScreenCommand {
    pub fn parse(line: &str) -> Self {
        let input = line.trim();
        if input.is_empty() {
            return ScreenCommand::Empty;
        }
        if let Ok(n) = input.parse::<usize>() {
            return ScreenCommand::Select(n);
        }
        match input.to_ascii_lowercase().as_str() {
            "g" | "get" => ScreenCommand::GetJoke,
            "c" | "clear" => ScreenCommand::Clear,
            "h" | "help" | "?" => ScreenCommand::Help,
            "q" | "quit" | "exit" => ScreenCommand::Quit,
            _ => ScreenCommand::Unknown(input.to_string()),
        }
    }
}
