//! 表示状態を画面テキストに描画する（端末に依存しない純粋関数）

use std::fmt::Write;

use crate::domain::Joke;
use crate::usecase::ViewState;

const RULE: &str = "----------------------------------------";

/// 操作ボタン・エラーバナー・一覧・詳細パネルの順に描画する
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[g] Get Joke    [c] Clear Screen    [q] Quit");
    let _ = writeln!(out, "{}", RULE);

    if let Some(err) = &state.last_error {
        let _ = writeln!(out, "! {}", err);
        let _ = writeln!(out, "{}", RULE);
    }

    if state.records.is_empty() {
        let _ = writeln!(out, "(no jokes yet)");
    }
    for (i, joke) in state.records.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. Type: {}", i + 1, joke.kind);
        write_body(&mut out, joke, "     ");
    }

    if let Some(joke) = &state.selected {
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "Selected #{}", joke.id);
        let _ = writeln!(out, "Type: {}", joke.kind);
        write_body(&mut out, joke, "");
    }
    out
}

fn write_body(out: &mut String, joke: &Joke, indent: &str) {
    let _ = writeln!(out, "{}Setup: {}", indent, joke.setup);
    let _ = writeln!(out, "{}Punchline: {}", indent, joke.punchline);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JokeId;

    fn joke(id: i64, setup: &str) -> Joke {
        Joke {
            id: JokeId::new(id),
            kind: "general".to_string(),
            setup: setup.to_string(),
            punchline: "punch".to_string(),
        }
    }

    #[test]
    fn test_render_empty_state() {
        let out = render(&ViewState::default());
        assert!(out.contains("Get Joke"));
        assert!(out.contains("Clear Screen"));
        assert!(out.contains("(no jokes yet)"));
        assert!(!out.contains("! "));
        assert!(!out.contains("Selected"));
    }

    #[test]
    fn test_render_list_banner_and_detail() {
        let state = ViewState {
            records: vec![joke(1, "first"), joke(2, "second")],
            selected: Some(joke(2, "second")),
            last_error: Some("Error fetching joke data".to_string()),
        };
        let out = render(&state);
        assert!(out.contains("! Error fetching joke data"));
        assert!(out.contains("  1. Type: general"));
        assert!(out.contains("  2. Type: general"));
        assert!(out.contains("     Setup: second"));
        assert!(out.contains("Selected #2"));
        assert!(!out.contains("(no jokes yet)"));
        let banner = out.find("! Error").unwrap();
        let list = out.find("1. Type").unwrap();
        let detail = out.find("Selected #2").unwrap();
        assert!(banner < list && list < detail);
    }
}
