//! ジョーク API（HTTP GET）による JokeSource の標準実装
//!
//! レスポンスは型付きの構造体にデシリアライズして検証する。形状が合わなければ FetchError。

use crate::domain::{FetchError, NewJoke};
use crate::ports::outbound::JokeSource;
use common::error::Error;
use serde::Deserialize;

/// 既定のエンドポイント
pub const DEFAULT_API_URL: &str = "https://official-joke-api.appspot.com/random_joke";

/// エラーメッセージに含めるレスポンス本文の最大文字数
const BODY_EXCERPT_CHARS: usize = 200;

/// ジョーク API の HTTP クライアント
pub struct HttpJokeSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpJokeSource {
    pub fn new(url: impl Into<String>) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("jokebook/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::system(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(url, client))
    }

    /// 構築済みのクライアントで作る（テストではプロキシを外したクライアントを渡す）
    pub fn with_client(url: impl Into<String>, client: reqwest::blocking::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

impl JokeSource for HttpJokeSource {
    fn fetch_random_joke(&self) -> Result<NewJoke, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| FetchError::new(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| FetchError::new(format!("Failed to read response: {}", e)))?;

        parse_joke_response(status.as_u16(), &body)
    }
}

/// 上流のレスポンス形状（id などの余分なフィールドは無視）
#[derive(Debug, Deserialize)]
struct JokeResponse {
    #[serde(rename = "type")]
    kind: String,
    setup: String,
    punchline: String,
}

/// ステータスコードと本文から NewJoke を取り出す。
/// 2xx 以外、JSON でない、必須フィールドが無い・文字列でない場合は FetchError。
pub fn parse_joke_response(status: u16, body: &str) -> Result<NewJoke, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::new(format!(
            "HTTP {}: {}",
            status,
            excerpt(body)
        )));
    }
    let parsed: JokeResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::new(format!("Failed to parse response JSON: {}", e)))?;
    Ok(NewJoke::new(parsed.kind, parsed.setup, parsed.punchline))
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > BODY_EXCERPT_CHARS {
        let head: String = trimmed.chars().take(BODY_EXCERPT_CHARS).collect();
        format!("{}...", head)
    } else {
        trimmed.to_string()
    }
}
