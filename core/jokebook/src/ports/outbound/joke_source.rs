//! ジョーク取得 Outbound ポート

use crate::domain::{FetchError, NewJoke};

pub trait JokeSource: Send + Sync {
    /// 固定エンドポイントから 1 件取得する（リトライなし）
    fn fetch_random_joke(&self) -> Result<NewJoke, FetchError>;
}
