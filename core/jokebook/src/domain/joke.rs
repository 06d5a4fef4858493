//! ジョークのレコード
//!
//! 取得直後の `NewJoke` はローカル ID を持たない。ストアに書き込んだ時点で `JokeId` が付き `Joke` になる。

/// ローカルストアが採番する ID（AUTOINCREMENT の rowid）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JokeId(i64);

impl JokeId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for JokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// リモートから取得した未保存のジョーク（上流の id は持たない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJoke {
    /// 上流の `type`（カテゴリ）
    pub kind: String,
    pub setup: String,
    pub punchline: String,
}

impl NewJoke {
    pub fn new(
        kind: impl Into<String>,
        setup: impl Into<String>,
        punchline: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            setup: setup.into(),
            punchline: punchline.into(),
        }
    }
}

/// 保存済みのジョーク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub id: JokeId,
    pub kind: String,
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    /// 採番済み ID と取得結果から保存済みレコードを組み立てる
    pub fn stored(id: JokeId, joke: NewJoke) -> Self {
        Self {
            id,
            kind: joke.kind,
            setup: joke.setup,
            punchline: joke.punchline,
        }
    }
}
