//! ジョークの永続化 Outbound ポート
//!
//! 1 テーブルだけを持つローカルストア。各操作はそれ自体が 1 つのアトミックな単位。

use crate::domain::{Joke, JokeId, NewJoke, StorageError};

pub trait JokeStore: Send + Sync {
    /// テーブルが無ければ作成する（何度呼んでも既存の行は変わらない）
    fn ensure_schema(&self) -> Result<(), StorageError>;

    /// 1 行追加し、ストアが採番した ID を返す
    fn insert(&self, joke: &NewJoke) -> Result<JokeId, StorageError>;

    /// 全件を挿入順で返す（0 件なら空）
    fn fetch_all(&self) -> Result<Vec<Joke>, StorageError>;

    /// 全件削除（空でも成功）
    fn delete_all(&self) -> Result<(), StorageError>;
}
