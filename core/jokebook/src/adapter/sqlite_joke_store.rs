//! SQLite による JokeStore の標準実装
//!
//! 接続は 1 本だけ持ち、Mutex で包んで Send + Sync にする。

use crate::domain::{Joke, JokeId, NewJoke, StorageError};
use crate::ports::outbound::JokeStore;
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::sync::Mutex;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS jokes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT,
    setup TEXT,
    punchline TEXT
)";

pub struct SqliteJokeStore {
    conn: Mutex<Connection>,
}

impl SqliteJokeStore {
    /// ファイルのデータベースを開く。親ディレクトリが無ければ作成する。
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let conn = Connection::open(path).map_err(|e| {
            StorageError::new(format!("Failed to open '{}': {}", path.display(), e))
        })?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// インメモリのデータベースを開く（テスト用）
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::new(format!("Failed to open in-memory database: {}", e)))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<T>(
        &self,
        op: &str,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> Result<T, StorageError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StorageError::new("connection lock poisoned"))?;
        f(&conn).map_err(|e| StorageError::new(format!("{} failed: {}", op, e)))
    }
}

fn row_to_joke(row: &Row<'_>) -> rusqlite::Result<Joke> {
    Ok(Joke {
        id: JokeId::new(row.get(0)?),
        kind: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        setup: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        punchline: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}

impl JokeStore for SqliteJokeStore {
    fn ensure_schema(&self) -> Result<(), StorageError> {
        self.with_conn("create table", |conn| {
            conn.execute(CREATE_TABLE_SQL, [])?;
            Ok(())
        })
    }

    fn insert(&self, joke: &NewJoke) -> Result<JokeId, StorageError> {
        self.with_conn("insert", |conn| {
            conn.execute(
                "INSERT INTO jokes (type, setup, punchline) VALUES (?1, ?2, ?3)",
                params![joke.kind, joke.setup, joke.punchline],
            )?;
            Ok(JokeId::new(conn.last_insert_rowid()))
        })
    }

    fn fetch_all(&self) -> Result<Vec<Joke>, StorageError> {
        self.with_conn("select", |conn| {
            let mut stmt =
                conn.prepare("SELECT id, type, setup, punchline FROM jokes ORDER BY id")?;
            let rows = stmt.query_map([], row_to_joke)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
        })
    }

    fn delete_all(&self) -> Result<(), StorageError> {
        self.with_conn("delete", |conn| {
            conn.execute("DELETE FROM jokes", [])?;
            Ok(())
        })
    }
}
