//! 配線（wire_jokebook）とファイル DB での再起動のテスト

use std::path::Path;

use crate::adapter::SqliteJokeStore;
use crate::config::AppConfig;
use crate::domain::{JokeId, NewJoke};
use crate::ports::outbound::JokeStore;
use crate::wiring::wire_jokebook;

fn app_config(db_path: &Path, log_path: &Path) -> AppConfig {
    AppConfig {
        db_path: db_path.to_path_buf(),
        // 取得は行わないので到達しない URL でよい
        api_url: "http://127.0.0.1:9/random_joke".to_string(),
        log_path: Some(log_path.to_path_buf()),
    }
}

#[test]
fn test_initialize_reloads_jokes_saved_by_previous_run() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("data").join("jokes.db");
    let log_path = dir.path().join("state").join("logs").join("jokebook.jsonl");

    {
        let previous = SqliteJokeStore::open(&db_path).unwrap();
        previous.ensure_schema().unwrap();
        previous
            .insert(&NewJoke::new("general", "first run", "p1"))
            .unwrap();
        previous
            .insert(&NewJoke::new("programming", "second", "p2"))
            .unwrap();
    }

    let mut app = wire_jokebook(&app_config(&db_path, &log_path)).unwrap();
    app.screen.initialize().unwrap();

    let records = &app.screen.state().records;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, JokeId::new(1));
    assert_eq!(records[0].setup, "first run");
    assert_eq!(records[1].kind, "programming");

    // ストア操作は LoggingJokeStore 経由でファイルログに残る
    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("\"operation\":\"ensure_schema\""));
    assert!(log.contains("\"operation\":\"fetch_all\""));
}

#[test]
fn test_unopenable_database_is_storage_error_with_exit_74() {
    let dir = tempfile::tempdir().unwrap();
    // 親ディレクトリの位置に通常ファイルを置き、ディレクトリ作成を失敗させる
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let db_path = blocker.join("jokes.db");
    let log_path = dir.path().join("jokebook.jsonl");

    let err = match wire_jokebook(&app_config(&db_path, &log_path)) {
        Ok(_) => panic!("wiring should fail when the database cannot be opened"),
        Err(e) => e,
    };
    assert!(matches!(err, common::error::Error::Storage(_)), "{:?}", err);
    assert_eq!(err.exit_code(), 74);
    assert!(!err.is_usage());
}
