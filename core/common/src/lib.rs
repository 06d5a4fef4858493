//! jokebook 共通ライブラリ
//!
//! エラー型・構造化ログ・実行時ディレクトリ解決など、アプリ本体から共有される部品を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（実行時ディレクトリ）
pub mod domain;

/// Outbound ポート（Log / EnvResolver）
pub mod ports;

/// ポートの標準実装
pub mod adapter;
