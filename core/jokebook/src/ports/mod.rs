//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: ローカルストア・リモート取得の trait（common の Log / EnvResolver も利用）

pub mod inbound;
pub mod outbound;
