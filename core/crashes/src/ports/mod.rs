//! Ports & Adapters のポート定義
//!
//! - inbound: なし（ライブラリのため公開関数が入り口）
//! - outbound: ユースケースが外界（環境・FS・ログ）に依頼するための trait

pub mod outbound;
