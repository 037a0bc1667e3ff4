/// 起動時のデータベース初期化
pub mod bootstrap;

/// スキーマ移行機能
pub mod migrations;

/// 初期データ投入機能
pub mod seeds;


pub use bootstrap::{initialize_database, Bootstrap, BootstrapReport};
