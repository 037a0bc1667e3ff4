//! スキーマ移行機能モジュール
//!
//! エンティティ記述子からデータベーススキーマを構築する移行器と、
//! それらを登録順に実行するレジストリを提供します。

pub mod auto_migrate;
pub mod errors;
pub mod migrator;
pub mod registry;

pub use auto_migrate::auto_migrate;
pub use errors::MigrationError;
pub use migrator::{
    user_created_at_index_migrator, BasicMigrator, BatchMigrator, CustomMigrator, Migrator,
};
pub use registry::{
    default_migration_registry, global_migration_registry, register_migration, run_migrations,
    MigrationRegistry,
};
