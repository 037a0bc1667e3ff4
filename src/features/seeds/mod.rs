//! 初期データ投入機能モジュール
//!
//! 主キーで存在を確認してから挿入するため、何度実行しても既存の行は変更されません。

pub mod admin;
pub mod api;
pub mod content;
pub mod errors;
pub mod insert;
pub mod menu;
pub mod project;
pub mod registry;
pub mod role;
pub mod seeder;
pub mod system_config;
pub mod user;

pub use admin::AdminSeeder;
pub use api::{default_apis, ApiSeeder};
pub use content::{CategorySeeder, PostSeeder, TagSeeder};
pub use errors::SeedError;
pub use insert::{create_batch_if_not_exists, create_if_not_exists, exists_by_id};
pub use menu::{default_menus, MenuSeeder};
pub use project::ProjectSeeder;
pub use registry::{
    default_seed_registry, global_seed_registry, register_seeder, run_seeders, SeedRegistry,
};
pub use role::{default_roles, RoleSeeder, ADMIN_ROLE_ID};
pub use seeder::Seeder;
pub use system_config::SystemConfigSeeder;
pub use user::UserSeeder;
