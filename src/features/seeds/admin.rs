use super::errors::SeedError;
use super::insert::create_if_not_exists;
use super::role::require_admin_role;
use super::seeder::Seeder;
use crate::models::{Admin, STATUS_ACTIVE};
use crate::shared::utils::hash_password;
use rusqlite::Connection;

/// 初期管理者のパスワード
pub const DEFAULT_ADMIN_PASSWORD: &str = "123456";

const DEFAULT_AVATAR: &str = "https://wpimg.wallstcn.com/f778738c-e4f8-4870-b634-56703b4acafe.gif";

/// 管理者のシーダー
///
/// スーパー管理者ロールが先に存在している必要がある。
pub struct AdminSeeder;

impl Seeder for AdminSeeder {
    fn name(&self) -> &str {
        "admin"
    }

    fn run(&self, conn: &Connection) -> Result<(), SeedError> {
        let role = require_admin_role(conn)?;

        let password = hash_password(DEFAULT_ADMIN_PASSWORD).map_err(|e| SeedError::Hook {
            table: "admin".to_string(),
            message: e.to_string(),
        })?;

        let mut admin = Admin {
            id: 1,
            username: "admin".to_string(),
            password,
            mobile: "18888888888".to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            nickname: Some(String::new()),
            introduction: Some(String::new()),
            status: STATUS_ACTIVE,
            creator: "系统".to_string(),
            role_ids: vec![role.id],
        };

        create_if_not_exists(conn, &mut admin, 1)?;
        Ok(())
    }
}
