use super::errors::SeedError;
use super::insert::create_if_not_exists;
use super::seeder::Seeder;
use crate::models::{Role, STATUS_ACTIVE};
use rusqlite::Connection;

/// スーパー管理者ロールの主キー
pub const ADMIN_ROLE_ID: i64 = 1;

/// 初期ロール一覧
///
/// sort が小さいほど権限が高い。
pub fn default_roles() -> Vec<Role> {
    [
        (ADMIN_ROLE_ID, "管理员", "admin", 1),
        (2, "普通管理员", "user", 3),
        (3, "访客", "guest", 5),
    ]
    .into_iter()
    .map(|(id, name, keyword, sort)| Role {
        id,
        name: name.to_string(),
        keyword: keyword.to_string(),
        desc: Some(String::new()),
        status: STATUS_ACTIVE,
        sort,
        creator: "系统".to_string(),
    })
    .collect()
}

/// ロールのシーダー
pub struct RoleSeeder;

impl Seeder for RoleSeeder {
    fn name(&self) -> &str {
        "role"
    }

    fn run(&self, conn: &Connection) -> Result<(), SeedError> {
        for mut role in default_roles() {
            let id = role.id;
            create_if_not_exists(conn, &mut role, id)?;
        }
        Ok(())
    }
}

/// スーパー管理者ロールを取得する
///
/// 存在しない場合は依存データエラー。
pub fn require_admin_role(conn: &Connection) -> Result<Role, SeedError> {
    Role::find_by_id(conn, ADMIN_ROLE_ID)
        .map_err(|e| SeedError::dependency(format!("role#{ADMIN_ROLE_ID}"), e))
}
