use super::errors::SeedError;
use super::insert::create_if_not_exists;
use super::project::DEFAULT_PROJECT_ID;
use super::seeder::Seeder;
use crate::models::{User, STATUS_ACTIVE};
use rusqlite::Connection;

/// フロント側ユーザーのシーダー
///
/// パスワードは作成前フックでハッシュ化される。
pub struct UserSeeder;

impl Seeder for UserSeeder {
    fn name(&self) -> &str {
        "user"
    }

    fn run(&self, conn: &Connection) -> Result<(), SeedError> {
        let mut user = User {
            id: 1,
            user_id: "gotribe".to_string(),
            username: "gotribe".to_string(),
            nickname: "gotribe".to_string(),
            project_id: DEFAULT_PROJECT_ID.to_string(),
            sex: "M".to_string(),
            status: STATUS_ACTIVE,
            ..Default::default()
        };

        create_if_not_exists(conn, &mut user, 1)?;
        Ok(())
    }
}
