use super::errors::SeedError;
use super::insert::create_if_not_exists;
use super::seeder::Seeder;
use crate::models::Project;
use rusqlite::Connection;

/// 既定プロジェクトの短縮ID
pub const DEFAULT_PROJECT_ID: &str = "245eko";

/// プロジェクトのシーダー
pub struct ProjectSeeder;

impl Seeder for ProjectSeeder {
    fn name(&self) -> &str {
        "project"
    }

    fn run(&self, conn: &Connection) -> Result<(), SeedError> {
        let mut project = Project {
            id: 1,
            project_id: DEFAULT_PROJECT_ID.to_string(),
            name: "default".to_string(),
            title: "默认项目".to_string(),
            description: "默认项目".to_string(),
            ..Default::default()
        };

        create_if_not_exists(conn, &mut project, 1)?;
        Ok(())
    }
}
