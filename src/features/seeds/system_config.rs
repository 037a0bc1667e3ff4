use super::errors::SeedError;
use super::insert::create_if_not_exists;
use super::seeder::Seeder;
use crate::models::SystemConfig;
use rusqlite::Connection;

const DEFAULT_LOGO: &str = "https://raw.gitcode.com/Go-Tribe/gotribe/raw/5ae01df24c556094f74a9b23086f35c3929fe0f3/106083123.png";

/// システム設定のシーダー
pub struct SystemConfigSeeder;

impl Seeder for SystemConfigSeeder {
    fn name(&self) -> &str {
        "system_config"
    }

    fn run(&self, conn: &Connection) -> Result<(), SeedError> {
        let mut config = SystemConfig {
            id: 1,
            system_config_id: "245eko".to_string(),
            title: "GoTribe".to_string(),
            logo: DEFAULT_LOGO.to_string(),
            icon: DEFAULT_LOGO.to_string(),
            ..Default::default()
        };

        create_if_not_exists(conn, &mut config, 1)?;
        Ok(())
    }
}
