use super::entity::{fill_short_id, int, text, Entity};
use crate::shared::errors::AppResult;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

/// 管理画面のシステム設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    pub id: i64,
    pub system_config_id: String,
    pub title: String,
    pub content: String,
    pub logo: String,
    pub icon: String,
    pub footer: String,
}

impl Entity for SystemConfig {
    const TABLE: &'static str = "system_config";

    fn id(&self) -> i64 {
        self.id
    }

    fn before_create(&mut self) -> AppResult<()> {
        fill_short_id(&mut self.system_config_id);
        Ok(())
    }

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", int(self.id)),
            ("system_config_id", text(&self.system_config_id)),
            ("title", text(&self.title)),
            ("content", text(&self.content)),
            ("logo", text(&self.logo)),
            ("icon", text(&self.icon)),
            ("footer", text(&self.footer)),
        ]
    }
}
