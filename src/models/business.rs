use super::entity::{fill_short_id, int, opt_text, text, Entity};
use crate::shared::errors::AppResult;
use crate::shared::utils::hash_password;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

/// プロジェクト（サイト単位の設定）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub project_id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub domain: String,
    pub post_url: String,
    pub icp: String,
    pub author: String,
    pub info: String,
    pub base_url: String,
    pub favicon: String,
    pub nav_image: String,
    pub push_token: String,
}

impl Entity for Project {
    const TABLE: &'static str = "project";

    fn id(&self) -> i64 {
        self.id
    }

    fn before_create(&mut self) -> AppResult<()> {
        fill_short_id(&mut self.project_id);
        Ok(())
    }

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", int(self.id)),
            ("project_id", text(&self.project_id)),
            ("name", text(&self.name)),
            ("title", text(&self.title)),
            ("description", text(&self.description)),
            ("keywords", text(&self.keywords)),
            ("domain", text(&self.domain)),
            ("post_url", text(&self.post_url)),
            ("icp", text(&self.icp)),
            ("author", text(&self.author)),
            ("info", text(&self.info)),
            ("base_url", text(&self.base_url)),
            ("favicon", text(&self.favicon)),
            ("nav_image", text(&self.nav_image)),
            ("push_token", text(&self.push_token)),
        ]
    }
}

/// フロント側のユーザー
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub user_id: String,
    pub username: String,
    pub project_id: String,
    /// 作成時にハッシュ化される
    #[serde(skip_serializing)]
    pub password: String,
    pub nickname: String,
    pub email: String,
    pub phone: String,
    /// M:男 F:女
    pub sex: String,
    pub status: i64,
    /// YYYY-MM-DD
    pub birthday: Option<String>,
    pub avatar_url: String,
}

impl Entity for User {
    const TABLE: &'static str = "user";

    fn id(&self) -> i64 {
        self.id
    }

    fn before_create(&mut self) -> AppResult<()> {
        fill_short_id(&mut self.user_id);
        self.password = hash_password(&self.password)?;
        Ok(())
    }

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", int(self.id)),
            ("user_id", text(&self.user_id)),
            ("username", text(&self.username)),
            ("project_id", text(&self.project_id)),
            ("password", text(&self.password)),
            ("nickname", text(&self.nickname)),
            ("email", text(&self.email)),
            ("phone", text(&self.phone)),
            ("sex", text(&self.sex)),
            ("status", int(self.status)),
            ("birthday", opt_text(&self.birthday)),
            ("avatar_url", text(&self.avatar_url)),
        ]
    }
}
