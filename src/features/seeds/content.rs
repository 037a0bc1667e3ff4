use super::errors::SeedError;
use super::insert::create_if_not_exists;
use super::project::DEFAULT_PROJECT_ID;
use super::seeder::Seeder;
use crate::models::{Category, Post, Tag, STATUS_ACTIVE};
use rusqlite::Connection;

/// 既定カテゴリの短縮ID
pub const DEFAULT_CATEGORY_ID: &str = "24ejga";

const SAMPLE_POST_ICON: &str = "https://cdn.dengmengmian.com/20240528/1716909013037462047.jpg";

/// カテゴリのシーダー
pub struct CategorySeeder;

impl Seeder for CategorySeeder {
    fn name(&self) -> &str {
        "category"
    }

    fn run(&self, conn: &Connection) -> Result<(), SeedError> {
        let mut category = Category {
            id: 1,
            category_id: DEFAULT_CATEGORY_ID.to_string(),
            title: "默认分类".to_string(),
            description: "默认分类".to_string(),
            sort: 1,
            hidden: 1,
            status: STATUS_ACTIVE,
            ..Default::default()
        };

        create_if_not_exists(conn, &mut category, 1)?;
        Ok(())
    }
}

/// タグのシーダー
pub struct TagSeeder;

impl Seeder for TagSeeder {
    fn name(&self) -> &str {
        "tag"
    }

    fn run(&self, conn: &Connection) -> Result<(), SeedError> {
        let mut tag = Tag {
            id: 1,
            tag_id: "default".to_string(),
            title: "默认标签".to_string(),
            description: "默认标签".to_string(),
            ..Default::default()
        };

        create_if_not_exists(conn, &mut tag, 1)?;
        Ok(())
    }
}

/// サンプル記事のシーダー
///
/// 既定カテゴリと既定プロジェクトの短縮IDを参照する。
pub struct PostSeeder;

impl Seeder for PostSeeder {
    fn name(&self) -> &str {
        "post"
    }

    fn run(&self, conn: &Connection) -> Result<(), SeedError> {
        let mut post = Post {
            id: 1,
            post_id: "243x9".to_string(),
            title: "欢迎使用GoTribe".to_string(),
            description: "这是一篇示例文章".to_string(),
            content: "# 这是一篇示例文章".to_string(),
            html_content: "<h1>这是一篇示例文章</h1>".to_string(),
            icon: SAMPLE_POST_ICON.to_string(),
            user_id: DEFAULT_PROJECT_ID.to_string(),
            category_id: DEFAULT_CATEGORY_ID.to_string(),
            project_id: DEFAULT_PROJECT_ID.to_string(),
            author: "GoTribe".to_string(),
            view: 1,
            post_type: 1,
            is_top: 2,
            is_passwd: 2,
            status: STATUS_ACTIVE,
            ..Default::default()
        };

        create_if_not_exists(conn, &mut post, 1)?;
        Ok(())
    }
}
