use super::entity::{fill_short_id, int, text, Entity};
use crate::shared::errors::AppResult;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

/// 記事分類
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub category_id: String,
    pub parent_id: i64,
    pub sort: i64,
    pub icon: String,
    pub title: String,
    pub path: String,
    /// 1表示、2非表示
    pub hidden: i64,
    pub description: String,
    pub ext: String,
    pub status: i64,
}

impl Entity for Category {
    const TABLE: &'static str = "category";

    fn id(&self) -> i64 {
        self.id
    }

    fn before_create(&mut self) -> AppResult<()> {
        fill_short_id(&mut self.category_id);
        Ok(())
    }

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", int(self.id)),
            ("category_id", text(&self.category_id)),
            ("parent_id", int(self.parent_id)),
            ("sort", int(self.sort)),
            ("icon", text(&self.icon)),
            ("title", text(&self.title)),
            ("path", text(&self.path)),
            ("hidden", int(self.hidden)),
            ("description", text(&self.description)),
            ("ext", text(&self.ext)),
            ("status", int(self.status)),
        ]
    }
}

/// タグ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub tag_id: String,
    pub title: String,
    pub description: String,
    pub color: String,
}

impl Entity for Tag {
    const TABLE: &'static str = "tag";

    fn id(&self) -> i64 {
        self.id
    }

    fn before_create(&mut self) -> AppResult<()> {
        fill_short_id(&mut self.tag_id);
        Ok(())
    }

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", int(self.id)),
            ("tag_id", text(&self.tag_id)),
            ("title", text(&self.title)),
            ("description", text(&self.description)),
            ("color", text(&self.color)),
        ]
    }
}

/// 記事
///
/// 分類・プロジェクト・専欄・ユーザーへの参照は短縮IDの文字列で持つ。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub post_id: String,
    pub category_id: String,
    pub project_id: String,
    pub column_id: String,
    pub user_id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub html_content: String,
    pub description: String,
    pub ext: String,
    pub icon: String,
    pub tag: String,
    pub view: i64,
    /// 1記事、2ページ、3短文
    pub post_type: i64,
    pub is_top: i64,
    pub is_passwd: i64,
    pub password: String,
    /// 1下書き、2公開
    pub status: i64,
}

impl Entity for Post {
    const TABLE: &'static str = "post";

    fn id(&self) -> i64 {
        self.id
    }

    fn before_create(&mut self) -> AppResult<()> {
        fill_short_id(&mut self.post_id);
        Ok(())
    }

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", int(self.id)),
            ("post_id", text(&self.post_id)),
            ("category_id", text(&self.category_id)),
            ("project_id", text(&self.project_id)),
            ("column_id", text(&self.column_id)),
            ("user_id", text(&self.user_id)),
            ("author", text(&self.author)),
            ("title", text(&self.title)),
            ("content", text(&self.content)),
            ("html_content", text(&self.html_content)),
            ("description", text(&self.description)),
            ("ext", text(&self.ext)),
            ("icon", text(&self.icon)),
            ("tag", text(&self.tag)),
            ("view", int(self.view)),
            ("type", int(self.post_type)),
            ("is_top", int(self.is_top)),
            ("is_passwd", int(self.is_passwd)),
            ("password", text(&self.password)),
            ("status", int(self.status)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::utils::is_valid_short_id;

    #[test]
    fn test_category_hook_generates_id() {
        let mut category = Category {
            id: 2,
            title: "新分类".to_string(),
            ..Default::default()
        };
        category.before_create().unwrap();
        assert!(is_valid_short_id(&category.category_id));
    }

    #[test]
    fn test_post_hook_keeps_literal_id() {
        let mut post = Post {
            id: 1,
            post_id: "243x9".to_string(),
            ..Default::default()
        };
        post.before_create().unwrap();
        assert_eq!(post.post_id, "243x9");
    }

    #[test]
    fn test_post_type_column_name() {
        let post = Post {
            post_type: 3,
            ..Default::default()
        };
        assert!(post.values().contains(&("type", Value::Integer(3))));
    }
}
