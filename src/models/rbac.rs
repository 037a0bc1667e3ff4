use super::entity::{int, opt_text, text, Entity, JoinRow};
use rusqlite::types::Value;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

/// 状態: 正常（2は禁用）
pub const STATUS_ACTIVE: i64 = 1;

/// ロール
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub keyword: String,
    pub desc: Option<String>,
    pub status: i64,
    /// 小さいほど権限が高い（1はスーパー管理者）
    pub sort: i64,
    pub creator: String,
}

impl Role {
    /// 主キーでロールを取得する
    ///
    /// 見つからない場合は `QueryReturnedNoRows` を返す。
    pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Role> {
        conn.query_row(
            "SELECT id, name, keyword, \"desc\", status, sort, COALESCE(creator, '')
             FROM \"role\" WHERE id = ?1",
            [id],
            |row| {
                Ok(Role {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    keyword: row.get(2)?,
                    desc: row.get(3)?,
                    status: row.get(4)?,
                    sort: row.get(5)?,
                    creator: row.get(6)?,
                })
            },
        )
    }
}

impl Entity for Role {
    const TABLE: &'static str = "role";

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", int(self.id)),
            ("name", text(&self.name)),
            ("keyword", text(&self.keyword)),
            ("desc", opt_text(&self.desc)),
            ("status", int(self.status)),
            ("sort", int(self.sort)),
            ("creator", text(&self.creator)),
        ]
    }
}

/// 管理者
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub id: i64,
    pub username: String,
    /// bcryptハッシュ
    pub password: String,
    pub mobile: String,
    pub avatar: String,
    pub nickname: Option<String>,
    pub introduction: Option<String>,
    pub status: i64,
    pub creator: String,
    /// 紐づくロールの主キー
    pub role_ids: Vec<i64>,
}

impl Entity for Admin {
    const TABLE: &'static str = "admin";

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", int(self.id)),
            ("username", text(&self.username)),
            ("password", text(&self.password)),
            ("mobile", text(&self.mobile)),
            ("avatar", text(&self.avatar)),
            ("nickname", opt_text(&self.nickname)),
            ("introduction", opt_text(&self.introduction)),
            ("status", int(self.status)),
            ("creator", text(&self.creator)),
        ]
    }

    fn join_rows(&self) -> Vec<JoinRow> {
        self.role_ids
            .iter()
            .map(|role_id| JoinRow {
                table: "admin_roles",
                own_column: "admin_id",
                other_column: "role_id",
                other_id: *role_id,
            })
            .collect()
    }
}

/// メニュー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub icon: Option<String>,
    pub path: String,
    pub redirect: Option<String>,
    pub component: String,
    pub sort: i64,
    /// 0はルート
    pub parent_id: i64,
    pub creator: String,
    pub role_ids: Vec<i64>,
}

impl Entity for Menu {
    const TABLE: &'static str = "menu";

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", int(self.id)),
            ("name", text(&self.name)),
            ("title", text(&self.title)),
            ("icon", opt_text(&self.icon)),
            ("path", text(&self.path)),
            ("redirect", opt_text(&self.redirect)),
            ("component", text(&self.component)),
            ("sort", int(self.sort)),
            ("parent_id", int(self.parent_id)),
            ("creator", text(&self.creator)),
        ]
    }

    fn join_rows(&self) -> Vec<JoinRow> {
        self.role_ids
            .iter()
            .map(|role_id| JoinRow {
                table: "role_menus",
                own_column: "menu_id",
                other_column: "role_id",
                other_id: *role_id,
            })
            .collect()
    }
}

/// 接口（権限制御の対象となるAPI）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Api {
    pub id: i64,
    /// HTTPメソッド
    pub method: String,
    pub path: String,
    pub category: String,
    pub desc: Option<String>,
    pub creator: String,
}

impl Entity for Api {
    const TABLE: &'static str = "api";

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", int(self.id)),
            ("method", text(&self.method)),
            ("path", text(&self.path)),
            ("category", text(&self.category)),
            ("desc", opt_text(&self.desc)),
            ("creator", text(&self.creator)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_join_rows() {
        let admin = Admin {
            id: 1,
            username: "admin".to_string(),
            password: String::new(),
            mobile: "18888888888".to_string(),
            avatar: String::new(),
            nickname: None,
            introduction: None,
            status: STATUS_ACTIVE,
            creator: "系统".to_string(),
            role_ids: vec![1, 2],
        };

        let rows = admin.join_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].table, "admin_roles");
        assert_eq!(rows[1].other_id, 2);
    }

    #[test]
    fn test_role_values_include_primary_key() {
        let role = Role {
            id: 3,
            name: "访客".to_string(),
            keyword: "guest".to_string(),
            desc: None,
            status: STATUS_ACTIVE,
            sort: 5,
            creator: "系统".to_string(),
        };

        let values = role.values();
        assert_eq!(values[0], ("id", Value::Integer(3)));
        assert!(values.contains(&("desc", Value::Null)));
    }
}
