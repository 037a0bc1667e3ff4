//! エンティティのスキーマ記述子
//!
//! テーブル名、カラム、インデックス、多対多の中間テーブルを宣言的に表します。
//! 自動マイグレーションはこの記述子だけを見てDDLを組み立てます。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::shared::utils::SHORT_ID_LENGTH;

/// 識別子として許可する形式
static IDENTIFIER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*$").unwrap_or_else(|e| panic!("識別子パターンが不正です: {e}"))
});

/// すべてのテーブルが暗黙的に持つカラム
pub const BASE_COLUMNS: [&str; 4] = ["id", "created_at", "updated_at", "deleted_at"];

/// 識別子が有効な形式かどうかを判定する
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(name)
}

/// カラムの意味的な型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// 固定長文字列
    Char(u16),
    /// 可変長文字列
    Varchar(u16),
    Text,
    LongText,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Date,
    DateTime,
    Real,
}

impl ColumnType {
    /// SQLiteでの型宣言を取得
    pub fn sql_type(&self) -> String {
        match self {
            ColumnType::Char(n) => format!("CHAR({n})"),
            ColumnType::Varchar(n) => format!("VARCHAR({n})"),
            ColumnType::Text | ColumnType::LongText => "TEXT".to_string(),
            ColumnType::TinyInt => "TINYINT".to_string(),
            ColumnType::SmallInt => "SMALLINT".to_string(),
            ColumnType::Integer => "INTEGER".to_string(),
            ColumnType::BigInt => "BIGINT".to_string(),
            ColumnType::Date => "DATE".to_string(),
            ColumnType::DateTime => "DATETIME".to_string(),
            ColumnType::Real => "REAL".to_string(),
        }
    }

    /// 型のゼロ値をSQLリテラルで取得
    ///
    /// 既存行を持つテーブルにNOT NULLカラムを追加するときの既定値として使う。
    pub fn zero_literal(&self) -> &'static str {
        match self {
            ColumnType::Char(_)
            | ColumnType::Varchar(_)
            | ColumnType::Text
            | ColumnType::LongText
            | ColumnType::Date
            | ColumnType::DateTime => "''",
            ColumnType::TinyInt
            | ColumnType::SmallInt
            | ColumnType::Integer
            | ColumnType::BigInt => "0",
            ColumnType::Real => "0.0",
        }
    }

    /// 短縮IDを格納できる文字列型か
    pub fn fits_short_id(&self) -> bool {
        match self {
            ColumnType::Char(n) | ColumnType::Varchar(n) => {
                usize::from(*n) >= SHORT_ID_LENGTH
            }
            ColumnType::Text | ColumnType::LongText => true,
            _ => false,
        }
    }

    fn has_zero_length(&self) -> bool {
        matches!(self, ColumnType::Char(0) | ColumnType::Varchar(0))
    }
}

/// カラム定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub column_type: ColumnType,
    /// NULLを許可するか
    pub nullable: bool,
    /// SQLリテラルとしての既定値
    pub default: Option<String>,
    pub comment: String,
    /// 単独の一意インデックスを張るか
    pub unique: bool,
    /// 単独の通常インデックスを張るか
    pub index: bool,
}

impl ColumnDef {
    /// NOT NULLのカラム定義を作成
    ///
    /// # 引数
    /// * `name` - カラム名
    /// * `column_type` - 意味的な型
    pub fn new<S: Into<String>>(name: S, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
            default: None,
            comment: String::new(),
            unique: false,
            index: false,
        }
    }

    /// NULLを許可する
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// 既定値を設定する（SQLリテラル）
    pub fn default_value<S: Into<String>>(mut self, literal: S) -> Self {
        self.default = Some(literal.into());
        self
    }

    /// 一意インデックスを張る
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// 通常インデックスを張る
    pub fn index(mut self) -> Self {
        self.index = true;
        self
    }

    /// コメントを設定する
    pub fn comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = comment.into();
        self
    }

    /// 実際に適用される既定値
    ///
    /// NOT NULLで既定値の指定がない場合は型のゼロ値を返す。
    pub fn effective_default(&self) -> Option<String> {
        match (&self.default, self.nullable) {
            (Some(literal), _) => Some(literal.clone()),
            (None, false) => Some(self.column_type.zero_literal().to_string()),
            (None, true) => None,
        }
    }

    /// CREATE TABLE / ADD COLUMN で使うカラム宣言
    pub fn declaration(&self) -> String {
        let mut sql = format!("\"{}\" {}", self.name, self.column_type.sql_type());
        if !self.nullable {
            sql.push_str(" NOT NULL");
        }
        if let Some(default) = self.effective_default() {
            sql.push_str(&format!(" DEFAULT {default}"));
        }
        sql
    }
}

/// インデックス定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDef {
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
}

impl IndexDef {
    pub fn new<S: Into<String>>(name: S, columns: &[&str], unique: bool) -> Self {
        Self {
            name: name.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            unique,
        }
    }
}

/// 多対多の中間テーブル定義
///
/// 複合主キー (owner_column, peer_column) を持ち、両端の削除に連動して行が消える。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinTableDef {
    pub table: String,
    /// 所有側（この記述子のテーブル）を指すカラム
    pub owner_column: String,
    /// 相手側のテーブル
    pub peer_table: String,
    /// 相手側を指すカラム
    pub peer_column: String,
}

impl JoinTableDef {
    pub fn new(table: &str, owner_column: &str, peer_table: &str, peer_column: &str) -> Self {
        Self {
            table: table.to_string(),
            owner_column: owner_column.to_string(),
            peer_table: peer_table.to_string(),
            peer_column: peer_column.to_string(),
        }
    }
}

/// エンティティ記述子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    /// テーブル名（単数形のsnake_case）
    pub table: String,
    pub columns: Vec<ColumnDef>,
    /// 複合インデックスなど、カラム単位で表せないもの
    pub indexes: Vec<IndexDef>,
    pub join_tables: Vec<JoinTableDef>,
    pub comment: String,
}

impl EntityDescriptor {
    /// 新しいエンティティ記述子を作成
    ///
    /// # 引数
    /// * `table` - テーブル名
    /// * `comment` - テーブルの説明
    pub fn new<S: Into<String>>(table: S, comment: &str) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            indexes: Vec::new(),
            join_tables: Vec::new(),
            comment: comment.to_string(),
        }
    }

    /// カラムを追加する
    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// インデックスを追加する
    pub fn with_index(mut self, index: IndexDef) -> Self {
        self.indexes.push(index);
        self
    }

    /// 多対多の中間テーブルを追加する
    pub fn many_to_many(mut self, join: JoinTableDef) -> Self {
        self.join_tables.push(join);
        self
    }

    /// カラム定義を名前で探す
    pub fn find_column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// 作成すべきインデックスをすべて取得
    ///
    /// deleted_at の通常インデックス、カラム単位のインデックス、明示的なインデックスの順。
    pub fn all_indexes(&self) -> Vec<IndexDef> {
        let mut indexes = vec![IndexDef::new(
            format!("idx_{}_deleted_at", self.table),
            &["deleted_at"],
            false,
        )];

        for column in &self.columns {
            if column.unique || column.index {
                indexes.push(IndexDef {
                    name: format!("idx_{}_{}", self.table, column.name),
                    columns: vec![column.name.clone()],
                    unique: column.unique,
                });
            }
        }

        indexes.extend(self.indexes.iter().cloned());
        indexes
    }

    /// 記述子の検証
    ///
    /// # 戻り値
    /// 有効な場合はOk(())、無効な場合はエラーメッセージ
    pub fn validate(&self) -> Result<(), String> {
        if self.table.is_empty() {
            return Err("テーブル名が空です".to_string());
        }

        if !is_valid_identifier(&self.table) {
            return Err(format!("テーブル名が無効な形式です: {}", self.table));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !is_valid_identifier(&column.name) {
                return Err(format!("カラム名が無効な形式です: {}", column.name));
            }
            if BASE_COLUMNS.contains(&column.name.as_str()) {
                return Err(format!(
                    "カラム {} は暗黙のカラムと重複しています",
                    column.name
                ));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(format!("カラム {} が重複しています", column.name));
            }
            if column.column_type.has_zero_length() {
                return Err(format!("カラム {} の長さが0です", column.name));
            }
        }

        for index in &self.indexes {
            if !is_valid_identifier(&index.name) {
                return Err(format!("インデックス名が無効な形式です: {}", index.name));
            }
            if index.columns.is_empty() {
                return Err(format!("インデックス {} にカラムがありません", index.name));
            }
            for column in &index.columns {
                let known = BASE_COLUMNS.contains(&column.as_str()) || seen.contains(column.as_str());
                if !known {
                    return Err(format!(
                        "インデックス {} が未定義のカラム {} を参照しています",
                        index.name, column
                    ));
                }
            }
        }

        for join in &self.join_tables {
            for name in [
                &join.table,
                &join.owner_column,
                &join.peer_table,
                &join.peer_column,
            ] {
                if !is_valid_identifier(name) {
                    return Err(format!("中間テーブルの識別子が無効です: {name}"));
                }
            }
            if join.owner_column == join.peer_column {
                return Err(format!(
                    "中間テーブル {} の両端のカラム名が同じです",
                    join.table
                ));
            }
        }

        Ok(())
    }
}

impl fmt::Display for EntityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entity[{}] columns={} joins={}",
            self.table,
            self.columns.len(),
            self.join_tables.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_descriptor() -> EntityDescriptor {
        EntityDescriptor::new("role", "角色")
            .column(ColumnDef::new("name", ColumnType::Varchar(20)).unique())
            .column(ColumnDef::new("sort", ColumnType::Integer).default_value("999"))
            .column(ColumnDef::new("desc", ColumnType::Varchar(100)).nullable())
    }

    #[test]
    fn test_fits_short_id() {
        assert!(ColumnType::Char(10).fits_short_id());
        assert!(ColumnType::Varchar(30).fits_short_id());
        assert!(ColumnType::Text.fits_short_id());
        assert!(!ColumnType::Varchar(6).fits_short_id());
        assert!(!ColumnType::Integer.fits_short_id());
    }

    #[test]
    fn test_find_column() {
        let descriptor = create_test_descriptor();
        assert_eq!(
            descriptor.find_column("name").map(|c| c.column_type),
            Some(ColumnType::Varchar(20))
        );
        assert!(descriptor.find_column("missing").is_none());
    }

    #[test]
    fn test_identifier_pattern() {
        assert!(is_valid_identifier("system_config"));
        assert!(is_valid_identifier("ad2"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("Role"));
        assert!(!is_valid_identifier("2fa"));
        assert!(!is_valid_identifier("drop table"));
        assert!(!is_valid_identifier("name\"--"));
    }

    #[test]
    fn test_column_type_sql() {
        assert_eq!(ColumnType::Char(10).sql_type(), "CHAR(10)");
        assert_eq!(ColumnType::Varchar(255).sql_type(), "VARCHAR(255)");
        assert_eq!(ColumnType::LongText.sql_type(), "TEXT");
        assert_eq!(ColumnType::TinyInt.sql_type(), "TINYINT");
        assert_eq!(ColumnType::DateTime.sql_type(), "DATETIME");
    }

    #[test]
    fn test_column_declaration() {
        let column = ColumnDef::new("name", ColumnType::Varchar(20));
        assert_eq!(column.declaration(), "\"name\" VARCHAR(20) NOT NULL DEFAULT ''");

        let column = ColumnDef::new("status", ColumnType::TinyInt).default_value("1");
        assert_eq!(column.declaration(), "\"status\" TINYINT NOT NULL DEFAULT 1");

        let column = ColumnDef::new("birthday", ColumnType::Date).nullable();
        assert_eq!(column.declaration(), "\"birthday\" DATE");
    }

    #[test]
    fn test_validate_valid_descriptor() {
        assert!(create_test_descriptor().validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_descriptor() {
        let descriptor = EntityDescriptor::new("", "");
        assert!(descriptor.validate().is_err());

        let descriptor = EntityDescriptor::new("Bad-Name", "");
        assert!(descriptor.validate().is_err());

        let descriptor =
            create_test_descriptor().column(ColumnDef::new("name", ColumnType::Text));
        assert!(descriptor.validate().unwrap_err().contains("重複"));

        let descriptor =
            create_test_descriptor().column(ColumnDef::new("created_at", ColumnType::DateTime));
        assert!(descriptor.validate().is_err());

        let descriptor =
            create_test_descriptor().column(ColumnDef::new("code", ColumnType::Char(0)));
        assert!(descriptor.validate().is_err());

        let descriptor = create_test_descriptor().with_index(IndexDef::new(
            "idx_role_missing",
            &["missing"],
            false,
        ));
        assert!(descriptor.validate().unwrap_err().contains("missing"));
    }

    #[test]
    fn test_all_indexes() {
        let indexes = create_test_descriptor().all_indexes();
        let names: Vec<&str> = indexes.iter().map(|i| i.name.as_str()).collect();

        assert_eq!(names, vec!["idx_role_deleted_at", "idx_role_name"]);
        assert!(!indexes[0].unique);
        assert!(indexes[1].unique);
    }

    #[test]
    fn test_display() {
        let descriptor = create_test_descriptor();
        assert_eq!(descriptor.to_string(), "Entity[role] columns=3 joins=0");
    }
}
