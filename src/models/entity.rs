//! 永続化エンティティの共通トレイト

use crate::shared::errors::AppResult;
use crate::shared::utils::generate_short_id;
use rusqlite::types::Value;

/// 多対多の中間テーブルに書き込む1行
#[derive(Debug, Clone, PartialEq)]
pub struct JoinRow {
    pub table: &'static str,
    /// このエンティティを指すカラム
    pub own_column: &'static str,
    /// 相手側を指すカラム
    pub other_column: &'static str,
    pub other_id: i64,
}

/// 永続化エンティティ
///
/// 行の値を列名付きで提供し、作成前フックを持つ。
pub trait Entity {
    /// テーブル名
    const TABLE: &'static str;

    /// 主キー
    fn id(&self) -> i64;

    /// 作成前フック
    ///
    /// 短縮IDの採番やパスワードのハッシュ化を行う。既定では何もしない。
    fn before_create(&mut self) -> AppResult<()> {
        Ok(())
    }

    /// INSERTする列と値（主キーを含む）
    fn values(&self) -> Vec<(&'static str, Value)>;

    /// 作成後に書き込む中間テーブルの行
    fn join_rows(&self) -> Vec<JoinRow> {
        Vec::new()
    }
}

/// 空の場合だけ短縮IDを採番する
///
/// # 戻り値
/// 採番した場合はtrue
pub fn fill_short_id(field: &mut String) -> bool {
    if field.is_empty() {
        *field = generate_short_id();
        true
    } else {
        false
    }
}

pub(crate) fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

pub(crate) fn opt_text(value: &Option<String>) -> Value {
    match value {
        Some(v) => Value::Text(v.clone()),
        None => Value::Null,
    }
}

pub(crate) fn int(value: i64) -> Value {
    Value::Integer(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::utils::is_valid_short_id;

    #[test]
    fn test_fill_short_id_when_empty() {
        let mut id = String::new();
        assert!(fill_short_id(&mut id));
        assert!(is_valid_short_id(&id));
    }

    #[test]
    fn test_fill_short_id_keeps_literal() {
        let mut id = "245eko".to_string();
        assert!(!fill_short_id(&mut id));
        assert_eq!(id, "245eko");
    }

    #[test]
    fn test_value_helpers() {
        assert_eq!(text("a"), Value::Text("a".to_string()));
        assert_eq!(opt_text(&None), Value::Null);
        assert_eq!(opt_text(&Some("b".to_string())), Value::Text("b".to_string()));
        assert_eq!(int(3), Value::Integer(3));
    }
}
