//! 冪等な挿入処理
//!
//! 主キーで存在を確認し、無ければ作成前フックを通して挿入します。
//! 既存行は内容が異なっていても変更しません。

use super::errors::SeedError;
use crate::models::entity::{Entity, JoinRow};
use crate::shared::utils::now_timestamp;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension};

/// 主キーの行が存在するかを確認する
///
/// 論理削除済みの行も存在として扱う。
pub fn exists_by_id(conn: &Connection, table: &str, id: i64) -> rusqlite::Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            &format!("SELECT id FROM \"{table}\" WHERE id = ?1"),
            [id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// 行が存在しなければ作成する
///
/// # 引数
/// * `conn` - データベース接続
/// * `row` - 作成する行（フックにより変更される）
/// * `id` - 存在確認に使う主キー
///
/// # 戻り値
/// 挿入した場合はtrue、既に存在した場合はfalse
///
/// # 処理内容
/// 1. 主キーで検索（論理削除を無視）
/// 2. 見つかれば何もしない
/// 3. 見つからなければ作成前フックを実行し、行と中間テーブルの行を挿入
pub fn create_if_not_exists<T: Entity>(
    conn: &Connection,
    row: &mut T,
    id: i64,
) -> Result<bool, SeedError> {
    let exists = exists_by_id(conn, T::TABLE, id).map_err(|e| SeedError::Lookup {
        table: T::TABLE.to_string(),
        id,
        message: e.to_string(),
    })?;

    if exists {
        log::debug!("既存の行を保持します: {}#{}", T::TABLE, id);
        return Ok(false);
    }

    row.before_create().map_err(|e| SeedError::Hook {
        table: T::TABLE.to_string(),
        message: e.to_string(),
    })?;

    insert_with_joins(conn, row).map_err(|e| SeedError::Insertion {
        table: T::TABLE.to_string(),
        id,
        message: e.to_string(),
    })?;

    log::debug!("行を作成しました: {}#{}", T::TABLE, id);
    Ok(true)
}

/// 複数の行に対して `create_if_not_exists` を適用する
///
/// # 戻り値
/// 挿入した行数
pub fn create_batch_if_not_exists<T: Entity>(
    conn: &Connection,
    rows: &mut [T],
) -> Result<usize, SeedError> {
    let mut inserted = 0;
    for row in rows.iter_mut() {
        let id = row.id();
        if create_if_not_exists(conn, row, id)? {
            inserted += 1;
        }
    }
    Ok(inserted)
}

/// 行と中間テーブルの行をまとめて挿入する
///
/// 自動コミット中であればトランザクションで囲む。
fn insert_with_joins<T: Entity>(conn: &Connection, row: &T) -> rusqlite::Result<()> {
    if conn.is_autocommit() {
        let tx = conn.unchecked_transaction()?;
        insert_row(&tx, row)?;
        tx.commit()
    } else {
        insert_row(conn, row)
    }
}

fn insert_row<T: Entity>(conn: &Connection, row: &T) -> rusqlite::Result<()> {
    let now = now_timestamp();
    let mut values = row.values();
    values.push(("created_at", Value::Text(now.clone())));
    values.push(("updated_at", Value::Text(now)));

    let columns = values
        .iter()
        .map(|(name, _)| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=values.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO \"{}\" ({columns}) VALUES ({placeholders})",
        T::TABLE
    );

    conn.execute(&sql, params_from_iter(values.into_iter().map(|(_, v)| v)))?;

    for join in row.join_rows() {
        insert_join_row(conn, row.id(), &join)?;
    }

    Ok(())
}

fn insert_join_row(conn: &Connection, own_id: i64, join: &JoinRow) -> rusqlite::Result<()> {
    conn.execute(
        &format!(
            "INSERT OR IGNORE INTO \"{}\" (\"{}\", \"{}\") VALUES (?1, ?2)",
            join.table, join.own_column, join.other_column
        ),
        [own_id, join.other_id],
    )?;
    Ok(())
}
