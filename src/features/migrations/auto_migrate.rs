//! 記述子からの自動マイグレーション
//!
//! テーブルの作成、不足カラムの追加、インデックスと中間テーブルの作成を行います。
//! 既存のカラムやデータを削除・変更することはありません。

use super::errors::MigrationError;
use crate::models::schema::{EntityDescriptor, IndexDef, JoinTableDef};
use crate::shared::database::{column_names, table_exists};
use crate::shared::errors::AppError;
use crate::shared::utils::generate_short_id;
use rusqlite::Connection;

/// 記述子の形にテーブルを合わせる
///
/// # 引数
/// * `conn` - データベース接続
/// * `descriptor` - エンティティ記述子
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
///
/// # 処理内容
/// 1. 記述子の検証
/// 2. テーブルが無ければ作成、あれば不足カラムを追加
/// 3. インデックスの作成（IF NOT EXISTS）
/// 4. 中間テーブルの作成（IF NOT EXISTS）
pub fn auto_migrate(conn: &Connection, descriptor: &EntityDescriptor) -> Result<(), MigrationError> {
    descriptor
        .validate()
        .map_err(|message| MigrationError::InvalidDescriptor {
            table: descriptor.table.clone(),
            message,
        })?;

    let exists = table_exists(conn, &descriptor.table)
        .map_err(|e| inspect_error(&descriptor.table, e))?;

    if exists {
        add_missing_columns(conn, descriptor)?;
    } else {
        create_table(conn, descriptor)?;
    }

    for index in descriptor.all_indexes() {
        create_index(conn, &descriptor.table, &index)?;
    }

    for join in &descriptor.join_tables {
        create_join_table(conn, &descriptor.table, join)?;
    }

    log::debug!("自動マイグレーション完了: {descriptor}");
    Ok(())
}

fn inspect_error(table: &str, error: AppError) -> MigrationError {
    MigrationError::Schema {
        table: table.to_string(),
        operation: "inspect".to_string(),
        message: error.to_string(),
    }
}

/// CREATE TABLE文を組み立てる
pub fn create_table_sql(descriptor: &EntityDescriptor) -> String {
    let mut definitions = vec![
        "\"id\" INTEGER PRIMARY KEY AUTOINCREMENT".to_string(),
        "\"created_at\" DATETIME".to_string(),
        "\"updated_at\" DATETIME".to_string(),
        "\"deleted_at\" DATETIME".to_string(),
    ];
    definitions.extend(descriptor.columns.iter().map(|c| c.declaration()));

    format!(
        "CREATE TABLE IF NOT EXISTS \"{}\" (\n    {}\n)",
        descriptor.table,
        definitions.join(",\n    ")
    )
}

fn create_table(conn: &Connection, descriptor: &EntityDescriptor) -> Result<(), MigrationError> {
    conn.execute_batch(&create_table_sql(descriptor))
        .map_err(|e| MigrationError::schema(&descriptor.table, "create_table", e))?;

    log::info!("テーブルを作成しました: {}", descriptor.table);
    Ok(())
}

/// 既存テーブルに不足しているカラムを追加する
///
/// 暗黙のカラムも不足していれば追加する。既存カラムの型は変更しない。
fn add_missing_columns(
    conn: &Connection,
    descriptor: &EntityDescriptor,
) -> Result<(), MigrationError> {
    let existing =
        column_names(conn, &descriptor.table).map_err(|e| inspect_error(&descriptor.table, e))?;

    let mut statements = Vec::new();
    for timestamp in ["created_at", "updated_at", "deleted_at"] {
        if !existing.iter().any(|c| c == timestamp) {
            statements.push((
                timestamp.to_string(),
                format!("\"{timestamp}\" DATETIME"),
            ));
        }
    }
    for column in &descriptor.columns {
        if !existing.iter().any(|c| *c == column.name) {
            statements.push((column.name.clone(), column.declaration()));
        }
    }

    for (name, declaration) in statements {
        let sql = format!(
            "ALTER TABLE \"{}\" ADD COLUMN {declaration}",
            descriptor.table
        );
        conn.execute_batch(&sql)
            .map_err(|e| MigrationError::schema(&descriptor.table, "add_column", e))?;

        log::info!("カラムを追加しました: {}.{}", descriptor.table, name);

        let needs_backfill = descriptor
            .find_column(&name)
            .is_some_and(|column| column.unique && column.column_type.fits_short_id());
        if needs_backfill {
            backfill_short_ids(conn, &descriptor.table, &name)?;
        }
    }

    Ok(())
}

/// 追加したユニークカラムの空値を短縮IDで埋める
///
/// 既存行がすべて空文字になり、ユニークインデックスを作成できなくなるのを防ぐ。
/// 追加直後のカラムにのみ適用するため、既存データは変更しない。
fn backfill_short_ids(conn: &Connection, table: &str, column: &str) -> Result<(), MigrationError> {
    let ids: Vec<i64> = conn
        .prepare(&format!(
            "SELECT id FROM \"{table}\" WHERE \"{column}\" IS NULL OR \"{column}\" = ''"
        ))
        .and_then(|mut stmt| {
            stmt.query_map([], |row| row.get(0))?
                .collect::<rusqlite::Result<Vec<i64>>>()
        })
        .map_err(|e| MigrationError::schema(table, "backfill", e))?;

    for id in &ids {
        conn.execute(
            &format!("UPDATE \"{table}\" SET \"{column}\" = ?1 WHERE id = ?2"),
            rusqlite::params![generate_short_id(), id],
        )
        .map_err(|e| MigrationError::schema(table, "backfill", e))?;
    }

    if !ids.is_empty() {
        log::info!("{table}.{column} に短縮IDを{}件設定しました", ids.len());
    }
    Ok(())
}

/// CREATE INDEX文を組み立てる
pub fn create_index_sql(table: &str, index: &IndexDef) -> String {
    let columns = index
        .columns
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "CREATE {}INDEX IF NOT EXISTS \"{}\" ON \"{}\" ({})",
        if index.unique { "UNIQUE " } else { "" },
        index.name,
        table,
        columns
    )
}

fn create_index(conn: &Connection, table: &str, index: &IndexDef) -> Result<(), MigrationError> {
    conn.execute_batch(&create_index_sql(table, index))
        .map_err(|e| MigrationError::schema(table, "create_index", e))
}

/// 中間テーブルのCREATE TABLE文を組み立てる
///
/// 複合主キーを持ち、両端の行の削除に連動して削除される。
pub fn create_join_table_sql(owner_table: &str, join: &JoinTableDef) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS \"{table}\" (
    \"{owner}\" INTEGER NOT NULL,
    \"{peer}\" INTEGER NOT NULL,
    PRIMARY KEY (\"{owner}\", \"{peer}\"),
    FOREIGN KEY (\"{owner}\") REFERENCES \"{owner_table}\"(\"id\") ON DELETE CASCADE,
    FOREIGN KEY (\"{peer}\") REFERENCES \"{peer_table}\"(\"id\") ON DELETE CASCADE
)",
        table = join.table,
        owner = join.owner_column,
        peer = join.peer_column,
        owner_table = owner_table,
        peer_table = join.peer_table,
    )
}

fn create_join_table(
    conn: &Connection,
    owner_table: &str,
    join: &JoinTableDef,
) -> Result<(), MigrationError> {
    conn.execute_batch(&create_join_table_sql(owner_table, join))
        .map_err(|e| MigrationError::schema(&join.table, "create_join_table", e))?;

    let peer_index = IndexDef::new(
        format!("idx_{}_{}", join.table, join.peer_column),
        &[join.peer_column.as_str()],
        false,
    );
    create_index(conn, &join.table, &peer_index)
}
