use crate::shared::errors::{AppError, AppResult};
use rusqlite::{Connection, DatabaseName, OpenFlags};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::Duration;

/// SQLiteのビジータイムアウト
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// データベースファイルを開く
///
/// # 引数
/// * `path` - データベースファイルのパス
///
/// # 戻り値
/// 設定済みのデータベース接続、または失敗時はエラー
pub fn open_database(path: &Path) -> AppResult<Connection> {
    if path.as_os_str().is_empty() {
        return Err(AppError::configuration("データベースパスが指定されていません"));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            log::info!("データベースディレクトリを作成: {parent:?}");
        }
    }

    let conn = Connection::open(path)?;
    configure_connection(&conn)?;

    log::info!("データベースを開きました: {path:?}");
    Ok(conn)
}

/// 読み取り専用でデータベースファイルを開く
///
/// 既存ファイルの内容確認にのみ使用する。
pub fn open_read_only(path: &Path) -> AppResult<Connection> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}

/// インメモリデータベースを開く（テスト用）
pub fn open_in_memory() -> AppResult<Connection> {
    let conn = Connection::open_in_memory()?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// 接続共通のPRAGMAを設定する
///
/// 外部キー制約を有効にし、ビジータイムアウトを設定する。
fn configure_connection(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(())
}

/// 接続が書き込み可能かを確認する
///
/// # 戻り値
/// 書き込み可能な場合はOk(())、読み取り専用の場合は設定エラー
pub fn ensure_writable(conn: &Connection) -> AppResult<()> {
    let readonly = conn.is_readonly(DatabaseName::Main)?;
    if readonly {
        return Err(AppError::configuration(
            "データベース接続が読み取り専用のため使用できません",
        ));
    }
    Ok(())
}

/// テーブルが存在するかを確認する
///
/// # 引数
/// * `conn` - データベース接続
/// * `table` - テーブル名
pub fn table_exists(conn: &Connection, table: &str) -> AppResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// テーブルの既存カラム名を取得する
///
/// PRAGMA table_info を使用する。テーブルが存在しない場合は空のリストを返す。
pub fn column_names(conn: &Connection, table: &str) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info(\"{table}\")"))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}

/// スキーマ全体の指紋を計算する
///
/// sqlite_master に記録されたDDLを名前順に連結し、SHA-256の16進文字列を返す。
/// 同じスキーマであれば同じ値になる。
pub fn schema_fingerprint(conn: &Connection) -> AppResult<String> {
    let mut stmt = conn.prepare(
        "SELECT type, name, COALESCE(sql, '') FROM sqlite_master
         WHERE name NOT LIKE 'sqlite_%'
         ORDER BY type, name",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut hasher = Sha256::new();
    for row in rows {
        let (kind, name, sql) = row?;
        hasher.update(kind.as_bytes());
        hasher.update(b"\0");
        hasher.update(name.as_bytes());
        hasher.update(b"\0");
        hasher.update(sql.as_bytes());
        hasher.update(b"\n");
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_in_memory_enables_foreign_keys() {
        let conn = open_in_memory().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
        assert!(ensure_writable(&conn).is_ok());
    }

    #[test]
    fn test_open_database_with_empty_path() {
        let result = open_database(Path::new(""));
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_open_database_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("gotribe.db");

        let conn = open_database(&path).unwrap();
        conn.execute_batch("CREATE TABLE t (id INTEGER)").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_read_only_connection_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ro.db");
        {
            let conn = open_database(&path).unwrap();
            conn.execute_batch("CREATE TABLE t (id INTEGER)").unwrap();
        }

        let conn = open_read_only(&path).unwrap();
        let result = ensure_writable(&conn);
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_table_exists_and_column_names() {
        let conn = open_in_memory().unwrap();
        assert!(!table_exists(&conn, "role").unwrap());
        assert!(column_names(&conn, "role").unwrap().is_empty());

        conn.execute_batch("CREATE TABLE role (id INTEGER PRIMARY KEY, name TEXT)")
            .unwrap();

        assert!(table_exists(&conn, "role").unwrap());
        assert_eq!(
            column_names(&conn, "role").unwrap(),
            vec!["id".to_string(), "name".to_string()]
        );
    }

    #[test]
    fn test_schema_fingerprint_changes_with_schema() {
        let conn = open_in_memory().unwrap();
        let empty = schema_fingerprint(&conn).unwrap();
        assert_eq!(empty, schema_fingerprint(&conn).unwrap());
        assert_eq!(empty.len(), 64);

        conn.execute_batch("CREATE TABLE tag (id INTEGER PRIMARY KEY)")
            .unwrap();
        let with_table = schema_fingerprint(&conn).unwrap();
        assert_ne!(empty, with_table);

        // データの追加では変化しない
        conn.execute("INSERT INTO tag (id) VALUES (1)", []).unwrap();
        assert_eq!(with_table, schema_fingerprint(&conn).unwrap());
    }
}
