//! 移行器
//!
//! レジストリに登録される移行単位を定義します。
//! 記述子リストを順に適用する基本・バッチ移行器と、任意の処理を行うカスタム移行器があります。

use super::auto_migrate::auto_migrate;
use super::errors::MigrationError;
use crate::models::schema::EntityDescriptor;
use rusqlite::Connection;

/// 移行器トレイト
///
/// `migrate` は冪等でなければならず、データを破壊してはならない。
pub trait Migrator: Send + Sync {
    /// 移行器名を取得
    fn name(&self) -> &str;

    /// 移行を実行
    ///
    /// # 引数
    /// * `conn` - データベース接続
    fn migrate(&self, conn: &Connection) -> Result<(), MigrationError>;
}

/// 記述子を順に適用する
///
/// None の枠は黙って読み飛ばす。失敗した記述子の位置でエラーを包む。
fn migrate_descriptors(
    conn: &Connection,
    descriptors: &[Option<EntityDescriptor>],
) -> Result<(), MigrationError> {
    for (index, descriptor) in descriptors.iter().enumerate() {
        let Some(descriptor) = descriptor else {
            continue;
        };
        auto_migrate(conn, descriptor).map_err(|e| e.at_model(index))?;
    }
    Ok(())
}

/// 基本移行器
///
/// 記述子ごとに自動マイグレーションを行う。トランザクションは張らない。
pub struct BasicMigrator {
    name: String,
    descriptors: Vec<Option<EntityDescriptor>>,
}

impl BasicMigrator {
    /// 新しい基本移行器を作成
    ///
    /// # 引数
    /// * `name` - 移行器名
    /// * `descriptors` - 記述子リスト（Noneは読み飛ばされる）
    pub fn new<S: Into<String>>(name: S, descriptors: Vec<Option<EntityDescriptor>>) -> Self {
        Self {
            name: name.into(),
            descriptors,
        }
    }

    /// 記述子リストから作成
    pub fn from_entities<S: Into<String>>(name: S, entities: Vec<EntityDescriptor>) -> Self {
        Self::new(name, entities.into_iter().map(Some).collect())
    }
}

impl Migrator for BasicMigrator {
    fn name(&self) -> &str {
        &self.name
    }

    fn migrate(&self, conn: &Connection) -> Result<(), MigrationError> {
        migrate_descriptors(conn, &self.descriptors)
    }
}

/// バッチ移行器
///
/// すべての記述子を1つのトランザクションで適用する。途中で失敗した場合は何も残らない。
pub struct BatchMigrator {
    name: String,
    descriptors: Vec<Option<EntityDescriptor>>,
}

impl BatchMigrator {
    /// 新しいバッチ移行器を作成
    pub fn new<S: Into<String>>(name: S, descriptors: Vec<Option<EntityDescriptor>>) -> Self {
        Self {
            name: name.into(),
            descriptors,
        }
    }

    /// 記述子リストから作成
    pub fn from_entities<S: Into<String>>(name: S, entities: Vec<EntityDescriptor>) -> Self {
        Self::new(name, entities.into_iter().map(Some).collect())
    }
}

impl Migrator for BatchMigrator {
    fn name(&self) -> &str {
        &self.name
    }

    fn migrate(&self, conn: &Connection) -> Result<(), MigrationError> {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| MigrationError::schema(&self.name, "begin_transaction", e))?;

        // 失敗時は tx のドロップでロールバックされる
        migrate_descriptors(&tx, &self.descriptors)?;

        tx.commit()
            .map_err(|e| MigrationError::schema(&self.name, "commit", e))?;

        log::debug!(
            "バッチ移行をコミットしました: {} ({}件)",
            self.name,
            self.descriptors.iter().flatten().count()
        );
        Ok(())
    }
}

/// カスタム移行処理の型
pub type MigrationProcedure = dyn Fn(&Connection) -> Result<(), MigrationError> + Send + Sync;

/// カスタム移行器
///
/// 記述子では表せないDDLなど、任意の処理を実行する。
pub struct CustomMigrator {
    name: String,
    procedure: Box<MigrationProcedure>,
}

impl CustomMigrator {
    /// 新しいカスタム移行器を作成
    ///
    /// # 引数
    /// * `name` - 移行器名
    /// * `procedure` - 接続に対して実行する処理
    pub fn new<S, F>(name: S, procedure: F) -> Self
    where
        S: Into<String>,
        F: Fn(&Connection) -> Result<(), MigrationError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            procedure: Box::new(procedure),
        }
    }
}

impl Migrator for CustomMigrator {
    fn name(&self) -> &str {
        &self.name
    }

    fn migrate(&self, conn: &Connection) -> Result<(), MigrationError> {
        (self.procedure)(conn)
    }
}

/// user.created_at にインデックスを張るカスタム移行器
pub fn user_created_at_index_migrator() -> CustomMigrator {
    CustomMigrator::new("user_created_at_index", |conn| {
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS \"idx_user_created_at\" ON \"user\" (\"created_at\")",
        )
        .map_err(|e| MigrationError::schema("user", "create_index", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog;
    use crate::models::schema::{ColumnDef, ColumnType};
    use crate::shared::database::{open_in_memory, table_exists};

    fn broken_descriptor() -> EntityDescriptor {
        EntityDescriptor::new("broken", "")
            .column(ColumnDef::new("name", ColumnType::Text))
            .column(ColumnDef::new("name", ColumnType::Text))
    }

    #[test]
    fn test_basic_migrator_skips_none() {
        let conn = open_in_memory().unwrap();
        let migrator = BasicMigrator::new("content", vec![None, Some(catalog::tag()), None]);

        migrator.migrate(&conn).unwrap();

        assert_eq!(migrator.name(), "content");
        assert!(table_exists(&conn, "tag").unwrap());
    }

    #[test]
    fn test_basic_migrator_reports_index() {
        let conn = open_in_memory().unwrap();
        let migrator = BasicMigrator::new(
            "content",
            vec![Some(catalog::tag()), None, Some(broken_descriptor())],
        );

        let error = migrator.migrate(&conn).unwrap_err();
        assert_eq!(error.model_index(), Some(2));

        // トランザクションなしのため先行分は残る
        assert!(table_exists(&conn, "tag").unwrap());
    }

    #[test]
    fn test_batch_migrator_rolls_back() {
        let conn = open_in_memory().unwrap();
        let migrator = BatchMigrator::new(
            "rbac",
            vec![Some(catalog::admin()), Some(broken_descriptor())],
        );

        let error = migrator.migrate(&conn).unwrap_err();
        assert_eq!(error.model_index(), Some(1));
        assert!(!table_exists(&conn, "admin").unwrap());
        assert!(!table_exists(&conn, "admin_roles").unwrap());
    }

    #[test]
    fn test_batch_migrator_commits() {
        let conn = open_in_memory().unwrap();
        let migrator = BatchMigrator::from_entities("rbac", catalog::rbac_entities());

        migrator.migrate(&conn).unwrap();

        for table in ["admin", "role", "menu", "api", "admin_roles", "role_menus"] {
            assert!(table_exists(&conn, table).unwrap(), "{table}");
        }
    }

    #[test]
    fn test_custom_migrator() {
        let conn = open_in_memory().unwrap();
        BasicMigrator::from_entities("business", vec![catalog::user()])
            .migrate(&conn)
            .unwrap();

        let migrator = user_created_at_index_migrator();
        migrator.migrate(&conn).unwrap();
        migrator.migrate(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'idx_user_created_at'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_custom_migrator_error() {
        let conn = open_in_memory().unwrap();
        let migrator = CustomMigrator::new("failing", |_| Err(MigrationError::custom("boom")));

        let error = migrator.migrate(&conn).unwrap_err();
        assert_eq!(error, MigrationError::custom("boom"));
    }
}
