//! 移行器の登録管理
//!
//! 登録順に移行器を実行するレジストリと、プロセス全体で共有される既定インスタンスを提供します。

use super::errors::MigrationError;
use super::migrator::{user_created_at_index_migrator, BasicMigrator, BatchMigrator, Migrator};
use crate::models::catalog;
use crate::shared::database::ensure_writable;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// 移行器の登録管理
///
/// 登録順を保持し、`run_all` の開始後は登録を受け付けない。
pub struct MigrationRegistry {
    /// 登録された移行器
    migrators: Vec<Box<dyn Migrator>>,
    /// 名前によるインデックス
    name_index: HashMap<String, usize>,
    /// run_all が一度でも開始されたか
    sealed: AtomicBool,
}

impl MigrationRegistry {
    /// 新しいレジストリを作成
    pub fn new() -> Self {
        Self {
            migrators: Vec::new(),
            name_index: HashMap::new(),
            sealed: AtomicBool::new(false),
        }
    }

    /// 移行器を登録
    ///
    /// # 引数
    /// * `migrator` - 移行器
    ///
    /// # 戻り値
    /// 成功時はOk(())、名前が空・重複、または実行開始後の場合はエラー
    pub fn register(&mut self, migrator: Box<dyn Migrator>) -> Result<(), MigrationError> {
        if self.is_sealed() {
            return Err(MigrationError::Registry {
                message: format!(
                    "実行開始後のため移行器 '{}' を登録できません",
                    migrator.name()
                ),
            });
        }

        let name = migrator.name().to_string();
        if name.trim().is_empty() {
            return Err(MigrationError::Registry {
                message: "移行器名が空です".to_string(),
            });
        }

        if self.name_index.contains_key(&name) {
            return Err(MigrationError::Registry {
                message: format!("移行器名 '{name}' は既に登録されています"),
            });
        }

        let index = self.migrators.len();
        self.name_index.insert(name, index);
        self.migrators.push(migrator);

        Ok(())
    }

    /// 移行器を登録（Noneは警告を出して無視する）
    pub fn register_optional(
        &mut self,
        migrator: Option<Box<dyn Migrator>>,
    ) -> Result<(), MigrationError> {
        match migrator {
            Some(migrator) => self.register(migrator),
            None => {
                log::warn!("空の移行器が登録されようとしたため無視しました");
                Ok(())
            }
        }
    }

    /// 登録順にすべての移行器を実行
    ///
    /// # 引数
    /// * `conn` - データベース接続
    ///
    /// # 戻り値
    /// 成功時はOk(())、最初に失敗した移行器のエラー（移行器名で包まれる）
    ///
    /// # 処理内容
    /// 1. レジストリを封印する
    /// 2. 接続が書き込み可能かを確認する（作業開始前）
    /// 3. 登録順に実行し、最初の失敗で停止する
    pub fn run_all(&self, conn: &Connection) -> Result<(), MigrationError> {
        self.sealed.store(true, Ordering::SeqCst);

        ensure_writable(conn).map_err(|e| MigrationError::configuration(e.to_string()))?;

        for migrator in &self.migrators {
            log::info!("マイグレーションを開始します: {}", migrator.name());

            if let Err(e) = migrator.migrate(conn) {
                let error = e.in_migrator(migrator.name());
                error.log();
                return Err(error);
            }

            log::info!("マイグレーション {} が正常に完了しました", migrator.name());
        }

        Ok(())
    }

    /// 移行器を名前で検索
    pub fn find(&self, name: &str) -> Option<&dyn Migrator> {
        self.name_index
            .get(name)
            .and_then(|&index| self.migrators.get(index))
            .map(|m| m.as_ref())
    }

    /// 登録順の移行器名一覧を取得
    pub fn names(&self) -> Vec<String> {
        self.migrators.iter().map(|m| m.name().to_string()).collect()
    }

    /// 登録されている移行器数を取得
    pub fn len(&self) -> usize {
        self.migrators.len()
    }

    /// レジストリが空かチェック
    pub fn is_empty(&self) -> bool {
        self.migrators.is_empty()
    }

    /// 封印済みかどうか
    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::SeqCst)
    }
}

impl Default for MigrationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// 既定の移行器を登録したレジストリを作成
///
/// # 登録順
/// 1. rbac（バッチ: admin, role, menu, api）
/// 2. content
/// 3. business
/// 4. operation
/// 5. store（バッチ）
/// 6. system
/// 7. user_created_at_index（カスタム）
pub fn default_migration_registry() -> Result<MigrationRegistry, MigrationError> {
    let mut registry = MigrationRegistry::new();

    registry.register(Box::new(BatchMigrator::from_entities(
        "rbac",
        catalog::rbac_entities(),
    )))?;
    registry.register(Box::new(BasicMigrator::from_entities(
        "content",
        catalog::content_entities(),
    )))?;
    registry.register(Box::new(BasicMigrator::from_entities(
        "business",
        catalog::business_entities(),
    )))?;
    registry.register(Box::new(BasicMigrator::from_entities(
        "operation",
        catalog::operation_entities(),
    )))?;
    registry.register(Box::new(BatchMigrator::from_entities(
        "store",
        catalog::store_entities(),
    )))?;
    registry.register(Box::new(BasicMigrator::from_entities(
        "system",
        catalog::system_entities(),
    )))?;
    registry.register(Box::new(user_created_at_index_migrator()))?;

    Ok(registry)
}

/// プロセス全体で共有される移行レジストリ
static GLOBAL_MIGRATION_REGISTRY: Lazy<Arc<Mutex<MigrationRegistry>>> =
    Lazy::new(|| Arc::new(Mutex::new(MigrationRegistry::new())));

/// 共有レジストリへの参照を取得
pub fn global_migration_registry() -> Arc<Mutex<MigrationRegistry>> {
    Arc::clone(&GLOBAL_MIGRATION_REGISTRY)
}

/// 共有レジストリに移行器を登録する
pub fn register_migration(migrator: Box<dyn Migrator>) -> Result<(), MigrationError> {
    let mut registry = GLOBAL_MIGRATION_REGISTRY
        .lock()
        .map_err(|e| MigrationError::Registry {
            message: format!("レジストリのロック取得に失敗: {e}"),
        })?;
    registry.register(migrator)
}

/// 共有レジストリの移行器をすべて実行する
pub fn run_migrations(conn: &Connection) -> Result<(), MigrationError> {
    let registry = GLOBAL_MIGRATION_REGISTRY
        .lock()
        .map_err(|e| MigrationError::Registry {
            message: format!("レジストリのロック取得に失敗: {e}"),
        })?;
    registry.run_all(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::migrator::CustomMigrator;
    use crate::shared::database::open_in_memory;
    use std::sync::Mutex as StdMutex;

    fn create_test_migrator(name: &str) -> Box<dyn Migrator> {
        Box::new(CustomMigrator::new(name, |_| Ok(())))
    }

    #[test]
    fn test_register_and_find() {
        let mut registry = MigrationRegistry::new();
        assert!(registry.is_empty());

        registry.register(create_test_migrator("first")).unwrap();
        registry.register(create_test_migrator("second")).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["first", "second"]);
        assert!(registry.find("second").is_some());
        assert!(registry.find("missing").is_none());
    }

    #[test]
    fn test_register_duplicate_name() {
        let mut registry = MigrationRegistry::new();
        registry.register(create_test_migrator("rbac")).unwrap();

        let result = registry.register(create_test_migrator("rbac"));
        assert!(matches!(result, Err(MigrationError::Registry { .. })));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_empty_name() {
        let mut registry = MigrationRegistry::new();
        assert!(registry.register(create_test_migrator("  ")).is_err());
    }

    #[test]
    fn test_register_optional_none() {
        let mut registry = MigrationRegistry::new();
        registry.register_optional(None).unwrap();
        registry
            .register_optional(Some(create_test_migrator("only")))
            .unwrap();

        assert_eq!(registry.names(), vec!["only"]);
    }

    #[test]
    fn test_run_all_in_registration_order() {
        let order = Arc::new(StdMutex::new(Vec::new()));
        let mut registry = MigrationRegistry::new();

        for name in ["a", "b", "c"] {
            let order = Arc::clone(&order);
            registry
                .register(Box::new(CustomMigrator::new(name, move |_| {
                    order.lock().unwrap().push(name);
                    Ok(())
                })))
                .unwrap();
        }

        let conn = open_in_memory().unwrap();
        registry.run_all(&conn).unwrap();

        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_run_all_stops_at_first_failure() {
        let calls = Arc::new(StdMutex::new(Vec::new()));
        let mut registry = MigrationRegistry::new();

        let first_calls = Arc::clone(&calls);
        registry
            .register(Box::new(CustomMigrator::new("ok", move |_| {
                first_calls.lock().unwrap().push("ok");
                Ok(())
            })))
            .unwrap();
        registry
            .register(Box::new(CustomMigrator::new("broken", |_| {
                Err(MigrationError::custom("boom"))
            })))
            .unwrap();
        let last_calls = Arc::clone(&calls);
        registry
            .register(Box::new(CustomMigrator::new("never", move |_| {
                last_calls.lock().unwrap().push("never");
                Ok(())
            })))
            .unwrap();

        let conn = open_in_memory().unwrap();
        let error = registry.run_all(&conn).unwrap_err();

        assert_eq!(error.migrator_name(), Some("broken"));
        assert!(error.to_string().contains("boom"));
        assert_eq!(*calls.lock().unwrap(), vec!["ok"]);
    }

    #[test]
    fn test_registry_is_sealed_after_run() {
        let mut registry = MigrationRegistry::new();
        let conn = open_in_memory().unwrap();

        registry.run_all(&conn).unwrap();
        assert!(registry.is_sealed());

        let result = registry.register(create_test_migrator("late"));
        assert!(matches!(result, Err(MigrationError::Registry { .. })));
    }

    #[test]
    fn test_default_migration_registry_order() {
        let registry = default_migration_registry().unwrap();
        assert_eq!(
            registry.names(),
            vec![
                "rbac",
                "content",
                "business",
                "operation",
                "store",
                "system",
                "user_created_at_index"
            ]
        );
    }

    #[test]
    fn test_global_registry() {
        register_migration(create_test_migrator("global_noop")).unwrap();

        let registry = global_migration_registry();
        let names = registry.lock().unwrap().names();
        assert!(names.contains(&"global_noop".to_string()));

        let conn = open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
    }
}
