//! シーダーの登録管理

use super::admin::AdminSeeder;
use super::api::ApiSeeder;
use super::content::{CategorySeeder, PostSeeder, TagSeeder};
use super::errors::SeedError;
use super::menu::MenuSeeder;
use super::project::ProjectSeeder;
use super::role::RoleSeeder;
use super::seeder::Seeder;
use super::system_config::SystemConfigSeeder;
use super::user::UserSeeder;
use crate::shared::database::ensure_writable;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// シーダーの登録管理
///
/// 登録順に実行する。依存関係の解決は行わないため、前提となるシーダーを先に登録すること。
pub struct SeedRegistry {
    seeders: Vec<Box<dyn Seeder>>,
    name_index: HashMap<String, usize>,
    sealed: AtomicBool,
}

impl SeedRegistry {
    /// 新しいレジストリを作成
    pub fn new() -> Self {
        Self {
            seeders: Vec::new(),
            name_index: HashMap::new(),
            sealed: AtomicBool::new(false),
        }
    }

    /// シーダーを登録
    ///
    /// # 戻り値
    /// 成功時はOk(())、名前が空・重複、または実行開始後の場合はエラー
    pub fn register(&mut self, seeder: Box<dyn Seeder>) -> Result<(), SeedError> {
        if self.is_sealed() {
            return Err(SeedError::Registry {
                message: format!(
                    "実行開始後のためシーダー '{}' を登録できません",
                    seeder.name()
                ),
            });
        }

        let name = seeder.name().to_string();
        if name.trim().is_empty() {
            return Err(SeedError::Registry {
                message: "シーダー名が空です".to_string(),
            });
        }
        if self.name_index.contains_key(&name) {
            return Err(SeedError::Registry {
                message: format!("シーダー名 '{name}' は既に登録されています"),
            });
        }

        self.name_index.insert(name, self.seeders.len());
        self.seeders.push(seeder);
        Ok(())
    }

    /// シーダーを登録（Noneは警告を出して無視する）
    pub fn register_optional(&mut self, seeder: Option<Box<dyn Seeder>>) -> Result<(), SeedError> {
        match seeder {
            Some(seeder) => self.register(seeder),
            None => {
                log::warn!("空のシーダーが登録されようとしたため無視しました");
                Ok(())
            }
        }
    }

    /// 登録順にすべてのシーダーを実行
    ///
    /// # 引数
    /// * `conn` - データベース接続
    ///
    /// # 戻り値
    /// 成功時はOk(())、最初に失敗したシーダーのエラー（シーダー名で包まれる）
    ///
    /// # 処理内容
    /// 1. レジストリを封印する
    /// 2. 接続が書き込み可能かを確認する
    /// 3. 登録順に実行し、最初の失敗で停止する（それまでの挿入は残る）
    pub fn run_all(&self, conn: &Connection) -> Result<(), SeedError> {
        self.sealed.store(true, Ordering::SeqCst);

        ensure_writable(conn).map_err(|e| SeedError::Configuration {
            message: e.to_string(),
        })?;

        for seeder in &self.seeders {
            log::info!("シードを開始します: {}", seeder.name());

            if let Err(e) = seeder.run(conn) {
                let error = e.in_seeder(seeder.name());
                error.log();
                return Err(error);
            }

            log::info!("シード {} が正常に完了しました", seeder.name());
        }

        Ok(())
    }

    /// 登録順のシーダー名一覧を取得
    pub fn names(&self) -> Vec<String> {
        self.seeders.iter().map(|s| s.name().to_string()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.seeders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeders.is_empty()
    }

    /// 封印済みかどうか
    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::SeqCst)
    }
}

impl Default for SeedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// 既定のシーダーを依存順に登録したレジストリを作成
///
/// role → admin → menu → api → category → tag → project → user → post → system_config
pub fn default_seed_registry() -> Result<SeedRegistry, SeedError> {
    let mut registry = SeedRegistry::new();
    let seeders: Vec<Box<dyn Seeder>> = vec![
        Box::new(RoleSeeder),
        Box::new(AdminSeeder),
        Box::new(MenuSeeder),
        Box::new(ApiSeeder),
        Box::new(CategorySeeder),
        Box::new(TagSeeder),
        Box::new(ProjectSeeder),
        Box::new(UserSeeder),
        Box::new(PostSeeder),
        Box::new(SystemConfigSeeder),
    ];
    for seeder in seeders {
        registry.register(seeder)?;
    }
    Ok(registry)
}

static GLOBAL_SEED_REGISTRY: Lazy<Arc<Mutex<SeedRegistry>>> =
    Lazy::new(|| Arc::new(Mutex::new(SeedRegistry::new())));

/// 共有レジストリへの参照を取得
pub fn global_seed_registry() -> Arc<Mutex<SeedRegistry>> {
    Arc::clone(&GLOBAL_SEED_REGISTRY)
}

/// 共有レジストリにシーダーを登録する
pub fn register_seeder(seeder: Box<dyn Seeder>) -> Result<(), SeedError> {
    let mut registry = GLOBAL_SEED_REGISTRY
        .lock()
        .map_err(|e| SeedError::Registry {
            message: format!("レジストリのロック取得に失敗: {e}"),
        })?;
    registry.register(seeder)
}

/// 共有レジストリのシーダーをすべて実行する
pub fn run_seeders(conn: &Connection) -> Result<(), SeedError> {
    let registry = GLOBAL_SEED_REGISTRY
        .lock()
        .map_err(|e| SeedError::Registry {
            message: format!("レジストリのロック取得に失敗: {e}"),
        })?;
    registry.run_all(conn)
}
