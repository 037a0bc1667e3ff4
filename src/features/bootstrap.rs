//! 起動時のデータベース初期化
//!
//! スキーマ移行を実行した後に初期データを投入します。

use super::migrations::{default_migration_registry, MigrationRegistry};
use super::seeds::{default_seed_registry, SeedRegistry};
use crate::shared::config::EnvironmentConfig;
use crate::shared::database::open_database;
use crate::shared::errors::AppResult;
use rusqlite::Connection;

/// 初期化の実行結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BootstrapReport {
    /// 実行した移行器名（登録順）
    pub migrators: Vec<String>,
    /// 実行したシーダー名（登録順）
    pub seeders: Vec<String>,
}

/// 移行レジストリとシードレジストリをまとめて実行する
pub struct Bootstrap {
    migrations: MigrationRegistry,
    seeds: SeedRegistry,
    enable_migrate: bool,
    init_data: bool,
}

impl Bootstrap {
    /// レジストリを指定して作成（移行・投入ともに有効）
    pub fn new(migrations: MigrationRegistry, seeds: SeedRegistry) -> Self {
        Self {
            migrations,
            seeds,
            enable_migrate: true,
            init_data: true,
        }
    }

    /// 既定の移行器とシーダーで作成
    pub fn with_defaults() -> AppResult<Self> {
        Ok(Self::new(
            default_migration_registry()?,
            default_seed_registry()?,
        ))
    }

    /// 環境設定のフラグを反映して作成
    pub fn from_config(config: &EnvironmentConfig) -> AppResult<Self> {
        Ok(Self::with_defaults()?
            .enable_migrate(config.enable_migrate)
            .init_data(config.init_data))
    }

    pub fn enable_migrate(mut self, enabled: bool) -> Self {
        self.enable_migrate = enabled;
        self
    }

    pub fn init_data(mut self, enabled: bool) -> Self {
        self.init_data = enabled;
        self
    }

    /// 移行と初期データ投入を実行する
    ///
    /// # 引数
    /// * `conn` - データベース接続
    ///
    /// # 戻り値
    /// 実行した移行器名とシーダー名
    ///
    /// # 処理内容
    /// 1. `enable_migrate` が有効なら移行レジストリを実行
    /// 2. `init_data` が有効ならシードレジストリを実行
    ///
    /// 移行が失敗した場合は初期データ投入を行わない。
    pub fn run(&self, conn: &Connection) -> AppResult<BootstrapReport> {
        let mut report = BootstrapReport::default();

        if self.enable_migrate {
            log::info!("スキーマ移行を開始します");
            self.migrations.run_all(conn)?;
            report.migrators = self.migrations.names();
        } else {
            log::info!("ENABLE_MIGRATEが無効のためスキーマ移行をスキップします");
        }

        if self.init_data {
            log::info!("初期データ投入を開始します");
            self.seeds.run_all(conn)?;
            report.seeders = self.seeds.names();
        } else {
            log::info!("INIT_DATAが無効のため初期データ投入をスキップします");
        }

        Ok(report)
    }

    pub fn migrations(&self) -> &MigrationRegistry {
        &self.migrations
    }

    pub fn seeds(&self) -> &SeedRegistry {
        &self.seeds
    }
}

/// データベースを開いて初期化する
///
/// # 引数
/// * `config` - 環境設定
///
/// # 戻り値
/// 初期化済みのデータベース接続
pub fn initialize_database(config: &EnvironmentConfig) -> AppResult<Connection> {
    log::info!("データベースを開きます: {}", config.database_path.display());
    let conn = open_database(&config.database_path)?;

    let report = Bootstrap::from_config(config)?.run(&conn)?;
    log::info!(
        "データベースの初期化が完了しました: 移行器{}件, シーダー{}件",
        report.migrators.len(),
        report.seeders.len()
    );

    Ok(conn)
}
