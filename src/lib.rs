//! gotribe管理コンソールのデータベース初期化
//!
//! エンティティ定義からスキーマを構築し、管理コンソールの起動に必要な
//! 初期データ（ロール、管理者、メニューなど）を冪等に投入します。

pub mod features;
pub mod models;
pub mod shared;

use log::{error, info};
use shared::config::{initialize_logging_system, load_environment_variables, EnvironmentConfig};
use shared::errors::{AppError, AppResult};

/// 環境設定を読み込み、データベースを初期化する
///
/// # 処理内容
/// 1. .envファイルを読み込む
/// 2. ログシステムを初期化
/// 3. 設定を検証
/// 4. データベースを開いて移行と初期データ投入を実行
pub fn run() -> AppResult<()> {
    load_environment_variables();

    let config = EnvironmentConfig::from_env();
    initialize_logging_system(&config);

    info!("初期化を開始します（環境: {}）", config.environment);

    config.validate().map_err(AppError::Configuration)?;

    features::initialize_database(&config).map_err(|e| {
        error!("データベースの初期化に失敗しました: {}", e.details());
        e
    })?;

    info!("初期化が完了しました");
    Ok(())
}
