//! スキーマ移行のエラー型
//!
//! 移行器名と記述子の位置を保ったままエラーを包み、
//! 最終的なメッセージから失敗箇所を特定できるようにします。

use crate::shared::errors::{AppError, ErrorSeverity};
use log::error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// スキーマ移行のエラー型
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum MigrationError {
    /// 接続が使用できないなど、作業開始前の設定エラー
    #[error("設定エラー: {message}")]
    Configuration { message: String },

    /// 記述子の検証エラー
    #[error("スキーマ定義エラー: table={table}: {message}")]
    InvalidDescriptor { table: String, message: String },

    /// DDLの実行エラー
    #[error("スキーマ操作エラー: table={table}, operation={operation}: {message}")]
    Schema {
        table: String,
        operation: String,
        message: String,
    },

    /// 記述子リスト内のモデルの失敗
    #[error("モデル{index}の移行に失敗しました: {cause}")]
    Model {
        index: usize,
        cause: Box<MigrationError>,
    },

    /// 移行器の失敗
    #[error("マイグレーション {name} が失敗しました: {cause}")]
    Migrator {
        name: String,
        cause: Box<MigrationError>,
    },

    /// 任意処理の失敗
    #[error("カスタム処理エラー: {message}")]
    Custom { message: String },

    /// レジストリ操作のエラー
    #[error("レジストリエラー: {message}")]
    Registry { message: String },
}

impl MigrationError {
    /// DDL実行エラーを作成
    ///
    /// # 引数
    /// * `table` - 対象テーブル
    /// * `operation` - 実行していた操作
    /// * `error` - アダプタのエラー
    pub fn schema<S: Into<String>>(table: S, operation: &str, error: rusqlite::Error) -> Self {
        MigrationError::Schema {
            table: table.into(),
            operation: operation.to_string(),
            message: error.to_string(),
        }
    }

    /// 任意処理エラーを作成
    pub fn custom<S: Into<String>>(message: S) -> Self {
        MigrationError::Custom {
            message: message.into(),
        }
    }

    /// 設定エラーを作成
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        MigrationError::Configuration {
            message: message.into(),
        }
    }

    /// 移行器名で包む
    pub fn in_migrator<S: Into<String>>(self, name: S) -> Self {
        MigrationError::Migrator {
            name: name.into(),
            cause: Box::new(self),
        }
    }

    /// 記述子の位置で包む
    pub fn at_model(self, index: usize) -> Self {
        MigrationError::Model {
            index,
            cause: Box::new(self),
        }
    }

    /// 包まれた最も内側のエラー
    pub fn root_cause(&self) -> &MigrationError {
        match self {
            MigrationError::Model { cause, .. } | MigrationError::Migrator { cause, .. } => {
                cause.root_cause()
            }
            other => other,
        }
    }

    /// 失敗した移行器名
    pub fn migrator_name(&self) -> Option<&str> {
        match self {
            MigrationError::Migrator { name, .. } => Some(name),
            _ => None,
        }
    }

    /// 失敗した記述子の位置
    pub fn model_index(&self) -> Option<usize> {
        match self {
            MigrationError::Model { index, .. } => Some(*index),
            MigrationError::Migrator { cause, .. } => cause.model_index(),
            _ => None,
        }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MigrationError::Model { cause, .. } | MigrationError::Migrator { cause, .. } => {
                cause.severity()
            }
            MigrationError::Configuration { .. } => ErrorSeverity::Critical,
            MigrationError::InvalidDescriptor { .. } => ErrorSeverity::High,
            MigrationError::Schema { .. } => ErrorSeverity::High,
            MigrationError::Custom { .. } => ErrorSeverity::High,
            MigrationError::Registry { .. } => ErrorSeverity::Medium,
        }
    }

    /// エラーカテゴリを取得
    pub fn category(&self) -> &'static str {
        match self {
            MigrationError::Model { cause, .. } | MigrationError::Migrator { cause, .. } => {
                cause.category()
            }
            MigrationError::Configuration { .. } => "configuration",
            MigrationError::InvalidDescriptor { .. } => "validation",
            MigrationError::Schema { .. } => "schema",
            MigrationError::Custom { .. } => "custom",
            MigrationError::Registry { .. } => "registry",
        }
    }

    /// エラーコードを取得
    pub fn error_code(&self) -> String {
        match self {
            MigrationError::Model { cause, .. } | MigrationError::Migrator { cause, .. } => {
                cause.error_code()
            }
            MigrationError::Configuration { .. } => "MIG_CONFIG".to_string(),
            MigrationError::InvalidDescriptor { .. } => "MIG_DESCRIPTOR".to_string(),
            MigrationError::Schema { .. } => "MIG_SCHEMA".to_string(),
            MigrationError::Custom { .. } => "MIG_CUSTOM".to_string(),
            MigrationError::Registry { .. } => "MIG_REGISTRY".to_string(),
        }
    }

    /// 運用者向けメッセージを取得
    pub fn user_message(&self) -> String {
        match self.root_cause() {
            MigrationError::Configuration { .. } => {
                "データベース接続の設定にエラーがあります。設定を確認してください。".to_string()
            }
            MigrationError::InvalidDescriptor { .. } => {
                "エンティティ定義が不正です。".to_string()
            }
            MigrationError::Registry { .. } => "移行器の登録に失敗しました。".to_string(),
            _ => "データベーススキーマの移行でエラーが発生しました。".to_string(),
        }
    }

    /// 構造化ログ用のメタデータを取得
    pub fn log_metadata(&self) -> serde_json::Value {
        let mut metadata = serde_json::json!({
            "error_code": self.error_code(),
            "category": self.category(),
            "message": self.to_string(),
        });

        if let Some(name) = self.migrator_name() {
            metadata["migrator"] = serde_json::json!(name);
        }
        if let Some(index) = self.model_index() {
            metadata["model_index"] = serde_json::json!(index);
        }
        match self.root_cause() {
            MigrationError::InvalidDescriptor { table, .. } => {
                metadata["table"] = serde_json::json!(table);
            }
            MigrationError::Schema {
                table, operation, ..
            } => {
                metadata["table"] = serde_json::json!(table);
                metadata["operation"] = serde_json::json!(operation);
            }
            _ => {}
        }

        metadata
    }

    /// エラーをログに記録
    pub fn log(&self) {
        error!(
            "Migration Error [{}]: {} | Metadata: {}",
            self.error_code(),
            self,
            self.log_metadata()
        );
    }
}

/// MigrationErrorからAppErrorへの変換
impl From<MigrationError> for AppError {
    fn from(error: MigrationError) -> Self {
        match error.root_cause() {
            MigrationError::Configuration { .. } => AppError::Configuration(error.to_string()),
            _ => AppError::Migration(error.to_string()),
        }
    }
}
