//! 初期データ投入のエラー型

use crate::shared::errors::{AppError, ErrorSeverity};
use log::error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 初期データ投入のエラー型
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeedError {
    /// 接続が使用できないなど、作業開始前の設定エラー
    #[error("設定エラー: {message}")]
    Configuration { message: String },

    /// 前提となる行が存在しない、または取得に失敗した
    #[error("依存データエラー: {dependency} を取得できません: {message}")]
    Dependency { dependency: String, message: String },

    /// 主キーでの存在確認に失敗した
    #[error("存在確認エラー: table={table}, id={id}: {message}")]
    Lookup {
        table: String,
        id: i64,
        message: String,
    },

    /// 行の挿入に失敗した
    #[error("挿入エラー: table={table}, id={id}: {message}")]
    Insertion {
        table: String,
        id: i64,
        message: String,
    },

    /// 作成前フックの失敗
    #[error("作成前処理エラー: table={table}: {message}")]
    Hook { table: String, message: String },

    /// シーダーの失敗
    #[error("シード {name} が失敗しました: {cause}")]
    Seeder { name: String, cause: Box<SeedError> },

    /// レジストリ操作のエラー
    #[error("レジストリエラー: {message}")]
    Registry { message: String },
}

impl SeedError {
    /// 依存データエラーを作成
    ///
    /// # 引数
    /// * `dependency` - 前提となるデータの説明（例: "role#1"）
    /// * `error` - アダプタのエラー
    pub fn dependency<S: Into<String>>(dependency: S, error: rusqlite::Error) -> Self {
        SeedError::Dependency {
            dependency: dependency.into(),
            message: error.to_string(),
        }
    }

    /// シーダー名で包む
    pub fn in_seeder<S: Into<String>>(self, name: S) -> Self {
        SeedError::Seeder {
            name: name.into(),
            cause: Box::new(self),
        }
    }

    /// 包まれた最も内側のエラー
    pub fn root_cause(&self) -> &SeedError {
        match self {
            SeedError::Seeder { cause, .. } => cause.root_cause(),
            other => other,
        }
    }

    /// 失敗したシーダー名
    pub fn seeder_name(&self) -> Option<&str> {
        match self {
            SeedError::Seeder { name, .. } => Some(name),
            _ => None,
        }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SeedError::Seeder { cause, .. } => cause.severity(),
            SeedError::Configuration { .. } => ErrorSeverity::Critical,
            SeedError::Dependency { .. } => ErrorSeverity::High,
            SeedError::Lookup { .. } => ErrorSeverity::High,
            SeedError::Insertion { .. } => ErrorSeverity::High,
            SeedError::Hook { .. } => ErrorSeverity::High,
            SeedError::Registry { .. } => ErrorSeverity::Medium,
        }
    }

    /// エラーカテゴリを取得
    pub fn category(&self) -> &'static str {
        match self {
            SeedError::Seeder { cause, .. } => cause.category(),
            SeedError::Configuration { .. } => "configuration",
            SeedError::Dependency { .. } => "dependency",
            SeedError::Lookup { .. } => "lookup",
            SeedError::Insertion { .. } => "insertion",
            SeedError::Hook { .. } => "hook",
            SeedError::Registry { .. } => "registry",
        }
    }

    /// エラーコードを取得
    pub fn error_code(&self) -> String {
        match self {
            SeedError::Seeder { cause, .. } => cause.error_code(),
            SeedError::Configuration { .. } => "SEED_CONFIG".to_string(),
            SeedError::Dependency { .. } => "SEED_DEPENDENCY".to_string(),
            SeedError::Lookup { .. } => "SEED_LOOKUP".to_string(),
            SeedError::Insertion { .. } => "SEED_INSERT".to_string(),
            SeedError::Hook { .. } => "SEED_HOOK".to_string(),
            SeedError::Registry { .. } => "SEED_REGISTRY".to_string(),
        }
    }

    /// 構造化ログ用のメタデータを取得
    pub fn log_metadata(&self) -> serde_json::Value {
        let mut metadata = serde_json::json!({
            "error_code": self.error_code(),
            "category": self.category(),
            "message": self.to_string(),
        });

        if let Some(name) = self.seeder_name() {
            metadata["seeder"] = serde_json::json!(name);
        }
        match self.root_cause() {
            SeedError::Lookup { table, id, .. } | SeedError::Insertion { table, id, .. } => {
                metadata["table"] = serde_json::json!(table);
                metadata["id"] = serde_json::json!(id);
            }
            SeedError::Hook { table, .. } => {
                metadata["table"] = serde_json::json!(table);
            }
            SeedError::Dependency { dependency, .. } => {
                metadata["dependency"] = serde_json::json!(dependency);
            }
            _ => {}
        }

        metadata
    }

    /// エラーをログに記録
    pub fn log(&self) {
        error!(
            "Seed Error [{}]: {} | Metadata: {}",
            self.error_code(),
            self,
            self.log_metadata()
        );
    }
}

/// SeedErrorからAppErrorへの変換
impl From<SeedError> for AppError {
    fn from(error: SeedError) -> Self {
        match error.root_cause() {
            SeedError::Configuration { .. } => AppError::Configuration(error.to_string()),
            _ => AppError::Seed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_error_message() {
        let error =
            SeedError::dependency("role#1", rusqlite::Error::QueryReturnedNoRows).in_seeder("admin");
        let message = error.to_string();

        assert!(message.contains("admin"));
        assert!(message.contains("role#1"));
        assert_eq!(error.category(), "dependency");
        assert_eq!(error.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_wrapped_error_reports_inner_classification() {
        let error = SeedError::Configuration {
            message: "read-only".to_string(),
        }
        .in_seeder("role");

        assert_eq!(error.severity(), ErrorSeverity::Critical);
        assert_eq!(error.category(), "configuration");
        assert_eq!(error.error_code(), "SEED_CONFIG");

        let error = SeedError::Hook {
            table: "admin".to_string(),
            message: "cost".to_string(),
        }
        .in_seeder("admin");
        assert_eq!(error.category(), "hook");
        assert_eq!(error.error_code(), "SEED_HOOK");
    }

    #[test]
    fn test_seed_error_log_metadata() {
        let error = SeedError::Insertion {
            table: "menu".to_string(),
            id: 12,
            message: "UNIQUE constraint failed".to_string(),
        }
        .in_seeder("menu");
        let metadata = error.log_metadata();

        assert_eq!(metadata["error_code"], "SEED_INSERT");
        assert_eq!(metadata["seeder"], "menu");
        assert_eq!(metadata["table"], "menu");
        assert_eq!(metadata["id"], 12);
    }

    #[test]
    fn test_seed_error_conversion() {
        let app_error: AppError = SeedError::Configuration {
            message: "read-only".to_string(),
        }
        .into();
        assert!(matches!(app_error, AppError::Configuration(_)));

        let app_error: AppError = SeedError::Registry {
            message: "sealed".to_string(),
        }
        .into();
        assert!(matches!(app_error, AppError::Seed(_)));
    }
}
