use thiserror::Error;

/// 起動処理全体で使用される統一エラー型
///
/// 各機能のエラー（`MigrationError`、`SeedError`）は `From` でこの型に変換される。
#[derive(Debug, Error)]
pub enum AppError {
    #[error("データベースエラー: {0}")]
    Database(String),

    /// 環境設定や接続状態の不備
    #[error("設定エラー: {0}")]
    Configuration(String),

    #[error("マイグレーションエラー: {0}")]
    Migration(String),

    #[error("シードエラー: {0}")]
    Seed(String),

    /// パスワードのハッシュ化・照合の失敗
    #[error("パスワード処理エラー: {0}")]
    Password(String),

    /// データベースディレクトリの作成など
    #[error("I/Oエラー: {0}")]
    Io(#[from] std::io::Error),
}

/// エラーの重要度を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    /// 起動を継続できない
    Critical,
}

impl AppError {
    /// 運用者向けの短いメッセージを取得
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Database(_) => "データベース操作でエラーが発生しました",
            AppError::Configuration(_) => "設定エラーが発生しました",
            AppError::Migration(_) => "スキーマの移行に失敗しました",
            AppError::Seed(_) => "初期データの投入に失敗しました",
            AppError::Password(_) => "パスワードの処理に失敗しました",
            AppError::Io(_) => "ファイル操作でエラーが発生しました",
        }
    }

    /// エラーの詳細情報を取得（ログ出力用）
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// エラーの重要度を取得
    ///
    /// 起動時にしか発生しないため、移行と投入の失敗はすべて Critical とする。
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Configuration(_) | AppError::Migration(_) | AppError::Seed(_) => {
                ErrorSeverity::Critical
            }
            AppError::Database(_) | AppError::Password(_) => ErrorSeverity::High,
            AppError::Io(_) => ErrorSeverity::Medium,
        }
    }

    /// 設定エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - 設定エラーメッセージ
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(error: rusqlite::Error) -> Self {
        AppError::Database(error.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> Self {
        AppError::Password(error.to_string())
    }
}

/// Result型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        assert_eq!(
            AppError::configuration("DATABASE_PATH").severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            AppError::Migration("rbac".to_string()).severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            AppError::Password("cost".to_string()).severity(),
            ErrorSeverity::High
        );
    }

    #[test]
    fn test_user_message_hides_details() {
        let error = AppError::Seed("menu#12: UNIQUE constraint failed".to_string());
        assert_eq!(error.user_message(), "初期データの投入に失敗しました");
        assert!(error.details().contains("menu#12"));
    }

    #[test]
    fn test_from_rusqlite_error() {
        let error: AppError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(error, AppError::Database(_)));
        assert_eq!(error.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_from_io_error() {
        let error: AppError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(error, AppError::Io(_)));
        assert_eq!(error.user_message(), "ファイル操作でエラーが発生しました");
    }
}
