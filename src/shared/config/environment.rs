use std::path::PathBuf;

/// 実行環境
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// 文字列から実行環境を判定する（"production" 以外は開発環境）
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// 読み込む.envファイル名
    pub fn env_file(&self) -> &'static str {
        match self {
            Environment::Development => ".env",
            Environment::Production => ".env.production",
        }
    }
}

/// 起動時の設定
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// "development" または "production"
    pub environment: String,
    pub debug_mode: bool,
    pub log_level: String,
    /// SQLiteファイルの場所
    pub database_path: PathBuf,
    /// 起動時にスキーマ移行を実行するか（ENABLE_MIGRATE）
    pub enable_migrate: bool,
    /// 起動時に初期データを投入するか（INIT_DATA）
    pub init_data: bool,
}

impl EnvironmentConfig {
    /// 環境変数から設定を組み立てる
    ///
    /// # 処理内容
    /// 1. 実行環境を判定
    /// 2. LOG_LEVEL（未設定なら開発環境はdebug、本番はinfo）
    /// 3. DATABASE_PATH → 埋め込み値 → 環境別の既定ファイル名の順にデータベースパスを決定
    /// 4. ENABLE_MIGRATE / INIT_DATA（既定はどちらも有効）
    pub fn from_env() -> Self {
        let environment = get_environment();
        let debug_mode = environment == Environment::Development;

        let log_level = std::env::var("LOG_LEVEL")
            .ok()
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| (if debug_mode { "debug" } else { "info" }).to_string());

        let database_path = std::env::var("DATABASE_PATH")
            .ok()
            .or_else(|| option_env!("EMBEDDED_DATABASE_PATH").map(str::to_string))
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(get_database_filename(environment)));

        Self {
            environment: environment.as_str().to_string(),
            debug_mode,
            log_level,
            database_path,
            enable_migrate: read_flag("ENABLE_MIGRATE", true),
            init_data: read_flag("INIT_DATA", true),
        }
    }

    pub fn is_production(&self) -> bool {
        Environment::parse(&self.environment) == Environment::Production
    }

    pub fn is_development(&self) -> bool {
        !self.is_production()
    }

    /// 設定値を検証する
    ///
    /// # 戻り値
    /// 問題がなければOk(())、問題がある場合はその内容
    pub fn validate(&self) -> Result<(), String> {
        if self.database_path.as_os_str().is_empty() {
            return Err("データベースパスが空です".to_string());
        }

        if self.is_production() && self.database_path.to_string_lossy() == ":memory:" {
            return Err("本番環境でインメモリデータベースは使用できません".to_string());
        }

        Ok(())
    }
}

/// 真偽値の環境変数を読み込む
///
/// `1` / `true` / `yes` / `on` を真、`0` / `false` / `no` / `off` を偽として扱い、
/// それ以外は既定値を返す。
fn read_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => parse_flag(&value).unwrap_or_else(|| {
            log::warn!("{key} の値 '{value}' を解釈できないため既定値 {default} を使用します");
            default
        }),
        Err(_) => default,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// 現在の実行環境を判定する
///
/// コンパイル時埋め込みの EMBEDDED_ENVIRONMENT、実行時の ENVIRONMENT、
/// ビルド設定（debug_assertions）の順に参照する。
pub fn get_environment() -> Environment {
    if let Some(embedded) = option_env!("EMBEDDED_ENVIRONMENT") {
        return Environment::parse(embedded);
    }

    match std::env::var("ENVIRONMENT") {
        Ok(value) => Environment::parse(&value),
        Err(_) if cfg!(debug_assertions) => Environment::Development,
        Err(_) => Environment::Production,
    }
}

/// 環境別の既定データベースファイル名
pub fn get_database_filename(env: Environment) -> &'static str {
    match env {
        Environment::Development => "dev_gotribe.db",
        Environment::Production => "gotribe.db",
    }
}

/// 実行環境に応じた.envファイルを読み込む
///
/// 本番用ファイルが無い場合は.envにフォールバックする。
/// どちらも無ければ、直接設定された環境変数だけを使う。
pub fn load_environment_variables() {
    if option_env!("EMBEDDED_ENVIRONMENT").is_some() {
        return;
    }

    let environment = std::env::var("ENVIRONMENT")
        .map(|value| Environment::parse(&value))
        .unwrap_or(Environment::Development);
    let env_file = environment.env_file();

    // ロガー初期化前に呼ばれる
    if dotenv::from_filename(env_file).is_err() && env_file != ".env" {
        let _ = dotenv::dotenv();
    }
}

fn level_filter(level: &str) -> log::LevelFilter {
    level.trim().parse().unwrap_or(log::LevelFilter::Info)
}

/// ログシステムを初期化する
///
/// 二重初期化はエラーにせず無視する。
pub fn initialize_logging_system(env_config: &EnvironmentConfig) {
    let initialized = env_logger::Builder::from_default_env()
        .filter_level(level_filter(&env_config.log_level))
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .try_init()
        .is_ok();

    if initialized {
        log::info!(
            "ログシステムを初期化しました: level={}, environment={}, database={}",
            env_config.log_level,
            env_config.environment,
            env_config.database_path.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: &str, database_path: &str) -> EnvironmentConfig {
        EnvironmentConfig {
            environment: environment.to_string(),
            debug_mode: environment == "development",
            log_level: "info".to_string(),
            database_path: PathBuf::from(database_path),
            enable_migrate: true,
            init_data: true,
        }
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse(" Production "), Environment::Production);
        assert_eq!(Environment::parse("staging"), Environment::Development);
        assert_eq!(Environment::Production.env_file(), ".env.production");
        assert_eq!(Environment::Development.as_str(), "development");
    }

    #[test]
    fn test_get_database_filename() {
        assert_eq!(
            get_database_filename(Environment::Development),
            "dev_gotribe.db"
        );
        assert_eq!(get_database_filename(Environment::Production), "gotribe.db");
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" ON "), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("No"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("debug"), log::LevelFilter::Debug);
        assert_eq!(level_filter("WARN"), log::LevelFilter::Warn);
        assert_eq!(level_filter("verbose"), log::LevelFilter::Info);
    }

    #[test]
    fn test_environment_config_from_env() {
        let config = EnvironmentConfig::from_env();

        assert!(config.environment == "development" || config.environment == "production");
        assert!(!config.log_level.is_empty());
        assert!(!config.database_path.as_os_str().is_empty());
    }

    #[test]
    fn test_environment_config_validate() {
        assert!(config("development", ":memory:").validate().is_ok());
        assert!(config("production", ":memory:").validate().is_err());
        assert!(config("production", "").validate().is_err());
        assert!(config("production", "/var/lib/gotribe/gotribe.db")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_environment_config_methods() {
        let production = config("production", "gotribe.db");
        assert!(production.is_production());
        assert!(!production.is_development());
        assert!(config("development", "dev_gotribe.db").is_development());
    }
}
