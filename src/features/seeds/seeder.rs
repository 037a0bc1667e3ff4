use super::errors::SeedError;
use rusqlite::Connection;

/// シーダートレイト
///
/// 初期データを投入する単位。繰り返し実行しても既存行を変更しない。
pub trait Seeder: Send + Sync {
    /// シーダー名を取得
    fn name(&self) -> &str;

    /// 初期データを投入
    ///
    /// # 引数
    /// * `conn` - データベース接続
    fn run(&self, conn: &Connection) -> Result<(), SeedError>;
}
