use crate::shared::errors::AppResult;

/// 平文パスワードをbcryptでハッシュ化する
///
/// # 引数
/// * `plain` - 平文パスワード
///
/// # 戻り値
/// bcryptハッシュ文字列、または失敗時はエラー
pub fn hash_password(plain: &str) -> AppResult<String> {
    Ok(bcrypt::hash(plain, bcrypt::DEFAULT_COST)?)
}

/// 平文パスワードとハッシュを照合する
///
/// # 引数
/// * `plain` - 平文パスワード
/// * `hashed` - 保存済みのbcryptハッシュ
pub fn verify_password(plain: &str, hashed: &str) -> AppResult<bool> {
    Ok(bcrypt::verify(plain, hashed)?)
}
