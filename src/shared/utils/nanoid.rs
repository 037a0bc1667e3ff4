use nanoid::nanoid;

/// 短縮IDの長さ
pub const SHORT_ID_LENGTH: usize = 10;

/// エンティティの短縮IDを生成する
///
/// # 戻り値
/// 10文字のURL-safeなnanoId
///
/// # 特性
/// - 文字セット: A-Za-z0-9_- (64文字)
/// - 長さ: 10文字
pub fn generate_short_id() -> String {
    nanoid!(SHORT_ID_LENGTH)
}

/// 短縮IDが有効な形式かどうかを検証する
///
/// # 引数
/// * `id` - 検証するID文字列
///
/// # 戻り値
/// 有効な場合はtrue、無効な場合はfalse
pub fn is_valid_short_id(id: &str) -> bool {
    id.len() == SHORT_ID_LENGTH
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_short_id_length() {
        let id = generate_short_id();
        assert_eq!(id.len(), SHORT_ID_LENGTH);
    }

    #[test]
    fn test_generate_short_id_uniqueness() {
        let id1 = generate_short_id();
        let id2 = generate_short_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_is_valid_short_id() {
        assert!(is_valid_short_id(&generate_short_id()));
        assert!(is_valid_short_id("0123456789"));

        // 長さが異なる
        assert!(!is_valid_short_id("245eko"));
        assert!(!is_valid_short_id("this_is_too_long"));

        // 無効な文字を含む
        assert!(!is_valid_short_id("abc@efghij"));
        assert!(!is_valid_short_id("abc defghi"));
    }
}
