use chrono::Utc;
use chrono_tz::Asia::Shanghai;

/// 現在時刻をRFC 3339形式で取得する（Asia/Shanghai）
pub fn now_timestamp() -> String {
    Utc::now().with_timezone(&Shanghai).to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_timestamp_format() {
        let ts = now_timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        assert!(ts.ends_with("+08:00"));
    }
}
