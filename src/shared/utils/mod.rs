pub mod nanoid;
pub mod password;
pub mod time;

pub use self::nanoid::{generate_short_id, is_valid_short_id, SHORT_ID_LENGTH};
pub use password::{hash_password, verify_password};
pub use time::now_timestamp;
