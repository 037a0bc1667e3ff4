pub mod connection;

pub use connection::{
    column_names, ensure_writable, open_database, open_in_memory, open_read_only,
    schema_fingerprint, table_exists,
};
