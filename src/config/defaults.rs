pub const DEFAULT_RUST_LOG: &str = "info";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_MIN_IDLE: u32 = 2;
