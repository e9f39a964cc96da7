// src/config/consts.rs

// Sources
pub const PRIMARY_SOURCE: &str = "items.json";
pub const SECONDARY_SOURCE: &str = "items.csv";

// Net
pub const NET_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "arc_items/0.3";
pub const CACHE_BUST_PARAM: &str = "_";

// Local store (logs, config)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "arc_items.toml";

// Search
pub const QUIET_MS: u64 = 120;

// Share link
pub const SHARE_BASE: &str = "arc-items://catalog/";
pub const QUERY_PARAM: &str = "q";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_STEM: &str = "arc-raiders-items";
