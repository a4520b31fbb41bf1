//! Infrastructure layer constants
//!
//! Deployment defaults. Rules that belong to the domain itself are defined
//! in `tollgate_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tollgate.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "tollgate";

/// Environment variable prefix for configuration (`TOLLGATE__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "TOLLGATE";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// Default JWT signing algorithm
pub const JWT_DEFAULT_ALGORITHM: &str = "HS256";

/// JWT default lifetime in seconds (15 minutes)
pub const JWT_DEFAULT_EXPIRATION_SECS: u64 = 900;

/// Shortest JWT secret accepted from configuration
pub const JWT_MIN_SECRET_LENGTH: usize = 32;

/// Session default lifetime in seconds (24 hours)
pub const SESSION_DEFAULT_TTL_SECS: u64 = 86400;

/// Upper bound on a single session store call in milliseconds
pub const SESSION_DEFAULT_OPERATION_TIMEOUT_MS: u64 = 2000;

/// Default bcrypt cost for password hashing
pub const BCRYPT_DEFAULT_COST: u32 = 12;

/// Lowest cost bcrypt accepts
pub const BCRYPT_MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const BCRYPT_MAX_COST: u32 = 31;

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default server host
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// ============================================================================
// KEY-VALUE STORE CONSTANTS
// ============================================================================

/// Default Redis host
pub const REDIS_DEFAULT_HOST: &str = "127.0.0.1";

/// Default Redis port
pub const REDIS_DEFAULT_PORT: u16 = 6379;

/// Default maximum entries for the in-memory store
pub const MOKA_DEFAULT_MAX_CAPACITY: u64 = 100_000;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "TOLLGATE_LOG";
