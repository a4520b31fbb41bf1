//! Provider constants

// ============================================================================
// KEY-VALUE PROVIDER CONSTANTS
// ============================================================================

/// Default maximum number of entries held by the in-memory store
pub const MOKA_DEFAULT_MAX_CAPACITY: u64 = 100_000;

/// Replace the value under an existing key, keeping its TTL.
///
/// Returns the previous value, or nil without writing when the key is absent.
pub const REDIS_GET_AND_REPLACE_SCRIPT: &str = r"
local prev = redis.call('GET', KEYS[1])
if prev then
  redis.call('SET', KEYS[1], ARGV[1], 'KEEPTTL')
end
return prev
";
