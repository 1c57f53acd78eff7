//! Environment source: MERKLE_COMMIT__<SECTION>__<KEY>

use config::Environment;

pub const ENV_PREFIX: &str = "MERKLE_COMMIT";

/// Environment source reading the process environment
pub fn source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
