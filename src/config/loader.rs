//! Pay policy loading from YAML.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayPolicy;

/// Loads the pay policy from a YAML file.
///
/// Fields absent from the file take the documented defaults, so a partial
/// file overriding a single constant is valid.
///
/// # Errors
///
/// Returns [`EngineError::ConfigNotFound`] when the file cannot be read and
/// [`EngineError::ConfigParseError`] when it is not valid YAML for a policy.
///
/// # Example
///
/// ```no_run
/// use timeclock_engine::config::load_policy;
///
/// let policy = load_policy("./config/policy.yaml")?;
/// # Ok::<(), timeclock_engine::error::EngineError>(())
/// ```
pub fn load_policy<P: AsRef<Path>>(path: P) -> EngineResult<PayPolicy> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
