//! Process-level configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GeoSqlError, Result};

/// EPSG:4326, WGS 84 longitude/latitude.
pub const DEFAULT_SRID: i32 = 4326;

/// Environment variable read by [`SpatialConfig::from_env`].
pub const SRID_ENV_VAR: &str = "GEO_SQL_SRID";

/// Settings shared by every geometry column of a schema.
///
/// Build this once during start-up and hand it to the consumers that need it (for example
/// [`SchemaTypeResolver::new`](crate::SchemaTypeResolver::new)). It is never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialConfig {
    /// Spatial reference identifier declared on geometry columns.
    pub srid: i32,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self { srid: DEFAULT_SRID }
    }
}

impl SpatialConfig {
    pub fn new(srid: i32) -> Self {
        Self { srid }
    }

    /// Read the configuration from the environment, falling back to the defaults for anything
    /// that is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(SRID_ENV_VAR) {
            Ok(raw) => Self::parse_srid(&raw).map(Self::new),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(err) => Err(GeoSqlError::InvalidConfig(format!("{SRID_ENV_VAR}: {err}"))),
        }
    }

    fn parse_srid(raw: &str) -> Result<i32> {
        let srid: i32 = raw.trim().parse().map_err(|err| {
            GeoSqlError::InvalidConfig(format!("{SRID_ENV_VAR}={raw:?} is not an integer: {err}"))
        })?;
        if srid < 0 {
            return Err(GeoSqlError::InvalidConfig(format!(
                "{SRID_ENV_VAR} must not be negative, got {srid}"
            )));
        }
        Ok(srid)
    }
}
