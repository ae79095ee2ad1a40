//! Process-wide settings for the curve engine.
//!
//! Each engine operation takes a single snapshot of the configuration when it
//! starts, so one call never observes two different tolerances. The settings
//! are shared by every thread in the process: changing them from one thread
//! affects all later operations everywhere. They are not thread-isolated.

use parking_lot::{const_rwlock, RwLock};

use crate::error::{FuzzyError, Result};

/// Default comparison tolerance.
pub const FUZZY_TOLERANCE: f64 = 1e-8;

static GLOBAL: RwLock<Config> = const_rwlock(Config::DEFAULT);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Two coordinates closer than this are treated as equal.
    pub tolerance: f64,
    /// Decimal places used when displaying curves and intervals.
    pub precision: usize,
    /// Sub-segments each sloped segment is split into before a non-linear hedge
    /// is applied.
    pub hedge_subdivisions: usize,
    /// Number of samples used when generating curved shapes such as gaussians.
    pub shape_samples: usize,
}

impl Config {
    pub const DEFAULT: Config = Config {
        tolerance: FUZZY_TOLERANCE,
        precision: 4,
        hedge_subdivisions: 8,
        shape_samples: 21,
    };

    /// A snapshot of the current process-wide configuration.
    pub fn global() -> Config {
        *GLOBAL.read()
    }

    /// Replaces the process-wide configuration after validating it.
    pub fn set_global(config: Config) -> Result<()> {
        config.validate()?;

        *GLOBAL.write() = config;
        tracing::debug!(?config, "fuzzy configuration replaced");

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0. {
            return Err(FuzzyError::InvalidParameter {
                name: "tolerance",
                value: self.tolerance,
            });
        }
        if self.hedge_subdivisions == 0 {
            return Err(FuzzyError::InvalidParameter {
                name: "hedge subdivisions",
                value: 0.,
            });
        }
        if self.shape_samples < 3 {
            return Err(FuzzyError::InvalidParameter {
                name: "shape samples",
                value: self.shape_samples as f64,
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}

pub fn tolerance() -> f64 {
    GLOBAL.read().tolerance
}

pub fn set_tolerance(tolerance: f64) -> Result<()> {
    let mut config = GLOBAL.write();
    let updated = Config { tolerance, ..*config };

    updated.validate()?;
    *config = updated;
    tracing::debug!(tolerance, "fuzzy tolerance updated");

    Ok(())
}

pub fn precision() -> usize {
    GLOBAL.read().precision
}

pub fn set_precision(precision: usize) {
    GLOBAL.write().precision = precision;
    tracing::debug!(precision, "display precision updated");
}
