//! The active working space
//!
//! A single-writer / multi-reader cell holding the space conversions run
//! against. The space is replaced wholesale, never mutated: readers hold an
//! `Arc` to a fully built space, and an ICC import is parsed completely
//! before it is published.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use super::working::WorkingColorSpace;
use crate::error::Result;
use crate::options::EngineOptions;

/// Published working color space with a fallback default
#[derive(Debug)]
pub struct ActiveSpace {
    current: RwLock<Arc<WorkingColorSpace>>,
    default: Arc<WorkingColorSpace>,
}

impl Default for ActiveSpace {
    fn default() -> Self {
        Self::new(WorkingColorSpace::srgb())
    }
}

impl ActiveSpace {
    /// Start with `default` active
    pub fn new(default: WorkingColorSpace) -> Self {
        let default = Arc::new(default);
        Self {
            current: RwLock::new(Arc::clone(&default)),
            default,
        }
    }

    /// Start with the default space selected by `options`
    pub fn from_options(options: &EngineOptions) -> Self {
        Self::new(WorkingColorSpace::default_for_display(options.wide_gamut))
    }

    /// The space currently in effect
    pub fn current(&self) -> Arc<WorkingColorSpace> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// The space [`reset`](Self::reset) returns to
    pub fn default_space(&self) -> Arc<WorkingColorSpace> {
        Arc::clone(&self.default)
    }

    /// Publish `space`, returning the one it replaced
    pub fn replace(&self, space: WorkingColorSpace) -> Arc<WorkingColorSpace> {
        self.publish(Arc::new(space))
    }

    /// Parse ICC bytes and publish the result
    ///
    /// On failure the current space is left untouched.
    pub fn import_icc(&self, bytes: &[u8]) -> Result<Arc<WorkingColorSpace>> {
        match WorkingColorSpace::from_icc(bytes) {
            Ok(space) => {
                let space = Arc::new(space);
                self.publish(Arc::clone(&space));
                Ok(space)
            }
            Err(error) => {
                warn!(%error, current = %self.current().name(), "ICC import refused");
                Err(error.into())
            }
        }
    }

    /// Return to the default space
    pub fn reset(&self) -> Arc<WorkingColorSpace> {
        self.publish(Arc::clone(&self.default))
    }

    fn publish(&self, space: Arc<WorkingColorSpace>) -> Arc<WorkingColorSpace> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        info!(from = %guard.name(), to = %space.name(), "working space changed");
        std::mem::replace(&mut *guard, space)
    }
}
