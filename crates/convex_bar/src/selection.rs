//! Active tab selection

use crate::error::{BarError, Result};

/// Tracks which of `count` slots is active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionState {
    active: usize,
    count: usize,
}

impl SelectionState {
    /// Create a selection over `count` slots with `initial` active
    pub fn new(count: usize, initial: usize) -> Result<Self> {
        if count == 0 {
            return Err(BarError::config("at least one tab slot is required"));
        }
        if initial >= count {
            return Err(BarError::InvalidIndex {
                index: initial,
                count,
            });
        }
        Ok(Self {
            active: initial,
            count,
        })
    }

    /// Make `index` the active slot; returns whether the selection changed
    pub fn activate(&mut self, index: usize) -> Result<bool> {
        self.check(index)?;
        let changed = index != self.active;
        if changed {
            tracing::debug!("active tab {} -> {}", self.active, index);
        }
        self.active = index;
        Ok(changed)
    }

    /// Fail with `InvalidIndex` unless `index` is a valid slot
    pub fn check(&self, index: usize) -> Result<()> {
        if index < self.count {
            Ok(())
        } else {
            Err(BarError::InvalidIndex {
                index,
                count: self.count,
            })
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn count(&self) -> usize {
        self.count
    }
}
