use crate::{error::Result, sequencer::optimize_route, tour::stop::Stop};

/// Which order of a tour is on display, plus the stop the walker is at.
///
/// The original order is captured once and every transition returns a new
/// value, so switching back always yields exactly what was loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteView {
    original: Vec<Stop>,
    current: Vec<Stop>,
    is_optimized: bool,
    current_index: usize,
}

impl RouteView {
    pub fn new(original: Vec<Stop>) -> Self {
        Self {
            current: original.clone(),
            original,
            is_optimized: false,
            current_index: 0,
        }
    }

    pub fn original(&self) -> &[Stop] {
        &self.original
    }

    pub fn current(&self) -> &[Stop] {
        &self.current
    }

    pub fn is_optimized(&self) -> bool {
        self.is_optimized
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_stop(&self) -> Option<&Stop> {
        self.current.get(self.current_index)
    }

    /// Switches between the original and the sequenced order. The stop index
    /// resets to the start either way.
    pub fn toggled(&self) -> Result<Self> {
        let (current, is_optimized) = if self.is_optimized {
            (self.original.clone(), false)
        } else {
            (optimize_route(&self.original)?, true)
        };

        Ok(Self {
            original: self.original.clone(),
            current,
            is_optimized,
            current_index: 0,
        })
    }

    pub fn next_stop(&self) -> Self {
        let last = self.current.len().saturating_sub(1);
        Self {
            current_index: (self.current_index + 1).min(last),
            ..self.clone()
        }
    }

    pub fn previous_stop(&self) -> Self {
        Self {
            current_index: self.current_index.saturating_sub(1),
            ..self.clone()
        }
    }
}
