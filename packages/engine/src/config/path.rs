//! Path Configuration Module
//!
//! Compile-time limits and evaluation diagnostics for compiled paths.

use serde::{Deserialize, Serialize};

/// Path configuration provider trait
pub trait PathConfigProvider {
    fn max_path_length(&self) -> usize;
    fn max_fragments(&self) -> usize;
    fn trace_evaluation(&self) -> bool;

    /// Validate the provided limits
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `max_path_length` is 0
    /// - `max_fragments` is 0 or exceeds `max_path_length` + 1
    fn validate(&self) -> Result<(), String> {
        if self.max_path_length() == 0 {
            return Err("max_path_length must be greater than 0".to_string());
        }
        if self.max_fragments() == 0 {
            return Err("max_fragments must be greater than 0".to_string());
        }
        // every fragment but the implied root consumes at least one character
        if self.max_fragments() > self.max_path_length().saturating_add(1) {
            return Err(format!(
                "max_fragments ({}) cannot exceed max_path_length + 1 ({})",
                self.max_fragments(),
                self.max_path_length().saturating_add(1)
            ));
        }
        Ok(())
    }
}

/// Runtime path configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Longest accepted path, in characters
    pub max_path_length: usize,
    /// Most fragments a compiled path may hold, root included
    pub max_fragments: usize,
    /// Emit a trace event after every evaluation step
    pub trace_evaluation: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            max_path_length: 4096,
            max_fragments: 256,
            trace_evaluation: false,
        }
    }
}

impl PathConfig {
    /// Tight limits for paths that come from untrusted input
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_path_length: 512,
            max_fragments: 32,
            ..Self::default()
        }
    }

    /// Generous limits for generated paths
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            max_path_length: 1 << 20,
            max_fragments: 1 << 16,
            ..Self::default()
        }
    }

    /// Default limits with per-step evaluation tracing
    #[must_use]
    pub fn debugging() -> Self {
        Self {
            trace_evaluation: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_path_length(mut self, max_path_length: usize) -> Self {
        self.max_path_length = max_path_length;
        self
    }

    #[must_use]
    pub fn with_max_fragments(mut self, max_fragments: usize) -> Self {
        self.max_fragments = max_fragments;
        self
    }

    #[must_use]
    pub fn with_trace_evaluation(mut self, trace_evaluation: bool) -> Self {
        self.trace_evaluation = trace_evaluation;
        self
    }
}

impl PathConfigProvider for PathConfig {
    fn max_path_length(&self) -> usize {
        self.max_path_length
    }

    fn max_fragments(&self) -> usize {
        self.max_fragments
    }

    fn trace_evaluation(&self) -> bool {
        self.trace_evaluation
    }
}
