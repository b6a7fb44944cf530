//! Core `JsonPathBuilder` structure and configuration

use std::fmt;
use std::sync::Arc;

use waypath_engine::PathConfig;
use waypath_engine::jsonpath::{CompiledPath, JsonPathResult, PathCompiler, Predicate};

/// Builder collecting a path, its placeholder filters and a configuration
#[derive(Clone)]
#[must_use = "a path builder does nothing until compiled or read"]
pub struct JsonPathBuilder {
    pub(crate) path: String,
    pub(crate) filters: Vec<Arc<dyn Predicate>>,
    pub(crate) config: PathConfig,
}

impl JsonPathBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            filters: Vec::new(),
            config: PathConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn config(mut self, config: PathConfig) -> Self {
        self.config = config;
        self
    }

    /// Toggle per-step evaluation tracing
    pub fn trace(mut self, enabled: bool) -> Self {
        self.config.trace_evaluation = enabled;
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Filters bound so far, in placeholder order
    #[must_use]
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Compile with the bound filters
    ///
    /// # Errors
    ///
    /// Any compile-time error of [`PathCompiler::compile_with_config`].
    pub fn compile(&self) -> JsonPathResult<CompiledPath> {
        PathCompiler::compile_with_config(&self.path, self.filters.iter().cloned(), &self.config)
    }
}

impl fmt::Debug for JsonPathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filters: Vec<String> = self.filters.iter().map(|p| p.describe()).collect();
        f.debug_struct("JsonPathBuilder")
            .field("path", &self.path)
            .field("filters", &filters)
            .field("config", &self.config)
            .finish()
    }
}
