//! Reading documents through a builder

use waypath_engine::Value;
use waypath_engine::jsonpath::{JsonPathError, JsonPathResult, PathEvaluator, ReadMode, ReadResult};

use super::core::JsonPathBuilder;

impl JsonPathBuilder {
    /// Compile and read, as a single value when the path is definite and as a
    /// list otherwise
    ///
    /// # Errors
    ///
    /// Compile-time errors, and `NoSuchPath` when a definite path matches nothing.
    pub fn read<'a>(&self, document: &'a Value) -> JsonPathResult<ReadResult<'a>> {
        let path = self.compile()?;
        let mode = crate::read_mode_for(&path);
        PathEvaluator::with_config(&path, &self.config).evaluate(document, mode)
    }

    /// Compile and read every match
    ///
    /// # Errors
    ///
    /// Compile-time errors only.
    pub fn read_list<'a>(&self, document: &'a Value) -> JsonPathResult<Vec<&'a Value>> {
        let path = self.compile()?;
        Ok(PathEvaluator::with_config(&path, &self.config).select(document))
    }

    /// Compile and read exactly one match
    ///
    /// # Errors
    ///
    /// Compile-time errors, `NoSuchPath` for no match and `Internal` for several.
    pub fn read_single<'a>(&self, document: &'a Value) -> JsonPathResult<&'a Value> {
        let path = self.compile()?;
        let result = PathEvaluator::with_config(&path, &self.config)
            .evaluate(document, ReadMode::Single)?;
        result
            .as_single()
            .ok_or_else(|| JsonPathError::internal(format!("'{}': single read produced a list", self.path)))
    }
}
