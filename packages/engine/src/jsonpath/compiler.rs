//! `JSONPath` compiler and entry point
//!
//! Tokenizes a path, then walks its fragments left to right binding each `[?]`
//! placeholder to the next supplied predicate and compiling each inline
//! `[?(...)]` expression into a filter.

use std::sync::Arc;

use crate::config::{PathConfig, PathConfigProvider};
use crate::jsonpath::{
    ast::Fragment,
    error::{JsonPathError, JsonPathResult, binding_mismatch_error, invalid_path_error},
    expression::{CompiledPath, Step},
    filter::Predicate,
    filter_parser::parse_inline_predicate,
    tokenizer::tokenize_with_config,
};

/// `JSONPath` compiler
pub struct PathCompiler;

impl PathCompiler {
    /// Compile `path`, binding placeholders positionally to `filters`
    ///
    /// Extra filters beyond the number of placeholders are ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPathFormat` for grammar violations and
    /// `FilterBindingMismatch` when `filters` runs out before the placeholders do.
    pub fn compile<I>(path: &str, filters: I) -> JsonPathResult<CompiledPath>
    where
        I: IntoIterator<Item = Arc<dyn Predicate>>,
    {
        Self::compile_with_config(path, filters, &PathConfig::default())
    }

    /// Compile `path` under explicit limits
    ///
    /// # Errors
    ///
    /// As [`PathCompiler::compile`], plus `InvalidConfig` when `config` fails
    /// validation and `InvalidPathFormat` when a configured limit is exceeded.
    pub fn compile_with_config<I, C>(
        path: &str,
        filters: I,
        config: &C,
    ) -> JsonPathResult<CompiledPath>
    where
        I: IntoIterator<Item = Arc<dyn Predicate>>,
        C: PathConfigProvider + ?Sized,
    {
        config.validate().map_err(JsonPathError::invalid_config)?;

        let fragments = tokenize_with_config(path, config)?;
        if fragments.len() > config.max_fragments() {
            return Err(invalid_path_error(
                path,
                format!(
                    "{} fragments exceed configured maximum {}",
                    fragments.len(),
                    config.max_fragments()
                ),
                None,
            ));
        }

        let placeholders = fragments
            .iter()
            .filter(|f| matches!(f, Fragment::Placeholder))
            .count();
        let mut filters = filters.into_iter();
        let mut bound = 0usize;
        let mut after_descent = false;
        let mut steps = Vec::with_capacity(fragments.len());

        for fragment in &fragments {
            let step = match fragment {
                Fragment::Root => Step::Root,
                Fragment::Property(name) => Step::Property {
                    name: name.clone(),
                    project_arrays: !after_descent,
                },
                Fragment::Wildcard => Step::Wildcard,
                Fragment::RecursiveDescent => Step::RecursiveDescent,
                Fragment::Index(index) => Step::Index(*index),
                Fragment::Indices(indices) => Step::Indices(indices.clone()),
                Fragment::Slice { start, end } => Step::Slice {
                    start: *start,
                    end: *end,
                },
                Fragment::Placeholder => {
                    let predicate = filters
                        .next()
                        .ok_or_else(|| binding_mismatch_error(path, placeholders, bound))?;
                    bound += 1;
                    Step::Predicate {
                        predicate,
                        expand_arrays: !after_descent,
                    }
                }
                Fragment::Expression(expression) => {
                    let filter = parse_inline_predicate(expression)?;
                    Step::Predicate {
                        predicate: Arc::new(filter),
                        expand_arrays: !after_descent,
                    }
                }
            };
            after_descent = matches!(fragment, Fragment::RecursiveDescent);
            steps.push(step);
        }

        let unused = filters.count();
        if unused > 0 {
            log::debug!("{unused} supplied filters left unbound by path '{path}'");
        }
        log::debug!(
            "compiled path '{}' into {} steps ({} bound filters)",
            path,
            steps.len(),
            bound
        );

        Ok(CompiledPath::new(path.to_string(), fragments, steps))
    }

    /// Validate path syntax without binding filters
    ///
    /// Placeholders are not checked against supplied filters here.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPathFormat` for grammar violations, including malformed
    /// inline predicates.
    pub fn validate(path: &str) -> JsonPathResult<()> {
        for fragment in crate::jsonpath::tokenizer::tokenize(path)? {
            if let Fragment::Expression(expression) = fragment {
                parse_inline_predicate(&expression)?;
            }
        }
        Ok(())
    }
}

/// Compile `path` with default limits, binding placeholders to `filters`
///
/// # Errors
///
/// See [`PathCompiler::compile`].
pub fn compile<I>(path: &str, filters: I) -> JsonPathResult<CompiledPath>
where
    I: IntoIterator<Item = Arc<dyn Predicate>>,
{
    PathCompiler::compile(path, filters)
}
