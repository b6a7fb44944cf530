//! Filter binding methods

use std::sync::Arc;

use waypath_engine::jsonpath::Predicate;

use super::core::JsonPathBuilder;

impl JsonPathBuilder {
    /// Bind the next `[?]` placeholder to `predicate`
    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        self.filters.push(Arc::new(predicate));
        self
    }

    /// Bind the next placeholder to a predicate the caller keeps a handle on,
    /// such as an `Arc<RwLock<Filter>>` extended between reads
    pub fn shared_filter(mut self, predicate: Arc<dyn Predicate>) -> Self {
        self.filters.push(predicate);
        self
    }

    /// Bind several placeholders in order
    pub fn filters<I>(mut self, predicates: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Predicate>>,
    {
        self.filters.extend(predicates);
        self
    }
}
