//! Path compiler tests
//!
//! Placeholder binding, definiteness and compile-time limits.

use std::sync::Arc;

use waypath_engine::PathConfig;
use waypath_engine::jsonpath::{
    ErrorKind, Filter, PathCompiler, Predicate, Step, compile, predicate_fn, r#where,
};
use waypath_engine::value::Value;

fn accept_all() -> Arc<dyn Predicate> {
    Arc::new(predicate_fn(|_: &Value| true))
}

fn no_filters() -> Vec<Arc<dyn Predicate>> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_not_definite() {
        assert!(!compile("$..book[0]", no_filters()).expect("valid path").is_definite());
        assert!(!compile("$book[?]", [accept_all()]).expect("valid path").is_definite());
        assert!(!compile("$.books[*]", no_filters()).expect("valid path").is_definite());
        assert!(!compile("$.books[1:2]", no_filters()).expect("valid path").is_definite());
        assert!(!compile("$.books[0,1]", no_filters()).expect("valid path").is_definite());
        assert!(
            !compile("$.books[?(@.isbn)]", no_filters())
                .expect("valid path")
                .is_definite()
        );
    }

    #[test]
    fn path_is_definite() {
        assert!(compile("$.definite.this.is", no_filters()).expect("valid path").is_definite());
        assert!(compile("rows[0].id", no_filters()).expect("valid path").is_definite());
        assert!(compile("$", no_filters()).expect("valid path").is_definite());
        assert!(compile("$['a'][-1]", no_filters()).expect("valid path").is_definite());
    }

    #[test]
    fn placeholders_bind_left_to_right() {
        let first: Arc<dyn Predicate> = Arc::new(Filter::of(r#where("name").is("first")));
        let second: Arc<dyn Predicate> = Arc::new(Filter::of(r#where("name").is("second")));

        let path = compile("children[?].children[?]", [first, second]).expect("valid path");
        let bound: Vec<String> = path
            .steps()
            .iter()
            .filter_map(|step| match step {
                Step::Predicate { predicate, .. } => Some(predicate.describe()),
                _ => None,
            })
            .collect();

        assert_eq!(bound, vec!["name is \"first\"", "name is \"second\""]);
        assert_eq!(path.predicate_count(), 2);
    }

    #[test]
    fn too_few_filters_is_a_binding_error() {
        let error = compile("$.a[?].b[?]", [accept_all()]).expect_err("one filter short");
        assert_eq!(error.kind(), ErrorKind::FilterBindingMismatch);
        assert!(error.is_compile_time());
        assert!(error.message().contains('2'));
    }

    #[test]
    fn extra_filters_are_ignored() {
        let path = compile("$.a[?]", [accept_all(), accept_all(), accept_all()])
            .expect("extra filters are allowed");
        assert_eq!(path.predicate_count(), 1);
    }

    #[test]
    fn inline_predicates_need_no_filters() {
        let path = compile("$..book[?(@.isbn && @.price < 10)]", no_filters()).expect("valid path");
        assert_eq!(path.predicate_count(), 1);
        match path.steps().last() {
            Some(Step::Predicate { predicate, .. }) => {
                assert_eq!(predicate.describe(), "isbn exists true && price lt 10");
            }
            other => panic!("expected predicate step, got {other:?}"),
        }
    }

    #[test]
    fn malformed_inline_predicate_fails_at_compile_time() {
        let error = compile("$.book[?(@.a || @.b)]", no_filters()).expect_err("'||' is unsupported");
        assert_eq!(error.kind(), ErrorKind::InvalidPathFormat);
        assert!(PathCompiler::validate("$.book[?(@.a.b == 1)]").is_err());
        assert!(PathCompiler::validate("$.book[?(@.a == 1)]").is_ok());
    }

    #[test]
    fn steps_after_recursive_descent_do_not_expand_arrays() {
        let path = compile("$..book[?].title", [accept_all()]).expect("valid path");
        let flags: Vec<bool> = path
            .steps()
            .iter()
            .filter_map(|step| match step {
                Step::Property { project_arrays, .. } => Some(*project_arrays),
                Step::Predicate { expand_arrays, .. } => Some(*expand_arrays),
                _ => None,
            })
            .collect();
        assert_eq!(flags, vec![false, true, true]);
    }

    #[test]
    fn compiled_path_keeps_its_source() {
        let path = compile("$.store.book[0]", no_filters()).expect("valid path");
        assert_eq!(path.original(), "$.store.book[0]");
        assert_eq!(path.to_string(), "$.store.book[0]");
        assert_eq!(path.fragments().len(), 4);
        assert_eq!(path.steps().len(), 4);
    }

    #[test]
    fn fragment_limit_is_enforced() {
        let config = PathConfig::default().with_max_fragments(3);
        assert!(PathCompiler::compile_with_config("$.a.b", no_filters(), &config).is_ok());

        let error = PathCompiler::compile_with_config("$.a.b.c", no_filters(), &config)
            .expect_err("too many fragments");
        assert_eq!(error.kind(), ErrorKind::InvalidPathFormat);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = PathConfig::default().with_max_path_length(0);
        let error = PathCompiler::compile_with_config("$.a", no_filters(), &config)
            .expect_err("zero length limit");
        assert_eq!(error.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn compiled_paths_are_shareable_across_threads() {
        let path = Arc::new(compile("$.items[?]", [accept_all()]).expect("valid path"));
        let document = Arc::new(Value::from(serde_json::json!({"items": [1, 2]})));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let path = Arc::clone(&path);
                let document = Arc::clone(&document);
                std::thread::spawn(move || path.read_list(&document).len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().expect("reader thread panicked"), 2);
        }
    }
}
