//! Path tokenizer tests
//!
//! Fragment splitting, surface-form normalization, whitespace handling and
//! grammar errors.

use waypath_engine::PathConfig;
use waypath_engine::jsonpath::{ErrorKind, Fragment, tokenize, tokenize_with_config};

fn fragments(path: &str) -> Vec<String> {
    tokenize(path)
        .unwrap_or_else(|error| panic!("Failed to tokenize '{path}': {error}"))
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn assert_invalid(path: &str) {
    let error = tokenize(path).expect_err("path should be rejected");
    assert_eq!(error.kind(), ErrorKind::InvalidPathFormat, "path '{path}'");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_paths_are_split_correctly() {
        assert_eq!(fragments("$.store[*]"), vec!["$", "store", "*"]);
        assert_eq!(fragments("$"), vec!["$"]);
        assert_eq!(fragments("$..*"), vec!["$", "..", "*"]);
        assert_eq!(fragments("$.store"), vec!["$", "store"]);
        assert_eq!(fragments("$.store.*"), vec!["$", "store", "*"]);
        assert_eq!(fragments("$.store[*].name"), vec!["$", "store", "*", "name"]);
        assert_eq!(
            fragments("$..book[-1:].foo.bar"),
            vec!["$", "..", "book", "[-1:]", "foo", "bar"]
        );
        assert_eq!(
            fragments("$..book[?(@.isbn)]"),
            vec!["$", "..", "book", "[?(@.isbn)]"]
        );
        assert_eq!(
            fragments("$.store.book[*].author"),
            vec!["$", "store", "book", "*", "author"]
        );
        assert_eq!(fragments("$.store..price"), vec!["$", "store", "..", "price"]);
    }

    #[test]
    fn bracket_and_dot_forms_are_equivalent() {
        let expected = vec!["$", "store", "price"];
        assert_eq!(fragments("['store'].['price']"), expected);
        assert_eq!(fragments("$.['store'].['price']"), expected);
        assert_eq!(fragments("$.['store']['price']"), expected);
        assert_eq!(fragments("$.['store'].price"), expected);
        assert_eq!(fragments("$.store.price"), expected);
        assert_eq!(fragments("store.price"), expected);
        assert_eq!(fragments("[\"store\"][\"price\"]"), expected);
    }

    #[test]
    fn quoted_names_keep_delimiters_and_spaces() {
        assert_eq!(
            fragments("$.['store space']['price space']"),
            vec!["$", "store space", "price space"]
        );
        assert_eq!(
            fragments("$.['store']['nice.price']"),
            vec!["$", "store", "nice.price"]
        );
        assert_eq!(fragments("$['a[0]']"), vec!["$", "a[0]"]);
        assert_eq!(fragments("$['it\\'s']"), vec!["$", "it's"]);
    }

    #[test]
    fn white_space_is_removed_around_brackets() {
        assert_eq!(fragments("$.[ 'store' ]"), vec!["$", "store"]);
        assert_eq!(fragments("$.[   'store' ]"), vec!["$", "store"]);
        assert_eq!(fragments("$.['store bore']"), vec!["$", "store bore"]);

        let expected = vec!["$", "..", "book", "[?(@.price<10)]"];
        assert_eq!(fragments("$..book[?(@.price<10)]"), expected);
        assert_eq!(fragments("$..book[  ?(@.price<10)  ]"), expected);
        assert_eq!(fragments("$..book[?(@.price<10  )]"), expected);
        assert_eq!(fragments("$..book[?(  @.price<10)]"), expected);
        assert_eq!(fragments("$..book[  ?(@.price<10)]"), expected);
    }

    #[test]
    fn trailing_dot_is_ignored() {
        let parts = fragments("$..book['something'].");
        assert_eq!(parts.last().map(String::as_str), Some("something"));
        assert_eq!(parts, vec!["$", "..", "book", "something"]);
        assert_eq!(fragments("$.store."), vec!["$", "store"]);
    }

    #[test]
    fn special_fragments_are_recognized() {
        let parsed = tokenize("$.a[2][-1][1:3][:2][-2:][0, 2,-1][?][*]").expect("valid path");
        assert_eq!(
            parsed,
            vec![
                Fragment::Root,
                Fragment::property("a"),
                Fragment::Index(2),
                Fragment::Index(-1),
                Fragment::Slice {
                    start: Some(1),
                    end: Some(3)
                },
                Fragment::Slice {
                    start: None,
                    end: Some(2)
                },
                Fragment::Slice {
                    start: Some(-2),
                    end: None
                },
                Fragment::Indices(vec![0, 2, -1]),
                Fragment::Placeholder,
                Fragment::Wildcard,
            ]
        );
    }

    #[test]
    fn predicate_expression_is_captured_whole() {
        let parsed = tokenize("$.items[?(@['a.b'] == 'x]y' && @.c)].name").expect("valid path");
        assert_eq!(
            parsed,
            vec![
                Fragment::Root,
                Fragment::property("items"),
                Fragment::Expression("@['a.b'] == 'x]y' && @.c".to_string()),
                Fragment::property("name"),
            ]
        );
    }

    #[test]
    fn tokenizing_is_idempotent() {
        for path in ["$..book[?(@.isbn)]", "$.['store']['price']", "a.b[0:2]"] {
            assert_eq!(
                tokenize(path).expect("valid path"),
                tokenize(path).expect("valid path")
            );
        }
    }

    #[test]
    fn invalid_paths_are_rejected() {
        assert_invalid("$...*");
        assert_invalid("$....book");
        assert_invalid("$['unterminated]");
        assert_invalid("$['store'");
        assert_invalid("$.store[0");
        assert_invalid("$.store]");
        assert_invalid("$.store[]");
        assert_invalid("$.store[abc]");
        assert_invalid("$.store['a'b]");
        assert_invalid("$.store[1:2:3]");
        assert_invalid("$.store[?x]");
        assert_invalid("$.store[?()]");
        assert_invalid("");
        assert_invalid("   ");
    }

    #[test]
    fn quoted_dot_segments_are_read_whole() {
        assert_eq!(fragments("$.'a.b'"), vec!["$", "a.b"]);
        assert_eq!(fragments("$.\"store\".price"), vec!["$", "store", "price"]);
        assert_eq!(fragments("$.'it\\'s'[0]"), vec!["$", "it's", "[0]"]);

        assert_invalid("$.'store");
        assert_invalid("$.'a'b");
        assert_invalid("$.it's");
    }

    #[test]
    fn segments_must_be_separated() {
        assert_invalid("$.store['a'] ['b']");
        assert_invalid("$.store[0]extra");
        assert_invalid("$['a']b");
        assert_invalid("$.[?]x");
        assert_invalid("$.store[*] .name");
    }

    #[test]
    fn bare_names_are_trimmed() {
        assert_eq!(fragments("$. store"), vec!["$", "store"]);
        assert_eq!(fragments("$.store .price"), vec!["$", "store", "price"]);
        assert_eq!(fragments("$. * "), vec!["$", "*"]);

        assert_invalid("$.store. .x");
        assert_invalid("$.store.   [0]");
    }

    #[test]
    fn configured_length_limit_is_enforced() {
        let config = PathConfig::default().with_max_path_length(8);
        assert!(tokenize_with_config("$.a.b.c", &config).is_ok());

        let error = tokenize_with_config("$.store.book", &config).expect_err("path too long");
        assert_eq!(error.kind(), ErrorKind::InvalidPathFormat);
        assert!(error.message().contains("exceeds"));
    }
}
