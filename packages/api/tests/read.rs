//! Public API tests
//!
//! Definite paths read as single values, indefinite paths as lists, and the
//! builder binds filters in placeholder order.

use std::sync::{Arc, RwLock};

use serde_json::json;
use waypath::{
    ErrorKind, Filter, JsonPath, PathConfig, Predicate, ReadMode, ReadResult, Value,
    predicate_fn, r#where,
};

fn store() -> serde_json::Value {
    json!({
        "store": {
            "book": [
                {"category": "reference", "author": "Nigel Rees", "title": "Sayings of the Century", "price": 8.95},
                {"category": "fiction", "author": "Evelyn Waugh", "title": "Sword of Honour", "price": 12.99},
                {"category": "fiction", "author": "Herman Melville", "title": "Moby Dick", "isbn": "0-553-21311-3", "price": 8.99},
                {"category": "fiction", "author": "J. R. R. Tolkien", "title": "The Lord of the Rings", "isbn": "0-395-19395-8", "price": 22.99}
            ],
            "bicycle": {"color": "red", "price": 19.95}
        }
    })
}

fn no_filters() -> Vec<Arc<dyn Predicate>> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definite_path_reads_single_value() {
        let document = Value::from(store());
        let result = JsonPath::read(&document, "$.store.bicycle.color", no_filters())
            .expect("color exists");
        assert_eq!(result, ReadResult::Single(&Value::from("red")));
    }

    #[test]
    fn indefinite_path_reads_list() {
        let document = Value::from(store());
        let result = JsonPath::read(&document, "$.store.book[*].author", no_filters())
            .expect("valid path");
        assert!(matches!(result, ReadResult::List(_)));
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn definite_miss_is_no_such_path() {
        let document = Value::from(store());
        let error = JsonPath::read(&document, "$.store.bicycle.gears", no_filters())
            .expect_err("no gears");
        assert_eq!(error.kind(), ErrorKind::NoSuchPath);
    }

    #[test]
    fn indefinite_miss_is_empty_list() {
        let document = Value::from(store());
        let result = JsonPath::read(&document, "$..gears", no_filters()).expect("valid path");
        assert!(result.is_empty());
    }

    #[test]
    fn read_value_round_trips_serde_json() {
        let prices = JsonPath::read_value(
            &store(),
            "$.store.book[?(@.category == 'fiction')].price",
            no_filters(),
        )
        .expect("valid path");
        assert_eq!(prices, json!([12.99, 8.99, 22.99]));

        let color = JsonPath::read_value(&store(), "$.store.bicycle.color", no_filters())
            .expect("color exists");
        assert_eq!(color, json!("red"));
    }

    #[test]
    fn compile_rejects_unbound_placeholders() {
        let error = JsonPath::compile("$.store.book[?]").expect_err("placeholder without filter");
        assert_eq!(error.kind(), ErrorKind::FilterBindingMismatch);

        let error = JsonPath::compile("$...book").expect_err("three dots");
        assert_eq!(error.kind(), ErrorKind::InvalidPathFormat);
    }

    #[test]
    fn builder_binds_filters_in_order() {
        let _ = env_logger::builder().is_test(true).try_init();
        let document = Value::from(store());

        let titles = JsonPath::builder("$.store[?].book[?].title")
            .filter(predicate_fn(|node: &Value| node.contains_key("bicycle")))
            .filter(Filter::of(r#where("price").gt(10).and("isbn").exists(false)))
            .trace(true)
            .read_list(&document)
            .expect("valid path");
        assert_eq!(titles, vec![&Value::from("Sword of Honour")]);
    }

    #[test]
    fn builder_single_read() {
        let document = Value::from(store());
        let builder = waypath::path("$.store.book[2].isbn");

        let isbn = builder.read_single(&document).expect("isbn exists");
        assert_eq!(isbn, &Value::from("0-553-21311-3"));
        assert_eq!(builder.read(&document).expect("definite read").as_single(), Some(isbn));
    }

    #[test]
    fn builder_reports_binding_mismatch() {
        let error = JsonPath::builder("$.a[?].b[?]")
            .filter(Filter::new())
            .compile()
            .expect_err("one filter short");
        assert_eq!(error.kind(), ErrorKind::FilterBindingMismatch);
    }

    #[test]
    fn builder_applies_config_limits() {
        let error = JsonPath::builder("$.store.book[0].title")
            .config(PathConfig::strict().with_max_fragments(3))
            .compile()
            .expect_err("too many fragments");
        assert_eq!(error.kind(), ErrorKind::InvalidPathFormat);
    }

    #[test]
    fn shared_filter_is_extended_between_reads() {
        let document = Value::from(store());
        let fiction = Arc::new(RwLock::new(Filter::of(r#where("category").is("fiction"))));
        let builder = JsonPath::builder("$.store.book[?].title").shared_filter(fiction.clone());
        let path = builder.compile().expect("valid path");

        assert_eq!(path.read(&document, ReadMode::List).expect("list read").len(), 3);

        fiction
            .write()
            .expect("lock should not be poisoned")
            .add_criteria(r#where("price").lt(10));
        assert_eq!(
            path.read_list(&document),
            vec![&Value::from("Moby Dick")]
        );
    }

    #[test]
    fn read_mode_follows_definiteness() {
        let definite = JsonPath::compile("rows[0].id").expect("valid path");
        let indefinite = JsonPath::compile("$..book[0]").expect("valid path");

        assert_eq!(waypath::read_mode_for(&definite), ReadMode::Single);
        assert_eq!(waypath::read_mode_for(&indefinite), ReadMode::List);
    }
}
