use fmtkit::object::{
    assign, difference, flatten_objects, for_each, keys, merge, path, pluck, prop, values, Key,
};
use serde_json::{json, Value};

#[test]
fn test_for_each_array_and_object() {
    let list = json!(["a", "b"]);
    let mut seen = Vec::new();
    for_each(&list, |v, k| seen.push((k, v.clone())));
    assert_eq!(
        seen,
        vec![(Key::Index(0), json!("a")), (Key::Index(1), json!("b"))]
    );

    let mut names = Vec::new();
    for_each(&json!({"x": 1, "y": 2}), |_, k| names.push(k.to_property()));
    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn test_merge_deep() {
    let a = json!({"db": {"host": "localhost", "port": 5432}, "debug": false});
    let b = json!({"db": {"port": 6543}, "debug": true});
    let merged = merge(&[&a, &b]);
    assert_eq!(
        merged,
        json!({"db": {"host": "localhost", "port": 6543}, "debug": true})
    );
}

#[test]
fn test_merge_replaces_non_objects() {
    let a = json!({"list": [1, 2, 3]});
    let b = json!({"list": [4]});
    assert_eq!(merge(&[&a, &b]), json!({"list": [4]}));
}

#[test]
fn test_merge_array_argument_uses_indices() {
    assert_eq!(merge(&[&json!(["x", "y"])]), json!({"0": "x", "1": "y"}));
    assert_eq!(merge(&[]), json!({}));
}

#[test]
fn test_keys_and_values() {
    let obj = json!({"a": 2, "b": 3});
    assert_eq!(keys(&obj), Some(vec!["a".to_string(), "b".to_string()]));
    assert_eq!(values(&obj), Some(vec![json!(2), json!(3)]));
    assert_eq!(keys(&json!([1])), None);
    assert_eq!(values(&Value::Null), None);
}

#[test]
fn test_path_and_prop() {
    let obj = json!({"a": {"b": {"c": 2}}});
    assert_eq!(path(&["a", "b", "c"], &obj), Some(&json!(2)));
    assert_eq!(path(&["a", "b", "d"], &obj), None);
    assert_eq!(path::<&str>(&[], &obj), Some(&obj));
    assert_eq!(prop("name", &json!({"name": 2})), Some(&json!(2)));
    assert_eq!(prop("name", &json!({"age": 12})), None);
    assert_eq!(prop("1", &json!([1, 2, 3])), Some(&json!(2)));
}

#[test]
fn test_pluck() {
    assert_eq!(pluck("1", &json!([[1, 2, 3, 4]])), vec![json!(2)]);
    assert_eq!(
        pluck("val", &json!({"a": {"val": 2}, "b": {"val": 4}, "c": {}, "d": {"val": null}})),
        vec![json!(2), json!(4)]
    );
    assert!(pluck("x", &json!(5)).is_empty());
}

#[test]
fn test_assign() {
    let original = json!({"age": 2});
    assert_eq!(assign("name", json!(3), &original), json!({"name": 3, "age": 2}));
    assert_eq!(original, json!({"age": 2}));
    assert_eq!(assign("k", json!(true), &json!([1])), json!({"k": true}));
}

#[test]
fn test_flatten_objects() {
    let data = json!([
        {"id": 1, "children": [{"id": 2}]},
        [{"id": 3}],
        "skip",
        4
    ]);
    assert_eq!(
        flatten_objects(&data),
        vec![
            json!({"id": 1, "children": [{"id": 2}]}),
            json!({"id": 2}),
            json!({"id": 3}),
        ]
    );
}

#[test]
fn test_difference() {
    assert_eq!(difference(&[1, 2, 3, 4], &[2, 4]), vec![1, 3]);
    assert_eq!(difference(&[2], &[1, 2, 3]), vec![1, 3]);
    assert!(difference::<i32>(&[], &[1]).is_empty());
    assert!(difference(&["a"], &[]).is_empty());
}
