use portable_json::{parse, stringify, PortableJson};
use proptest::prelude::*;

fn obj(fields: &[(&str, PortableJson)]) -> PortableJson {
    let mut o = PortableJson::empty_object();
    for (k, v) in fields {
        o.put(*k, v.clone()).unwrap();
    }
    o
}

fn arr(items: &[PortableJson]) -> PortableJson {
    let mut a = PortableJson::empty_array();
    for (i, v) in items.iter().enumerate() {
        a.put_at(i, v.clone()).unwrap();
    }
    a
}

#[test]
fn round_trip_matrix() {
    let cases = vec![
        PortableJson::Null,
        PortableJson::Bool(false),
        PortableJson::Int(0),
        PortableJson::Int(i64::MIN),
        PortableJson::Int(i64::MAX),
        PortableJson::Float(0.25),
        PortableJson::Float(-1.5e-20),
        PortableJson::Str(String::new()),
        PortableJson::Str("with \"quotes\" and \\slashes\\ and\nnewlines".into()),
        PortableJson::Str("héllo 世界 😀".into()),
        PortableJson::empty_object(),
        PortableJson::empty_array(),
        obj(&[
            ("template", "Hello".into()),
            ("modality", "log,alert".into()),
            ("count", PortableJson::Int(3)),
            ("ratio", PortableJson::Float(0.5)),
            ("flag", PortableJson::Bool(true)),
            ("nothing", PortableJson::Null),
        ]),
        arr(&[
            PortableJson::Int(1),
            obj(&[("nested", arr(&[PortableJson::Bool(true)]))]),
            PortableJson::Str("end".into()),
        ]),
    ];
    for case in cases {
        let text = stringify(&case);
        let back = parse(&text).unwrap_or_else(|e| panic!("reparse of {text}: {e}"));
        assert_eq!(back, case, "round-trip of {text}");
    }
}

#[test]
fn equal_but_not_same_instance() {
    let text = r#"{"a": [1, 2], "b": {"c": "d"}}"#;
    let first = parse(text).unwrap();
    let mut second = parse(text).unwrap();
    assert_eq!(first, second);

    // Distinct trees: mutating one leaves the other untouched.
    second.put("a", "overwritten").unwrap();
    assert_ne!(first, second);
    assert_eq!(first.get_array("a").unwrap().get_length().unwrap(), 2);
}

#[test]
fn key_order_differs_but_values_equal() {
    let a = parse(r#"{"x": 1, "y": 2}"#).unwrap();
    let b = parse(r#"{"y": 2, "x": 1}"#).unwrap();
    assert_eq!(a, b);
    // Emitted text preserves each document's own insertion order.
    assert_eq!(stringify(&a), r#"{"x":1,"y":2}"#);
    assert_eq!(stringify(&b), r#"{"y":2,"x":1}"#);
}

fn arb_json() -> impl Strategy<Value = PortableJson> {
    let leaf = prop_oneof![
        Just(PortableJson::Null),
        any::<bool>().prop_map(PortableJson::Bool),
        any::<i64>().prop_map(PortableJson::Int),
        any::<f64>()
            .prop_filter("finite floats only", |f| f.is_finite())
            .prop_map(PortableJson::Float),
        any::<String>().prop_map(PortableJson::Str),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(PortableJson::Array),
            prop::collection::vec((any::<String>(), inner), 0..6).prop_map(|entries| {
                let mut o = PortableJson::empty_object();
                for (k, v) in entries {
                    o.put(k, v).unwrap();
                }
                o
            }),
        ]
    })
}

proptest! {
    #[test]
    fn parse_stringify_round_trips(v in arb_json()) {
        let text = stringify(&v);
        let back = parse(&text).expect("output of stringify must reparse");
        prop_assert_eq!(back, v);
    }
}
