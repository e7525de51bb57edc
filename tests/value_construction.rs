use ubjson::{Kind, Value};

fn sample_array() -> Value {
    Value::from([
        Value::from(34.657),
        Value::from("Yeepa"),
        Value::from(466),
        Value::from(-53),
        Value::from('g'),
    ])
}

fn sample_map() -> Value {
    let mut v = Value::Null;
    v["name"] = Value::from("WhiZTiM");
    v["id"] = Value::from(12343);
    v["extras"] = Value::from([sample_array(), Value::from("nice one bro!")]);
    v
}

#[test]
fn constructors_produce_the_expected_kinds() {
    assert!(Value::Null.is_null());
    assert!(Value::from('c').is_char());
    assert!(Value::from(true).is_bool());
    assert!(Value::from(-700).is_signed_int());
    assert!(Value::from(800u64).is_unsigned_int());
    assert!(Value::from(3.1416).is_float());
    assert!(Value::from("string").is_string());
    assert!(sample_array().is_array());
    assert!(sample_map().is_object());
    assert!(Value::binary([0xab, 0xbc, 0xcd, 0xdf]).is_binary());

    assert!(Value::from(-700).is_integer());
    assert!(Value::from(800u64).is_integer());
    assert!(Value::from(-700).is_numeric());
    assert!(Value::from(800u64).is_numeric());
    assert!(Value::from(3.1416).is_numeric());

    assert!(sample_map()["extras"].is_array());
}

#[test]
fn default_is_null() {
    assert_eq!(Value::default().kind(), Kind::Null);
}

#[test]
fn sizes() {
    assert_eq!(Value::Null.size(), 0);
    assert_eq!(Value::from('c').size(), 1);
    assert_eq!(Value::from(true).size(), 1);
    assert_eq!(Value::from(-700).size(), 1);
    assert_eq!(Value::from(800u64).size(), 1);
    assert_eq!(Value::from(3.1416).size(), 1);
    assert_eq!(Value::from("string").size(), 1);
    assert_eq!(sample_array().size(), 5);
    assert_eq!(sample_map().size(), 3);
    assert_eq!(Value::binary([0xab, 0xbc, 0xcd, 0xdf]).size(), 1);
}

#[test]
fn equality() {
    assert_eq!(Value::Null, Value::Null);
    assert_eq!(Value::from('c'), Value::from('c'));
    assert_eq!(Value::from(true), Value::from(true));
    assert_eq!(Value::from(-700), Value::from(-700));
    assert_eq!(Value::from(800u64), Value::from(800u64));
    assert_eq!(Value::from(3.1416), Value::from(3.1416));
    assert_eq!(Value::from("string"), Value::from("string"));
    assert_eq!(sample_array(), sample_array());
    assert_eq!(sample_map(), sample_map());
    assert_eq!(
        Value::binary([0xab, 0xbc, 0xcd, 0xdf]),
        Value::binary([0xab, 0xbc, 0xcd, 0xdf])
    );
}

#[test]
fn inequality() {
    assert_ne!(Value::Null, Value::from(0));
    assert_ne!(Value::from('c'), Value::from('d'));
    assert_ne!(Value::from(true), Value::from(false));
    assert_ne!(Value::from(-700), Value::from(700));
    assert_ne!(Value::from("string"), Value::from("strings"));
    assert_ne!(sample_array(), sample_map());
    assert_ne!(Value::binary([1u8, 2]), Value::binary([1u8, 2, 3]));

    // numerics of different kinds still compare by projection
    assert_eq!(Value::from(466u64), Value::from(466));
    assert_ne!(Value::from(466u64), Value::from(467));
}

#[test]
fn numeric_equality_is_reflexive_and_symmetric() {
    let values = [
        Value::from(-700),
        Value::from(800u64),
        Value::from(3.1416),
        Value::from(0),
    ];
    for a in &values {
        assert_eq!(a, a);
        for b in &values {
            assert_eq!(a == b, b == a);
        }
    }
}

#[test]
fn is_comparable_with() {
    assert!(Value::from(-700).is_comparable_with(&Value::from(3.1416)));
    assert!(Value::from(800u64).is_comparable_with(&Value::from(-1)));
    assert!(Value::from("a").is_comparable_with(&Value::from("b")));
    assert!(!Value::from("a").is_comparable_with(&Value::from(1)));
    assert!(!Value::Null.is_comparable_with(&Value::from(0)));
}

#[test]
fn copy_construction_is_deep() {
    let original = sample_map();
    let mut copied = original.clone();
    assert_eq!(original, copied);

    copied["id"] = Value::from(1);
    assert_ne!(original, copied);
    assert_eq!(original["id"], Value::from(12343));
}

#[test]
fn move_leaves_the_source_null() {
    let mut source = sample_map();
    let destination = source.take();

    assert!(source.is_null());
    assert_eq!(destination, sample_map());
}

#[test]
fn assignment_replaces_and_drops_the_previous_child() {
    let mut v = sample_map();
    v["name"] = Value::from(0xbeef_u32);
    assert_eq!(v["name"], Value::from(0xbeef_u32));
    assert_eq!(v.size(), 3);
}

#[test]
fn single_entry_object_equals_entry_constructor() {
    let mut v = Value::Null;
    v["m1"] = Value::from("mmm");
    assert_eq!(v, Value::entry("m1", "mmm"));
}
