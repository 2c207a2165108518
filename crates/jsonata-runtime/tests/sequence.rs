//! Sequence construction, classification and collapse.

use jsonata_runtime::{create_sequence, is_sequence, Sequence, Value, NULL_VALUE};
use serde_json::json;

fn int(n: i64) -> Value {
    Value::from(n)
}

#[test]
fn test_create_empty() {
    let seq = create_sequence(None);
    assert!(seq.is_empty());
    assert!(seq.sequence);
    assert!(!seq.outer_wrapper);
    assert!(!seq.tuple_stream);
    assert!(!seq.keep_singleton);
    assert!(!seq.cons);
}

#[test]
fn test_create_from_scalar() {
    let seq = create_sequence(Some(int(5)));
    assert_eq!(seq.len(), 1);
    assert_eq!(seq[0], int(5));
}

#[test]
fn test_create_from_sentinel() {
    let seq = create_sequence(Some(NULL_VALUE));
    assert_eq!(seq.len(), 1);
    assert!(seq[0].is_null_sentinel());
}

// Only a plain array of exactly one element is unwrapped. Longer and empty
// arrays are kept whole, as a single element.
#[test]
fn test_create_unwraps_singleton_array() {
    let seq = create_sequence(Some(Value::Array(vec![int(5)])));
    assert_eq!(seq.len(), 1);
    assert_eq!(seq[0], int(5));
}

#[test]
fn test_create_keeps_longer_array_whole() {
    let pair = Value::Array(vec![int(5), int(6)]);
    let seq = create_sequence(Some(pair.clone()));
    assert_eq!(seq.len(), 1);
    assert_eq!(seq[0], pair);
}

#[test]
fn test_create_keeps_empty_array_whole() {
    let seq = create_sequence(Some(Value::Array(vec![])));
    assert_eq!(seq.len(), 1);
    assert_eq!(seq[0], Value::Array(vec![]));
}

#[test]
fn test_create_does_not_unwrap_sequences() {
    let inner = create_sequence(Some(int(1)));
    let seq = create_sequence(Some(Value::Sequence(inner.clone())));
    assert_eq!(seq.len(), 1);
    assert_eq!(seq[0], Value::Sequence(inner));
}

#[test]
fn test_is_sequence() {
    assert!(is_sequence(&Value::Sequence(create_sequence(None))));
    assert!(!is_sequence(&Value::from(json!([1, 2, 3]))));
    assert!(!is_sequence(&Value::Sequence(Sequence::new())));
    assert!(!is_sequence(&Value::Sequence(
        [int(1), int(2)].into_iter().collect()
    )));
    assert!(!is_sequence(&int(1)));
}

#[test]
fn test_flags_do_not_change_classification() {
    let seq = create_sequence(None)
        .with_outer_wrapper(true)
        .with_tuple_stream(true)
        .with_keep_singleton(true);
    assert!(is_sequence(&Value::Sequence(seq)));
}

#[test]
fn test_append_preserves_evaluation_order_and_repeats() {
    let mut seq = create_sequence(None);
    for n in [3, 1, 3, 2] {
        seq.append(int(n));
    }
    let got: Vec<Value> = seq.iter().cloned().collect();
    assert_eq!(got, vec![int(3), int(1), int(3), int(2)]);
}

#[test]
fn test_collapse_rules() {
    assert_eq!(create_sequence(None).collapse(), None);
    assert_eq!(create_sequence(Some(int(7))).collapse(), Some(int(7)));

    let mut many = create_sequence(Some(int(1)));
    many.push(int(2));
    assert_eq!(
        many.clone().collapse(),
        Some(Value::Sequence(many))
    );

    let kept = create_sequence(Some(int(7))).with_keep_singleton(true);
    assert_eq!(kept.clone().collapse(), Some(Value::Sequence(kept)));
}

#[test]
fn test_into_array_drops_sequence_semantics() {
    let mut seq = create_sequence(Some(int(1)));
    seq.push(int(2));
    let arr = seq.into_array();
    assert!(!is_sequence(&arr));
    assert_eq!(arr, Value::Array(vec![int(1), int(2)]));
}

#[test]
fn test_serialize_collapses() {
    assert_eq!(
        serde_json::Value::from(Value::Sequence(create_sequence(Some(int(1))))),
        json!(1)
    );
    assert_eq!(
        serde_json::Value::from(Value::Sequence(
            create_sequence(Some(int(1))).with_keep_singleton(true)
        )),
        json!([1])
    );
    assert_eq!(
        serde_json::Value::from(Value::Sequence(create_sequence(None))),
        json!(null)
    );
}
