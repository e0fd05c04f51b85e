//! Property-based tests for the round-trip guarantee
//!
//! Generated documents hold scalars, inline lists and one level of sub maps,
//! which is everything the text format can express faithfully. The hostile
//! generators add strings that cannot be written faithfully; strict encoding
//! must refuse those rather than write text that reads back differently.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_xini::{
    decode, encode, from_str, to_string, Document, EncodeOptions, Encoder, IniMap, Value,
};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::Float),
        any::<bool>().prop_map(Value::Bool),
        "[a-zA-Z0-9 _.,+'\"-]{0,12}".prop_map(Value::String),
        "[a-z ]{0,6}(\n[a-z ]{0,6}){1,3}".prop_map(Value::String),
    ]
}

fn list_item() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        any::<bool>().prop_map(Value::Bool),
        "[a-zA-Z0-9 _.,-]{0,10}".prop_map(Value::String),
    ]
}

/// Multi-line strings whose lines may collide with the block sentinels.
fn hostile_scalar() -> impl Strategy<Value = Value> {
    let line = prop_oneof![
        4 => "[a-z '\"]{0,5}",
        1 => Just("'''".to_string()),
        1 => Just("  \"\"\" ".to_string()),
        1 => Just("a\r".to_string()),
    ];
    prop_oneof![
        scalar(),
        prop::collection::vec(line, 2..5).prop_map(|lines| Value::String(lines.join("\n"))),
    ]
}

/// List items with both quote kinds and commas.
fn hostile_item() -> impl Strategy<Value = Value> {
    prop_oneof![
        list_item(),
        "[a-z ,'\"]{0,8}".prop_map(Value::String),
    ]
}

fn document_of(
    scalar: BoxedStrategy<Value>,
    item: BoxedStrategy<Value>,
) -> impl Strategy<Value = Document> {
    let entry = prop_oneof![
        3 => scalar.clone(),
        1 => prop::collection::vec(item, 0..5).prop_map(Value::List),
    ]
    .boxed();
    let sub_map = prop::collection::btree_map("[a-z]{1,6}", scalar, 1..4)
        .prop_map(|entries| Value::Map(entries.into_iter().collect::<IniMap>()));
    let section = prop::collection::btree_map(
        "[a-z][a-z0-9_]{0,6}",
        prop_oneof![3 => entry.clone(), 1 => sub_map],
        1..5,
    )
    .prop_map(|entries| Value::Map(entries.into_iter().collect::<IniMap>()));

    (
        prop::collection::btree_map("d_[a-z0-9]{1,6}", entry, 0..5),
        prop::collection::btree_map("s_[a-z0-9]{1,6}", section, 0..4),
    )
        .prop_map(|(defaults, sections)| {
            defaults.into_iter().chain(sections).collect::<Document>()
        })
}

fn document() -> impl Strategy<Value = Document> {
    document_of(scalar().boxed(), list_item().boxed())
}

fn hostile_document() -> impl Strategy<Value = Document> {
    document_of(hostile_scalar().boxed(), hostile_item().boxed())
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Record {
    id: i64,
    enabled: bool,
    label: String,
    values: Vec<i32>,
    retries: Option<u8>,
}

proptest! {
    #[test]
    fn prop_document_roundtrip(doc in document()) {
        let text = encode(&doc).unwrap();
        let parsed = decode(&text).unwrap();
        prop_assert_eq!(parsed, doc, "encoded text was:\n{}", text);
    }

    #[test]
    fn prop_encoding_is_stable(doc in document()) {
        let text = encode(&doc).unwrap();
        let again = encode(&decode(&text).unwrap()).unwrap();
        prop_assert_eq!(again, text);
    }

    #[test]
    fn prop_strict_output_reads_back(doc in hostile_document()) {
        let strict = Encoder::new(EncodeOptions::strict());
        if let Ok(text) = strict.encode(&doc) {
            prop_assert_eq!(decode(&text).unwrap(), doc, "encoded text was:\n{}", text);
        }
    }

    #[test]
    fn prop_lenient_output_keeps_top_level_keys(doc in hostile_document()) {
        let text = encode(&doc).unwrap();
        let parsed = decode(&text).unwrap();
        let expected: Vec<_> = doc.iter().map(|(k, _)| k.clone()).collect();
        let found: Vec<_> = parsed.iter().map(|(k, _)| k.clone()).collect();
        prop_assert_eq!(found, expected, "encoded text was:\n{}", text);
    }

    #[test]
    fn prop_record_roundtrip(
        id in any::<i64>(),
        enabled in any::<bool>(),
        label in "[a-zA-Z0-9 _.,'\"-]{0,16}",
        values in prop::collection::vec(any::<i32>(), 0..8),
        retries in proptest::option::of(any::<u8>()),
    ) {
        let record = Record { id, enabled, label, values, retries };
        prop_assert!(roundtrip(&record));
    }

    #[test]
    fn prop_decode_never_fails(text in "\\PC*") {
        prop_assert!(decode(&text).is_ok());
    }

    #[test]
    fn prop_comment_lines_are_ignored(
        doc in document(),
        comment in "[#;][a-z =\\[\\]]{0,12}",
    ) {
        let text = encode(&doc).unwrap();
        // Comment lines inside multi-line blocks are content, so skip those documents.
        prop_assume!(!text.contains("'''"));
        let commented: String = text
            .lines()
            .map(|line| format!("{}\n{}", comment, line))
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(decode(&commented).unwrap(), doc);
    }
}
