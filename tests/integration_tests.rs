// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for typed lookups through the public API.
//!
//! These tests drive `ConfigStore` the way an application would: build or deserialize a
//! store once, then read typed values from it.

mod common;

use common::{example_store, store_from_yaml};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread;
use typedcfg::prelude::*;

#[test]
fn test_get_integer() {
    let store = example_store();
    assert_eq!(store.get::<i32>("retries").unwrap(), 3);
}

#[test]
fn test_get_sequence_with_bad_element() {
    let store = example_store();
    let err = store.get::<Vec<i32>>("timeouts").unwrap_err();

    assert_eq!(err.index(), Some(2));
    match err {
        ConfigError::ConversionFailed {
            key,
            expected_type,
            raw_value,
            ..
        } => {
            assert_eq!(key, "timeouts");
            assert_eq!(expected_type, "i32");
            assert_eq!(raw_value, "bad");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_get_optional_missing() {
    let store = example_store();
    assert_eq!(store.get_optional::<i32>("missing").unwrap(), None);
}

#[test]
fn test_get_missing_is_not_found() {
    let store = example_store();
    assert!(matches!(
        store.get::<i32>("missing"),
        Err(ConfigError::NotFound { ref key }) if key == "missing"
    ));
    assert!(matches!(
        store.get::<Vec<BTreeMap<String, bool>>>("missing"),
        Err(ConfigError::NotFound { .. })
    ));
}

#[test]
fn test_absence_and_malformed_are_distinct() {
    let store = example_store();

    let absent = store.get_optional::<Vec<i32>>("nothing");
    assert!(matches!(absent, Ok(None)));

    let malformed = store.get_optional::<Vec<i32>>("timeouts");
    assert!(matches!(malformed, Err(ConfigError::ConversionFailed { .. })));
}

#[test]
fn test_sequence_as_strings_succeeds() {
    let store = example_store();
    let timeouts: Vec<String> = store.get("timeouts").unwrap();
    assert_eq!(timeouts, vec!["10", "20", "bad"]);
}

#[test]
fn test_yaml_loaded_store() {
    let store = store_from_yaml(
        r#"
server:
  listen: "127.0.0.1:8080"
  workers: 4
  tls: off
retries: 3
ratios: [0.5, 0.25]
limits:
  cpu: 2
  memory: 512
tags: [web, web, api]
proxy: ~
"#,
    );

    let server: BTreeMap<String, String> = store.get("server").unwrap();
    let listen = store
        .get_with("server", &MappingOf::new(resolve::<String>()))
        .unwrap()
        .remove("listen")
        .unwrap();
    assert_eq!(server["workers"], "4");
    assert_eq!(listen.parse::<SocketAddr>().unwrap().port(), 8080);

    assert_eq!(store.get::<u8>("retries").unwrap(), 3);
    assert_eq!(store.get::<Vec<f64>>("ratios").unwrap(), vec![0.5, 0.25]);

    let limits: HashMap<String, u32> = store.get("limits").unwrap();
    assert_eq!(limits["memory"], 512);

    let tags: HashSet<String> = store.get("tags").unwrap();
    assert_eq!(tags.len(), 2);

    assert_eq!(store.get::<Option<String>>("proxy").unwrap(), None);
}

#[test]
fn test_yaml_nested_mapping_error_path() {
    let store = store_from_yaml(
        r#"
pools:
  eu: [1, 2]
  us: [3, many]
"#,
    );

    let err = store
        .get::<BTreeMap<String, Vec<u16>>>("pools")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to convert configuration value 'many' for key 'pools.us[1]' to type u16"
    );
}

#[test]
fn test_yaml_bool_forms() {
    let store = store_from_yaml("flags: [true, no, On, 0]\n");
    let flags: Vec<bool> = store.get("flags").unwrap();
    assert_eq!(flags, vec![true, false, true, false]);
}

#[test]
fn test_delimited_value_from_flat_source() {
    let store = ConfigStore::builder()
        .with_value("peers", "10.0.0.1:7000, 10.0.0.2:7000")
        .build();

    let peers: Vec<SocketAddr> = store
        .get_with("peers", &Delimited::new(resolve::<SocketAddr>()))
        .unwrap();
    assert_eq!(peers.len(), 2);
    assert_eq!(peers[1].port(), 7000);

    // Without the explicit converter the scalar is not a sequence.
    assert!(store.get::<Vec<SocketAddr>>("peers").is_err());
}

#[test]
fn test_idempotent_reads() {
    let store = example_store();
    for _ in 0..3 {
        assert_eq!(store.get::<i64>("retries").unwrap(), 3);
        assert_eq!(store.get::<Vec<i32>>("timeouts").unwrap_err().index(), Some(2));
    }
    assert_eq!(store, example_store());
}

#[test]
fn test_concurrent_readers() {
    let store = Arc::new(example_store());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.get::<u32>("retries").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}

#[test]
fn test_store_serializes_back() {
    let store = example_store();
    let text = serde_yaml::to_string(&store).unwrap();
    let back: ConfigStore = serde_yaml::from_str(&text).unwrap();
    assert_eq!(back, store);
}
