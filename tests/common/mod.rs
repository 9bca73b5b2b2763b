// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use typedcfg::service::ConfigStore;

/// The store used throughout the documentation:
/// `{"retries": "3", "timeouts": ["10", "20", "bad"]}`.
#[allow(dead_code)]
pub fn example_store() -> ConfigStore {
    ConfigStore::builder()
        .with_value("retries", "3")
        .with_value("timeouts", vec!["10", "20", "bad"])
        .build()
}

/// Builds a store from a YAML document, the way an application's loader would.
#[allow(dead_code)]
pub fn store_from_yaml(document: &str) -> ConfigStore {
    serde_yaml::from_str(document).expect("test document must be valid YAML")
}
