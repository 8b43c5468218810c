//! E2 termination and configuration records, stored as JSON.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Lifecycle state of an E2T instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum E2TInstanceState {
    #[default]
    Active,
    ToBeDeleted,
    RoutingManagerFailure,
}

/// An E2 termination instance, stored under `E2TInstance:<address>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct E2TInstance {
    pub address: String,
    pub pod_name: String,
    pub associated_ran_list: Vec<String>,
    /// Unix time in nanoseconds.
    pub keep_alive_timestamp: i64,
    pub state: E2TInstanceState,
    #[serde(rename = "deletionTimeStamp")]
    pub deletion_timestamp: i64,
}

impl E2TInstance {
    /// A fresh, active instance with its keep-alive set to now.
    pub fn new(address: impl Into<String>, pod_name: impl Into<String>) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_nanos()).unwrap_or(i64::MAX))
            .unwrap_or_default();

        Self {
            address: address.into(),
            pod_name: pod_name.into(),
            keep_alive_timestamp: now,
            ..Default::default()
        }
    }
}

/// Platform-wide settings, stored under `GENERAL`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralConfiguration {
    pub enable_ric: bool,
}
