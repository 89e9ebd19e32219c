//! Presence-based overlay of a decoded payload onto existing options
//!
//! Every top-level field is optional so that keys missing from the payload
//! leave the target untouched. Sequences present in the payload replace the
//! target's sequence; a `null` sequence empties it. A `null` scalar other
//! than `Name` leaves the target untouched.

use std::io::Read;

use serde::de::Unexpected;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::nullable;
use super::types::{Network, Options, Property};

/// Top-level fields present in one decoded payload.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct OptionsOverlay {
    #[serde(deserialize_with = "nullable::present_seq")]
    all_deployment_options: Option<Vec<String>>,
    deployment: Option<String>,

    #[serde(deserialize_with = "nullable::present_seq")]
    all_disk_provisioning_options: Option<Vec<String>>,
    disk_provisioning: Option<String>,

    #[serde(rename = "AllIPAllocationPolicyOptions", deserialize_with = "nullable::present_seq")]
    all_ip_allocation_policy_options: Option<Vec<String>>,
    #[serde(rename = "IPAllocationPolicy")]
    ip_allocation_policy: Option<String>,

    #[serde(rename = "AllIPProtocolOptions", deserialize_with = "nullable::present_seq")]
    all_ip_protocol_options: Option<Vec<String>>,
    #[serde(rename = "IPProtocol")]
    ip_protocol: Option<String>,

    #[serde(deserialize_with = "nullable::present_seq")]
    property_mapping: Option<Vec<Property>>,
    #[serde(deserialize_with = "nullable::present_seq")]
    network_mapping: Option<Vec<Network>>,

    annotation: Option<String>,

    power_on: Option<bool>,
    inject_ovf_env: Option<bool>,
    #[serde(rename = "WaitForIP")]
    wait_for_ip: Option<bool>,

    // Outer: key present. Inner: null clears the override.
    #[serde(deserialize_with = "present")]
    name: Option<Option<String>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl OptionsOverlay {
    /// Decode the first JSON value from `reader`.
    ///
    /// Bytes after the first complete value are not read. The value must be
    /// an object or `null`; `null` overlays nothing.
    pub(crate) fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        let value = Value::deserialize(&mut de)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        if !value.is_object() {
            return Err(serde::de::Error::invalid_type(
                unexpected(&value),
                &"an options object",
            ));
        }
        serde_json::from_value(value)
    }

    /// Overwrite the fields of `options` that were present in the payload.
    pub(crate) fn apply(self, options: &mut Options) {
        set(&mut options.all_deployment_options, self.all_deployment_options);
        set(&mut options.deployment, self.deployment);
        set(
            &mut options.all_disk_provisioning_options,
            self.all_disk_provisioning_options,
        );
        set(&mut options.disk_provisioning, self.disk_provisioning);
        set(
            &mut options.all_ip_allocation_policy_options,
            self.all_ip_allocation_policy_options,
        );
        set(&mut options.ip_allocation_policy, self.ip_allocation_policy);
        set(&mut options.all_ip_protocol_options, self.all_ip_protocol_options);
        set(&mut options.ip_protocol, self.ip_protocol);
        set(&mut options.property_mapping, self.property_mapping);
        set(&mut options.network_mapping, self.network_mapping);
        set(&mut options.annotation, self.annotation);
        set(&mut options.power_on, self.power_on);
        set(&mut options.inject_ovf_env, self.inject_ovf_env);
        set(&mut options.wait_for_ip, self.wait_for_ip);
        set(&mut options.name, self.name);
    }
}
