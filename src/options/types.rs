//! Deployment options type definitions

use serde::{Deserialize, Serialize};

use super::nullable;

/// Generic key/value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyValue {
    #[serde(rename = "Key", deserialize_with = "nullable::value")]
    pub key: String,
    #[serde(rename = "Value", deserialize_with = "nullable::value")]
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One allowed value of a template property for a given configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PropertyConfigurationValue {
    #[serde(deserialize_with = "nullable::value")]
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
}

/// Declaration of a configurable property, as advertised by the template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OvfProperty {
    #[serde(deserialize_with = "nullable::value")]
    pub key: String,
    #[serde(rename = "Type", deserialize_with = "nullable::value")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifiers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_configurable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable::seq")]
    pub values: Vec<PropertyConfigurationValue>,
}

/// Property overlay entry.
///
/// Serialized flat: `{"Key": "...", "Value": "...", "Spec": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    #[serde(flatten)]
    pub key_value: KeyValue,

    /// Originating property declaration; informational only.
    #[serde(rename = "Spec", skip_serializing_if = "Option::is_none")]
    pub spec: Option<OvfProperty>,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key_value: KeyValue::new(key, value),
            spec: None,
        }
    }

    pub fn with_spec(mut self, spec: OvfProperty) -> Self {
        self.spec = Some(spec);
        self
    }

    pub fn key(&self) -> &str {
        &self.key_value.key
    }

    pub fn value(&self) -> &str {
        &self.key_value.value
    }
}

/// Maps a network declared by the template onto a target network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Network {
    /// Network name as declared in the template
    #[serde(deserialize_with = "nullable::value")]
    pub name: String,
    /// Target network substituted at deploy time
    #[serde(deserialize_with = "nullable::value")]
    pub network: String,
}

impl Network {
    pub fn new(name: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            network: network.into(),
        }
    }
}

/// Deployment options for a VM created from a template.
///
/// The `all_*` lists advertise the legal choices and are filled in by
/// template introspection; the matching selected values are not checked
/// against them here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Options {
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable::seq")]
    pub all_deployment_options: Vec<String>,
    #[serde(deserialize_with = "nullable::value")]
    pub deployment: String,

    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable::seq")]
    pub all_disk_provisioning_options: Vec<String>,
    #[serde(deserialize_with = "nullable::value")]
    pub disk_provisioning: String,

    #[serde(
        rename = "AllIPAllocationPolicyOptions",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "nullable::seq"
    )]
    pub all_ip_allocation_policy_options: Vec<String>,
    #[serde(rename = "IPAllocationPolicy", deserialize_with = "nullable::value")]
    pub ip_allocation_policy: String,

    #[serde(
        rename = "AllIPProtocolOptions",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "nullable::seq"
    )]
    pub all_ip_protocol_options: Vec<String>,
    #[serde(rename = "IPProtocol", deserialize_with = "nullable::value")]
    pub ip_protocol: String,

    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable::seq")]
    pub property_mapping: Vec<Property>,

    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable::seq")]
    pub network_mapping: Vec<Network>,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable::value")]
    pub annotation: String,

    #[serde(deserialize_with = "nullable::value")]
    pub power_on: bool,
    #[serde(deserialize_with = "nullable::value")]
    pub inject_ovf_env: bool,
    #[serde(rename = "WaitForIP", deserialize_with = "nullable::value")]
    pub wait_for_ip: bool,

    /// VM name override; `None` keeps the template-derived name.
    pub name: Option<String>,
}

impl Options {
    /// Render as an indented JSON payload.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render as a single-line JSON payload.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
