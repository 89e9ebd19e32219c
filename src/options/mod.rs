//! Deployment options for VMs provisioned from a template
//!
//! An operator supplies the options either as a file (`--options`) or as an
//! inline JSON string (`--options.json`); never both. The payload is decoded
//! by presence: keys missing from it leave the zero value in place.

mod loader;
mod nullable;
mod overlay;
mod types;

pub use loader::{LoaderState, OptionsArgs, OptionsFlag};
pub use types::{KeyValue, Network, Options, OvfProperty, Property, PropertyConfigurationValue};
