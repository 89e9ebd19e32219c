//! ovfdeploy - deployment options loader for template-based VM provisioning
//!
//! Resolves exactly one options source (a file or an inline JSON payload)
//! into a typed [`Options`] value for the deployment pipeline.

pub mod cli;
pub mod error;
pub mod options;

// Re-exports for convenience
pub use error::{OptionsError, OptionsResult};
pub use options::{
    KeyValue, LoaderState, Network, Options, OptionsArgs, OptionsFlag, OvfProperty, Property,
    PropertyConfigurationValue,
};
