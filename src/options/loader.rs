//! Options loading from a file path or an inline JSON payload

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use clap::{Args, Command, FromArgMatches};
use tracing::debug;

use crate::error::{OptionsError, OptionsResult};

use super::overlay::OptionsOverlay;
use super::types::Options;

/// Lifecycle of an [`OptionsFlag`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoaderState {
    /// Constructed, flags not yet bound
    #[default]
    Unconfigured,
    /// Inputs set; waiting for `process`
    SourcesBound,
    /// `process` succeeded; options are authoritative
    Resolved,
    /// `process` failed; options contents are unspecified
    Failed,
}

/// Where `process` reads the payload from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source<'a> {
    File(&'a str),
    Inline(&'a str),
    None,
}

/// Raw flag values: a file path and an inline payload, both empty by default.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsArgs {
    /// Options spec file path for VM deployment
    #[arg(long = "options", value_name = "PATH", default_value_t = String::new(), hide_default_value = true)]
    pub path: String,

    /// Options spec string for VM deployment
    #[arg(long = "options.json", value_name = "JSON", default_value_t = String::new(), hide_default_value = true)]
    pub json: String,
}

/// Deployment options supplied as `--options <PATH>` or `--options.json <JSON>`.
#[derive(Debug, Clone, Default)]
pub struct OptionsFlag {
    args: OptionsArgs,
    options: Options,
    state: LoaderState,
}

impl From<OptionsArgs> for OptionsFlag {
    fn from(args: OptionsArgs) -> Self {
        Self {
            args,
            options: Options::default(),
            state: LoaderState::SourcesBound,
        }
    }
}

impl OptionsFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the `--options` and `--options.json` flags to `cmd`.
    pub fn register(cmd: Command) -> Command {
        OptionsArgs::augment_args(cmd)
    }

    /// Bind the flag values parsed by a command built with [`Self::register`].
    pub fn from_matches(matches: &clap::ArgMatches) -> Result<Self, clap::Error> {
        OptionsArgs::from_arg_matches(matches).map(Self::from)
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.args.path = path.into();
        self.state = LoaderState::SourcesBound;
        self
    }

    pub fn with_json(mut self, json: impl Into<String>) -> Self {
        self.args.json = json.into();
        self.state = LoaderState::SourcesBound;
        self
    }

    pub fn args(&self) -> &OptionsArgs {
        &self.args
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    /// Resolved options; `None` until `process` has succeeded.
    pub fn options(&self) -> Option<&Options> {
        match self.state {
            LoaderState::Resolved => Some(&self.options),
            _ => None,
        }
    }

    pub fn into_options(self) -> Option<Options> {
        match self.state {
            LoaderState::Resolved => Some(self.options),
            _ => None,
        }
    }

    fn source(&self) -> OptionsResult<Source<'_>> {
        let OptionsArgs { path, json } = &self.args;
        match (path.is_empty(), json.is_empty()) {
            (false, false) => Err(OptionsError::ConflictingSources),
            (false, true) => Ok(Source::File(path)),
            (true, false) => Ok(Source::Inline(json)),
            (true, true) => Ok(Source::None),
        }
    }

    /// Resolve the configured source and decode it into the options.
    ///
    /// Supplying neither source is not an error; the options stay at their
    /// zero value. Fields absent from the payload keep their current value.
    ///
    /// Meant to run once. Calling it again re-decodes over the current
    /// options and sets the state from that call alone, so a `Failed`
    /// loader can become `Resolved`.
    pub fn process(&mut self) -> OptionsResult<()> {
        let result = self.decode();
        self.state = match result {
            Ok(()) => LoaderState::Resolved,
            Err(_) => LoaderState::Failed,
        };
        result
    }

    fn decode(&mut self) -> OptionsResult<()> {
        let overlay = match self.source()? {
            Source::File(path) => {
                debug!(path, "loading deployment options from file");
                let file = File::open(path).map_err(|source| OptionsError::Io {
                    path: PathBuf::from(path),
                    source,
                })?;
                read_overlay(BufReader::new(file))?
            }
            Source::Inline(json) => {
                debug!(bytes = json.len(), "loading inline deployment options");
                read_overlay(json.as_bytes())?
            }
            Source::None => {
                debug!("no deployment options supplied");
                return Ok(());
            }
        };

        overlay.apply(&mut self.options);
        debug!(
            properties = self.options.property_mapping.len(),
            networks = self.options.network_mapping.len(),
            "deployment options decoded"
        );
        Ok(())
    }
}

fn read_overlay<R: Read>(reader: R) -> OptionsResult<OptionsOverlay> {
    Ok(OptionsOverlay::from_reader(reader)?)
}
