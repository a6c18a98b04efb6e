//! almanac_cli - command line front end for the almanac year-data engine.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod session;

pub use error::{CliError, Result};
