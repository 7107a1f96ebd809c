//! Subprocess launcher.
//!
//! Turns layered options into a [`LaunchConfig`], the config into a
//! [`CommandLine`], runs it, and classifies the exit code as an [`Outcome`]:
//!
//! - [`LaunchOptions`]: keyword-style options, stacked command line over
//!   preset over config defaults
//! - [`Ambient`]: session values that `inherit` flags resolve to
//! - `precedence`: precedence of fast/prepare/precompile/compiled-modules
//! - [`launch`]: prepare, spawn, wait, classify

mod ambient;
mod command;
mod executor;
mod model;
mod options;
mod outcome;
mod precedence;
mod target;

pub use ambient::Ambient;
pub use command::CommandLine;
pub use executor::{launch, run_to_exit};
pub use model::LaunchConfig;
pub use options::{LaunchOptions, Preset};
pub use outcome::Outcome;
pub use target::{Target, resolve_target};
