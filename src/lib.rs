// Thumbor URL builder library

pub mod builder;
pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod url;

pub use builder::dynamic::Call;
pub use builder::{BuildOutput, Builder};
pub use command::{CommandSet, Filter, FilterArg, HAlign, TrimSource, VAlign};
pub use config::ThumborConfig;
pub use error::{BuilderError, ConfigError};
pub use url::Url;
