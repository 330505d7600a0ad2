pub mod config;
pub mod release;

pub use config::{CommandArgs, Config, ConfigError};
pub use release::{NewRelease, Release, ReleasePatch};
