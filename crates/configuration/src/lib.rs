use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DataSettings, ReportSettings, StrategyParams};

/// Loads the application configuration from the `config.toml` file.
///
/// The file is optional: when it is absent (or only partially filled in),
/// the documented defaults apply. This function is the primary entry point
/// for this crate.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`;
        // a missing file is not an error.
        .add_source(config::File::with_name("config").required(false))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    Ok(config)
}
