use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Missing required configuration value '{key}'"))]
    MissingConfiguration {
        #[snafu(implicit)]
        location: Location,
        key: String,
    },
    #[snafu(display("Failed to load configuration"))]
    Config {
        #[snafu(implicit)]
        location: Location,
        source: config::ConfigError,
    },
    #[snafu(display("Unknown display locale '{name}'"))]
    InvalidLocale {
        #[snafu(implicit)]
        location: Location,
        name: String,
        source: num_format::Error,
    },
    #[snafu(display("Failed to construct the species store"))]
    Store {
        #[snafu(implicit)]
        location: Location,
        source: postgrest::Error,
    },
    #[snafu(display("Failed to load species"))]
    LoadSpecies {
        #[snafu(implicit)]
        location: Location,
        source: species_core::Error,
    },
}
