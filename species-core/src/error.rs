use snafu::{Location, Snafu};

use crate::SpeciesId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to update species '{id}': {message}"))]
    StoreUpdate {
        #[snafu(implicit)]
        location: Location,
        id: SpeciesId,
        message: String,
    },
    #[snafu(display("Failed to query species: {message}"))]
    StoreQuery {
        #[snafu(implicit)]
        location: Location,
        message: String,
    },
}

impl Error {
    /// The message reported by the store, suitable for showing to a user.
    pub fn message(&self) -> &str {
        match self {
            Error::StoreUpdate { message, .. } | Error::StoreQuery { message, .. } => message,
        }
    }
}
