use serde::Deserialize;
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(context(false), display("PostgREST request failed"))]
    Http {
        #[snafu(implicit)]
        location: Location,
        source: http_client::Error,
    },
}

/// Error body returned by PostgREST and the gateway in front of it.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl Error {
    /// The message the store reported, falling back to the raw body and
    /// finally to the transport error.
    pub fn store_message(&self) -> String {
        match self {
            Error::Http { source, .. } => match source.body() {
                Some(body) => match serde_json::from_str::<ErrorBody>(body) {
                    Ok(parsed) => parsed.message,
                    Err(_) if !body.is_empty() => body.to_string(),
                    Err(_) => source.to_string(),
                },
                None => source.to_string(),
            },
        }
    }
}
