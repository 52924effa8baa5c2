#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! PostgREST-backed implementation of the species store.

use http_client::{HttpClient, RequestBuilder};

mod error;
pub mod settings;
mod species;

pub use error::{Error, Result};
pub use settings::Settings;

const DEFAULT_MAX_RETRIES: u32 = 3;

#[derive(Debug, Clone)]
pub struct PostgrestAdapter {
    client: HttpClient,
    url: String,
    api_key: String,
}

impl PostgrestAdapter {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut builder = HttpClient::builder()
            .max_retries(settings.max_retries.unwrap_or(DEFAULT_MAX_RETRIES));
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: settings.url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    pub(crate) fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url)
    }

    pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", self.api_key.as_str())
            .bearer(&self.api_key)
    }
}
