#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Thin wrapper around `reqwest` with tracing and transient-failure retries.

mod client;
mod error;
mod request;
mod response;

pub use reqwest::StatusCode;

pub use client::{HttpClient, HttpClientBuilder};
pub use error::{Error, Result};
pub use request::RequestBuilder;
pub use response::Response;
