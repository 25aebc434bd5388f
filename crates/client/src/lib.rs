//! projectapi_client - CLI client for the project API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::ProjectApiClient;
pub use error::{ClientError, Result};
