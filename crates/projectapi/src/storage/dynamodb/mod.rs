//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository trait
//! using `aws-sdk-dynamodb`. All projects share the `PROJECT` partition key
//! and are sorted by their ID.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
