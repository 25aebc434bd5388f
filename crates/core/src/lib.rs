//! projectapi_core - Project model, storage mapping and repository contract.
//!
//! Everything in this crate is pure: no I/O, no runtime. The server crate
//! provides the storage backends and the HTTP surface.

pub mod project;
pub mod serde;
pub mod storage;
