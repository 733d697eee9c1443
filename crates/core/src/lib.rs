//! Domain types and pure rules shared by the `printspec` crates.
//!
//! Nothing in here touches the database or the filesystem.

pub mod error;
pub mod patch;
pub mod types;
pub mod upload;
