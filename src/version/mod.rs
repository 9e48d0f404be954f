//! Version handling shared by every reader
//!
//! # Modules
//!
//! - [`normalize`]: turns a located version substring into `major.minor.patch`
//! - [`error`]: error types for normalization and detection

pub mod error;
pub mod normalize;

pub use normalize::normalize_version;
