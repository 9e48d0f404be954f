//! Detect the current release version of a project from its build manifests.
//!
//! - [`reader`]: one version reader per build-manifest format, and their ordered registry
//! - [`strategy`]: picks a reader and candidate files, returns the first version found
//! - [`version`]: version normalization and error types
//! - [`config`]: JSON configuration for enabling or disabling readers

pub mod config;
pub mod reader;
pub mod strategy;
pub mod version;

pub use reader::{ReaderKind, ReaderRegistry, VersionReader};
pub use strategy::{Detection, Strategy};
pub use version::error::{DetectError, VersionError};
