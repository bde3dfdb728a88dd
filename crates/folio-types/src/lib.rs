//! Foundation types for folio-os.
//!
//! Platform-agnostic pieces shared by every folio crate: the error type,
//! keyboard and pointer input, window geometry, and runtime configuration.

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
