//! Shared test fixtures for the war-packager workspace.
//!
//! Dev-dependency only. [`TestWorkspace`] writes configuration, pointer and
//! BOM documents into a temporary directory so loader and resolver tests can
//! exercise real files.

pub mod workspace;

pub use workspace::TestWorkspace;
