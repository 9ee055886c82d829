//! Source reading for the WAR packager
//!
//! Everything that touches the filesystem on the way in lives here: path
//! normalization, retrying text reads, and format detection for configuration
//! and BOM documents. The resolution engine in `warpack-core` never opens a
//! file on its own.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigStore, Format};
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use path::NormalizedPath;
