//! Output artifact locations
//!
//! Pure derivations from the build working directory, bundle artifact id and
//! build version. Nothing here touches the filesystem.

use std::path::PathBuf;
use warpack_fs::NormalizedPath;

use crate::model::{BuildSettings, Config, PackageInfo};

/// Output directory below the build working directory.
pub const OUTPUT_TARGET_DIR: &str = "output/target";

pub const ARTIFACT_EXTENSION: &str = "war";
pub const MANIFEST_EXTENSION: &str = "bom.yml";

fn output_file(settings: &BuildSettings, bundle: &PackageInfo, extension: &str) -> PathBuf {
    let file_name = format!("{}-{}.{}", bundle.artifact_id, settings.version, extension);
    NormalizedPath::new(&settings.tmp_dir)
        .join(OUTPUT_TARGET_DIR)
        .join(&file_name)
        .to_native()
}

/// `{tmpDir}/output/target/{artifactId}-{version}.war`
pub fn output_artifact_path(settings: &BuildSettings, bundle: &PackageInfo) -> PathBuf {
    output_file(settings, bundle, ARTIFACT_EXTENSION)
}

/// `{tmpDir}/output/target/{artifactId}-{version}.bom.yml`
pub fn output_manifest_path(settings: &BuildSettings, bundle: &PackageInfo) -> PathBuf {
    output_file(settings, bundle, MANIFEST_EXTENSION)
}

impl Config {
    /// `None` until a bundle identity is present.
    pub fn output_artifact_path(&self) -> Option<PathBuf> {
        self.bundle
            .as_ref()
            .map(|bundle| output_artifact_path(&self.build_settings, bundle))
    }

    pub fn output_manifest_path(&self) -> Option<PathBuf> {
        self.bundle
            .as_ref()
            .map(|bundle| output_manifest_path(&self.build_settings, bundle))
    }
}
