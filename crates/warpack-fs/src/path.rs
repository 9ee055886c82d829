//! Normalized path handling for configuration sources and output locations

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Output locations handed to packaging collaborators are derived from
/// configuration strings, so they are built on this type to come out the same
/// on every platform. Conversion to a native `PathBuf` happens only at I/O
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment. The segment may itself contain slashes.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let segment = segment.trim_start_matches('/');
        let joined = if self.inner.is_empty() {
            segment.to_string()
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner: joined }
    }

    /// Whether the path is rooted (`/x`, `//server/x` or `C:/x`).
    pub fn is_absolute(&self) -> bool {
        if self.inner.starts_with('/') {
            return true;
        }
        let bytes = self.inner.as_bytes();
        bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
    }

    /// Resolve this path against `base` unless it is already absolute.
    pub fn resolve_against(&self, base: &NormalizedPath) -> Self {
        if self.is_absolute() {
            self.clone()
        } else {
            base.join(&self.inner)
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            Some(idx) => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            None if trimmed.is_empty() => None,
            None => Some(Self {
                inner: ".".to_string(),
            }),
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Canonical form used to recognise the same source reached through
    /// different spellings. Falls back to the normalized string when the path
    /// cannot be canonicalized.
    pub fn canonical_key(&self) -> String {
        match dunce::canonicalize(self.to_native()) {
            Ok(canonical) => Self::new(canonical).inner,
            Err(_) => self.inner.clone(),
        }
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
