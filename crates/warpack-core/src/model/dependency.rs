use serde::{Deserialize, Serialize};

/// Where an artifact comes from: a released version or a source checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Git repository URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    /// Local directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl SourceInfo {
    pub fn version(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..Self::default()
        }
    }
}

/// Resolved identity of one artifact bundled into the WAR (core or plugin).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyInfo {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceInfo>,
}

impl DependencyInfo {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: SourceInfo) -> Self {
        self.source = Some(source);
        self
    }

    /// Pinned version, if the source declares one.
    pub fn version(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.version.as_deref())
    }

    /// A released artifact has a version and no checkout pointer.
    pub fn is_release(&self) -> bool {
        match &self.source {
            Some(source) => source.version.is_some() && source.git.is_none() && source.dir.is_none(),
            None => false,
        }
    }

    /// `groupId:artifactId[:version]`
    pub fn coordinates(&self) -> String {
        match self.version() {
            Some(version) => format!("{}:{}:{}", self.group_id, self.artifact_id, version),
            None => format!("{}:{}", self.group_id, self.artifact_id),
        }
    }
}

impl std::fmt::Display for DependencyInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coordinates())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_include_version_when_pinned() {
        let dep = DependencyInfo::new("org.jenkins-ci.plugins", "git")
            .with_source(SourceInfo::version("3.9.1"));
        assert_eq!(dep.coordinates(), "org.jenkins-ci.plugins:git:3.9.1");
        assert!(dep.is_release());
    }

    #[test]
    fn git_checkout_is_not_a_release() {
        let dep = DependencyInfo::new("org.jenkins-ci.plugins", "git").with_source(SourceInfo {
            git: Some("https://github.com/jenkinsci/git-plugin.git".into()),
            commit: Some("master".into()),
            ..SourceInfo::default()
        });
        assert_eq!(dep.coordinates(), "org.jenkins-ci.plugins:git");
        assert!(!dep.is_release());
    }
}
