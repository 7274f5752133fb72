//! The closed enumeration of Mason's opt-in preview features.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opt-in preview features recognized by this build of Mason.
///
/// The set is closed: features are added or retired when the tool itself is
/// built, never at runtime. A feature's string name is its stable public
/// identity and round-trips through [`Feature::from_name`]. Retired features
/// keep their name so that run configurations which still mention them
/// resolve cleanly, but they are inert: they cannot be enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Feature {
    ImprovedDependencyResolution,
    ArtifactMetadata,
    /// Retired: output caching graduated to default behavior.
    TaskOutputCaching,
}

const FEATURES: &[Feature] = &[
    Feature::ImprovedDependencyResolution,
    Feature::ArtifactMetadata,
    Feature::TaskOutputCaching,
];

impl Feature {
    /// Every defined feature, active or retired, in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Feature] {
        FEATURES
    }

    /// Stable public name. Lookup is exact and case-sensitive.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Feature::ImprovedDependencyResolution => "IMPROVED_DEPENDENCY_RESOLUTION",
            Feature::ArtifactMetadata => "ARTIFACT_METADATA",
            Feature::TaskOutputCaching => "TASK_OUTPUT_CACHING",
        }
    }

    /// Whether this feature is currently offered as a preview.
    #[must_use]
    pub const fn is_active(self) -> bool {
        match self {
            Feature::ImprovedDependencyResolution | Feature::ArtifactMetadata => true,
            Feature::TaskOutputCaching => false,
        }
    }

    /// Looks a feature up by its exact name.
    pub fn from_name(name: &str) -> Result<Self, UnknownFeatureError> {
        Self::all()
            .iter()
            .copied()
            .find(|feature| feature.name() == name)
            .ok_or_else(|| UnknownFeatureError::new(name))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = UnknownFeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// A feature name that does not match any defined [`Feature`].
///
/// The message is shown to users as-is: it carries the offending name
/// verbatim and no internal type identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("there is no feature named '{name}'")]
pub struct UnknownFeatureError {
    name: String,
}

impl UnknownFeatureError {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name that failed to resolve.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
