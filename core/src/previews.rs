//! Registry of opt-in preview features for the current run.

use std::collections::HashSet;

use mason_types::{Feature, UnknownFeatureError};

use crate::run_options::RunOptions;

/// Tracks which preview features the current run has opted into.
///
/// Constructed once per run from [`RunOptions`] and passed explicitly to
/// whatever needs it; there is no global instance. The enabled set only
/// ever grows, and only active features can enter it.
#[derive(Debug)]
pub struct FeaturePreviews {
    active_features: Vec<Feature>,
    enabled_features: HashSet<Feature>,
}

impl FeaturePreviews {
    /// Builds the registry, seeding the enabled set from run options.
    #[must_use]
    pub fn new(options: &RunOptions) -> Self {
        let active_features = Feature::all()
            .iter()
            .copied()
            .filter(|feature| feature.is_active())
            .collect();
        let mut previews = Self {
            active_features,
            enabled_features: HashSet::new(),
        };

        // Seeding goes through `enable` so the active gate applies.
        if options.improved_dependency_resolution() {
            previews.enable(Feature::ImprovedDependencyResolution);
        }
        if options.artifact_metadata() {
            previews.enable(Feature::ArtifactMetadata);
        }

        tracing::debug!(
            active = previews.active_features.len(),
            enabled = previews.enabled_features.len(),
            "feature previews initialized"
        );
        previews
    }

    /// Opts the run into `feature`.
    ///
    /// Enabling a retired feature is ignored; enabling an already-enabled
    /// feature changes nothing. Nothing ever leaves the enabled set.
    pub fn enable(&mut self, feature: Feature) {
        if feature.is_active() {
            self.enabled_features.insert(feature);
        } else {
            tracing::debug!(feature = feature.name(), "ignoring enable of retired feature");
        }
    }

    /// Opts the run into the feature named `name`.
    pub fn enable_by_name(&mut self, name: &str) -> Result<(), UnknownFeatureError> {
        self.enable(Feature::from_name(name)?);
        Ok(())
    }

    /// Whether `feature` is active and has been opted into this run.
    ///
    /// Retired features always read as disabled, whatever the enabled set
    /// holds.
    #[must_use]
    pub fn is_enabled(&self, feature: Feature) -> bool {
        feature.is_active() && self.enabled_features.contains(&feature)
    }

    /// Like [`Self::is_enabled`], keyed by feature name.
    pub fn is_enabled_by_name(&self, name: &str) -> Result<bool, UnknownFeatureError> {
        Ok(self.is_enabled(Feature::from_name(name)?))
    }

    /// The features currently offered as previews, fixed at construction.
    #[must_use]
    pub fn active_features(&self) -> &[Feature] {
        &self.active_features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_enabled() {
        let previews = FeaturePreviews::new(&RunOptions::new());
        for feature in Feature::all() {
            assert!(!previews.is_enabled(*feature));
        }
    }

    #[test]
    fn active_features_holds_exactly_the_active_subset() {
        let previews = FeaturePreviews::new(&RunOptions::new());
        let expected: Vec<Feature> = Feature::all()
            .iter()
            .copied()
            .filter(|feature| feature.is_active())
            .collect();
        assert_eq!(previews.active_features(), expected);
        // Stable across calls.
        assert_eq!(previews.active_features(), previews.active_features());
    }

    #[test]
    fn seeds_from_run_options() {
        let mut options = RunOptions::new();
        options.set_improved_dependency_resolution(true);

        let previews = FeaturePreviews::new(&options);
        assert!(previews.is_enabled(Feature::ImprovedDependencyResolution));
        assert!(!previews.is_enabled(Feature::ArtifactMetadata));
    }

    #[test]
    fn enable_is_idempotent() {
        let mut previews = FeaturePreviews::new(&RunOptions::new());
        previews.enable(Feature::ArtifactMetadata);
        previews.enable(Feature::ArtifactMetadata);
        assert!(previews.is_enabled(Feature::ArtifactMetadata));
    }

    #[test]
    fn retired_feature_cannot_be_enabled() {
        let mut previews = FeaturePreviews::new(&RunOptions::new());
        previews.enable(Feature::TaskOutputCaching);
        previews.enable(Feature::TaskOutputCaching);
        assert!(!previews.is_enabled(Feature::TaskOutputCaching));
    }

    #[test]
    fn enable_by_name_resolves_then_enables() {
        let mut previews = FeaturePreviews::new(&RunOptions::new());
        previews.enable_by_name("ARTIFACT_METADATA").unwrap();
        assert!(previews.is_enabled(Feature::ArtifactMetadata));
        assert!(previews.is_enabled_by_name("ARTIFACT_METADATA").unwrap());
    }

    #[test]
    fn name_surface_propagates_unknown_feature() {
        let mut previews = FeaturePreviews::new(&RunOptions::new());
        assert!(previews.enable_by_name("NOT_A_FEATURE").is_err());
        assert!(previews.is_enabled_by_name("NOT_A_FEATURE").is_err());
    }
}
