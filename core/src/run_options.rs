//! Run-scoped options resolved by the invocation layer.

/// Boolean options for the current run, one per preview feature that can be
/// switched on from the invocation layer.
///
/// Populated by the argument-parsing layer before anything else runs, then
/// read once when the feature-preview registry is constructed. Features
/// without an option here simply start disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    improved_dependency_resolution: bool,
    artifact_metadata: bool,
}

impl RunOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn improved_dependency_resolution(&self) -> bool {
        self.improved_dependency_resolution
    }

    pub fn set_improved_dependency_resolution(&mut self, enabled: bool) {
        self.improved_dependency_resolution = enabled;
    }

    #[must_use]
    pub fn artifact_metadata(&self) -> bool {
        self.artifact_metadata
    }

    pub fn set_artifact_metadata(&mut self, enabled: bool) {
        self.artifact_metadata = enabled;
    }
}
