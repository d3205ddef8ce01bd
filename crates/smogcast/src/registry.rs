//! Process-wide holder of the active model bundle.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::model::ModelBundle;

/// Single-slot registry for the currently active [`ModelBundle`].
///
/// Empty until the first successful training, then replaced wholesale by
/// every later one. Readers take a lock-free snapshot of the slot; writers
/// publish a brand-new `Arc` rather than mutating the bundle in place, so a
/// reader racing a publish observes either the fully-old or the fully-new
/// bundle and never a mix of model and tables from different runs.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    active: ArcSwapOption<ModelBundle>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the active bundle, if any training has succeeded yet.
    pub fn current(&self) -> Option<Arc<ModelBundle>> {
        self.active.load_full()
    }

    /// Atomically replace the active bundle.
    pub fn publish(&self, bundle: ModelBundle) {
        self.active.store(Some(Arc::new(bundle)));
    }

    /// True once a bundle has been published.
    pub fn is_trained(&self) -> bool {
        self.active.load().is_some()
    }
}
