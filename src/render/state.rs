//! Render state with last-query-wins replacement.
//!
//! The UI owns exactly one `RenderState`. Each outgoing query takes a
//! generation number; when its scene comes back it is applied only if no
//! newer query has been issued in the meantime. There is no queue and no
//! retry, a superseded result is simply dropped.

use crate::render::scene::MapScene;

/// The UI layer's single mutable render slot.
#[derive(Debug, Default)]
pub struct RenderState {
    issued: u64,
    scene: Option<MapScene>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new outgoing query and get its generation number.
    /// Issuing a query supersedes all earlier in-flight queries.
    pub fn next_generation(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Apply a finished query's scene. Returns false (and drops the scene)
    /// if a newer query was issued after this one.
    pub fn apply(&mut self, generation: u64, scene: MapScene) -> bool {
        if generation != self.issued {
            return false;
        }
        self.scene = Some(scene);
        true
    }

    /// Drop the current scene (the "no data" state).
    pub fn clear(&mut self) {
        self.scene = None;
    }

    pub fn scene(&self) -> Option<&MapScene> {
        self.scene.as_ref()
    }
}
