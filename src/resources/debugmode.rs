use bevy_ecs::prelude::Resource;

/// Toggle for the debug overlay (FPS, entity count, position markers).
#[derive(Resource, Default, Clone, Copy)]
pub struct DebugMode {
    pub enabled: bool,
}
