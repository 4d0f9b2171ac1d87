use bevy_ecs::prelude::Component;

/// Rendering order hint. Lower values draw first (further back).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
