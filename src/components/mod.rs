//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`animationplayer`] – play/stop clip playback state for a sprite
//! - [`directionalmover`] – keyboard-driven fixed-step movement and clip selection
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animationplayer;
pub mod directionalmover;
pub mod mapposition;
pub mod sprite;
pub mod zindex;
