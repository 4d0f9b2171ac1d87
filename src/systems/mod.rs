//! Game systems.
//!
//! This module groups all ECS systems that advance input, simulation, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance clip playback and update sprite frames
//! - [`directionalmover`] – apply per-tick steps and clip selection from input
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – draw sprites and the debug overlay using Raylib
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod directionalmover;
pub mod input;
pub mod render;
pub mod time;
