//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, configuration,
//! and asset stores.
//!
//! Overview
//! - `clipstore` – definitions for sprite clips reused across entities
//! - `debugmode` – toggle for the optional debug overlay
//! - `gameconfig` – window settings loaded from an INI configuration file
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod clipstore;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod texturestore;
pub mod worldtime;
