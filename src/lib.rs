//! touchstone - a haptics-and-graphics demo workbench
//!
//! Opens a window, builds a small scene (camera, headlamp spot light, one
//! touchable torus), and drives a per-frame render. The torus material's
//! contact stiffness is scaled to what the configured haptic device can
//! render through its workspace mapping.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
