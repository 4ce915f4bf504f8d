//! Haptic device capability model for touchstone
//!
//! This crate describes what a haptic device can do, not how to drive it:
//! - [`DeviceCapabilities`] - force/stiffness/damping limits and workspace radius
//! - [`WorkspaceMapping`] - device-to-virtual workspace scaling
//! - [`Effect`] - haptic effect descriptors attachable to scene objects
//!
//! The device control loop and force rendering live outside this repository;
//! everything here is the data the graphics side needs to scale display
//! properties to what a device can actually render.

mod device;
mod effect;
mod error;
mod workspace;

pub use device::DeviceCapabilities;
pub use effect::Effect;
pub use error::HapticError;
pub use workspace::WorkspaceMapping;
