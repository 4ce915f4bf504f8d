//! GPU context management for touchstone
//!
//! This crate owns the wgpu plumbing the demo draws through:
//!
//! - [`context::RenderContext`] - device, queue, and surface management
//!
//! Frame recording lives in the application; the context's job is getting a
//! configured surface on screen and keeping it valid across resizes and
//! present-mode changes.

pub mod context;

pub use context::{ContextError, RenderContext};
