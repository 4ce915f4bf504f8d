//! 01 - Device presets
//!
//! Prints the built-in haptic device presets and the stiffest contact each
//! one can render once its workspace is scaled onto a 1 m virtual scene.
//!
//! Run with: `cargo run --example 01_device_presets`

use touchstone_haptics::{DeviceCapabilities, WorkspaceMapping};

fn main() {
    let presets = [
        ("falcon", DeviceCapabilities::FALCON),
        ("omega3", DeviceCapabilities::OMEGA_3),
        ("delta3", DeviceCapabilities::DELTA_3),
        ("touch", DeviceCapabilities::TOUCH),
    ];
    let virtual_radius = 1.0;

    println!("Virtual workspace radius: {} m", virtual_radius);
    println!(
        "{:<8} {:>9} {:>12} {:>8} {:>14}",
        "device", "force (N)", "k (N/m)", "scale", "k virt (N/m)"
    );

    for (name, caps) in presets {
        match WorkspaceMapping::for_device(&caps, virtual_radius) {
            Ok(mapping) => println!(
                "{:<8} {:>9.1} {:>12.0} {:>8.1} {:>14.1}",
                name,
                caps.max_linear_force,
                caps.max_linear_stiffness,
                mapping.scale_factor(),
                mapping.max_renderable_stiffness(&caps)
            ),
            Err(e) => println!("{:<8} unusable: {}", name, e),
        }
    }
}
