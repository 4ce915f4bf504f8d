//! 02 - Demo scene
//!
//! Builds the demo scene from the default configuration and prints the node
//! tree, without opening a window.
//!
//! Run with: `cargo run --example 02_demo_scene`

use glam::Vec3;
use touchstone::config::AppConfig;
use touchstone::scene::SceneBuilder;
use touchstone_scene::{Material, NodeKind, Transform, World};

fn main() {
    let config = AppConfig::default();

    let mut torus_transform = Transform::identity();
    torus_transform.rotate_about_axis_deg(Vec3::Y, 90.0);

    let scene = SceneBuilder::new()
        .with_background(config.rendering.background_color)
        .add_camera(
            Vec3::from_array(config.camera.eye),
            Vec3::from_array(config.camera.target),
            Vec3::from_array(config.camera.up),
            config.camera.near,
            config.camera.far,
        )
        .add_headlamp(
            Vec3::from_array(config.lighting.position),
            Vec3::from_array(config.lighting.direction),
            config.lighting.cutoff_deg,
            config.lighting.shadows,
            config.lighting.shadow_quality,
        )
        .add_torus(
            "torus",
            0.24,
            0.50,
            Material::POLISHED_WHITE.with_stiffness(120.0),
            torus_transform,
        )
        .with_surface_effect()
        .build();

    println!("Scene with {} nodes:", scene.world.node_count());
    print_tree(&scene.world, scene.world.root(), 0);
}

fn print_tree(world: &World, key: touchstone_scene::NodeKey, depth: usize) {
    let Some(node) = world.get(key) else { return };

    let label = match node.kind() {
        NodeKind::Group => "group".to_string(),
        NodeKind::Camera(camera) => format!(
            "camera (near {} far {})",
            camera.near(),
            camera.far()
        ),
        NodeKind::SpotLight(light) => {
            format!("spot light (cutoff {} deg)", light.cutoff_angle_deg())
        }
        NodeKind::Shape(instance) => format!(
            "shape {:?}, stiffness {} N/m, {} effect(s)",
            instance.shape,
            instance.material.stiffness,
            instance.effects.len()
        ),
    };

    let pos = world.world_position(key).unwrap_or(Vec3::ZERO);
    println!(
        "{:indent$}- {} '{}' at ({:.1}, {:.1}, {:.1})",
        "",
        label,
        node.name.as_deref().unwrap_or("?"),
        pos.x,
        pos.y,
        pos.z,
        indent = depth * 2
    );

    for child in node.children() {
        print_tree(world, *child, depth + 1);
    }
}
