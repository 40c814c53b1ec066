//! Transform propagation scenarios

use crate::foundation::math::Vec3;
use crate::scene::SceneGraph;
use approx::assert_relative_eq;
use std::f32::consts::{FRAC_PI_2, PI};

#[cfg(test)]
mod tests {
    use super::*;

    /// Root at the origin with one child at (1, 0, 0)
    fn root_and_child() -> (SceneGraph, crate::scene::NodeHandle, crate::scene::NodeHandle) {
        let mut scene = SceneGraph::new();
        let root = scene.spawn("root", Vec3::zeros(), Vec3::zeros());
        let child = scene.spawn("child", Vec3::new(1.0, 0.0, 0.0), Vec3::zeros());
        scene.attach(child, root).unwrap();
        (scene, root, child)
    }

    #[test]
    fn test_set_position_carries_child_by_offset() {
        let (mut scene, root, child) = root_and_child();
        assert_relative_eq!(scene.get(child).unwrap().position_offset(), Vec3::new(1.0, 0.0, 0.0));

        scene.set_position(root, Vec3::new(5.0, 0.0, 0.0)).unwrap();

        assert_relative_eq!(scene.position(root).unwrap(), Vec3::new(5.0, 0.0, 0.0));
        assert_relative_eq!(scene.position(child).unwrap(), Vec3::new(6.0, 0.0, 0.0));
    }

    #[test]
    fn test_move_preserves_relative_offset() {
        let (mut scene, root, child) = root_and_child();

        scene.move_by(root, Vec3::new(0.0, 1.0, 0.0)).unwrap();

        assert_relative_eq!(scene.position(root).unwrap(), Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(scene.position(child).unwrap(), Vec3::new(1.0, 1.0, 0.0));
        let relative = scene.position(child).unwrap() - scene.position(root).unwrap();
        assert_relative_eq!(relative, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_set_position_recurses_through_grandchildren() {
        let mut scene = SceneGraph::new();
        let sun = scene.spawn("sun", Vec3::new(1.0, 1.0, 1.0), Vec3::zeros());
        let planet = scene.spawn("planet", Vec3::new(4.0, 1.0, 1.0), Vec3::zeros());
        let moon = scene.spawn("moon", Vec3::new(4.0, 2.5, 1.0), Vec3::zeros());
        scene.attach(planet, sun).unwrap();
        scene.attach(moon, planet).unwrap();

        let target = Vec3::new(-2.0, 0.0, 7.0);
        scene.set_position(sun, target).unwrap();

        assert_relative_eq!(scene.position(planet).unwrap(), target + Vec3::new(3.0, 0.0, 0.0));
        assert_relative_eq!(scene.position(moon).unwrap(), target + Vec3::new(3.0, 1.5, 0.0));
    }

    #[test]
    fn test_set_position_ignores_drift_from_direct_moves() {
        let (mut scene, root, child) = root_and_child();

        // Moving the child directly does not update its frozen offset,
        // so the next parent-driven placement snaps it back.
        scene.move_by(child, Vec3::new(0.0, 0.0, 9.0)).unwrap();
        scene.set_position(root, Vec3::new(2.0, 0.0, 0.0)).unwrap();

        assert_relative_eq!(scene.position(child).unwrap(), Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_move_round_trip_restores_unattached_node() {
        let mut scene = SceneGraph::new();
        let start = Vec3::new(0.3, -12.5, 7.25);
        let node = scene.spawn("drifter", start, Vec3::zeros());
        let delta = Vec3::new(1.7, 0.01, -3.3);

        scene.move_by(node, delta).unwrap();
        scene.move_by(node, -delta).unwrap();

        assert_relative_eq!(scene.position(node).unwrap(), start, epsilon = 1e-5);
    }

    #[test]
    fn test_rotate_about_own_position_keeps_position() {
        let mut scene = SceneGraph::new();
        let at = Vec3::new(2.0, -3.0, 0.5);
        let node = scene.spawn("pivot", at, Vec3::zeros());

        for delta in [
            Vec3::new(0.0, 0.0, FRAC_PI_2),
            Vec3::new(1.3, -0.4, 2.9),
            Vec3::new(PI, PI, PI),
        ] {
            scene.rotate_about(node, delta, at).unwrap();
            assert_relative_eq!(scene.position(node).unwrap(), at, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_rotate_about_orbits_whole_subtree_about_same_origin() {
        let (mut scene, root, child) = root_and_child();
        let origin = Vec3::new(-1.0, 0.0, 0.0);

        scene.rotate_about(root, Vec3::new(0.0, 0.0, FRAC_PI_2), origin).unwrap();

        assert_relative_eq!(scene.position(root).unwrap(), Vec3::new(-1.0, 1.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(scene.position(child).unwrap(), Vec3::new(-1.0, 2.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_about_assigns_rather_than_accumulates() {
        let mut scene = SceneGraph::new();
        let node = scene.spawn("node", Vec3::zeros(), Vec3::new(0.5, 0.0, 0.0));

        // Unattached, so the rotation offset is zero and the previous 0.5
        // around X is discarded.
        scene.rotate_about(node, Vec3::new(0.0, 0.25, 0.0), Vec3::zeros()).unwrap();
        assert_relative_eq!(scene.rotation(node).unwrap(), Vec3::new(0.0, 0.25, 0.0));

        scene.rotate_about(node, Vec3::new(0.0, 0.25, 0.0), Vec3::zeros()).unwrap();
        assert_relative_eq!(scene.rotation(node).unwrap(), Vec3::new(0.0, 0.25, 0.0));
    }

    #[test]
    fn test_rotate_about_folds_in_parent_offset() {
        let mut scene = SceneGraph::new();
        let parent = scene.spawn("parent", Vec3::zeros(), Vec3::new(0.0, 0.0, 0.5));
        let child = scene.spawn("child", Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.75));
        scene.attach(child, parent).unwrap();

        scene.rotate_about(child, Vec3::new(0.1, 0.0, 0.0), Vec3::zeros()).unwrap();

        assert_relative_eq!(scene.rotation(child).unwrap(), Vec3::new(0.1, 0.0, 0.25), epsilon = 1e-6);
    }

    #[test]
    fn test_set_rotation_about_applies_change_twice_to_immediate_children() {
        let (mut scene, root, child) = root_and_child();

        scene
            .set_rotation_about(root, Vec3::new(0.0, 0.0, FRAC_PI_2), Vec3::zeros())
            .unwrap();

        assert_relative_eq!(scene.position(root).unwrap(), Vec3::zeros(), epsilon = 1e-6);
        assert_relative_eq!(scene.rotation(root).unwrap(), Vec3::new(0.0, 0.0, FRAC_PI_2));
        // Orbited once about the origin...
        assert_relative_eq!(scene.position(child).unwrap(), Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
        // ...then spun again by the explicit pass over immediate children.
        assert_relative_eq!(scene.rotation(child).unwrap(), Vec3::new(0.0, 0.0, PI), epsilon = 1e-6);
    }

    #[test]
    fn test_set_rotation_about_spins_grandchildren_about_child() {
        let mut scene = SceneGraph::new();
        let root = scene.spawn("root", Vec3::zeros(), Vec3::zeros());
        let child = scene.spawn("child", Vec3::new(1.0, 0.0, 0.0), Vec3::zeros());
        let grandchild = scene.spawn("grandchild", Vec3::new(2.0, 0.0, 0.0), Vec3::zeros());
        scene.attach(child, root).unwrap();
        scene.attach(grandchild, child).unwrap();

        scene
            .set_rotation_about(root, Vec3::new(0.0, 0.0, FRAC_PI_2), Vec3::zeros())
            .unwrap();

        // First pass: every node orbits the origin, child -> (0,1,0),
        // grandchild -> (0,2,0). Second pass: the child spins and the
        // grandchild orbits the child's new position once more -> (-1,1,0).
        assert_relative_eq!(scene.position(child).unwrap(), Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(
            scene.position(grandchild).unwrap(),
            Vec3::new(-1.0, 1.0, 0.0),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            scene.rotation(grandchild).unwrap(),
            Vec3::new(0.0, 0.0, FRAC_PI_2),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_set_rotation_then_position_uses_unrotated_offset() {
        let (mut scene, root, child) = root_and_child();

        scene.set_rotation(root, Vec3::new(0.0, 0.0, FRAC_PI_2)).unwrap();
        assert_relative_eq!(scene.position(child).unwrap(), Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);

        // Offsets are frozen at attach time, so translation tracking ignores
        // the rotation that just happened.
        scene.set_position(root, Vec3::new(0.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!(scene.position(child).unwrap(), Vec3::new(1.0, 0.0, 1.0));
    }
}
