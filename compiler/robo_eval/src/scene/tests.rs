use std::f64::consts::{FRAC_PI_2, PI};

use pretty_assertions::assert_eq;

use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_default_layout() {
    let scene = Scene::default();
    assert_eq!(scene.size, Size::new(10_000.0, 10_000.0));
    assert_eq!(scene.entities.len(), 4);
    assert!(scene.entities.iter().all(|e| e.kind == EntityKind::Wall));
    assert_eq!(scene.robot.position, Point::new(5_000.0, 5_000.0));
    assert_eq!(scene.robot.speed, 100.0);
    assert_eq!(scene.time, 0.0);
    assert!(scene.timeline().is_empty());
}

#[test]
fn test_default_distance_ahead() {
    let scene = Scene::default();
    assert!(close(scene.distance_ahead(), 5_000.0));
}

#[test]
fn test_distance_in_every_direction() {
    let mut scene = Scene::new(&SceneLayout::default().with_robot_at(Point::new(1_000.0, 3_000.0)));
    assert!(close(scene.distance_ahead(), 9_000.0));
    scene.robot.turn(FRAC_PI_2);
    assert!(close(scene.distance_ahead(), 7_000.0));
    scene.robot.turn(FRAC_PI_2);
    assert!(close(scene.distance_ahead(), 1_000.0));
    scene.robot.turn(FRAC_PI_2);
    assert!(close(scene.distance_ahead(), 3_000.0));
}

#[test]
fn test_block_ahead_is_nearest() {
    let layout = SceneLayout::default()
        .with_block(Point::new(6_000.0, 4_900.0), Size::new(100.0, 200.0));
    let scene = Scene::new(&layout);
    assert!(close(scene.distance_ahead(), 1_000.0));
}

#[test]
fn test_block_beside_ray_is_missed() {
    let layout = SceneLayout::default()
        .without_border_walls()
        .with_block(Point::new(6_000.0, 5_100.0), Size::new(100.0, 200.0));
    let scene = Scene::new(&layout);
    assert_eq!(scene.distance_ahead(), NO_OBSTACLE_DISTANCE);
}

#[test]
fn test_block_behind_is_missed() {
    let layout = SceneLayout::default()
        .without_border_walls()
        .with_block(Point::new(3_000.0, 4_900.0), Size::new(100.0, 200.0));
    assert_eq!(Scene::new(&layout).distance_ahead(), NO_OBSTACLE_DISTANCE);
}

#[test]
fn test_inside_block_is_zero() {
    let layout = SceneLayout::default()
        .with_block(Point::new(4_000.0, 4_000.0), Size::new(2_000.0, 2_000.0));
    assert_eq!(Scene::new(&layout).distance_ahead(), 0.0);
}

#[test]
fn test_diagonal_ray() {
    let entity = Entity::new(
        EntityKind::Block,
        Point::new(10.0, 10.0),
        Size::new(10.0, 10.0),
    );
    let d = std::f64::consts::FRAC_1_SQRT_2;
    let hit = entity.ray_distance(Point::new(0.0, 0.0), Point::new(d, d));
    assert!(close(hit.unwrap_or_default(), 200f64.sqrt()));
}

#[test]
fn test_turn_normalizes() {
    let mut robot = Scene::default().robot;
    robot.turn(-FRAC_PI_2);
    assert!(close(robot.heading, 3.0 * FRAC_PI_2));
    robot.turn(5.0 * PI);
    assert!(close(robot.heading, FRAC_PI_2));
}

#[test]
fn test_record_after() {
    let mut scene = Scene::default();
    scene.robot.position = Point::new(5_100.0, 5_000.0);
    scene.record_after(1.5);
    scene.record_after(0.0);
    assert_eq!(scene.time, 1.5);
    let timeline = scene.timeline();
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0].time, 1.5);
    assert_eq!(timeline[0].position, Point::new(5_100.0, 5_000.0));
    assert_eq!(timeline[1].time, 1.5);
}
