//! The simulated world: static layout plus the robot's trajectory.
//!
//! Coordinates are millimeters, screen-style: +x to the right, +y down.
//! A heading of 0 points along +x and clockwise rotation increases it.
//! Times are seconds since the start of the run.

use std::f64::consts::TAU;

/// Distance reported when the ray ahead of the robot hits nothing.
pub const NO_OBSTACLE_DISTANCE: f64 = f64::MAX;

/// Direction components smaller than this are treated as parallel to an
/// axis by the ray cast.
const PARALLEL_EPSILON: f64 = 1e-12;

/// A point in the scene plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned extent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Wall,
    Block,
}

/// A static obstacle. `position` is its minimum corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Point,
    pub size: Size,
}

impl Entity {
    pub const fn new(kind: EntityKind, position: Point, size: Size) -> Self {
        Entity {
            kind,
            position,
            size,
        }
    }

    /// Maximum corner.
    pub fn max(&self) -> Point {
        Point::new(
            self.position.x + self.size.width,
            self.position.y + self.size.height,
        )
    }

    /// Distance along a ray to the first point of this footprint, using the
    /// slab method. `direction` must be a unit vector. A ray starting inside
    /// the footprint hits at 0.
    pub fn ray_distance(&self, origin: Point, direction: Point) -> Option<f64> {
        let max = self.max();
        let mut near = f64::NEG_INFINITY;
        let mut far = f64::INFINITY;

        for (o, d, lo, hi) in [
            (origin.x, direction.x, self.position.x, max.x),
            (origin.y, direction.y, self.position.y, max.y),
        ] {
            if d.abs() < PARALLEL_EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let t1 = (lo - o) / d;
            let t2 = (hi - o) / d;
            near = near.max(t1.min(t2));
            far = far.min(t1.max(t2));
        }

        if far < near.max(0.0) {
            return None;
        }
        Some(near.max(0.0))
    }
}

/// The robot's state. `position` is the centre of its footprint.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Robot {
    pub position: Point,
    pub size: Size,
    /// Radians, normalized to `[0, 2π)`.
    pub heading: f64,
    /// Millimeters per second.
    pub speed: f64,
}

impl Robot {
    /// Unit vector of travel at `offset` radians clockwise from the heading.
    pub fn direction(&self, offset: f64) -> Point {
        let angle = self.heading + offset;
        Point::new(angle.cos(), angle.sin())
    }

    /// Turn by `radians` (clockwise positive).
    pub fn turn(&mut self, radians: f64) {
        self.heading = (self.heading + radians).rem_euclid(TAU);
    }
}

/// One recorded robot state.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub time: f64,
    pub position: Point,
    pub heading: f64,
    pub size: Size,
    pub speed: f64,
}

/// Initial contents of a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneLayout {
    pub size: Size,
    /// Enclose the scene with four zero-thickness walls.
    pub border_walls: bool,
    /// Obstacles in addition to the border walls.
    pub entities: Vec<Entity>,
    pub robot_position: Point,
    pub robot_size: Size,
    pub robot_heading: f64,
    pub robot_speed: f64,
}

impl Default for SceneLayout {
    fn default() -> Self {
        SceneLayout {
            size: Size::new(10_000.0, 10_000.0),
            border_walls: true,
            entities: Vec::new(),
            robot_position: Point::new(5_000.0, 5_000.0),
            robot_size: Size::new(250.0, 250.0),
            robot_heading: 0.0,
            robot_speed: 100.0,
        }
    }
}

impl SceneLayout {
    /// Add a block obstacle.
    #[must_use]
    pub fn with_block(mut self, position: Point, size: Size) -> Self {
        self.entities
            .push(Entity::new(EntityKind::Block, position, size));
        self
    }

    /// Place the robot's centre.
    #[must_use]
    pub fn with_robot_at(mut self, position: Point) -> Self {
        self.robot_position = position;
        self
    }

    #[must_use]
    pub fn without_border_walls(mut self) -> Self {
        self.border_walls = false;
        self
    }
}

/// The result of one evaluation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    pub size: Size,
    pub entities: Vec<Entity>,
    pub robot: Robot,
    /// Simulated seconds elapsed.
    pub time: f64,
    timeline: Vec<Snapshot>,
}

impl Scene {
    /// Build a fresh scene with an empty timeline.
    pub fn new(layout: &SceneLayout) -> Self {
        let Size { width, height } = layout.size;
        let mut entities = Vec::with_capacity(layout.entities.len() + 4);
        if layout.border_walls {
            let wall = |x, y, w, h| Entity::new(EntityKind::Wall, Point::new(x, y), Size::new(w, h));
            entities.extend([
                wall(0.0, 0.0, width, 0.0),
                wall(0.0, height, width, 0.0),
                wall(0.0, 0.0, 0.0, height),
                wall(width, 0.0, 0.0, height),
            ]);
        }
        entities.extend(layout.entities.iter().copied());

        Scene {
            size: layout.size,
            entities,
            robot: Robot {
                position: layout.robot_position,
                size: layout.robot_size,
                heading: layout.robot_heading.rem_euclid(TAU),
                speed: layout.robot_speed,
            },
            time: 0.0,
            timeline: Vec::new(),
        }
    }

    /// Recorded snapshots, oldest first.
    pub fn timeline(&self) -> &[Snapshot] {
        &self.timeline
    }

    /// Advance the clock and record the robot's current state.
    pub(crate) fn record_after(&mut self, duration: f64) {
        self.time += duration;
        self.timeline.push(Snapshot {
            time: self.time,
            position: self.robot.position,
            heading: self.robot.heading,
            size: self.robot.size,
            speed: self.robot.speed,
        });
    }

    /// Distance from the robot's centre to the nearest obstacle straight
    /// ahead, or [`NO_OBSTACLE_DISTANCE`].
    pub fn distance_ahead(&self) -> f64 {
        let origin = self.robot.position;
        let direction = self.robot.direction(0.0);
        self.entities
            .iter()
            .filter_map(|entity| entity.ray_distance(origin, direction))
            .fold(NO_OBSTACLE_DISTANCE, f64::min)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new(&SceneLayout::default())
    }
}

#[cfg(test)]
mod tests;
