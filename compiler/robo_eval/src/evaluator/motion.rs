//! Robot commands: movement, rotation and speed changes.
//!
//! Each movement or rotation advances the scene clock by
//! `magnitude / rate` and records exactly one snapshot.

use robo_ir::{MoveDirection, NodeRef, RotateDirection};

use super::Evaluator;
use crate::errors::{EvalErrorKind, EvalResult};
use crate::scene::Point;
use crate::ANGULAR_RATE;

impl Evaluator<'_> {
    /// Translate the robot by `distance_mm` in `direction`, relative to its
    /// heading. A negative distance moves the opposite way.
    pub(crate) fn apply_movement(
        &mut self,
        direction: MoveDirection,
        distance_mm: f64,
        node: NodeRef,
    ) -> EvalResult<()> {
        let speed = self.speed;
        if speed.is_nan() || speed <= 0.0 {
            return Err(self.fail(EvalErrorKind::InvalidSpeed { speed }, node));
        }

        let robot = &mut self.scene.robot;
        let step = robot.direction(direction.heading_offset());
        robot.position = Point::new(
            robot.position.x + step.x * distance_mm,
            robot.position.y + step.y * distance_mm,
        );
        let duration = distance_mm.abs() / speed;
        tracing::trace!(?direction, distance_mm, duration, "move");
        self.scene.record_after(duration);
        Ok(())
    }

    /// Rotate the robot in place by `degrees`.
    pub(crate) fn apply_rotation(&mut self, direction: RotateDirection, degrees: f64) {
        let radians = degrees.to_radians() * direction.sign();
        self.scene.robot.turn(radians);
        let duration = radians.abs() / ANGULAR_RATE;
        tracing::trace!(?direction, degrees, duration, "rotate");
        self.scene.record_after(duration);
    }

    /// Change the current speed. Records no snapshot.
    pub(crate) fn apply_speed(&mut self, mm_per_sec: f64) {
        tracing::trace!(mm_per_sec, "set speed");
        self.speed = mm_per_sec;
        self.scene.robot.speed = mm_per_sec;
    }
}
