//! Units, directions, sensors and declared types.
//!
//! Canonical units are millimeters, millimeters per second and radians.
//! Both backends take their conversion factors from here so the simulator
//! and the generated firmware agree.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

/// Length unit of a movement distance or unit expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    Mm,
    Cm,
}

impl LengthUnit {
    /// Millimeters per one of this unit.
    pub const fn mm_factor(self) -> u32 {
        match self {
            Self::Mm => 1,
            Self::Cm => 10,
        }
    }

    /// Convert a magnitude in this unit to millimeters.
    #[inline]
    pub fn to_mm(self, value: f64) -> f64 {
        value * f64::from(self.mm_factor())
    }
}

/// Speed unit of a `SetSpeed` command.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedUnit {
    MmPerSec,
    CmPerSec,
}

impl SpeedUnit {
    /// Millimeters per second per one of this unit.
    pub const fn mm_per_sec_factor(self) -> u32 {
        match self {
            Self::MmPerSec => 1,
            Self::CmPerSec => 10,
        }
    }

    /// Convert a speed in this unit to millimeters per second.
    #[inline]
    pub fn to_mm_per_sec(self, value: f64) -> f64 {
        value * f64::from(self.mm_per_sec_factor())
    }
}

/// Direction of a translation, relative to the robot's heading.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveDirection {
    /// Angle between the heading and the direction of travel, in radians.
    ///
    /// Clockwise is positive, so `Right` is a quarter turn clockwise.
    pub fn heading_offset(self) -> f64 {
        match self {
            Self::Forward => 0.0,
            Self::Right => FRAC_PI_2,
            Self::Backward => std::f64::consts::PI,
            Self::Left => -FRAC_PI_2,
        }
    }
}

/// Direction of an in-place rotation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotateDirection {
    Clock,
    CounterClock,
}

impl RotateDirection {
    /// Sign applied to the angle: clockwise increases the heading.
    pub const fn sign(self) -> f64 {
        match self {
            Self::Clock => 1.0,
            Self::CounterClock => -1.0,
        }
    }
}

/// Sensor polled by a `SensorRead` expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SensorKind {
    /// Distance to the nearest obstacle straight ahead.
    Distance,
    /// Elapsed time since the run started.
    Timestamp,
}

/// Declared type of a parameter or variable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VarType {
    Number,
    Boolean,
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// Declared return type of a function.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReturnType {
    Number,
    Boolean,
    Void,
}

impl ReturnType {
    /// The value type returned, or `None` for `Void`.
    pub const fn value_type(self) -> Option<VarType> {
        match self {
            Self::Number => Some(VarType::Number),
            Self::Boolean => Some(VarType::Boolean),
            Self::Void => None,
        }
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Void => write!(f, "void"),
        }
    }
}
