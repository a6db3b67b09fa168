//! Static types inferred by the validator.

use std::fmt;

use robo_ir::{ReturnType, VarType};

/// Inferred type of an expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Ty {
    Number,
    Boolean,
    Void,
    /// Inference could not proceed; suppresses follow-up errors.
    Unknown,
}

impl Ty {
    #[inline]
    pub fn is_unknown(self) -> bool {
        self == Ty::Unknown
    }

    /// Whether a value of this type is acceptable where `expected` is
    /// required.
    #[inline]
    pub fn accepts_as(self, expected: Ty) -> bool {
        self == expected || self.is_unknown() || expected.is_unknown()
    }
}

impl From<VarType> for Ty {
    fn from(ty: VarType) -> Self {
        match ty {
            VarType::Number => Ty::Number,
            VarType::Boolean => Ty::Boolean,
        }
    }
}

impl From<ReturnType> for Ty {
    fn from(ty: ReturnType) -> Self {
        match ty {
            ReturnType::Number => Ty::Number,
            ReturnType::Boolean => Ty::Boolean,
            ReturnType::Void => Ty::Void,
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Number => write!(f, "number"),
            Ty::Boolean => write!(f, "boolean"),
            Ty::Void => write!(f, "void"),
            Ty::Unknown => write!(f, "unknown"),
        }
    }
}
