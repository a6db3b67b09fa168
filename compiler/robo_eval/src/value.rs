//! Runtime values.

use std::fmt;

use robo_ir::VarType;

/// A value produced by evaluating an expression.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
    /// Result of a function that returns nothing.
    Void,
}

impl Value {
    /// Initial value of a variable declared without an initializer.
    pub fn default_for(ty: Option<VarType>) -> Self {
        match ty {
            Some(VarType::Boolean) => Value::Boolean(false),
            Some(VarType::Number) | None => Value::Number(0.0),
        }
    }

    /// Name of the value's type, as written in scripts.
    pub const fn type_name(self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Void => "void",
        }
    }

    #[inline]
    pub const fn as_number(self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(b),
            _ => None,
        }
    }

    /// Whether the value inhabits a declared type.
    pub const fn has_type(self, ty: VarType) -> bool {
        matches!(
            (self, ty),
            (Value::Number(_), VarType::Number) | (Value::Boolean(_), VarType::Boolean)
        )
    }
}

/// Name of a declared type, as written in scripts.
pub(crate) const fn type_name(ty: VarType) -> &'static str {
    match ty {
        VarType::Number => "number",
        VarType::Boolean => "boolean",
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Void => write!(f, "void"),
        }
    }
}
