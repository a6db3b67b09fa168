use std::fmt;

/// Error codes for all RoboScript diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Validation errors
/// - E6xxx: Runtime (evaluation) errors
/// - E9xxx: Internal errors (malformed or structurally broken trees)
///
/// Warnings use W####.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Validation Errors (E1xxx)
    /// Program has no entry function
    E1001,
    /// Entry function does not return void
    E1002,
    /// Duplicate function name
    E1003,
    /// Duplicate parameter name
    E1004,
    /// Return value does not match the declared return type
    E1005,
    /// Initializer does not match the declared variable type
    E1006,
    /// Duplicate variable in the same block
    E1007,
    /// Undeclared variable
    E1008,
    /// Assigned value does not match the variable's type
    E1009,
    /// Condition is not boolean
    E1010,
    /// Distance, angle or speed is not a number
    E1011,
    /// Missing unit
    E1012,
    /// Missing direction
    E1013,
    /// Unknown function
    E1014,
    /// Wrong number of arguments
    E1015,
    /// Argument does not match the parameter type
    E1016,
    /// Arithmetic operand is not a number
    E1017,
    /// Comparison operands have different types
    E1018,
    /// Unary operand has the wrong type
    E1019,

    // Runtime Errors (E6xxx)
    /// Undefined variable at runtime
    E6001,
    /// Undefined function at runtime
    E6002,
    /// Loop iteration or wall-clock budget exceeded
    E6003,
    /// Run was cancelled
    E6004,
    /// Value has the wrong type at runtime
    E6005,
    /// Wrong number of arguments at runtime
    E6006,
    /// Call depth limit exceeded
    E6007,
    /// Movement with a non-positive speed
    E6008,

    // Internal Errors (E9xxx)
    /// Malformed program tree (missing entry, direction or unit)
    E9001,
    /// Program tree failed the structure check
    E9002,

    // Warnings
    /// Naming convention (variable starts with an uppercase letter)
    W1001,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            // Validation
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E1015 => "E1015",
            ErrorCode::E1016 => "E1016",
            ErrorCode::E1017 => "E1017",
            ErrorCode::E1018 => "E1018",
            ErrorCode::E1019 => "E1019",
            // Runtime
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            // Internal
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
            // Warnings
            ErrorCode::W1001 => "W1001",
        }
    }

    /// Check if this is a warning code (Wxxx range).
    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }

    /// Check if this is a runtime error code (E6xxx range).
    pub fn is_runtime(&self) -> bool {
        self.as_str().starts_with("E6")
    }

    /// Check if this is an internal error code (E9xxx range).
    pub fn is_internal(&self) -> bool {
        self.as_str().starts_with("E9")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
