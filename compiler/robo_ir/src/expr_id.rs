//! Node IDs and ranges for the flat program tree.
//!
//! Children are referenced by `u32` indices into the [`ExprArena`] instead of
//! boxes, and child lists by `(start, len)` ranges into flattened lists.
//!
//! [`ExprArena`]: crate::ExprArena

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Invalid ID (sentinel value).
            pub const INVALID: $name = $name(u32::MAX);

            /// Create a new ID.
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Get the index into the arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Check if this is a valid ID.
            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!(stringify!($name), "({})"), self.0)
                } else {
                    write!(f, concat!(stringify!($name), "::INVALID"))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

define_id!(
    /// Index into the expression arena.
    ExprId
);

define_id!(
    /// Index into the statement arena.
    StmtId
);

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            /// Empty range.
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            /// Create a new range.
            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                $name { start, len }
            }

            /// Check if the range is empty.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            /// Number of elements in the range.
            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// One past the last index covered by the range.
            #[inline]
            pub const fn end(&self) -> usize {
                self.start as usize + self.len as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({}..{})"), self.start, self.end())
            }
        }
    };
}

define_range!(
    /// Range of expression IDs in the flattened expression lists
    /// (call arguments).
    ExprRange
);

define_range!(
    /// Range of statement IDs in the flattened statement lists
    /// (blocks).
    StmtRange
);

define_range!(
    /// Range of parameters in the parameter table.
    ParamRange
);
