//! Strongly-typed index newtypes.
//!
//! These types prevent mixing up group and element indices when walking
//! the per-group tables of a discretization.

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);

            /// Create an iterator over [0, n) indices.
            pub fn iter(n: usize) -> impl ExactSizeIterator<Item = $name> {
                (0..n).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }

        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::Index<$name> for Vec<T> {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::IndexMut<$name> for Vec<T> {
            #[inline]
            fn index_mut(&mut self, idx: $name) -> &mut T {
                &mut self[idx.0]
            }
        }
    };
}

define_index!(
    /// Element group index in a discretization.
    ///
    /// Assigned once, in group order, when a filter engine is built. Per-group
    /// operator tables are plain vectors indexed by this type.
    ///
    /// # Example
    ///
    /// ```
    /// use dg_filter::types::GroupIndex;
    ///
    /// let g = GroupIndex::new(1);
    /// assert_eq!(g.get(), 1);
    /// assert_eq!(g.to_string(), "G1");
    /// ```
    GroupIndex,
    "G"
);

define_index!(
    /// Element index within one group.
    ///
    /// # Example
    ///
    /// ```
    /// use dg_filter::types::ElementIndex;
    ///
    /// let elem = ElementIndex::new(42);
    /// assert_eq!(elem.get(), 42);
    /// ```
    ElementIndex,
    "E"
);
