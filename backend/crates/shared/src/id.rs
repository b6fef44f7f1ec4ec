//! Common ID Types
//!
//! Type-safe wrappers for caller-supplied integer identifiers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Identifiers are assigned by the client, not generated by the server.
/// `0` is the unassigned (default) value.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type SectionId = Id<markers::Section>;
///
/// assert!(SectionId::assigned(0).is_none());
/// assert_eq!(SectionId::assigned(7).map(|id| id.get()), Some(7));
/// ```
pub struct Id<T> {
    value: i32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Unassigned identifier value
    pub const UNASSIGNED: i32 = 0;

    /// Wrap any raw value (used for lookups)
    pub const fn new(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Wrap a raw value, rejecting the unassigned default
    pub const fn assigned(value: i32) -> Option<Self> {
        if value == Self::UNASSIGNED {
            None
        } else {
            Some(Self::new(value))
        }
    }

    /// Get the underlying integer
    pub const fn get(&self) -> i32 {
        self.value
    }

    pub const fn is_unassigned(&self) -> bool {
        self.value == Self::UNASSIGNED
    }
}

// Manual impls: the marker type carries no data and should not need to
// implement these traits itself.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Id<T>> for i32 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Section IDs
    pub struct Section;
}

#[cfg(test)]
mod tests {
    use super::*;

    type SectionId = Id<markers::Section>;

    #[test]
    fn test_assigned_rejects_default() {
        assert!(SectionId::assigned(0).is_none());
        assert_eq!(SectionId::assigned(-3).map(|id| id.get()), Some(-3));
        assert!(SectionId::new(0).is_unassigned());
    }

    #[test]
    fn test_ordering_follows_value() {
        let mut ids = vec![SectionId::new(3), SectionId::new(1), SectionId::new(2)];
        ids.sort();
        let raw: Vec<i32> = ids.into_iter().map(i32::from).collect();
        assert_eq!(raw, vec![1, 2, 3]);
    }

    #[test]
    fn test_serde_as_bare_integer() {
        let json = serde_json::to_string(&SectionId::new(42)).unwrap();
        assert_eq!(json, "42");

        let id: SectionId = serde_json::from_str("17").unwrap();
        assert_eq!(id.get(), 17);
    }
}
