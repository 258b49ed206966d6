//! Typed record identifiers

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Integer identifier tagged with the record type it belongs to.
pub struct TypedId<T>(u64, PhantomData<fn() -> T>);

impl<T> TypedId<T> {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id, PhantomData)
    }

    /// The raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier that follows the largest of `ids`, or `1` when there are none.
    pub fn next_after(ids: impl IntoIterator<Item = Self>) -> Self {
        ids.into_iter()
            .max()
            .map_or(Self::new(1), |max| Self::new(max.0.saturating_add(1)))
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<u64> for TypedId<T> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<T> From<TypedId<T>> for u64 {
    fn from(value: TypedId<T>) -> Self {
        value.get()
    }
}

impl<T> Serialize for TypedId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de, T> Deserialize<'de> for TypedId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    type WidgetId = TypedId<Widget>;

    #[test]
    fn next_after_empty_is_one() {
        assert_eq!(WidgetId::next_after([]), WidgetId::new(1));
    }

    #[test]
    fn next_after_uses_the_largest_id() {
        let ids = [3, 7, 2].map(WidgetId::new);

        assert_eq!(WidgetId::next_after(ids), WidgetId::new(8));
    }

    #[test]
    fn serializes_as_a_plain_number() -> Result<(), serde_json::Error> {
        let id: WidgetId = serde_json::from_str("42")?;

        assert_eq!(id.get(), 42);
        assert_eq!(serde_json::to_string(&id)?, "42");

        Ok(())
    }
}
