//! Insertion-ordered set with value equality.
//!
//! `EqSet` is the container every index of the store is built on. Membership is
//! decided by the element type's [`PartialEq`], never by storage identity, and
//! iteration follows insertion order so query results are deterministic.

use serde::{Deserialize, Serialize};

use crate::error::SetError;

/// An ordered, deduplicating collection compared by value.
///
/// Lookups are linear scans. The sets held by the store are small per
/// (subject, predicate) key, so a scan is cheaper than hashing in practice.
///
/// # Examples
///
/// ```
/// use hqdm_store::{EqSet, Entity};
///
/// let mut s = EqSet::new();
/// s.add(Entity::new("same"));
/// s.add(Entity::new("same"));
/// s.add(Entity::new("different"));
/// assert_eq!(s.len(), 2);
/// assert!(s.has(&Entity::new("same")));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EqSet<T> {
    items: Vec<T>,
}

impl<T> EqSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the set has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the first element, in insertion order, that satisfies `pred`.
    pub fn first(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|t| pred(t))
    }

    /// Returns the sole element of the set.
    ///
    /// An empty set yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `SetError::MultipleMembers` if the set holds more than one element.
    pub fn only(&self) -> Result<Option<&T>, SetError> {
        match self.items.len() {
            0 | 1 => Ok(self.items.first()),
            count => Err(SetError::MultipleMembers { count }),
        }
    }
}

impl<T: PartialEq> EqSet<T> {
    /// Adds `item` unless an equal element is already present.
    ///
    /// Returns true if the set changed.
    pub fn add(&mut self, item: T) -> bool {
        if self.has(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes every element equal to `item`, returning how many were removed.
    pub fn remove(&mut self, item: &T) -> usize {
        let before = self.items.len();
        self.items.retain(|x| x != item);
        before - self.items.len()
    }

    /// Returns true if an element equal to `item` is present.
    #[must_use]
    pub fn has(&self, item: &T) -> bool {
        self.items.iter().any(|x| x == item)
    }

    /// Builds a new set from the transformed elements, deduplicating the results.
    pub fn map<U: PartialEq>(&self, f: impl FnMut(&T) -> U) -> EqSet<U> {
        self.items.iter().map(f).collect()
    }

    /// Builds a new set from the elements that satisfy `pred`.
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        self.items.iter().filter(|t| pred(t)).cloned().collect()
    }

    /// Maps every element to a set and returns the deduplicated union.
    pub fn fmap<U: PartialEq>(&self, f: impl FnMut(&T) -> EqSet<U>) -> EqSet<U> {
        self.items.iter().flat_map(f).collect()
    }

    /// Appends an element the caller has already proven absent.
    pub(crate) fn push_distinct(&mut self, item: T) {
        debug_assert!(!self.has(&item), "push_distinct on a present element");
        self.items.push(item);
    }
}

impl<T> Default for EqSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Set equality: same elements regardless of insertion order.
impl<T: PartialEq> PartialEq for EqSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.items.iter().all(|x| other.has(x))
    }
}

impl<T: Eq> Eq for EqSet<T> {}

impl<T: PartialEq> FromIterator<T> for EqSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for EqSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> IntoIterator for EqSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a EqSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Entity, Pair};

    fn things(ids: &[&str]) -> EqSet<Entity> {
        ids.iter().map(|id| Entity::new(*id)).collect()
    }

    #[test]
    fn add_deduplicates_by_value() {
        let mut s = EqSet::new();
        assert!(s.add(Entity::new("same")));
        assert!(!s.add(Entity::new("same")));
        assert!(s.add(Entity::new("different")));

        assert!(s.has(&Entity::new("same")));
        assert!(s.has(&Entity::new("different")));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn map_deduplicates_transformed_elements() {
        let s = things(&["same", "same", "different"]);
        let m = s.map(|t| Pair::new(t.clone(), t.clone()));

        assert!(m.has(&Pair::new(Entity::new("same"), Entity::new("same"))));
        assert!(m.has(&Pair::new(Entity::new("different"), Entity::new("different"))));
        assert_eq!(m.len(), 2);

        let collapsed = things(&["a", "b", "c"]).map(|_| Entity::new("x"));
        assert_eq!(collapsed.len(), 1);
    }

    #[test]
    fn fmap_flattens_and_deduplicates() {
        let s = things(&["t1", "t2", "t3"]);
        let m = s.fmap(|t| {
            let a = format!("{}_1", t.id());
            let b = format!("{}_2", t.id());
            things(&[a.as_str(), b.as_str()])
        });
        assert_eq!(m.len(), 6);
        for id in ["t1_1", "t1_2", "t2_1", "t2_2", "t3_1", "t3_2"] {
            assert!(m.has(&Entity::new(id)));
        }

        let overlapping = s.fmap(|_| things(&["shared"]));
        assert_eq!(overlapping.len(), 1);
    }

    #[test]
    fn filter_keeps_matching_elements_in_order() {
        let s = things(&["one", "two", "three"]);
        let f = s.filter(|t| t.id().starts_with('t'));
        let ids: Vec<&str> = f.iter().map(Entity::id).collect();
        assert_eq!(ids, vec!["two", "three"]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn remove_deletes_equal_elements() {
        let mut s = things(&["one", "two", "three"]);
        assert_eq!(s.remove(&Entity::new("two")), 1);
        assert_eq!(s.remove(&Entity::new("missing")), 0);

        assert!(s.has(&Entity::new("one")));
        assert!(!s.has(&Entity::new("two")));
        assert!(s.has(&Entity::new("three")));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn first_respects_insertion_order() {
        let s = things(&["b1", "a1", "b2"]);
        assert_eq!(s.first(|t| t.id().starts_with('b')), Some(&Entity::new("b1")));
        assert_eq!(s.first(|t| t.id().starts_with('z')), None);
    }

    #[test]
    fn only_behaviour() {
        let empty: EqSet<Entity> = EqSet::new();
        assert_eq!(empty.only(), Ok(None));

        let one = things(&["solo"]);
        assert_eq!(one.only(), Ok(Some(&Entity::new("solo"))));

        let two = things(&["a", "b"]);
        assert_eq!(two.only(), Err(SetError::MultipleMembers { count: 2 }));
    }

    #[test]
    fn clone_is_independent() {
        let mut s = things(&["one", "two", "three"]);
        let mut c = s.clone();
        c.add(Entity::new("four"));

        assert_eq!(s.len(), 3);
        assert!(!s.has(&Entity::new("four")));
        assert_eq!(c.len(), 4);

        s.remove(&Entity::new("one"));
        assert!(c.has(&Entity::new("one")));
    }

    #[test]
    fn iteration_visits_every_member() {
        let s = things(&["one", "two", "three"]);
        let mut seen = 0;
        for t in &s {
            assert!(s.has(t));
            seen += 1;
        }
        assert_eq!(seen, 3);
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(things(&["a", "b"]), things(&["b", "a"]));
        assert_ne!(things(&["a", "b"]), things(&["a"]));
    }
}
