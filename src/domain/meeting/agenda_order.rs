//! ConsentAgendaOrder value type.
//!
//! The persisted, user-chosen sequence of resolution ids for a meeting's
//! consent agenda. The stored list is advisory: it may reference
//! resolutions that have since been denied, reassigned, or deleted, so it
//! must always be reconciled against live eligibility before use
//! (see `domain::agenda::effective_order`).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ResolutionId;

/// Ordered list of resolution ids with duplicates removed.
///
/// Construction dedupes (first occurrence wins) so downstream ordering and
/// numbering never see the same resolution twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsentAgendaOrder(Vec<ResolutionId>);

impl ConsentAgendaOrder {
    /// Creates an empty order.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Creates an order from ids, dropping duplicate ids.
    pub fn new(ids: impl IntoIterator<Item = ResolutionId>) -> Self {
        let mut seen = Vec::new();
        for id in ids {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        Self(seen)
    }

    /// Returns the ordered ids.
    pub fn ids(&self) -> &[ResolutionId] {
        &self.0
    }

    /// Returns true if the order holds no ids.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of ids.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the order contains the id.
    pub fn contains(&self, id: &ResolutionId) -> bool {
        self.0.contains(id)
    }

    /// Returns the 0-based position of the id, if present.
    pub fn position(&self, id: &ResolutionId) -> Option<usize> {
        self.0.iter().position(|x| x == id)
    }
}

impl IntoIterator for ConsentAgendaOrder {
    type Item = ResolutionId;
    type IntoIter = std::vec::IntoIter<ResolutionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<ResolutionId> for ConsentAgendaOrder {
    fn from_iter<T: IntoIterator<Item = ResolutionId>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_order_has_no_ids() {
        let order = ConsentAgendaOrder::empty();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
    }

    #[test]
    fn new_preserves_insertion_order() {
        let a = ResolutionId::new();
        let b = ResolutionId::new();
        let order = ConsentAgendaOrder::new([a, b]);
        assert_eq!(order.ids(), &[a, b]);
    }

    #[test]
    fn new_drops_duplicates_keeping_first() {
        let a = ResolutionId::new();
        let b = ResolutionId::new();
        let order = ConsentAgendaOrder::new([a, b, a]);
        assert_eq!(order.ids(), &[a, b]);
    }

    #[test]
    fn position_finds_id() {
        let a = ResolutionId::new();
        let b = ResolutionId::new();
        let order = ConsentAgendaOrder::new([a, b]);
        assert_eq!(order.position(&b), Some(1));
        assert_eq!(order.position(&ResolutionId::new()), None);
    }

    #[test]
    fn serializes_as_plain_id_list() {
        let a = ResolutionId::new();
        let order = ConsentAgendaOrder::new([a]);
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, format!("[\"{}\"]", a));
    }
}
