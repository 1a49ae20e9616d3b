//! Authoritative widget → slot assignment.

use super::geometry::SlotIndex;
use crate::model::{GridError, WidgetId};
use std::collections::HashMap;
use tracing::debug;

/// One widget's slot changing as the result of a swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotChange {
    /// Widget whose slot changed.
    pub id: WidgetId,
    /// Slot before the change.
    pub from: SlotIndex,
    /// Slot after the change.
    pub to: SlotIndex,
}

/// Mapping from widget id to slot index.
///
/// # Invariants
/// - Slots are a permutation of `0..len()`: every slot holds exactly one id.
/// - `slots` and `occupants` are inverses of each other.
///
/// The only mutation is [`PositionMap::swap`], which exchanges two valid
/// slots and so cannot break the permutation. Each mutation records
/// [`SlotChange`]s until drained with [`PositionMap::take_changes`].
#[derive(Debug, Clone, Default)]
pub struct PositionMap {
    slots: HashMap<WidgetId, SlotIndex>,
    occupants: Vec<WidgetId>,
    changes: Vec<SlotChange>,
}

impl PositionMap {
    /// Place widgets in slot order: the first id gets slot 0.
    pub fn from_order(ids: impl IntoIterator<Item = WidgetId>) -> Result<Self, GridError> {
        let mut map = Self::default();
        for id in ids {
            let slot = SlotIndex::new(map.occupants.len());
            if map.slots.insert(id.clone(), slot).is_some() {
                return Err(GridError::DuplicateWidget(id));
            }
            map.occupants.push(id);
        }
        Ok(map)
    }

    /// Build from explicit assignments, validating they form a permutation.
    pub fn from_slots(
        assignments: impl IntoIterator<Item = (WidgetId, SlotIndex)>,
    ) -> Result<Self, GridError> {
        let assignments: Vec<(WidgetId, SlotIndex)> = assignments.into_iter().collect();
        let len = assignments.len();
        let mut occupants: Vec<Option<WidgetId>> = vec![None; len];
        let mut slots = HashMap::with_capacity(len);

        for (id, slot) in assignments {
            if slots.contains_key(&id) {
                return Err(GridError::DuplicateWidget(id));
            }
            let cell = occupants
                .get_mut(slot.get())
                .ok_or(GridError::NotAPermutation { slot: slot.get(), len })?;
            if cell.is_some() {
                return Err(GridError::NotAPermutation { slot: slot.get(), len });
            }
            *cell = Some(id.clone());
            slots.insert(id, slot);
        }

        // `len` ids landed in `len` distinct in-range cells, so every cell is filled
        let occupants = occupants.into_iter().flatten().collect();
        Ok(Self {
            slots,
            occupants,
            changes: Vec::new(),
        })
    }

    /// Number of placed widgets.
    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    /// Whether no widgets are placed.
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Highest valid slot, or `None` when empty.
    pub fn max_slot(&self) -> Option<SlotIndex> {
        self.len().checked_sub(1).map(SlotIndex::new)
    }

    /// Slot currently assigned to `id`.
    pub fn slot_of(&self, id: &WidgetId) -> Option<SlotIndex> {
        self.slots.get(id).copied()
    }

    /// Widget currently occupying `slot`.
    pub fn occupant(&self, slot: SlotIndex) -> Option<&WidgetId> {
        self.occupants.get(slot.get())
    }

    /// Whether `id` is placed.
    pub fn contains(&self, id: &WidgetId) -> bool {
        self.slots.contains_key(id)
    }

    /// Widget ids in slot order.
    pub fn ordered_ids(&self) -> impl Iterator<Item = &WidgetId> {
        self.occupants.iter()
    }

    /// `(id, slot)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&WidgetId, SlotIndex)> {
        self.occupants
            .iter()
            .enumerate()
            .map(|(slot, id)| (id, SlotIndex::new(slot)))
    }

    /// Exchange the slots of `a` and `b`.
    pub fn swap(&mut self, a: &WidgetId, b: &WidgetId) -> Result<(), GridError> {
        let slot_a = self
            .slot_of(a)
            .ok_or_else(|| GridError::UnknownWidget(a.clone()))?;
        let slot_b = self
            .slot_of(b)
            .ok_or_else(|| GridError::UnknownWidget(b.clone()))?;
        if slot_a == slot_b {
            return Ok(());
        }

        self.slots.insert(a.clone(), slot_b);
        self.slots.insert(b.clone(), slot_a);
        self.occupants.swap(slot_a.get(), slot_b.get());
        self.changes.push(SlotChange {
            id: a.clone(),
            from: slot_a,
            to: slot_b,
        });
        self.changes.push(SlotChange {
            id: b.clone(),
            from: slot_b,
            to: slot_a,
        });
        debug!(a = %a, b = %b, slot_a = slot_a.get(), slot_b = slot_b.get(), "Swapped widgets");
        Ok(())
    }

    /// Move `id` into `target` by swapping with the current occupant.
    ///
    /// Returns the displaced widget, or `None` when `id` already sits at
    /// `target` or nobody occupies `target`.
    pub fn move_to(
        &mut self,
        id: &WidgetId,
        target: SlotIndex,
    ) -> Result<Option<WidgetId>, GridError> {
        let current = self
            .slot_of(id)
            .ok_or_else(|| GridError::UnknownWidget(id.clone()))?;
        if current == target {
            return Ok(None);
        }
        let Some(displaced) = self.occupant(target).cloned() else {
            debug!(id = %id, target = target.get(), "No occupant at target slot, swap skipped");
            return Ok(None);
        };
        self.swap(id, &displaced)?;
        Ok(Some(displaced))
    }

    /// Drain the slot changes recorded since the last call.
    pub fn take_changes(&mut self) -> Vec<SlotChange> {
        std::mem::take(&mut self.changes)
    }

    /// Check the bijection invariant.
    pub fn is_bijection(&self) -> bool {
        self.slots.len() == self.occupants.len()
            && self
                .occupants
                .iter()
                .enumerate()
                .all(|(slot, id)| self.slots.get(id) == Some(&SlotIndex::new(slot)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> WidgetId {
        WidgetId::new(raw).expect("valid widget id")
    }

    fn abcd() -> PositionMap {
        PositionMap::from_order(["A", "B", "C", "D"].map(id)).unwrap()
    }

    #[test]
    fn from_order_assigns_consecutive_slots() {
        let map = abcd();
        assert_eq!(map.len(), 4);
        assert_eq!(map.slot_of(&id("A")), Some(SlotIndex::new(0)));
        assert_eq!(map.slot_of(&id("D")), Some(SlotIndex::new(3)));
        assert_eq!(map.occupant(SlotIndex::new(2)), Some(&id("C")));
        assert!(map.is_bijection());
    }

    #[test]
    fn from_order_rejects_duplicates() {
        let result = PositionMap::from_order(["A", "B", "A"].map(id));
        assert!(matches!(result, Err(GridError::DuplicateWidget(dup)) if dup == id("A")));
    }

    #[test]
    fn from_slots_accepts_permutation() {
        let map = PositionMap::from_slots([
            (id("A"), SlotIndex::new(2)),
            (id("B"), SlotIndex::new(0)),
            (id("C"), SlotIndex::new(1)),
        ])
        .unwrap();
        let order: Vec<&str> = map.ordered_ids().map(WidgetId::as_str).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
        assert!(map.is_bijection());
    }

    #[test]
    fn from_slots_rejects_gap() {
        let result = PositionMap::from_slots([
            (id("A"), SlotIndex::new(0)),
            (id("B"), SlotIndex::new(2)),
        ]);
        assert!(matches!(
            result,
            Err(GridError::NotAPermutation { slot: 2, len: 2 })
        ));
    }

    #[test]
    fn from_slots_rejects_shared_slot() {
        let result = PositionMap::from_slots([
            (id("A"), SlotIndex::new(1)),
            (id("B"), SlotIndex::new(1)),
        ]);
        assert!(matches!(result, Err(GridError::NotAPermutation { slot: 1, .. })));
    }

    #[test]
    fn empty_map_has_no_max_slot() {
        let map = PositionMap::from_order(Vec::new()).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.max_slot(), None);
    }

    #[test]
    fn swap_exchanges_slots_and_records_changes() {
        let mut map = abcd();
        map.swap(&id("A"), &id("D")).unwrap();

        assert_eq!(map.slot_of(&id("A")), Some(SlotIndex::new(3)));
        assert_eq!(map.slot_of(&id("D")), Some(SlotIndex::new(0)));
        assert_eq!(map.slot_of(&id("B")), Some(SlotIndex::new(1)));
        assert_eq!(map.slot_of(&id("C")), Some(SlotIndex::new(2)));
        assert!(map.is_bijection());

        let changes = map.take_changes();
        assert_eq!(changes.len(), 2);
        assert_eq!(
            changes[0],
            SlotChange {
                id: id("A"),
                from: SlotIndex::new(0),
                to: SlotIndex::new(3)
            }
        );
        assert!(map.take_changes().is_empty(), "changes should be drained");
    }

    #[test]
    fn swap_with_self_is_noop() {
        let mut map = abcd();
        map.swap(&id("B"), &id("B")).unwrap();
        assert!(map.take_changes().is_empty());
    }

    #[test]
    fn swap_unknown_widget_errors_without_mutation() {
        let mut map = abcd();
        let result = map.swap(&id("A"), &id("Z"));
        assert!(matches!(result, Err(GridError::UnknownWidget(unknown)) if unknown == id("Z")));
        assert_eq!(map.slot_of(&id("A")), Some(SlotIndex::new(0)));
        assert!(map.take_changes().is_empty());
    }

    #[test]
    fn move_to_returns_displaced_widget() {
        let mut map = abcd();
        let displaced = map.move_to(&id("B"), SlotIndex::new(2)).unwrap();
        assert_eq!(displaced, Some(id("C")));
        assert_eq!(map.occupant(SlotIndex::new(2)), Some(&id("B")));
        assert_eq!(map.occupant(SlotIndex::new(1)), Some(&id("C")));
    }

    #[test]
    fn move_to_current_slot_is_noop() {
        let mut map = abcd();
        assert_eq!(map.move_to(&id("C"), SlotIndex::new(2)).unwrap(), None);
        assert!(map.take_changes().is_empty());
    }

    #[test]
    fn move_to_unoccupied_slot_skips_swap() {
        let mut map = abcd();
        assert_eq!(map.move_to(&id("A"), SlotIndex::new(9)).unwrap(), None);
        assert_eq!(map.slot_of(&id("A")), Some(SlotIndex::new(0)));
        assert!(map.is_bijection());
    }
}
