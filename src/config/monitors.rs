// src/config/monitors.rs

//! Ordered, owning collection of monitors.
//!
//! Monitors live in slots kept in declaration order. Removal vacates a slot
//! instead of shifting its successors, so the id -> slot index stays valid and
//! removal is O(1).

use std::collections::HashMap;

use crate::config::model::{Monitor, MonitorId};

#[derive(Debug, Default)]
pub struct Monitors {
    slots: Vec<Option<Monitor>>,
    index: HashMap<MonitorId, usize>,
}

impl Monitors {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Append a monitor; its id must not already be present.
    pub(crate) fn push(&mut self, monitor: Monitor) {
        debug_assert!(!self.index.contains_key(&monitor.id));
        self.index.insert(monitor.id, self.slots.len());
        self.slots.push(Some(monitor));
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: MonitorId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: MonitorId) -> Option<&Monitor> {
        let slot = *self.index.get(&id)?;
        self.slots[slot].as_ref()
    }

    pub fn get_mut(&mut self, id: MonitorId) -> Option<&mut Monitor> {
        let slot = *self.index.get(&id)?;
        self.slots[slot].as_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Monitor> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Monitor> {
        self.slots.iter_mut().flatten()
    }

    /// Ids of all live monitors, in declaration order.
    pub fn ids(&self) -> Vec<MonitorId> {
        self.iter().map(Monitor::id).collect()
    }

    /// Detach a monitor and hand ownership to the caller.
    pub(crate) fn take(&mut self, id: MonitorId) -> Option<Monitor> {
        let slot = self.index.remove(&id)?;
        let monitor = self.slots[slot].take();

        // Vacated slots at the tail are never referenced again.
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        monitor
    }

    /// Detach every monitor, in declaration order.
    pub(crate) fn drain(&mut self) -> std::iter::Flatten<std::vec::IntoIter<Option<Monitor>>> {
        self.index.clear();
        std::mem::take(&mut self.slots).into_iter().flatten()
    }
}
