//! Bot registry — the cross-agent lookup table.
//!
//! Agents never hold references to each other; the registry maps a bot id
//! to a non-owning handle (team plus ECS entity) and is the sole
//! discovery mechanism between agents. The engine owns the registry and
//! hands systems a borrow, so all mutation and iteration stay on the
//! engine thread.
//!
//! Iteration order is part of the contract: entries are visited in
//! registration order. Detection and projectile hit resolution are
//! first-match scans, so this order decides ties.

use commander_core::enums::Team;
use commander_core::types::BotId;

/// Non-owning handle to a registered bot. The entity serves as both the
/// damage sink (via its `Health` component) and the position accessor
/// (via its `Position` component); the registry never owns the bot's
/// lifecycle.
#[derive(Debug, Clone, Copy)]
pub struct RegistryEntry {
    pub team: Team,
    pub entity: hecs::Entity,
}

/// Registration-ordered table of bot handles.
#[derive(Debug, Default)]
pub struct BotRegistry {
    entries: Vec<(BotId, RegistryEntry)>,
}

impl BotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a handle, replacing any existing entry for the same id in
    /// place (the replaced entry keeps its position in iteration order).
    pub fn register(&mut self, id: BotId, entry: RegistryEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|(eid, _)| *eid == id) {
            existing.1 = entry;
        } else {
            self.entries.push((id, entry));
        }
    }

    /// Remove the entry for `id`, if present.
    pub fn unregister(&mut self, id: BotId) {
        self.entries.retain(|(eid, _)| *eid != id);
    }

    /// Lazy, live view of the current entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (BotId, &RegistryEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn get(&self, id: BotId) -> Option<&RegistryEntry> {
        self.entries
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
