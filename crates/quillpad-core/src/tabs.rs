//! Ordered tab container with an active tab.

use crate::document::{Document, TabId};

/// Items that can live in a [`TabStrip`].
pub trait HasTabId {
    fn tab_id(&self) -> TabId;
}

impl HasTabId for Document {
    fn tab_id(&self) -> TabId {
        self.id()
    }
}

/// Tabs in display order plus the index of the active one.
///
/// Indices passed in from the UI may be stale; out-of-range indices are
/// ignored rather than treated as bugs.
#[derive(Debug, Clone)]
pub struct TabStrip<T> {
    tabs: Vec<T>,
    active: Option<usize>,
}

impl<T: HasTabId> TabStrip<T> {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
        }
    }

    /// Appends a tab and makes it active. Returns its index.
    pub fn push(&mut self, tab: T) -> usize {
        self.tabs.push(tab);
        let idx = self.tabs.len() - 1;
        self.active = Some(idx);
        idx
    }

    /// Removes the tab at `idx`.
    ///
    /// The tab that was active stays active if it survives. If the active
    /// tab itself is removed, its right neighbour (or the new last tab)
    /// takes over.
    pub fn remove(&mut self, idx: usize) -> Option<T> {
        if idx >= self.tabs.len() {
            return None;
        }
        let tab = self.tabs.remove(idx);

        self.active = match self.active {
            _ if self.tabs.is_empty() => None,
            Some(active) if idx < active => Some(active - 1),
            Some(active) => Some(active.min(self.tabs.len() - 1)),
            None => None,
        };

        Some(tab)
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.tabs.get(idx)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&T> {
        self.active.and_then(|idx| self.tabs.get(idx))
    }

    pub fn active_mut(&mut self) -> Option<&mut T> {
        self.active.and_then(|idx| self.tabs.get_mut(idx))
    }

    /// Makes the tab at `idx` active. Returns false if there is no such tab.
    pub fn set_active(&mut self, idx: usize) -> bool {
        if idx < self.tabs.len() {
            self.active = Some(idx);
            true
        } else {
            false
        }
    }

    /// Returns the current index of the tab with `id`.
    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.tab_id() == id)
    }

    pub fn by_id_mut(&mut self, id: TabId) -> Option<&mut T> {
        self.tabs.iter_mut().find(|t| t.tab_id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

impl<T: HasTabId> Default for TabStrip<T> {
    fn default() -> Self {
        Self::new()
    }
}
