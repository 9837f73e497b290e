//! Taskbar entries mirroring open and minimized windows.

use serde::{Deserialize, Serialize};

use crate::model::WindowId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    /// Window title captured when the entry was created.
    pub label: String,
    pub is_active: bool,
}

/// Ordered taskbar entries, one per open or minimized window, in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskbarMirror {
    entries: Vec<TaskbarEntry>,
}

impl TaskbarMirror {
    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }

    pub fn entry(&self, window_id: &WindowId) -> Option<&TaskbarEntry> {
        self.entries.iter().find(|e| &e.window_id == window_id)
    }

    pub fn contains(&self, window_id: &WindowId) -> bool {
        self.entry(window_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an active entry unless one already exists for `window_id`.
    ///
    /// Returns `true` when a new entry was created.
    pub fn add_entry(&mut self, window_id: &WindowId, label: &str) -> bool {
        if self.contains(window_id) {
            return false;
        }
        self.entries.push(TaskbarEntry {
            window_id: window_id.clone(),
            label: label.to_string(),
            is_active: true,
        });
        true
    }

    /// Returns `true` when an entry was removed.
    pub fn remove_entry(&mut self, window_id: &WindowId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.window_id != window_id);
        self.entries.len() != before
    }

    pub fn set_active(&mut self, window_id: &WindowId, active: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|e| &e.window_id == window_id) {
            entry.is_active = active;
        }
    }

    /// Marks `window_id` active and every other entry inactive.
    pub fn set_exclusive_active(&mut self, window_id: &WindowId) {
        for entry in &mut self.entries {
            entry.is_active = &entry.window_id == window_id;
        }
    }

    pub fn clear_active(&mut self) {
        for entry in &mut self.entries {
            entry.is_active = false;
        }
    }
}
