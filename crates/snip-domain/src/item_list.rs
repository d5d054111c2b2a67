use serde::Serialize;
use snip_core::{SnipError, SnipResult};

/// Item and copy counts for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub item_count: usize,
    pub copy_count: u32,
}

/// Ordered collection of unique snippet texts plus the per-run copy
/// counter.
///
/// Invariants: no two items are equal as strings, and no item is blank
/// (empty after trimming). The copy counter only ever increases within a
/// run and is never persisted.
///
/// Selection is a UI concern; index-taking operations accept
/// `Option<usize>` so "nothing selected" is an expressible input that
/// fails like any other invalid index.
#[derive(Debug, Default)]
pub struct ItemList {
    items: Vec<String>,
    copy_count: u32,
}

impl ItemList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            copy_count: 0,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn copy_count(&self) -> u32 {
        self.copy_count
    }

    /// Appends `text` to the end of the list, stored exactly as supplied.
    ///
    /// Blank text and exact duplicates are rejected; existing items keep
    /// their positions.
    pub fn add(&mut self, text: &str) -> SnipResult<()> {
        if text.trim().is_empty() {
            return Err(SnipError::EmptyText);
        }
        if self.items.iter().any(|item| item == text) {
            return Err(SnipError::Duplicate(text.to_string()));
        }
        self.items.push(text.to_string());
        Ok(())
    }

    /// Replaces the item at `index` in place; its position is unchanged.
    ///
    /// Uniqueness is NOT re-checked here: editing an item to match another
    /// can introduce a duplicate, matching the reference behavior.
    pub fn edit(&mut self, index: Option<usize>, new_text: &str) -> SnipResult<()> {
        if new_text.trim().is_empty() {
            return Err(SnipError::EmptyText);
        }
        let idx = index.ok_or(SnipError::InvalidSelection)?;
        let slot = self
            .items
            .get_mut(idx)
            .ok_or(SnipError::InvalidSelection)?;
        *slot = new_text.to_string();
        Ok(())
    }

    /// Removes the item at `index`, shifting later items left.
    pub fn remove(&mut self, index: Option<usize>) -> SnipResult<()> {
        let idx = index
            .filter(|&idx| idx < self.items.len())
            .ok_or(SnipError::InvalidSelection)?;
        self.items.remove(idx);
        Ok(())
    }

    /// Empties the list unconditionally. Confirming intent with the user
    /// first is the caller's job.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the text at `index` for the caller to place on the system
    /// clipboard, and bumps the copy counter.
    ///
    /// The counter moves only on a successful lookup, never on failure.
    pub fn copy(&mut self, index: Option<usize>) -> SnipResult<&str> {
        if self.items.is_empty() {
            return Err(SnipError::EmptyList);
        }
        let idx = index.ok_or(SnipError::InvalidSelection)?;
        let item = self.items.get(idx).ok_or(SnipError::InvalidSelection)?;
        self.copy_count += 1;
        Ok(item)
    }

    /// Appends one loaded line, trimmed, if it is non-blank. Returns
    /// whether the line was kept.
    ///
    /// Loaded lines are NOT deduplicated against existing content.
    pub fn append_loaded_line(&mut self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }
        self.items.push(line.to_string());
        true
    }

    /// Appends every trimmed, non-blank line of `text` in order, without
    /// deduplication. Returns how many lines were appended.
    pub fn extend_from_lines(&mut self, text: &str) -> usize {
        text.lines()
            .filter(|line| self.append_loaded_line(line))
            .count()
    }

    pub fn status(&self) -> StatusSummary {
        StatusSummary {
            item_count: self.items.len(),
            copy_count: self.copy_count,
        }
    }
}
