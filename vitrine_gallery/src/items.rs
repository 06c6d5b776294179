// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The item snapshot the gallery presents.
//!
//! Items come from an external content store and are treated as a snapshot
//! taken at mount time: the gallery never mutates them, and replacing the
//! snapshot mid-session goes through [`crate::Gallery::set_items`], which
//! force-closes an open detail view first.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// Opaque stable identifier of a gallery item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(pub u64);

/// One gallery entry: an image plus its caption text.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    /// Stable identifier from the content store.
    pub id: ItemId,
    /// Image location, carried opaquely; a URL that fails to load is the
    /// host's rendering concern, not an error here.
    pub image_url: String,
    /// Title shown in the detail caption panel.
    pub title: String,
    /// Free-text description, split into sentence lines for the caption.
    pub description: String,
}

/// Ordered, read-only snapshot of gallery items with id lookup.
#[derive(Clone, Debug, Default)]
pub struct ItemList {
    items: Vec<GalleryItem>,
    by_id: HashMap<ItemId, usize>,
}

impl ItemList {
    /// Builds a snapshot, preserving insertion order.
    ///
    /// If an id occurs twice, the first occurrence wins the lookup.
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            by_id.entry(item.id).or_insert(index);
        }
        Self { items, by_id }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the snapshot holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    /// Position of the item with the given id.
    #[must_use]
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Iterates the items in order.
    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }
}

/// Detail-view slide number for an item index: 1-based, wrapped at 99,
/// zero-padded to two digits.
#[must_use]
pub fn caption_number(index: usize) -> String {
    alloc::format!("{:02}", (index % 99) + 1)
}

/// Splits a description into sentence-level caption lines.
///
/// A line ends after `。`, `！`, `？`, `.`, `!`, or `?`; terminal
/// punctuation stays on its line and blank segments are dropped.
#[must_use]
pub fn caption_lines(description: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for ch in description.chars() {
        current.push(ch);
        if matches!(ch, '。' | '！' | '？' | '.' | '!' | '?') {
            push_trimmed(&mut lines, &mut current);
        }
    }
    push_trimmed(&mut lines, &mut current);
    lines
}

fn push_trimmed(lines: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        lines.push(String::from(trimmed));
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use alloc::borrow::ToOwned;
    use alloc::vec;

    use super::*;

    fn item(id: u64) -> GalleryItem {
        GalleryItem {
            id: ItemId(id),
            image_url: alloc::format!("img-{id}"),
            title: alloc::format!("title-{id}"),
            description: String::new(),
        }
    }

    #[test]
    fn lookup_preserves_insertion_order() {
        let list = ItemList::new(vec![item(7), item(3), item(9)]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.index_of(ItemId(3)), Some(1));
        assert_eq!(list.get(2).map(|i| i.id), Some(ItemId(9)));
        assert_eq!(list.index_of(ItemId(42)), None);
    }

    #[test]
    fn caption_numbers_wrap_at_ninety_nine() {
        assert_eq!(caption_number(0), "01");
        assert_eq!(caption_number(8), "09");
        assert_eq!(caption_number(98), "99");
        assert_eq!(caption_number(99), "01");
    }

    #[test]
    fn descriptions_split_after_sentence_enders() {
        let lines = caption_lines("First piece. Second! Third?");
        assert_eq!(
            lines,
            vec![
                "First piece.".to_owned(),
                "Second!".to_owned(),
                "Third?".to_owned()
            ]
        );
    }

    #[test]
    fn cjk_punctuation_splits_too() {
        let lines = caption_lines("第一句。第二句！最后");
        assert_eq!(
            lines,
            vec!["第一句。".to_owned(), "第二句！".to_owned(), "最后".to_owned()]
        );
    }

    #[test]
    fn blank_descriptions_produce_no_lines() {
        assert!(caption_lines("").is_empty());
        assert!(caption_lines("   ").is_empty());
    }
}
