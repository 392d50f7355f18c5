//! Display-ready snapshot of the outline.
//!
//! A [`SectionSnapshot`] stores an explicit id → node mapping plus an ordered
//! adjacency structure: the root sequence and, for every node with children, the
//! ordered list of its child ids. Expansion state lives alongside, so a freshly
//! built snapshot starts fully collapsed.
//!
//! An [`OutlineSnapshot`] groups section snapshots under ordered sections. The
//! outline only ever uses [`Section::Main`], but keeping sections explicit makes
//! "reset the section" a first-class operation.

use crate::domain::{ItemId, ListItem};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Sections of the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Main,
}

/// One visible line of the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineRow {
    /// Node rendered on this line.
    pub id: ItemId,
    /// Nesting level, 0 for root nodes.
    pub depth: usize,
    /// Whether a parent → children edge exists for this node.
    pub has_disclosure: bool,
    /// Whether the node's children are currently shown.
    pub is_expanded: bool,
}

/// Snapshot of a single section.
#[derive(Debug, Clone, Default)]
pub struct SectionSnapshot {
    roots: Vec<ItemId>,
    children: HashMap<ItemId, Vec<ItemId>>,
    parents: HashMap<ItemId, ItemId>,
    items: HashMap<ItemId, Rc<ListItem>>,
    expanded: HashSet<ItemId>,
}

impl SectionSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `nodes` at the root level or under `parent`.
    ///
    /// Registers every node in the id map. Order is preserved; nothing is sorted
    /// or deduplicated. A repeated id overwrites the earlier mapping.
    pub fn append(&mut self, nodes: &[Rc<ListItem>], parent: Option<&ListItem>) {
        let ids = nodes.iter().map(|node| node.id());

        match parent {
            Some(parent) => {
                let parent_id = parent.id();
                for node in nodes {
                    self.parents.insert(node.id(), parent_id);
                }
                self.children.entry(parent_id).or_default().extend(ids);
            }
            None => self.roots.extend(ids),
        }

        for node in nodes {
            self.items.insert(node.id(), Rc::clone(node));
        }
    }

    /// Number of nodes registered in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Looks a node up by identity, regardless of expansion state.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Rc<ListItem>> {
        self.items.get(&id)
    }

    #[must_use]
    pub fn roots(&self) -> &[ItemId] {
        &self.roots
    }

    /// Ordered child ids registered under `id`; empty if there is no edge.
    #[must_use]
    pub fn children_of(&self, id: ItemId) -> &[ItemId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn parent_of(&self, id: ItemId) -> Option<ItemId> {
        self.parents.get(&id).copied()
    }

    /// Whether `id` has a non-empty parent → children edge.
    #[must_use]
    pub fn has_disclosure(&self, id: ItemId) -> bool {
        !self.children_of(id).is_empty()
    }

    /// Every id in depth-first pre-order, ignoring expansion state.
    #[must_use]
    pub fn items(&self) -> Vec<ItemId> {
        Walk::new(self, true).map(|row| row.id).collect()
    }

    /// Expands `id` if it has children. Returns whether the state changed.
    pub fn expand(&mut self, id: ItemId) -> bool {
        self.has_disclosure(id) && self.expanded.insert(id)
    }

    /// Collapses `id`. Returns whether the state changed.
    pub fn collapse(&mut self, id: ItemId) -> bool {
        self.expanded.remove(&id)
    }

    /// Flips the expansion state of `id`. Returns whether the state changed.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.is_expanded(id) {
            self.collapse(id)
        } else {
            self.expand(id)
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: ItemId) -> bool {
        self.expanded.contains(&id)
    }

    /// Rows currently visible: roots, plus children of expanded nodes.
    pub fn visible_rows(&self) -> impl Iterator<Item = OutlineRow> + '_ {
        Walk::new(self, false)
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible_rows().count()
    }
}

/// Depth-first walk over the adjacency structure.
struct Walk<'a> {
    snapshot: &'a SectionSnapshot,
    stack: Vec<(ItemId, usize)>,
    expand_all: bool,
}

impl<'a> Walk<'a> {
    fn new(snapshot: &'a SectionSnapshot, expand_all: bool) -> Self {
        Self {
            snapshot,
            stack: snapshot.roots.iter().rev().map(|&id| (id, 0)).collect(),
            expand_all,
        }
    }
}

impl Iterator for Walk<'_> {
    type Item = OutlineRow;

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let children = self.snapshot.children_of(id);
        let is_expanded = self.snapshot.is_expanded(id);

        if self.expand_all || is_expanded {
            self.stack
                .extend(children.iter().rev().map(|&child| (child, depth + 1)));
        }

        Some(OutlineRow {
            id,
            depth,
            has_disclosure: !children.is_empty(),
            is_expanded,
        })
    }
}

/// Ordered sections and their contents.
#[derive(Debug, Clone, Default)]
pub struct OutlineSnapshot {
    sections: Vec<Section>,
    contents: HashMap<Section, SectionSnapshot>,
}

impl OutlineSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds sections that are not present yet, each with empty content.
    pub fn append_sections(&mut self, sections: &[Section]) {
        for &section in sections {
            if !self.sections.contains(&section) {
                self.sections.push(section);
                self.contents.insert(section, SectionSnapshot::new());
            }
        }
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Clears the section's content, keeping the section itself.
    pub fn reset_section(&mut self, section: Section) {
        self.append_sections(&[section]);
        self.contents.insert(section, SectionSnapshot::new());
    }

    /// Replaces the section's content with `content`.
    pub fn apply(&mut self, section: Section, content: SectionSnapshot) {
        self.append_sections(&[section]);
        self.contents.insert(section, content);
    }

    #[must_use]
    pub fn section(&self, section: Section) -> Option<&SectionSnapshot> {
        self.contents.get(&section)
    }

    pub fn section_mut(&mut self, section: Section) -> Option<&mut SectionSnapshot> {
        self.contents.get_mut(&section)
    }
}
