//! Tree model for the outline.
//!
//! A [`ListItem`] is an immutable node carrying a title, a symbolic icon key, a
//! unique identity, and an optional ordered sequence of children. Identity is the
//! only thing that matters for equality and hashing: two nodes with the same title
//! are still distinct rows in the outline.
//!
//! Children are shared through [`Rc`] so that the outline snapshot can keep an
//! id → node mapping without cloning subtrees.

use crate::domain::icon;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use uuid::Uuid;

/// Unique, stable identity of a [`ListItem`].
///
/// Assigned once at construction from a random UUID and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generates a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A node of the outline tree.
///
/// `children` distinguishes an absent sequence (`None`, a leaf) from an empty one
/// (`Some(vec![])`). Both are treated as "no children" for disclosure purposes; see
/// [`ListItem::has_children`].
#[derive(Debug, Clone)]
pub struct ListItem {
    id: ItemId,
    title: String,
    system_image: String,
    children: Option<Vec<Rc<ListItem>>>,
}

impl ListItem {
    /// Creates a leaf node.
    ///
    /// # Examples
    ///
    /// ```
    /// use zoutline::ListItem;
    ///
    /// let leaf = ListItem::leaf("Leaf 1", "1.circle");
    /// assert_eq!(leaf.title(), "Leaf 1");
    /// assert!(leaf.children().is_none());
    /// assert!(!leaf.has_children());
    /// ```
    pub fn leaf(title: impl Into<String>, system_image: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            title: title.into(),
            system_image: system_image.into(),
            children: None,
        }
    }

    /// Creates a node with an explicit (possibly empty) children sequence.
    pub fn folder(
        title: impl Into<String>,
        system_image: impl Into<String>,
        children: Vec<Rc<Self>>,
    ) -> Self {
        Self {
            id: ItemId::new(),
            title: title.into(),
            system_image: system_image.into(),
            children: Some(children),
        }
    }

    /// Builds one folder holding `leafs_count` synthetic leaves.
    ///
    /// The folder is titled `Folder {folder_index}` with the `folder` icon. Leaves
    /// are numbered from `leaf_start_index`: leaf `n` is titled `Leaf {n}` and uses
    /// a numbered circle icon derived from `n`. Starting at 1 keeps the numbering
    /// readable, but any start is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use zoutline::ListItem;
    ///
    /// let folder = ListItem::create_folder(3, 2, 11);
    /// assert_eq!(folder.title(), "Folder 2");
    ///
    /// let titles: Vec<&str> = folder.child_items().iter().map(|c| c.title()).collect();
    /// assert_eq!(titles, ["Leaf 11", "Leaf 12", "Leaf 13"]);
    /// ```
    #[must_use]
    pub fn create_folder(leafs_count: usize, folder_index: usize, leaf_start_index: usize) -> Self {
        let leaves = (leaf_start_index..leaf_start_index + leafs_count)
            .map(|n| Rc::new(Self::leaf(format!("Leaf {n}"), icon::numbered(n))))
            .collect();

        Self::folder(format!("Folder {folder_index}"), icon::FOLDER, leaves)
    }

    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Symbolic icon key, resolved by [`icon::resolve`].
    #[must_use]
    pub fn system_image(&self) -> &str {
        &self.system_image
    }

    /// The raw children sequence: `None` for a leaf, possibly empty otherwise.
    #[must_use]
    pub fn children(&self) -> Option<&[Rc<Self>]> {
        self.children.as_deref()
    }

    /// The children sequence, empty for leaves.
    #[must_use]
    pub fn child_items(&self) -> &[Rc<Self>] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Whether this node should show a disclosure indicator.
    ///
    /// An empty children sequence counts as no children.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.child_items().is_empty()
    }

    /// Number of nodes below this one, at any depth.
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        preorder(self.child_items()).count()
    }
}

impl PartialEq for ListItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ListItem {}

impl Hash for ListItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Depth-first pre-order walk over a forest.
///
/// Yields each node before its children, siblings in source order.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use zoutline::ListItem;
/// use zoutline::domain::item::preorder;
///
/// let forest = vec![Rc::new(ListItem::create_folder(2, 1, 1)), Rc::new(ListItem::leaf("x", "0.circle"))];
/// let titles: Vec<&str> = preorder(&forest).map(ListItem::title).collect();
/// assert_eq!(titles, ["Folder 1", "Leaf 1", "Leaf 2", "x"]);
/// ```
#[must_use]
pub fn preorder(nodes: &[Rc<ListItem>]) -> Preorder<'_> {
    Preorder {
        stack: nodes.iter().rev().map(AsRef::as_ref).collect(),
    }
}

/// Iterator returned by [`preorder`].
#[derive(Debug)]
pub struct Preorder<'a> {
    stack: Vec<&'a ListItem>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a ListItem;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack
            .extend(node.child_items().iter().rev().map(AsRef::as_ref));
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn create_folder_numbers_leaves_from_start_index() {
        let folder = ListItem::create_folder(5, 3, 50_001);

        assert_eq!(folder.title(), "Folder 3");
        assert_eq!(folder.system_image(), icon::FOLDER);
        assert_eq!(folder.child_items().len(), 5);
        assert_eq!(folder.child_items()[0].title(), "Leaf 50001");
        assert_eq!(folder.child_items()[4].title(), "Leaf 50005");
        assert!(folder.child_items().iter().all(|leaf| leaf.children().is_none()));
    }

    #[test]
    fn create_folder_with_zero_leaves_has_no_disclosure() {
        let folder = ListItem::create_folder(0, 1, 1);

        assert_eq!(folder.children().map(<[_]>::len), Some(0));
        assert!(!folder.has_children());
    }

    #[test]
    fn leaf_icons_follow_position() {
        let folder = ListItem::create_folder(3, 1, 50);
        let icons: Vec<&str> = folder.child_items().iter().map(|c| c.system_image()).collect();

        assert_eq!(icons, ["50.circle", "0.circle", "1.circle"]);
    }

    #[test]
    fn identities_are_unique() {
        let folder = ListItem::create_folder(1_000, 1, 1);
        let ids: HashSet<ItemId> = preorder(std::slice::from_ref(&Rc::new(folder)))
            .map(ListItem::id)
            .collect();

        assert_eq!(ids.len(), 1_001);
    }

    #[test]
    fn equality_is_by_identity() {
        let a = ListItem::leaf("same", "0.circle");
        let b = ListItem::leaf("same", "0.circle");

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn descendant_count_spans_all_depths() {
        let inner = Rc::new(ListItem::create_folder(3, 2, 1));
        let outer = ListItem::folder("Root", icon::FOLDER, vec![inner, Rc::new(ListItem::leaf("x", "0.circle"))]);

        assert_eq!(outer.descendant_count(), 5);
    }
}
