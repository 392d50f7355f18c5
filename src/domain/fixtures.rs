//! Synthetic forests for exercising the outline with large item counts.
//!
//! Two shapes are available: one flat folder of many leaves, or a root holding
//! several folders of leaves with non-overlapping numbering. In both cases the
//! sidebar displays the root's children, so the flat fixture shows leaves at the
//! top level and the folder fixture shows folders.

use crate::domain::error::{OutlineError, Result};
use crate::domain::icon;
use crate::domain::item::ListItem;
use std::rc::Rc;
use std::str::FromStr;

pub const DEFAULT_LEAF_COUNT: usize = 100_000;
pub const DEFAULT_FOLDER_COUNT: usize = 4;
pub const DEFAULT_LEAVES_PER_FOLDER: usize = 25_000;

/// Which synthetic forest to build at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fixture {
    /// One folder of `leaf_count` leaves.
    #[default]
    Flat,
    /// `folder_count` folders of `leaves_per_folder` leaves each.
    Folders,
}

/// Item counts used by [`Fixture::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSize {
    pub leaf_count: usize,
    pub folder_count: usize,
    pub leaves_per_folder: usize,
}

impl Default for FixtureSize {
    fn default() -> Self {
        Self {
            leaf_count: DEFAULT_LEAF_COUNT,
            folder_count: DEFAULT_FOLDER_COUNT,
            leaves_per_folder: DEFAULT_LEAVES_PER_FOLDER,
        }
    }
}

impl FromStr for Fixture {
    type Err = OutlineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "folders" => Ok(Self::Folders),
            other => Err(OutlineError::Config(format!("unknown fixture `{other}`"))),
        }
    }
}

impl Fixture {
    /// Builds the top-level sequence shown by the sidebar.
    #[must_use]
    pub fn build(self, size: &FixtureSize) -> Vec<Rc<ListItem>> {
        let _span = tracing::debug_span!("build_fixture", fixture = ?self, ?size).entered();

        let root = match self {
            Self::Flat => flat(size.leaf_count),
            Self::Folders => folders(size.folder_count, size.leaves_per_folder),
        };

        tracing::debug!(
            top_level = root.child_items().len(),
            total = root.descendant_count(),
            "fixture built"
        );

        root.child_items().to_vec()
    }
}

/// A single folder of `leaf_count` leaves numbered from 1.
#[must_use]
pub fn flat(leaf_count: usize) -> ListItem {
    ListItem::create_folder(leaf_count, 1, 1)
}

/// A `Root` node holding `folder_count` folders.
///
/// Folder `k` (1-based) holds leaves `(k-1)*leaves_per_folder + 1` through
/// `k*leaves_per_folder`.
///
/// # Examples
///
/// ```
/// use zoutline::domain::fixtures;
///
/// let root = fixtures::folders(4, 10);
/// let third = &root.child_items()[2];
/// assert_eq!(third.title(), "Folder 3");
/// assert_eq!(third.child_items()[0].title(), "Leaf 21");
/// ```
#[must_use]
pub fn folders(folder_count: usize, leaves_per_folder: usize) -> ListItem {
    let children = (1..=folder_count)
        .map(|k| {
            Rc::new(ListItem::create_folder(
                leaves_per_folder,
                k,
                (k - 1) * leaves_per_folder + 1,
            ))
        })
        .collect();

    ListItem::folder("Root", icon::FOLDER, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_fixture_shows_leaves_at_top_level() {
        let size = FixtureSize { leaf_count: 10, ..FixtureSize::default() };
        let top = Fixture::Flat.build(&size);

        assert_eq!(top.len(), 10);
        assert_eq!(top[0].title(), "Leaf 1");
        assert!(top.iter().all(|item| !item.has_children()));
    }

    #[test]
    fn folder_fixture_uses_non_overlapping_ranges() {
        let size = FixtureSize {
            folder_count: 3,
            leaves_per_folder: 5,
            ..FixtureSize::default()
        };
        let top = Fixture::Folders.build(&size);

        let firsts: Vec<&str> = top.iter().map(|f| f.child_items()[0].title()).collect();
        let lasts: Vec<&str> = top.iter().map(|f| f.child_items()[4].title()).collect();

        assert_eq!(firsts, ["Leaf 1", "Leaf 6", "Leaf 11"]);
        assert_eq!(lasts, ["Leaf 5", "Leaf 10", "Leaf 15"]);
    }

    #[test]
    fn fixture_names_parse() {
        assert_eq!("flat".parse::<Fixture>().ok(), Some(Fixture::Flat));
        assert_eq!(" Folders ".parse::<Fixture>().ok(), Some(Fixture::Folders));
        assert!(matches!("tree".parse::<Fixture>(), Err(OutlineError::Config(_))));
    }
}
