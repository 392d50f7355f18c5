//! Projection of a forest into an outline snapshot.
//!
//! The projector appends every top-level node unconditionally, then walks the
//! forest depth-first and registers an explicit parent → children edge for every
//! node whose children sequence is non-empty. Sibling order is the source order;
//! nothing is sorted, filtered, or deduplicated.

use crate::domain::ListItem;
use crate::outline::snapshot::{OutlineSnapshot, Section, SectionSnapshot};
use std::rc::Rc;

/// Builds the content of one section from `nodes`.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use zoutline::ListItem;
/// use zoutline::outline::project_section;
///
/// let forest = vec![Rc::new(ListItem::create_folder(2, 1, 1))];
/// let content = project_section(&forest);
///
/// assert_eq!(content.roots(), [forest[0].id()]);
/// assert_eq!(content.children_of(forest[0].id()).len(), 2);
/// ```
#[must_use]
pub fn project_section(nodes: &[Rc<ListItem>]) -> SectionSnapshot {
    let _span = tracing::debug_span!("project_section", roots = nodes.len()).entered();

    let mut content = SectionSnapshot::new();
    content.append(nodes, None);
    append_recursively(&mut content, nodes);

    tracing::debug!(items = content.len(), "section projected");
    content
}

fn append_recursively(content: &mut SectionSnapshot, nodes: &[Rc<ListItem>]) {
    for node in nodes {
        if node.has_children() {
            let children = node.child_items();
            content.append(children, Some(&**node));
            append_recursively(content, children);
        }
    }
}

/// Builds a fresh outline holding a single projected section.
#[must_use]
pub fn project(section: Section, nodes: &[Rc<ListItem>]) -> OutlineSnapshot {
    let mut outline = OutlineSnapshot::new();
    reproject(&mut outline, section, nodes);
    outline
}

/// Resets `section` of an existing outline and repopulates it from `nodes`.
///
/// Nothing from the previous content survives, including expansion state.
pub fn reproject(outline: &mut OutlineSnapshot, section: Section, nodes: &[Rc<ListItem>]) {
    outline.reset_section(section);
    outline.apply(section, project_section(nodes));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::preorder;
    use crate::domain::{icon, ItemId};

    fn nested_forest() -> Vec<Rc<ListItem>> {
        let inner = Rc::new(ListItem::create_folder(3, 2, 10));
        let empty = Rc::new(ListItem::folder("Empty", icon::FOLDER, vec![]));
        let outer = Rc::new(ListItem::folder(
            "Outer",
            icon::FOLDER,
            vec![inner, Rc::new(ListItem::leaf("solo", "1.circle")), empty],
        ));
        vec![outer, Rc::new(ListItem::create_folder(2, 5, 100))]
    }

    #[test]
    fn flattened_projection_matches_preorder() {
        let forest = nested_forest();
        let content = project_section(&forest);

        let expected: Vec<ItemId> = preorder(&forest).map(ListItem::id).collect();
        assert_eq!(content.items(), expected);
    }

    #[test]
    fn every_descendant_is_registered() {
        let forest = nested_forest();
        let content = project_section(&forest);

        for node in preorder(&forest) {
            assert!(content.contains(node.id()), "{} missing", node.title());
        }
    }

    #[test]
    fn empty_children_register_no_edge() {
        let forest = nested_forest();
        let content = project_section(&forest);
        let empty = forest[0]
            .child_items()
            .iter()
            .find(|c| c.title() == "Empty")
            .map(|c| c.id());

        let Some(empty) = empty else {
            panic!("fixture should contain an empty folder");
        };
        assert!(!content.has_disclosure(empty));
        assert!(content.children_of(empty).is_empty());
    }

    #[test]
    fn reproject_does_not_keep_stale_entries() {
        let first = nested_forest();
        let second = vec![Rc::new(ListItem::leaf("only", "2.circle"))];
        let mut outline = project(Section::Main, &first);

        reproject(&mut outline, Section::Main, &second);

        let content = outline.section(Section::Main);
        assert_eq!(content.map(SectionSnapshot::len), Some(1));
        assert_eq!(content.map(SectionSnapshot::roots), Some(&[second[0].id()][..]));
        assert!(first.iter().all(|n| content.is_some_and(|c| !c.contains(n.id()))));
    }

    #[test]
    fn projecting_twice_is_idempotent() {
        let forest = nested_forest();
        let mut outline = project(Section::Main, &forest);
        let once = outline.section(Section::Main).map(SectionSnapshot::items);

        reproject(&mut outline, Section::Main, &forest);

        assert_eq!(outline.section(Section::Main).map(SectionSnapshot::items), once);
        assert_eq!(outline.sections(), [Section::Main]);
    }
}
