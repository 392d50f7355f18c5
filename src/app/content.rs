//! Content controller: the detail pane.
//!
//! Stateless. [`ContentController::render`] is a pure function of the selected
//! node (or its absence) and produces the text and glyph the detail pane shows.

use crate::domain::error::Result;
use crate::domain::{icon, ListItem};

/// Text shown when nothing is selected.
pub const PLACEHOLDER_TEXT: &str = "No item selected";

/// What the detail pane displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentView {
    /// Label text.
    pub text: String,
    /// Icon key the glyph was resolved from.
    pub icon_key: String,
    /// Resolved glyph.
    pub glyph: &'static str,
}

/// Renders the detail pane for a single node.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentController;

impl ContentController {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders `item`, or the placeholder when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::Icon`](crate::OutlineError::Icon) if the item's
    /// icon key is not part of the built-in namespace. This is a configuration
    /// error, not a runtime condition to recover from.
    ///
    /// # Examples
    ///
    /// ```
    /// use zoutline::{ContentController, ListItem};
    ///
    /// let leaf = ListItem::leaf("Leaf 1", "1.circle");
    /// let view = ContentController::new().render(Some(&leaf)).unwrap();
    /// assert_eq!(view.text, "Selected item: Leaf 1");
    /// assert_eq!(view.glyph, "①");
    /// ```
    pub fn render(&self, item: Option<&ListItem>) -> Result<ContentView> {
        let (text, icon_key) = item.map_or_else(
            || (PLACEHOLDER_TEXT.to_string(), icon::DEFAULT_ICON),
            |item| (format!("Selected item: {}", item.title()), item.system_image()),
        );

        let glyph = icon::resolve(icon_key)?;

        Ok(ContentView {
            text,
            icon_key: icon_key.to_string(),
            glyph,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutlineError;

    #[test]
    fn placeholder_without_selection() {
        let view = ContentController::new().render(None);

        assert!(matches!(
            view,
            Ok(ContentView { ref text, ref icon_key, glyph: "ⓘ" })
                if text == PLACEHOLDER_TEXT && icon_key == icon::DEFAULT_ICON
        ));
    }

    #[test]
    fn folder_renders_with_folder_glyph() {
        let folder = ListItem::create_folder(2, 3, 1);
        let view = ContentController::new().render(Some(&folder));

        assert_eq!(view.ok().map(|v| (v.text, v.glyph)), Some(("Selected item: Folder 3".to_string(), "▣")));
    }

    #[test]
    fn unknown_icon_is_an_error() {
        let odd = ListItem::leaf("odd", "sparkles");

        assert!(matches!(
            ContentController::new().render(Some(&odd)),
            Err(OutlineError::Icon(key)) if key == "sparkles"
        ));
    }
}
