//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim translates each action into Zellij API calls; the library never
//! calls Zellij directly, which keeps the handler testable natively.
//!
//! # Example
//!
//! ```rust
//! use zoutline::app::Action;
//!
//! let actions = vec![Action::RenamePane { title: "Leaf 1".to_string() }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit (pressing 'q').
    CloseFocus,

    /// Renames the plugin pane to reflect the current selection.
    RenamePane {
        /// New pane title.
        title: String,
    },
}
