//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the layout's component renderers
//!
//! # Example
//!
//! ```rust,no_run
//! use zoutline::{ui, AppState, Sidebar, Theme};
//!
//! let state = AppState::new(Sidebar::with_seed(Vec::new(), 0), Theme::default());
//! ui::render(&state, 24, 80)?; // Renders to stdout
//! # Ok::<(), zoutline::OutlineError>(())
//! ```

use crate::app::modes::Layout;
use crate::app::AppState;
use crate::domain::error::Result;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output using `print!`. Does not clear the screen; Zellij
/// hands the plugin a fresh frame on every render.
///
/// # Errors
///
/// Returns an icon error if a visible row or the selection carries an icon key
/// outside the built-in namespace. Nothing is printed in that case.
pub fn render(state: &AppState, rows: usize, cols: usize) -> Result<()> {
    let viewmodel = state.compute_viewmodel(rows, cols)?;

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
    Ok(())
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match vm.layout {
        Layout::Split { sidebar_width } => {
            components::render_split_mode(vm, theme, sidebar_width, cols, rows);
        }
        Layout::Single(focus) => components::render_single_mode(vm, theme, focus, cols, rows),
    }
}
