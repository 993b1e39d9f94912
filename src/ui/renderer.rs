//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_screen → ANSI output
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout at the state's current layout.
pub fn render(state: &AppState) {
    let _span = tracing::trace_span!(
        "render",
        rows = state.layout.rows,
        cols = state.layout.cols
    )
    .entered();

    let viewmodel = state.compute_viewmodel();
    components::render_screen(&viewmodel, &state.theme, &state.layout);
}
