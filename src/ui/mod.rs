//! UI module for rendering the TUI

mod components;
mod forms;
mod landing;
mod layout;

use crate::app::App;
use crate::state::catalog::print_by_id;
use crate::state::View;
use components::{render_error_dialog, render_print_preview_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, main_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Landing => landing::draw(frame, main_area, app),
        View::Signup => forms::draw_signup(frame, main_area, app),
        View::Merchandise => forms::draw_merchandise(frame, main_area, app),
        View::Event => forms::draw_event(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Overlays, error dialog on top
    if let Some(print) = app.state.print_preview.and_then(print_by_id) {
        render_print_preview_dialog(frame, print);
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
