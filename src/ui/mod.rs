pub mod header;
pub mod help;
pub mod process_table;
pub mod selection_bar;
pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [header_area, table_area, selection_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let page_size = app.collector.page_size();

    header::render(
        frame,
        header_area,
        &app.cycle,
        app.refresh_secs,
        app.sort_mode,
        &app.theme,
    );

    app.visible_rows = process_table::body_rows(table_area);
    let selected = (!app.cycle.rows.is_empty()).then_some(app.selected_index);
    app.table_state.select(selected);
    process_table::render(
        frame,
        table_area,
        &app.cycle.rows,
        page_size,
        &mut app.table_state,
        &app.theme,
    );

    let selected = app
        .selected_row()
        .map(|row| selection_bar::SelectionInfo::from_row(row, page_size));
    selection_bar::render(frame, selection_area, selected, &app.theme);

    statusbar::render(
        frame,
        status_area,
        app.input_mode,
        app.status_message.as_ref(),
        &app.keybinds,
        &app.theme,
    );

    // Help overlay goes last so it draws on top
    if app.show_help() {
        help::render(frame, frame.area(), &app.help_entries(), &app.theme);
    }
}
