use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Cell, Row, Table, TableState};

use crate::format::{format_bytes, format_percent};
use crate::system::snapshot::ProcessRow;
use crate::ui::theme::{HOT_CPU_PERCENT, Theme};

pub const HEADERS: [&str; 7] = ["PID", "USER", "%CPU", "%MEM", "VSZ", "RSS", "CMD"];

const WIDTHS: [Constraint; 7] = [
    Constraint::Length(7),
    Constraint::Length(10),
    Constraint::Length(7),
    Constraint::Length(7),
    Constraint::Length(9),
    Constraint::Length(9),
    Constraint::Min(8),
];

/// Rows available for processes once the header line is drawn.
pub fn body_rows(area: Rect) -> usize {
    area.height.saturating_sub(1) as usize
}

/// Text for each column of one process, in `HEADERS` order.
pub fn row_cells(row: &ProcessRow, page_size: u64) -> [String; 7] {
    let sample = &row.sample;
    [
        sample.pid.to_string(),
        sample.owner.clone(),
        format_percent(row.metrics.cpu_percent),
        format_percent(row.metrics.mem_percent),
        format_bytes(sample.virtual_size_bytes),
        format_bytes(sample.resident_bytes(page_size)),
        sample.command.clone(),
    ]
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    rows: &[ProcessRow],
    page_size: u64,
    state: &mut TableState,
    theme: &Theme,
) {
    let header = Row::new(HEADERS).style(
        Style::default()
            .fg(theme.table_header_fg)
            .add_modifier(Modifier::BOLD),
    );

    let body = rows.iter().map(|row| {
        let [pid, user, cpu, mem, vsz, rss, cmd] = row_cells(row, page_size);
        let cpu_style = if row.metrics.cpu_percent >= HOT_CPU_PERCENT {
            Style::default().fg(theme.cpu_hot)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(pid),
            Cell::from(user),
            Cell::from(cpu).style(cpu_style),
            Cell::from(mem),
            Cell::from(vsz),
            Cell::from(rss),
            Cell::from(cmd),
        ])
        .style(Style::default().fg(theme.text_primary))
    });

    let table = Table::new(body, WIDTHS).header(header).row_highlight_style(
        Style::default()
            .fg(theme.selection_fg)
            .bg(theme.selection_bg)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(table, area, state);
}
