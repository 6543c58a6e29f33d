use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::SortMode;
use crate::system::snapshot::Cycle;
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    cycle: &Cycle,
    refresh_secs: u64,
    sort_mode: SortMode,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let secondary = Style::default().fg(theme.text_secondary);
    let line = Line::from(vec![
        Span::styled(
            " sysmon ",
            Style::default()
                .fg(theme.header_accent_fg)
                .bg(theme.header_accent_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("Total ticks: {}", cycle.system.total_ticks), secondary),
        Span::raw("  "),
        Span::styled(
            format!("MemTotal: {} kB", cycle.system.total_memory_kb),
            secondary,
        ),
        Span::raw("  "),
        Span::styled(format!("Procs: {}", cycle.rows.len()), secondary),
        Span::raw("  "),
        Span::styled(format!("Interval: {refresh_secs}s"), secondary),
        Span::raw("  "),
        Span::styled(
            format!("Sort: {}", sort_mode.label()),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), inner);
}
