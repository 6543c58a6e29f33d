use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::config::config_path;
use crate::ui::theme::Theme;

const KEY_COLUMN: usize = 10;

/// Centered overlay listing every keybind, followed by where to remap them.
pub fn render(frame: &mut Frame, area: Rect, entries: &[(String, &str)], theme: &Theme) {
    let mut lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| entry_line(key, desc, theme))
        .collect();

    if let Some(path) = config_path() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!(" remap in {}", path.display()),
            Style::default().fg(theme.text_secondary),
        ));
    }

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = (content_width + 3).clamp(32, 64).min(area.width.saturating_sub(4));
    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let overlay = centered_rect(width, height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Keys ",
            Style::default()
                .fg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(theme.surface_bg)),
        overlay,
    );
}

fn entry_line<'a>(key: &str, desc: &'a str, theme: &Theme) -> Line<'a> {
    let key_style = Style::default()
        .fg(theme.pill_key_fg)
        .bg(theme.pill_key_bg)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled(format!(" {key:>width$} ", width = KEY_COLUMN), key_style),
        Span::styled(format!("  {desc}"), Style::default().fg(theme.pill_desc_fg)),
    ])
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
