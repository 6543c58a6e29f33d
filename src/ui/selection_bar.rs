use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::format::{format_bytes, truncate_unicode};
use crate::system::snapshot::ProcessRow;
use crate::ui::theme::Theme;

#[derive(Debug, Clone)]
pub struct SelectionInfo {
    pub pid: u32,
    pub owner: String,
    pub command: String,
    pub resident_bytes: u64,
}

impl SelectionInfo {
    pub fn from_row(row: &ProcessRow, page_size: u64) -> Self {
        Self {
            pid: row.sample.pid,
            owner: row.sample.owner.clone(),
            command: row.sample.command.clone(),
            resident_bytes: row.sample.resident_bytes(page_size),
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, selected: Option<SelectionInfo>, theme: &Theme) {
    let style = Style::default()
        .bg(theme.statusbar_bg)
        .fg(theme.text_primary);
    let width = area.width as usize;
    let line = match selected {
        Some(selection) => format_selection_line(selection, width),
        None => " ".repeat(width),
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(line, style))).style(style),
        area,
    );
}

fn format_selection_line(selection: SelectionInfo, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut memory = format_bytes(selection.resident_bytes);
    if memory.width() > width {
        memory = truncate_unicode(&memory, width);
        let pad = width.saturating_sub(memory.width());
        return format!("{}{}", " ".repeat(pad), memory);
    }

    let memory_width = memory.width();
    let left_capacity = width.saturating_sub(memory_width + 1);
    let left = format!(
        "PID {}  {}  {}",
        selection.pid, selection.owner, selection.command
    );
    let left = truncate_unicode(&left, left_capacity);
    let gap = width.saturating_sub(left.width() + memory_width);
    format!("{left}{}{memory}", " ".repeat(gap))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(command: &str) -> SelectionInfo {
        SelectionInfo {
            pid: 4242,
            owner: "alice".to_string(),
            command: command.to_string(),
            resident_bytes: 1_234_567_890,
        }
    }

    #[test]
    fn keeps_memory_right_aligned() {
        let line = format_selection_line(selection("Very Long Process Name"), 24);
        assert!(line.starts_with("PID 4242"));
        assert!(line.ends_with("1.1 GB"));
        assert_eq!(line.width(), 24);
    }

    #[test]
    fn short_line_is_padded_to_width() {
        let line = format_selection_line(selection("sh"), 40);
        assert_eq!(line.width(), 40);
        assert!(line.starts_with("PID 4242  alice  sh "));
    }
}
