use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{InputMode, ResolvedKeybinds, StatusMessage, key_label};
use crate::ui::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    input_mode: InputMode,
    status_message: Option<&StatusMessage>,
    keybinds: &ResolvedKeybinds,
    theme: &Theme,
) {
    let bg_style = Style::default().bg(theme.statusbar_bg);

    // Status message takes priority
    if let Some(msg) = status_message {
        let color = if msg.is_error {
            theme.status_err
        } else {
            theme.status_ok
        };
        let line = Line::from(Span::styled(
            format!(" {}", msg.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line).style(bg_style), area);
        return;
    }

    let line = match input_mode {
        InputMode::Help => {
            let mut spans = Vec::new();
            spans.extend(pill_spans("Esc".to_string(), "Close help", theme));
            Line::from(spans)
        }
        InputMode::Normal => {
            let sort_keys = format!(
                "{}/{}/{}",
                key_label(keybinds.sort_cpu),
                key_label(keybinds.sort_memory),
                key_label(keybinds.sort_pid)
            );
            let interval_keys = format!(
                "{}/{}",
                key_label(keybinds.faster),
                key_label(keybinds.slower)
            );
            let mut spans = Vec::new();
            spans.extend(pill_spans(key_label(keybinds.quit), "Quit", theme));
            spans.extend(pill_spans(sort_keys, "Sort", theme));
            spans.extend(pill_spans(interval_keys, "Interval", theme));
            spans.extend(pill_spans(key_label(keybinds.kill), "Kill", theme));
            spans.extend(pill_spans("\u{2191}\u{2193}".to_string(), "Select", theme));
            spans.extend(pill_spans(key_label(keybinds.help), "Help", theme));
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line).style(bg_style), area);
}

fn pill_spans<'a>(key: String, desc: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::raw(" "),
        Span::styled(
            format!(" {key} "),
            Style::default()
                .fg(theme.pill_key_fg)
                .bg(theme.pill_key_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.pill_desc_fg).bg(theme.surface_bg),
        ),
    ]
}
