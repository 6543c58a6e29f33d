use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Binary units, largest first, with the decimals shown for each.
const SIZE_UNITS: [(&str, u64, usize); 3] = [
    ("GB", 1 << 30, 1),
    ("MB", 1 << 20, 1),
    ("KB", 1 << 10, 0),
];

/// Cuts `s` to at most `max_width` terminal columns, ending a cut string
/// with an ellipsis.
pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out: String = s
        .chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    out.push('\u{2026}');
    out
}

pub fn format_bytes(bytes: u64) -> String {
    for (unit, scale, decimals) in SIZE_UNITS {
        if bytes >= scale {
            let value = bytes as f64 / scale as f64;
            return format!("{value:.decimals$} {unit}");
        }
    }
    format!("{bytes} B")
}

/// Percentages are always shown with two decimals.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_pick_the_largest_unit() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(4096), "4 KB");
        assert_eq!(format_bytes(4_096_000), "3.9 MB");
        assert_eq!(format_bytes(1_048_576), "1.0 MB");
        assert_eq!(format_bytes(1_073_741_824), "1.0 GB");
    }

    #[test]
    fn truncation_marks_cut_text() {
        assert_eq!(truncate_unicode("systemd", 10), "systemd");
        assert_eq!(truncate_unicode("systemd-journald", 8), "systemd\u{2026}");
        assert_eq!(truncate_unicode("日本語のプロセス", 5), "日本\u{2026}");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(20.0), "20.00");
        assert_eq!(format_percent(0.0128), "0.01");
        assert_eq!(format_percent(0.0), "0.00");
    }
}
