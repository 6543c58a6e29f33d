use ratatui::style::Color;

/// Palette for every widget. Selected by name from the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub header_accent_fg: Color,
    pub header_accent_bg: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub overlay_border: Color,
    pub table_header_fg: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
    pub cpu_hot: Color,
    pub statusbar_bg: Color,
    pub surface_bg: Color,
    pub pill_key_fg: Color,
    pub pill_key_bg: Color,
    pub pill_desc_fg: Color,
    pub status_ok: Color,
    pub status_err: Color,
}

/// Per-process CPU at or above this is drawn in `cpu_hot`.
pub const HOT_CPU_PERCENT: f64 = 50.0;

impl Theme {
    pub fn from_config(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "mono" | "monochrome" => Self::mono(),
            _ => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Theme {
            name: "dark",
            header_accent_fg: Color::Rgb(30, 30, 46),
            header_accent_bg: Color::Rgb(137, 180, 250),
            text_primary: Color::Rgb(205, 214, 244),
            text_secondary: Color::Rgb(166, 173, 200),
            overlay_border: Color::Rgb(88, 91, 112),
            table_header_fg: Color::Rgb(249, 226, 175),
            selection_fg: Color::Rgb(30, 30, 46),
            selection_bg: Color::Rgb(180, 190, 254),
            cpu_hot: Color::Rgb(243, 139, 168),
            statusbar_bg: Color::Rgb(24, 24, 37),
            surface_bg: Color::Rgb(49, 50, 68),
            pill_key_fg: Color::Rgb(30, 30, 46),
            pill_key_bg: Color::Rgb(203, 166, 247),
            pill_desc_fg: Color::Rgb(205, 214, 244),
            status_ok: Color::Rgb(166, 227, 161),
            status_err: Color::Rgb(243, 139, 168),
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light",
            header_accent_fg: Color::Rgb(239, 241, 245),
            header_accent_bg: Color::Rgb(30, 102, 245),
            text_primary: Color::Rgb(76, 79, 105),
            text_secondary: Color::Rgb(108, 111, 133),
            overlay_border: Color::Rgb(156, 160, 176),
            table_header_fg: Color::Rgb(223, 142, 29),
            selection_fg: Color::Rgb(239, 241, 245),
            selection_bg: Color::Rgb(114, 135, 253),
            cpu_hot: Color::Rgb(210, 15, 57),
            statusbar_bg: Color::Rgb(220, 224, 232),
            surface_bg: Color::Rgb(204, 208, 218),
            pill_key_fg: Color::Rgb(239, 241, 245),
            pill_key_bg: Color::Rgb(136, 57, 239),
            pill_desc_fg: Color::Rgb(76, 79, 105),
            status_ok: Color::Rgb(64, 160, 43),
            status_err: Color::Rgb(210, 15, 57),
        }
    }

    pub fn mono() -> Self {
        Theme {
            name: "mono",
            header_accent_fg: Color::Black,
            header_accent_bg: Color::White,
            text_primary: Color::Reset,
            text_secondary: Color::Gray,
            overlay_border: Color::Gray,
            table_header_fg: Color::White,
            selection_fg: Color::Black,
            selection_bg: Color::White,
            cpu_hot: Color::White,
            statusbar_bg: Color::Reset,
            surface_bg: Color::Reset,
            pill_key_fg: Color::Black,
            pill_key_bg: Color::White,
            pill_desc_fg: Color::Reset,
            status_ok: Color::White,
            status_err: Color::White,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
