use eframe::egui::Color32;

/// Visual identity of the deck window. Two palettes ship built in; the
/// type scale is shared across them and sized against the 1920x1080
/// design space the renderer scales from.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub code_background: Color32,
    pub code_foreground: Color32,
}

impl Theme {
    pub const H1_SIZE: f32 = 100.0;
    pub const H2_SIZE: f32 = 68.0;
    pub const H3_SIZE: f32 = 50.0;
    pub const BODY_SIZE: f32 = 42.0;
    pub const CODE_SIZE: f32 = 29.0;

    /// Charcoal blue with an amber accent.
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color32::from_rgb(0x14, 0x18, 0x1C),
            foreground: Color32::from_rgb(0xD6, 0xDB, 0xE0),
            heading_color: Color32::from_rgb(0xF2, 0xF5, 0xF7),
            accent: Color32::from_rgb(0xE8, 0xA1, 0x3C),
            code_background: Color32::from_rgb(0x1E, 0x24, 0x2A),
            code_foreground: Color32::from_rgb(0xC9, 0xD1, 0xD9),
        }
    }

    /// Warm paper with a burnt-ochre accent.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color32::from_rgb(0xFA, 0xF8, 0xF4),
            foreground: Color32::from_rgb(0x2B, 0x2B, 0x33),
            heading_color: Color32::from_rgb(0x1F, 0x24, 0x30),
            accent: Color32::from_rgb(0x9A, 0x5B, 0x13),
            code_background: Color32::from_rgb(0xEF, 0xEC, 0xE5),
            code_foreground: Color32::from_rgb(0x3A, 0x3A, 0x42),
        }
    }

    /// Unknown names fall back to the light palette.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }

    /// Levels past H3 render at body size.
    pub fn heading_size(level: u8) -> f32 {
        match level {
            1 => Self::H1_SIZE,
            2 => Self::H2_SIZE,
            3 => Self::H3_SIZE,
            _ => Self::BODY_SIZE,
        }
    }
}
