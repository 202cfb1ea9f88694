use ratatui::style::Color;

use crate::config::ColorsConfig;

/// Config-provided hex anchors for the bar heat ramp.
#[derive(Debug, Clone)]
pub struct HeatOverrides {
    pub low: String,
    pub mid: String,
    pub high: String,
}

impl HeatOverrides {
    pub fn from_config(colors: &ColorsConfig) -> Self {
        Self {
            low: colors.bar_low.clone(),
            mid: colors.bar_mid.clone(),
            high: colors.bar_high.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub header_accent_bg: Color,
    pub header_accent_fg: Color,
    pub statusbar_bg: Color,
    pub surface_bg: Color,
    pub overlay_border: Color,
    pub status_err: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub pill_key_bg: Color,
    pub pill_key_fg: Color,
    pub pill_desc_fg: Color,
    pub gauge_unfilled: Color,
    pub bar_heat: [Color; 3],
}

impl Theme {
    pub fn from_config(theme_name: &str, heat: &HeatOverrides) -> Self {
        let mut theme = match theme_name.to_lowercase().as_str() {
            "light" => Self::light(),
            "mono" | "monochrome" => Self::mono(),
            _ => Self::dark(),
        };
        theme.apply_heat_overrides(heat);
        theme
    }

    pub fn next(&self, heat: &HeatOverrides) -> Self {
        let next_name = match self.name {
            "dark" => "light",
            "light" => "mono",
            _ => "dark",
        };
        Theme::from_config(next_name, heat)
    }

    fn apply_heat_overrides(&mut self, heat: &HeatOverrides) {
        let low = parse_hex_color(&heat.low);
        let mid = parse_hex_color(&heat.mid);
        let high = parse_hex_color(&heat.high);

        if let (Some(low), Some(mid), Some(high)) = (low, mid, high) {
            self.bar_heat = [low, mid, high];
        }
    }

    /// Bar fill color for a utilization percentage: idle, busy, saturated.
    pub fn bar_color(&self, percent: f64) -> Color {
        if percent < 50.0 {
            self.bar_heat[0]
        } else if percent < 80.0 {
            self.bar_heat[1]
        } else {
            self.bar_heat[2]
        }
    }

    pub fn dark() -> Self {
        Theme {
            name: "dark",
            header_accent_bg: Color::Green,
            header_accent_fg: Color::Black,
            statusbar_bg: Color::DarkGray,
            surface_bg: Color::DarkGray,
            overlay_border: Color::DarkGray,
            status_err: Color::Red,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            pill_key_bg: Color::Yellow,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::White,
            gauge_unfilled: Color::DarkGray,
            bar_heat: [
                Color::Rgb(16, 185, 129),
                Color::Rgb(249, 115, 22),
                Color::Rgb(239, 68, 68),
            ],
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light",
            header_accent_bg: Color::Blue,
            header_accent_fg: Color::White,
            statusbar_bg: Color::Gray,
            surface_bg: Color::Gray,
            overlay_border: Color::Gray,
            status_err: Color::Red,
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            pill_key_bg: Color::Blue,
            pill_key_fg: Color::White,
            pill_desc_fg: Color::Black,
            gauge_unfilled: Color::Gray,
            bar_heat: [
                Color::Rgb(21, 128, 61),
                Color::Rgb(180, 83, 9),
                Color::Rgb(185, 28, 28),
            ],
        }
    }

    pub fn mono() -> Self {
        Theme {
            name: "mono",
            header_accent_bg: Color::White,
            header_accent_fg: Color::Black,
            statusbar_bg: Color::DarkGray,
            surface_bg: Color::DarkGray,
            overlay_border: Color::Gray,
            status_err: Color::White,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            pill_key_bg: Color::White,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::White,
            gauge_unfilled: Color::DarkGray,
            bar_heat: [Color::Gray, Color::White, Color::White],
        }
    }
}

fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
