//! Color themes for the vsext window.

use iced::Color;

/// A vsext color theme.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub name: &'static str,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub subtext: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl AppTheme {
    /// Parse a hex color string like "#cba6f7" to iced Color.
    pub fn from_hex(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() >= 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(128) as f32 / 255.0;
            let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(128) as f32 / 255.0;
            let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(128) as f32 / 255.0;
            Color::from_rgb(r, g, b)
        } else {
            Color::from_rgb(0.5, 0.5, 0.5)
        }
    }

    /// Create a color with alpha transparency.
    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        Color::from_rgba(color.r, color.g, color.b, alpha)
    }

    /// Get theme by name, falling back to the default.
    pub fn by_name(name: &str) -> Self {
        match name {
            "catppuccin-mocha" => Self::catppuccin_mocha(),
            "catppuccin-latte" => Self::catppuccin_latte(),
            "nord" => Self::nord(),
            _ => Self::catppuccin_mocha(),
        }
    }

    /// Catppuccin Mocha theme (default).
    pub fn catppuccin_mocha() -> Self {
        Self {
            name: "catppuccin-mocha",
            background: Self::from_hex("#1e1e2e"),
            surface: Self::from_hex("#313244"),
            text: Self::from_hex("#cdd6f4"),
            subtext: Self::from_hex("#6c7086"),
            accent: Self::from_hex("#cba6f7"),
            border: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            success: Self::from_hex("#a6e3a1"),
            error: Self::from_hex("#f38ba8"),
        }
    }

    /// Catppuccin Latte theme.
    pub fn catppuccin_latte() -> Self {
        Self {
            name: "catppuccin-latte",
            background: Self::from_hex("#eff1f5"),
            surface: Self::from_hex("#e6e9ef"),
            text: Self::from_hex("#4c4f69"),
            subtext: Self::from_hex("#6c6f85"),
            accent: Self::from_hex("#8839ef"),
            border: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
            success: Self::from_hex("#40a02b"),
            error: Self::from_hex("#d20f39"),
        }
    }

    /// Nord theme.
    pub fn nord() -> Self {
        Self {
            name: "nord",
            background: Self::from_hex("#2e3440"),
            surface: Self::from_hex("#3b4252"),
            text: Self::from_hex("#eceff4"),
            subtext: Self::from_hex("#4c566a"),
            accent: Self::from_hex("#88c0d0"),
            border: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            success: Self::from_hex("#a3be8c"),
            error: Self::from_hex("#bf616a"),
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}
