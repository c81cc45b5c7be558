//! Theme system for the calculator display
//!
//! Provides YAML-based palettes with compile-time embedded light and dark
//! themes that users may override.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/calcpad/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::fmt::Write as _;
use std::path::Path;

use serde::Deserialize;

use crate::config::ThemeId;

// Embed theme YAML files at compile time
pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    pub id: ThemeId,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// All themes compiled into the binary
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: ThemeId::Light,
        yaml: LIGHT_YAML,
    },
    BuiltinTheme {
        id: ThemeId::Dark,
        yaml: DARK_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: ThemeId) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::debug!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a "#RRGGBB" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| e.to_string())
        };
        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// ANSI truecolor foreground escape sequence
    pub fn fg(&self) -> String {
        let mut seq = String::with_capacity(20);
        let _ = write!(seq, "\x1b[38;2;{};{};{}m", self.r, self.g, self.b);
        seq
    }
}

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

/// Display colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub display: String,
    pub preview: String,
    pub history: String,
    pub error: String,
    #[serde(default)]
    pub accent: Option<String>,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    /// Expression buffer
    pub display: Color,
    /// Live preview line
    pub preview: Color,
    /// "Last:" history line
    pub history: Color,
    /// Error message replacing the display
    pub error: Color,
    /// Prompt and keypad hints
    pub accent: Color,
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: ThemeId) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let display = Color::from_hex(&data.ui.display)?;
        Ok(Theme {
            name: data.name,
            display,
            preview: Color::from_hex(&data.ui.preview)?,
            history: Color::from_hex(&data.ui.history)?,
            error: Color::from_hex(&data.ui.error)?,
            accent: data
                .ui
                .accent
                .as_deref()
                .map(Color::from_hex)
                .transpose()?
                .unwrap_or(display),
        })
    }

    /// Resolve a theme id, falling back to the builtin palette on any error
    pub fn for_id(id: ThemeId) -> Self {
        match load_theme(id) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Failed to load theme {}: {}, using builtin", id, e);
                Self::builtin(id)
            }
        }
    }

    /// Builtin palette (YAML-backed with Rust fallback)
    pub fn builtin(id: ThemeId) -> Self {
        Theme::from_builtin(id).unwrap_or_else(|_| match id {
            ThemeId::Light => Theme {
                name: "Calcpad Light".to_string(),
                display: Color::rgb(0x1F, 0x23, 0x28),
                preview: Color::rgb(0x6E, 0x77, 0x81),
                history: Color::rgb(0x57, 0x60, 0x6A),
                error: Color::rgb(0xCF, 0x22, 0x2E),
                accent: Color::rgb(0x09, 0x69, 0xDA),
            },
            ThemeId::Dark => Theme {
                name: "Calcpad Dark".to_string(),
                display: Color::rgb(0xD4, 0xD4, 0xD4),
                preview: Color::rgb(0x85, 0x85, 0x85),
                history: Color::rgb(0xA0, 0xA0, 0xA0),
                error: Color::rgb(0xF4, 0x87, 0x71),
                accent: Color::rgb(0x56, 0x9C, 0xD6),
            },
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::builtin(ThemeId::default())
    }
}
