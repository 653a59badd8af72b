//! # Front Desk Theme
//!
//! The single theming abstraction for the HealthCare Pro front desk: a
//! [`Theme`] enum and one palette-resolution function. A front end asks
//! the theme for its [`Palette`] and styles widgets from that — no
//! global mutable theme state, no per-window style rewriting.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("unknown theme '{0}' (expected 'light' or 'dark')")]
    UnknownTheme(String),
}

/// The two supported themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Maps the persisted dark-mode flag onto a theme.
    pub fn from_dark_flag(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// True for [`Theme::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Resolves the colour palette for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT_PALETTE,
            Theme::Dark => DARK_PALETTE,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_owned())),
        }
    }
}

/// Named colours a front end styles itself from. Hex RGB strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub input_background: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    /// Primary action colour. Buttons keep this accent in both themes.
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

impl Palette {
    /// Named entries in display order, for settings screens and debugging.
    pub fn entries(&self) -> [(&'static str, &'static str); 9] {
        [
            ("background", self.background),
            ("surface", self.surface),
            ("input_background", self.input_background),
            ("text", self.text),
            ("muted_text", self.muted_text),
            ("accent", self.accent),
            ("accent_hover", self.accent_hover),
            ("warning", self.warning),
            ("error", self.error),
        ]
    }
}

const LIGHT_PALETTE: Palette = Palette {
    background: "#e8f5e8",
    surface: "#ffffff",
    input_background: "#ffffff",
    text: "#1a1a1a",
    muted_text: "#388e3c",
    accent: "#2e7d32",
    accent_hover: "#1b5e20",
    warning: "#f9a825",
    error: "#c62828",
};

const DARK_PALETTE: Palette = Palette {
    background: "#0d0d0d",
    surface: "#141414",
    input_background: "#141414",
    text: "#e6e6e6",
    muted_text: "#9e9e9e",
    accent: "#2e7d32",
    accent_hover: "#1b5e20",
    warning: "#f9a825",
    error: "#ef5350",
};
