use std::fmt;

/// Light/dark display mode. The page starts dark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Dark,
    Light,
}

impl DisplayMode {
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
        log::debug!("display mode -> {self}");
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Tooltip for the toggle control: names the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Light Mode",
            Self::Light => "Dark Mode",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colors for one display mode. All values are CSS color expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub card: &'static str,
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub accent: &'static str,
    pub gradient: &'static str,
    pub nav_bg: &'static str,
    pub nav_border: &'static str,
    pub strip_bg: &'static str,
    pub skills_bg: &'static str,
    pub services_bg: &'static str,
    pub footer_bg: &'static str,
}

const PRIMARY: &str = "#7c3aed";
const PRIMARY_DARK: &str = "#5b21b6";
const ACCENT: &str = "#ec4899";

const DARK: Palette = Palette {
    bg: "#0f0f1a",
    text: "#e2e8f0",
    muted: "#94a3b8",
    card: "#1e293b",
    primary: PRIMARY,
    primary_dark: PRIMARY_DARK,
    accent: ACCENT,
    gradient: "linear-gradient(135deg, #1e293b 0%, #0f0f1a 100%)",
    nav_bg: "rgba(15,15,26,0.85)",
    nav_border: "rgba(124,58,237,0.15)",
    strip_bg: "rgba(30,41,59,0.4)",
    skills_bg: "rgba(15,15,26,0.6)",
    services_bg: "rgba(30,41,59,0.3)",
    footer_bg: "#0a0a14",
};

const LIGHT: Palette = Palette {
    bg: "#f8f9fc",
    text: "#1e293b",
    muted: "#64748b",
    card: "#ffffff",
    primary: PRIMARY,
    primary_dark: PRIMARY_DARK,
    accent: ACCENT,
    gradient: "linear-gradient(135deg, #f8f9fc 0%, #e2e8f0 100%)",
    nav_bg: "rgba(255,255,255,0.9)",
    nav_border: "rgba(124,58,237,0.08)",
    strip_bg: "rgba(248,249,252,0.6)",
    skills_bg: "rgba(226,232,240,0.4)",
    services_bg: "rgba(248,249,252,0.5)",
    footer_bg: "#e2e8f0",
};

pub const fn derive_color_scheme(mode: DisplayMode) -> Palette {
    match mode {
        DisplayMode::Dark => DARK,
        DisplayMode::Light => LIGHT,
    }
}
