//! Presentation parameters for the landing page's contact form.
//!
//! Every skin of the page shares one submission contract; only the palette
//! and the way the success redirect is opened differ between them.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Theme {
    #[default]
    PurpleOrange,
    DarkNeon,
    Cream,
}

/// Colour tokens consumed by the form markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    pub background: &'static str,
    pub background_light: &'static str,
    pub background_dark: &'static str,
    pub accent: &'static str,
    pub accent_light: &'static str,
    pub accent_dark: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::PurpleOrange => "purple-orange",
            Theme::DarkNeon => "dark-neon",
            Theme::Cream => "cream",
        }
    }

    pub fn palette(&self) -> ColorTokens {
        match self {
            Theme::PurpleOrange => ColorTokens {
                background: "#f06223",
                background_light: "#f57840",
                background_dark: "#d44e14",
                accent: "#5712a8",
                accent_light: "#7b3fe0",
                accent_dark: "#3d0d80",
                text: "#ffffff",
                text_muted: "rgba(255,255,255,0.65)",
                border: "rgba(255,255,255,0.22)",
            },
            Theme::DarkNeon => ColorTokens {
                background: "#1a1025",
                background_light: "#2a1a3d",
                background_dark: "#0f0916",
                accent: "#9d5cff",
                accent_light: "#b98aff",
                accent_dark: "#7b3fe0",
                text: "#ffffff",
                text_muted: "rgba(255,255,255,0.6)",
                border: "rgba(157,92,255,0.35)",
            },
            Theme::Cream => ColorTokens {
                background: "#faf6f1",
                background_light: "#ffffff",
                background_dark: "#efe6da",
                accent: "#f06223",
                accent_light: "#ff8a50",
                accent_dark: "#c44a15",
                text: "#1a1025",
                text_muted: "rgba(26,16,37,0.6)",
                border: "rgba(87,18,168,0.18)",
            },
        }
    }
}

impl TryFrom<String> for Theme {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "purple-orange" => Ok(Self::PurpleOrange),
            "dark-neon" => Ok(Self::DarkNeon),
            "cream" => Ok(Self::Cream),
            other => Err(format!(
                "{} is not a supported theme. Use `purple-orange`, `dark-neon` or `cream`.",
                other
            )),
        }
    }
}

/// Where the browser opens the post-submission destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationTarget {
    #[default]
    NewTab,
    SameTab,
}
