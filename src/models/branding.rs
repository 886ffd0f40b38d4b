//! Resolved visual theme for an organization.

use crate::models::RgbColor;
use serde::{Deserialize, Serialize};

/// Palette and typography derived from an organization category.
///
/// Produced by [`resolve_branding`](crate::services::branding::resolve_branding)
/// and held unchanged for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingConfig {
    /// Headings, primary buttons, summary accents
    pub primary_color: RgbColor,
    /// Secondary buttons and gradients
    pub secondary_color: RgbColor,
    /// Highlights such as the total-time cell
    pub accent_color: RgbColor,
    /// Page background
    pub background_color: RgbColor,
    /// Body text
    pub text_color: RgbColor,
    /// CSS-style font stack used by vector exports
    pub font_family: String,
    /// Reserved for an uploaded logo; always empty today
    pub logo_path: String,
}

impl BrandingConfig {
    /// First family in the font stack with quotes removed.
    ///
    /// Terminal output cannot switch fonts, so this is only shown as a label.
    #[must_use]
    pub fn primary_font(&self) -> &str {
        self.font_family
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches(|c| c == '\'' || c == '"')
    }
}
