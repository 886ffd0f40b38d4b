//! Category-to-theme lookup.
//!
//! Every organization category maps to one fixed palette. Categories that are
//! not in the table get the `Default` theme, so resolution never fails.

use crate::models::{BrandingConfig, RgbColor};

/// Category key of the fallback theme.
pub const DEFAULT_CATEGORY: &str = "Default";

/// One row of the theme table.
#[derive(Debug, Clone, Copy)]
struct ThemeTemplate {
    category: &'static str,
    primary: RgbColor,
    secondary: RgbColor,
    accent: RgbColor,
    background: RgbColor,
    text: RgbColor,
    font_family: &'static str,
}

static THEME_TEMPLATES: [ThemeTemplate; 6] = [
    ThemeTemplate {
        category: "Animal Welfare",
        primary: RgbColor::from_u32(0xFF6B35),
        secondary: RgbColor::from_u32(0xF7931E),
        accent: RgbColor::from_u32(0xFCB900),
        background: RgbColor::from_u32(0xFFF5F0),
        text: RgbColor::from_u32(0x2C3E50),
        font_family: "'Segoe UI', 'Roboto', sans-serif",
    },
    ThemeTemplate {
        category: "Education",
        primary: RgbColor::from_u32(0x4A90E2),
        secondary: RgbColor::from_u32(0x7B68EE),
        accent: RgbColor::from_u32(0x50C878),
        background: RgbColor::from_u32(0xF0F4F8),
        text: RgbColor::from_u32(0x2C3E50),
        font_family: "'Georgia', serif",
    },
    ThemeTemplate {
        category: "Healthcare",
        primary: RgbColor::from_u32(0x00A8E8),
        secondary: RgbColor::from_u32(0x00C9A7),
        accent: RgbColor::from_u32(0x845EC2),
        background: RgbColor::from_u32(0xF0F9FF),
        text: RgbColor::from_u32(0x1A202C),
        font_family: "'Arial', sans-serif",
    },
    ThemeTemplate {
        category: "Environment",
        primary: RgbColor::from_u32(0x22C55E),
        secondary: RgbColor::from_u32(0x84CC16),
        accent: RgbColor::from_u32(0x14B8A6),
        background: RgbColor::from_u32(0xF0FDF4),
        text: RgbColor::from_u32(0x15803D),
        font_family: "'Helvetica Neue', sans-serif",
    },
    ThemeTemplate {
        category: "Food Bank",
        primary: RgbColor::from_u32(0x059669),
        secondary: RgbColor::from_u32(0xF59E0B),
        accent: RgbColor::from_u32(0xDC2626),
        background: RgbColor::from_u32(0xFEFCE8),
        text: RgbColor::from_u32(0x451A03),
        font_family: "'Open Sans', sans-serif",
    },
    ThemeTemplate {
        category: DEFAULT_CATEGORY,
        primary: RgbColor::from_u32(0x6366F1),
        secondary: RgbColor::from_u32(0xEC4899),
        accent: RgbColor::from_u32(0xF59E0B),
        background: RgbColor::from_u32(0xFAFAFA),
        text: RgbColor::from_u32(0x1F2937),
        font_family: "'Inter', sans-serif",
    },
];

fn template_for(category: &str) -> &'static ThemeTemplate {
    THEME_TEMPLATES
        .iter()
        .find(|t| t.category == category)
        .or_else(|| THEME_TEMPLATES.iter().find(|t| t.category == DEFAULT_CATEGORY))
        .unwrap_or(&THEME_TEMPLATES[THEME_TEMPLATES.len() - 1])
}

/// Resolves the branding for an organization.
///
/// Lookup is an exact, case-sensitive match on `category`. The organization
/// name does not influence the palette today; it is accepted so callers do not
/// have to change if per-organization overrides are added.
///
/// # Examples
///
/// ```
/// use agendaboard::services::branding::resolve_branding;
///
/// let branding = resolve_branding("Healthcare", "City Clinic");
/// assert_eq!(branding.primary_color.to_hex(), "#00A8E8");
///
/// let fallback = resolve_branding("Chess Club", "Knights");
/// assert_eq!(fallback, resolve_branding("Default", "Knights"));
/// ```
#[must_use]
pub fn resolve_branding(category: &str, _organization_name: &str) -> BrandingConfig {
    let template = template_for(category);

    BrandingConfig {
        primary_color: template.primary,
        secondary_color: template.secondary,
        accent_color: template.accent,
        background_color: template.background,
        text_color: template.text,
        font_family: template.font_family.to_string(),
        logo_path: String::new(),
    }
}

/// Returns `true` if `category` has its own theme (not the fallback).
#[must_use]
pub fn is_known_category(category: &str) -> bool {
    category != DEFAULT_CATEGORY && THEME_TEMPLATES.iter().any(|t| t.category == category)
}

/// Categories with a dedicated theme, in table order (excluding `Default`).
#[must_use]
pub fn known_categories() -> Vec<&'static str> {
    THEME_TEMPLATES
        .iter()
        .map(|t| t.category)
        .filter(|c| *c != DEFAULT_CATEGORY)
        .collect()
}
