//! Themed vector logo generation.
//!
//! The logo is a 60x60 SVG badge: rounded background, a decorative motif for
//! the organization category, and the organization initials underneath.

use crate::models::BrandingConfig;
use crate::services::branding::DEFAULT_CATEGORY;
use std::fmt::Write as _;

/// Renders the decorative motif for one category.
type MotifFn = fn(&BrandingConfig) -> String;

static MOTIFS: [(&str, MotifFn); 6] = [
    ("Animal Welfare", goat_motif),
    ("Education", graduation_cap_motif),
    ("Healthcare", medical_cross_motif),
    ("Environment", tree_motif),
    ("Food Bank", basket_motif),
    (DEFAULT_CATEGORY, star_motif),
];

/// Maximum number of initials shown on the badge.
pub const MAX_INITIALS: usize = 2;

/// Derives the badge initials from an organization name.
///
/// Takes the first character of each space-separated word, keeps the first
/// [`MAX_INITIALS`] of them, and uppercases the result. Runs of spaces do not
/// produce empty initials.
///
/// # Examples
///
/// ```
/// use agendaboard::services::logo::organization_initials;
///
/// assert_eq!(organization_initials("Goats of Anarchy"), "GO");
/// assert_eq!(organization_initials("food  bank"), "FB");
/// assert_eq!(organization_initials(""), "");
/// ```
#[must_use]
pub fn organization_initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .take(MAX_INITIALS)
        .collect::<String>()
        .to_uppercase()
}

/// Escapes text for use inside XML text nodes and double-quoted attributes.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn motif_for(category: &str) -> MotifFn {
    MOTIFS
        .iter()
        .find(|(key, _)| *key == category)
        .or_else(|| MOTIFS.iter().find(|(key, _)| *key == DEFAULT_CATEGORY))
        .map_or(star_motif as MotifFn, |(_, motif)| *motif)
}

/// Generates the themed logo for an organization as an SVG document.
///
/// Output is deterministic for a given `(name, category, branding)`.
#[must_use]
pub fn generate_logo_svg(name: &str, category: &str, branding: &BrandingConfig) -> String {
    let initials = escape_xml(&organization_initials(name));
    let motif = motif_for(category)(branding);

    let mut svg = String::new();
    svg.push_str(
        r#"<svg width="80" height="80" viewBox="0 0 60 60" xmlns="http://www.w3.org/2000/svg">"#,
    );
    svg.push('\n');
    svg.push_str(
        r#"  <defs><filter id="logoShadow"><feDropShadow dx="0" dy="2" stdDeviation="2" flood-opacity="0.15"/></filter></defs>"#,
    );
    svg.push('\n');
    let _ = writeln!(
        svg,
        r#"  <rect width="60" height="60" rx="14" fill="{}" filter="url(#logoShadow)"/>"#,
        branding.background_color
    );
    svg.push_str(r#"  <rect width="60" height="60" rx="14" fill="white" opacity="0.9"/>"#);
    svg.push('\n');
    svg.push_str(&motif);
    let _ = writeln!(
        svg,
        r#"  <text x="30" y="54" font-family="{}" font-size="6" font-weight="800" fill="{}" text-anchor="middle" opacity="0.8" letter-spacing="1">{}</text>"#,
        escape_xml(&branding.font_family),
        branding.text_color,
        initials
    );
    svg.push_str("</svg>\n");
    svg
}

fn gradient(id: &str, branding: &BrandingConfig) -> String {
    format!(
        r#"    <linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{};stop-opacity:1"/>
      <stop offset="100%" style="stop-color:{};stop-opacity:1"/>
    </linearGradient>
"#,
        branding.primary_color, branding.secondary_color
    )
}

fn goat_motif(b: &BrandingConfig) -> String {
    let p = b.primary_color;
    format!(
        r##"  <defs>
{grad}    <filter id="shadow"><feDropShadow dx="0" dy="1" stdDeviation="1" flood-opacity="0.2"/></filter>
  </defs>
  <g transform="translate(30, 30) scale(0.8)">
    <ellipse cx="0" cy="3" rx="12" ry="8" fill="url(#goatGrad)" filter="url(#shadow)"/>
    <ellipse cx="-8" cy="-2" rx="6" ry="5" fill="url(#goatGrad)"/>
    <path d="M-10 -5 L-11 -9" stroke="{p}" stroke-width="1.5" stroke-linecap="round"/>
    <path d="M-6 -5 L-5 -9" stroke="{p}" stroke-width="1.5" stroke-linecap="round"/>
    <rect x="-8" y="8" width="2" height="6" fill="{p}" rx="1"/>
    <rect x="-3" y="8" width="2" height="6" fill="{p}" rx="1"/>
    <rect x="2" y="8" width="2" height="6" fill="{p}" rx="1"/>
    <rect x="7" y="8" width="2" height="6" fill="{p}" rx="1"/>
    <circle cx="-8" cy="-2" r="1" fill="white"/>
    <circle cx="-8" cy="-2" r="0.5" fill="#333"/>
    <path d="M10 2 Q13 0 12 -3" stroke="{p}" stroke-width="2" fill="none" stroke-linecap="round"/>
  </g>
"##,
        grad = gradient("goatGrad", b),
    )
}

fn graduation_cap_motif(b: &BrandingConfig) -> String {
    let (p, s, a) = (b.primary_color, b.secondary_color, b.accent_color);
    format!(
        r#"  <defs>
{grad}  </defs>
  <g transform="translate(30, 28)">
    <path d="M0 -8 L-15 0 L0 8 L15 0 Z" fill="url(#eduGrad)"/>
    <path d="M0 8 L0 12 L-12 6 L-12 2" fill="{s}"/>
    <path d="M0 8 L0 12 L12 6 L12 2" fill="{s}"/>
    <line x1="15" y1="0" x2="20" y2="5" stroke="{a}" stroke-width="2"/>
    <circle cx="20" cy="8" r="2" fill="{a}"/>
  </g>
  <rect x="18" y="38" width="24" height="3" fill="{p}" rx="1"/>
"#,
        grad = gradient("eduGrad", b),
    )
}

fn medical_cross_motif(b: &BrandingConfig) -> String {
    let s = b.secondary_color;
    format!(
        r#"  <defs>
{grad}  </defs>
  <g transform="translate(30, 30)">
    <path d="M0 -5 C-5 -12, -15 -12, -15 -5 C-15 0, -10 5, 0 12 C10 5, 15 0, 15 -5 C15 -12, 5 -12, 0 -5 Z" fill="{s}" opacity="0.3" transform="scale(1.2)"/>
    <rect x="-3" y="-12" width="6" height="24" fill="url(#healthGrad)" rx="2"/>
    <rect x="-12" y="-3" width="24" height="6" fill="url(#healthGrad)" rx="2"/>
  </g>
"#,
        grad = gradient("healthGrad", b),
    )
}

fn tree_motif(b: &BrandingConfig) -> String {
    let (s, bg) = (b.secondary_color, b.background_color);
    format!(
        r#"  <defs>
{grad}  </defs>
  <g transform="translate(30, 30)">
    <rect x="-3" y="5" width="6" height="10" fill="{s}" rx="1"/>
    <circle cx="0" cy="-5" r="8" fill="url(#envGrad)"/>
    <circle cx="-6" cy="0" r="6" fill="url(#envGrad)"/>
    <circle cx="6" cy="0" r="6" fill="url(#envGrad)"/>
    <circle cx="0" cy="3" r="7" fill="url(#envGrad)"/>
    <circle cx="-3" cy="-3" r="1" fill="{bg}" opacity="0.6"/>
    <circle cx="3" cy="-1" r="1" fill="{bg}" opacity="0.6"/>
    <circle cx="0" cy="2" r="1" fill="{bg}" opacity="0.6"/>
  </g>
"#,
        grad = gradient("envGrad", b),
    )
}

fn basket_motif(b: &BrandingConfig) -> String {
    let (p, s, a) = (b.primary_color, b.secondary_color, b.accent_color);
    format!(
        r#"  <defs>
{grad}  </defs>
  <g transform="translate(30, 30)">
    <path d="M-12 0 L-10 12 L10 12 L12 0" stroke="url(#foodGrad)" stroke-width="2" fill="none"/>
    <path d="M-12 0 L12 0" stroke="url(#foodGrad)" stroke-width="2"/>
    <path d="M-8 0 Q0 -8 8 0" stroke="{p}" stroke-width="2" fill="none"/>
    <circle cx="-4" cy="5" r="3" fill="{a}"/>
    <ellipse cx="4" cy="6" rx="4" ry="3" fill="{s}"/>
    <rect x="-2" y="3" width="4" height="6" fill="{p}" rx="1"/>
  </g>
"#,
        grad = gradient("foodGrad", b),
    )
}

fn star_motif(b: &BrandingConfig) -> String {
    let bg = b.background_color;
    format!(
        r#"  <defs>
{grad}  </defs>
  <circle cx="30" cy="30" r="18" fill="url(#defaultGrad)" opacity="0.9"/>
  <path d="M30 18 L33 25 L40 25 L34 30 L37 37 L30 33 L23 37 L26 30 L20 25 L27 25 Z" fill="{bg}"/>
"#,
        grad = gradient("defaultGrad", b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::branding::resolve_branding;

    #[test]
    fn test_initials() {
        assert_eq!(organization_initials("Goats of Anarchy"), "GO");
        assert_eq!(organization_initials("red cross"), "RC");
        assert_eq!(organization_initials("Unicef"), "U");
        assert_eq!(organization_initials("  leading spaces"), "LS");
        assert_eq!(organization_initials(""), "");
    }

    #[test]
    fn test_initials_unicode() {
        assert_eq!(organization_initials("élan vital"), "ÉV");
    }

    #[test]
    fn test_logo_uses_palette_and_initials() {
        let branding = resolve_branding("Animal Welfare", "Goats of Anarchy");
        let svg = generate_logo_svg("Goats of Anarchy", "Animal Welfare", &branding);

        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("goatGrad"));
        assert!(svg.contains("#FF6B35"));
        assert!(svg.contains("#FFF5F0"));
        assert!(svg.contains(">GO</text>"));
        assert!(svg.contains("font-family=\"'Segoe UI', 'Roboto', sans-serif\""));
    }

    #[test]
    fn test_goat_motif_keeps_eye_detail() {
        let branding = resolve_branding("Animal Welfare", "Goats of Anarchy");
        let svg = generate_logo_svg("Goats of Anarchy", "Animal Welfare", &branding);

        assert!(svg.contains(r#"fill="url(#goatGrad)""#));
        assert!(svg.contains(r##"fill="#333""##));
        assert!(svg.contains(r#"<filter id="shadow">"#));
    }

    #[test]
    fn test_each_category_gets_its_motif() {
        let cases = [
            ("Education", "eduGrad"),
            ("Healthcare", "healthGrad"),
            ("Environment", "envGrad"),
            ("Food Bank", "foodGrad"),
            ("Default", "defaultGrad"),
        ];
        for (category, marker) in cases {
            let branding = resolve_branding(category, "Org");
            let svg = generate_logo_svg("Org", category, &branding);
            assert!(svg.contains(marker), "{category} logo should contain {marker}");
        }
    }

    #[test]
    fn test_unknown_category_uses_default_motif() {
        let branding = resolve_branding("Book Club", "Readers");
        let svg = generate_logo_svg("Readers", "Book Club", &branding);
        assert!(svg.contains("defaultGrad"));
        assert!(svg.contains("#6366F1"));
    }

    #[test]
    fn test_logo_is_deterministic() {
        let branding = resolve_branding("Healthcare", "City Clinic");
        assert_eq!(
            generate_logo_svg("City Clinic", "Healthcare", &branding),
            generate_logo_svg("City Clinic", "Healthcare", &branding)
        );
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("A & B <C> \"D\""), "A &amp; B &lt;C&gt; &quot;D&quot;");
        let branding = resolve_branding("Default", "");
        let svg = generate_logo_svg("<script> x", "Default", &branding);
        assert!(svg.contains(">&lt;X</text>"));
    }
}
