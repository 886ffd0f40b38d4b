//! Single-page SVG rendering of a board snapshot.
//!
//! Content is laid out in logical units on an 800-wide page; the outer
//! `width`/`height` are multiplied by the scale factor so the document can be
//! rasterized at a higher resolution without changing the layout.

use super::snapshot::{DashboardSnapshot, SnapshotRenderer};
use crate::models::{BrandingConfig, Topic, TopicStatus};
use crate::services::logo::escape_xml;
use anyhow::{bail, Result};
use chrono::Datelike;
use std::fmt::Write as _;

/// Default output scale.
pub const DEFAULT_SCALE: f32 = 2.0;

/// Largest accepted output scale.
pub const MAX_SCALE: f32 = 8.0;

const PAGE_WIDTH: u32 = 800;
const MARGIN: u32 = 32;
const HEADER_HEIGHT: u32 = 120;
const SUMMARY_HEIGHT: u32 = 88;
const CARD_GAP: u32 = 16;
const CARD_HEADER_HEIGHT: u32 = 64;
const CARD_PADDING_BOTTOM: u32 = 16;
const LINE_HEIGHT: u32 = 18;
const FOOTER_HEIGHT: u32 = 64;
const WRAP_COLUMNS: usize = 92;

/// Renders a snapshot as a standalone SVG document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgRenderer {
    /// Multiplier applied to the page dimensions
    pub scale: f32,
}

impl SvgRenderer {
    /// Creates a renderer with the given scale.
    #[must_use]
    pub const fn new(scale: f32) -> Self {
        Self { scale }
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE)
    }
}

/// Greedy word wrap on whitespace.
///
/// Words longer than `columns` get a line of their own.
pub(crate) fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > columns && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

struct CardLayout<'a> {
    topic: &'a Topic,
    description: Vec<String>,
    details: Vec<String>,
    height: u32,
}

fn lines_height(lines: usize) -> u32 {
    u32::try_from(lines).map_or(u32::MAX, |n| n.saturating_mul(LINE_HEIGHT))
}

fn layout_cards(snapshot: &DashboardSnapshot) -> Vec<CardLayout<'_>> {
    snapshot
        .data
        .topics
        .iter()
        .map(|topic| {
            let description = wrap_text(&topic.description, WRAP_COLUMNS);
            let details = if snapshot.is_expanded(&topic.id) {
                wrap_text(&topic.detailed_description, WRAP_COLUMNS)
            } else {
                Vec::new()
            };
            let mut height =
                CARD_HEADER_HEIGHT + lines_height(description.len()) + CARD_PADDING_BOTTOM;
            if !details.is_empty() {
                height += 8 + lines_height(details.len());
            }
            CardLayout {
                topic,
                description,
                details,
                height,
            }
        })
        .collect()
}

fn write_header(svg: &mut String, snapshot: &DashboardSnapshot) {
    let b = &snapshot.branding;
    let font = escape_xml(&b.font_family);
    let _ = writeln!(
        svg,
        r#"  <rect x="0" y="0" width="{PAGE_WIDTH}" height="{HEADER_HEIGHT}" fill="{}"/>"#,
        b.primary_color
    );
    let _ = writeln!(
        svg,
        r#"  <g transform="translate({MARGIN}, 20)">{}</g>"#,
        snapshot.logo_svg.trim_end()
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{}" y="56" font-family="{font}" font-size="26" font-weight="700" fill="{}">{}</text>"#,
        MARGIN + 100,
        b.primary_color.contrasting_text(),
        escape_xml(&snapshot.data.organization_name)
    );
    let _ = writeln!(
        svg,
        r#"  <text x="{}" y="84" font-family="{font}" font-size="15" fill="{}" opacity="0.85">{} · Board Meeting Agenda</text>"#,
        MARGIN + 100,
        b.primary_color.contrasting_text(),
        escape_xml(&snapshot.data.organization_category)
    );
}

fn write_summary(svg: &mut String, snapshot: &DashboardSnapshot, top: u32) {
    let b = &snapshot.branding;
    let s = snapshot.summary;
    let cells = [
        ("Topics", s.total_topics.to_string(), b.primary_color),
        ("In Progress", s.in_progress_count.to_string(), b.secondary_color),
        ("Completed", s.completed_count.to_string(), TopicStatus::Completed.color()),
        ("Minutes", s.total_minutes.to_string(), b.text_color),
    ];
    let cell_width = (PAGE_WIDTH - 2 * MARGIN - 3 * CARD_GAP) / 4;
    let font = escape_xml(&b.font_family);

    for (i, (label, value, color)) in cells.iter().enumerate() {
        let x = MARGIN + u32::try_from(i).unwrap_or_default() * (cell_width + CARD_GAP);
        let _ = writeln!(
            svg,
            r#"  <rect x="{x}" y="{}" width="{cell_width}" height="{}" rx="10" fill="white" stroke="{color}" stroke-width="1.5"/>"#,
            top + 12,
            SUMMARY_HEIGHT - 24
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-family="{font}" font-size="22" font-weight="700" fill="{color}" text-anchor="middle">{value}</text>"#,
            x + cell_width / 2,
            top + 44
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-family="{font}" font-size="11" fill="{}" text-anchor="middle">{label}</text>"#,
            x + cell_width / 2,
            top + 62,
            b.text_color
        );
    }
}

fn write_card(svg: &mut String, branding: &BrandingConfig, card: &CardLayout<'_>, top: u32) {
    let topic = card.topic;
    let font = escape_xml(&branding.font_family);
    let width = PAGE_WIDTH - 2 * MARGIN;
    let status_color = topic.status.color();
    let (badge_bg, badge_border) = topic.priority.badge_colors();

    let _ = writeln!(svg, r#"  <g id="{}">"#, escape_xml(topic.id.as_str()));
    let _ = writeln!(
        svg,
        r#"    <rect x="{MARGIN}" y="{top}" width="{width}" height="{}" rx="12" fill="white" stroke="{}" stroke-opacity="0.25"/>"#,
        card.height, branding.primary_color
    );
    let _ = writeln!(
        svg,
        r#"    <rect x="{MARGIN}" y="{top}" width="6" height="{}" rx="3" fill="{status_color}"/>"#,
        card.height
    );
    let _ = writeln!(
        svg,
        r#"    <text x="{}" y="{}" font-family="{font}" font-size="17" font-weight="700" fill="{}">{}. {}</text>"#,
        MARGIN + 24,
        top + 30,
        branding.text_color,
        topic.order + 1,
        escape_xml(&topic.title)
    );
    let badge_x = MARGIN + width - 100;
    let _ = writeln!(
        svg,
        r#"    <rect x="{badge_x}" y="{}" width="84" height="22" rx="11" fill="{badge_bg}" stroke="{badge_border}"/>"#,
        top + 14
    );
    let _ = writeln!(
        svg,
        r#"    <text x="{}" y="{}" font-family="{font}" font-size="11" font-weight="700" fill="{badge_border}" text-anchor="middle">{}</text>"#,
        badge_x + 42,
        top + 29,
        topic.priority.badge()
    );
    let _ = writeln!(
        svg,
        r#"    <circle cx="{}" cy="{}" r="5" fill="{status_color}"/>"#,
        MARGIN + 29,
        top + 48
    );
    let _ = writeln!(
        svg,
        r#"    <text x="{}" y="{}" font-family="{font}" font-size="13" fill="{}">{} · {} min</text>"#,
        MARGIN + 40,
        top + 52,
        branding.text_color,
        topic.status.label(),
        topic.estimated_minutes
    );

    let mut y = top + CARD_HEADER_HEIGHT + 10;
    for line in &card.description {
        let _ = writeln!(
            svg,
            r#"    <text x="{}" y="{y}" font-family="{font}" font-size="13" fill="{}">{}</text>"#,
            MARGIN + 24,
            branding.text_color,
            escape_xml(line)
        );
        y += LINE_HEIGHT;
    }
    if !card.details.is_empty() {
        y += 8;
        for line in &card.details {
            let _ = writeln!(
                svg,
                r#"    <text x="{}" y="{y}" font-family="{font}" font-size="12" font-style="italic" fill="{}" opacity="0.8">{}</text>"#,
                MARGIN + 24,
                branding.text_color,
                escape_xml(line)
            );
            y += LINE_HEIGHT;
        }
    }
    svg.push_str("  </g>\n");
}

fn write_footer(svg: &mut String, snapshot: &DashboardSnapshot, top: u32) {
    let b = &snapshot.branding;
    let _ = writeln!(
        svg,
        r#"  <text x="{}" y="{}" font-family="{}" font-size="12" fill="{}" text-anchor="middle" opacity="0.7">© {} {} · Board meeting of {}</text>"#,
        PAGE_WIDTH / 2,
        top + FOOTER_HEIGHT / 2,
        escape_xml(&b.font_family),
        b.text_color,
        snapshot.meeting_date.year(),
        escape_xml(&snapshot.data.organization_name),
        snapshot.formatted_date()
    );
}

impl SnapshotRenderer for SvgRenderer {
    fn render(&self, snapshot: &DashboardSnapshot) -> Result<String> {
        if !self.scale.is_finite() || self.scale <= 0.0 || self.scale > MAX_SCALE {
            bail!("Export scale must be in (0, {MAX_SCALE}], got {}", self.scale);
        }

        let cards = layout_cards(snapshot);
        let cards_height: u32 = cards.iter().map(|c| c.height + CARD_GAP).sum();
        let height = HEADER_HEIGHT + SUMMARY_HEIGHT + cards_height + FOOTER_HEIGHT;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg width="{:.0}" height="{:.0}" viewBox="0 0 {PAGE_WIDTH} {height}" xmlns="http://www.w3.org/2000/svg">"#,
            f64::from(PAGE_WIDTH) * f64::from(self.scale),
            f64::from(height) * f64::from(self.scale)
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="{PAGE_WIDTH}" height="{height}" fill="{}"/>"#,
            snapshot.branding.background_color
        );

        write_header(&mut svg, snapshot);
        write_summary(&mut svg, snapshot, HEADER_HEIGHT);

        let mut top = HEADER_HEIGHT + SUMMARY_HEIGHT;
        for card in &cards {
            write_card(&mut svg, &snapshot.branding, card, top);
            top += card.height + CARD_GAP;
        }

        write_footer(&mut svg, snapshot, top);
        svg.push_str("</svg>\n");
        Ok(svg)
    }

    fn extension(&self) -> &'static str {
        "svg"
    }
}
