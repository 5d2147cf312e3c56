use crate::domain::geo::{FeatureCategory, OverlayRole};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod glyphs;
pub mod nord;
pub mod palette;
pub mod tactical;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub transcript_text: Style,
    pub transcript_echo: Style,
    pub prompt: Style,

    pub canvas_tactical: Color,
    pub canvas_satellite: Color,
    pub marker_disputed: Color,
    pub marker_militarized: Color,
    pub marker_resource: Color,
    pub marker_outpost: Color,
    pub marker_selected: Style,
    pub overlay_eez: Color,
    pub overlay_monitoring: Color,
    pub overlay_claim: Color,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,
    pub badge: Style,
    pub coordinates: Style,

    pub header_logo: Style,
    pub header_panel: Style,
    pub header_layer: Style,
    pub header_target: Style,
    pub header_active: Style,
    pub header_warn: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    Tactical,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::Tactical => "Tactical",
            PaletteType::Nord => "Nord",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[PaletteType::Tactical, PaletteType::Nord]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Tactical => Self::from_palette(&tactical::TACTICAL),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.accent),

            transcript_text: Style::default().fg(p.text),
            transcript_echo: Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            prompt: Style::default().fg(p.accent).add_modifier(Modifier::BOLD),

            canvas_tactical: p.base,
            canvas_satellite: p.ocean,
            marker_disputed: p.red,
            marker_militarized: p.amber,
            marker_resource: p.emerald,
            marker_outpost: p.blue,
            marker_selected: Style::default()
                .fg(p.accent)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            overlay_eez: p.sky,
            overlay_monitoring: p.overlay0,
            overlay_claim: p.red,

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.amber)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            badge: Style::default()
                .bg(p.surface0)
                .fg(p.subtext1)
                .add_modifier(Modifier::BOLD),
            coordinates: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),

            header_logo: Style::default()
                .bg(p.accent)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_panel: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header_layer: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_target: Style::default().bg(p.surface0).fg(p.subtext1),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_warn: Style::default()
                .bg(p.amber)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header: Style::default().bg(p.mantle).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer_group_name: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            list_selected: Style::default()
                .bg(dim_color(p.accent, 0.35))
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }

    #[must_use]
    pub fn marker(&self, category: FeatureCategory) -> Color {
        match category {
            FeatureCategory::Disputed => self.marker_disputed,
            FeatureCategory::Militarized => self.marker_militarized,
            FeatureCategory::Resource => self.marker_resource,
            FeatureCategory::Outpost => self.marker_outpost,
        }
    }

    #[must_use]
    pub fn overlay(&self, role: OverlayRole) -> Color {
        match role {
            OverlayRole::EezBoundary => self.overlay_eez,
            OverlayRole::MonitoringDomain => self.overlay_monitoring,
            OverlayRole::ClaimLine => self.overlay_claim,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::Tactical)
    }
}
