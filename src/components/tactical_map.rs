use crate::app::state::{BaseLayer, MapState};
use crate::app::ui::{key_hints, panel_block};
use crate::domain::geo::{FeatureCategory, FeatureRegistry, GeoBounds, GeoFeature, LatLon};
use crate::theme::{glyphs, Theme};

use std::collections::BTreeMap;

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, BorderType, Borders, Clear, Paragraph, Widget,
    },
};

/// Degrees of padding around the registry extent.
const VIEW_PADDING: f64 = 1.0;
/// Clicks this many cells away from a marker still pick it.
const HIT_RADIUS_CELLS: f64 = 1.5;
const DASH_STEPS: usize = 24;
const GRATICULE_STEP: f64 = 5.0;

#[must_use]
pub fn viewport(registry: &FeatureRegistry) -> GeoBounds {
    registry.bounds().padded(VIEW_PADDING)
}

/// Drawing area of the canvas inside its panel border.
#[must_use]
pub fn canvas_inner(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

/// Geographic position under a terminal cell, if the cell is on the canvas.
#[must_use]
pub fn cell_to_latlon(inner: Rect, bounds: GeoBounds, column: u16, row: u16) -> Option<LatLon> {
    if inner.width == 0 || inner.height == 0 {
        return None;
    }
    if !(inner.x..inner.right()).contains(&column) || !(inner.y..inner.bottom()).contains(&row) {
        return None;
    }
    let fx = (f64::from(column - inner.x) + 0.5) / f64::from(inner.width);
    let fy = (f64::from(row - inner.y) + 0.5) / f64::from(inner.height);
    let lon = bounds.min_lon + fx * (bounds.max_lon - bounds.min_lon);
    let lat = bounds.max_lat - fy * (bounds.max_lat - bounds.min_lat);
    LatLon::new(lat, lon).ok()
}

/// Terminal cell a position falls in. Inverse of `cell_to_latlon`.
#[must_use]
pub fn latlon_to_cell(inner: Rect, bounds: GeoBounds, point: LatLon) -> Option<(u16, u16)> {
    if inner.width == 0 || inner.height == 0 {
        return None;
    }
    let fx = (point.lon() - bounds.min_lon) / (bounds.max_lon - bounds.min_lon);
    let fy = (bounds.max_lat - point.lat()) / (bounds.max_lat - bounds.min_lat);
    if !(0.0..=1.0).contains(&fx) || !(0.0..=1.0).contains(&fy) {
        return None;
    }
    let column = ((fx * f64::from(inner.width)) as u16).min(inner.width - 1);
    let row = ((fy * f64::from(inner.height)) as u16).min(inner.height - 1);
    Some((inner.x + column, inner.y + row))
}

/// Features grouped by the cell their marker lands in, in registry order.
fn marker_cells(
    registry: &FeatureRegistry,
    inner: Rect,
    bounds: GeoBounds,
) -> BTreeMap<(u16, u16), Vec<&GeoFeature>> {
    let mut cells: BTreeMap<(u16, u16), Vec<&GeoFeature>> = BTreeMap::new();
    for feature in registry.features() {
        if let Some(cell) = latlon_to_cell(inner, bounds, feature.coordinates) {
            cells.entry(cell).or_default().push(feature);
        }
    }
    cells
}

/// Glyph for a marker cell. Stacked markers show how many share the cell.
fn marker_symbol(features: &[&GeoFeature]) -> String {
    match features {
        [single] => glyphs::category(single.category).to_string(),
        stacked if stacked.len() <= 9 => stacked.len().to_string(),
        _ => "+".to_string(),
    }
}

/// Hit radius in degrees for the current canvas size.
#[must_use]
pub fn hit_radius(inner: Rect, bounds: GeoBounds) -> f64 {
    let per_col = (bounds.max_lon - bounds.min_lon) / f64::from(inner.width.max(1));
    let per_row = (bounds.max_lat - bounds.min_lat) / f64::from(inner.height.max(1));
    HIT_RADIUS_CELLS * per_col.max(per_row)
}

/// Feature under a click on the canvas panel at `area`.
#[must_use]
pub fn feature_at<'r>(
    registry: &'r FeatureRegistry,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<&'r str> {
    let inner = canvas_inner(area);
    let bounds = viewport(registry);
    let point = cell_to_latlon(inner, bounds, column, row)?;
    registry
        .nearest(&point, hit_radius(inner, bounds))
        .map(|f| f.id.as_str())
}

fn draw_segment(ctx: &mut Context, a: LatLon, b: LatLon, dashed: bool, color: Color) {
    if !dashed {
        ctx.draw(&CanvasLine::new(a.lon(), a.lat(), b.lon(), b.lat(), color));
        return;
    }
    let step_lon = (b.lon() - a.lon()) / DASH_STEPS as f64;
    let step_lat = (b.lat() - a.lat()) / DASH_STEPS as f64;
    for i in (0..DASH_STEPS).step_by(2) {
        let (i0, i1) = (i as f64, (i + 1) as f64);
        ctx.draw(&CanvasLine::new(
            a.lon() + step_lon * i0,
            a.lat() + step_lat * i0,
            a.lon() + step_lon * i1,
            a.lat() + step_lat * i1,
            color,
        ));
    }
}

fn draw_graticule(ctx: &mut Context, bounds: GeoBounds, color: Color) {
    let mut lon = (bounds.min_lon / GRATICULE_STEP).ceil() * GRATICULE_STEP;
    while lon <= bounds.max_lon {
        ctx.draw(&CanvasLine::new(lon, bounds.min_lat, lon, bounds.max_lat, color));
        lon += GRATICULE_STEP;
    }
    let mut lat = (bounds.min_lat / GRATICULE_STEP).ceil() * GRATICULE_STEP;
    while lat <= bounds.max_lat {
        ctx.draw(&CanvasLine::new(bounds.min_lon, lat, bounds.max_lon, lat, color));
        lat += GRATICULE_STEP;
    }
}

/// Short label for the map: the name before any parenthesised alias.
fn short_name(id: &str) -> &str {
    id.split(" (").next().unwrap_or(id).trim()
}

pub struct TacticalMap<'a> {
    pub map: &'a MapState,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl Widget for TacticalMap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let registry = self.map.selector.registry();
        let bounds = viewport(registry);
        let selected = self.map.selector.selected_feature();

        let block = panel_block("TACTICAL MAP", self.focused, theme).title_bottom(key_hints(
            &[("l", "legend"), ("b", "layer")],
            theme.footer_segment_key,
        ));

        let background = match self.map.base_layer {
            BaseLayer::Tactical => theme.canvas_tactical,
            BaseLayer::Satellite => theme.canvas_satellite,
        };
        let grid_color = theme.dimmed.fg.unwrap_or(Color::DarkGray);

        let canvas = Canvas::default()
            .block(block)
            .background_color(background)
            .marker(Marker::Braille)
            .x_bounds([bounds.min_lon, bounds.max_lon])
            .y_bounds([bounds.min_lat, bounds.max_lat])
            .paint(|ctx| {
                if self.map.base_layer == BaseLayer::Satellite {
                    draw_graticule(ctx, bounds, grid_color);
                    ctx.layer();
                }

                for overlay in registry.overlays() {
                    let color = theme.overlay(overlay.role);
                    for (a, b) in overlay.segments() {
                        draw_segment(ctx, a, b, overlay.dashed, color);
                    }
                }
            });
        canvas.render(area, buf);

        // Markers go straight into the buffer on the same cell grid clicks use.
        let inner = canvas_inner(area);
        for ((x, y), features) in marker_cells(registry, inner, bounds) {
            let style = Style::default().fg(theme.marker(features[0].category));
            buf[(x, y)].set_symbol(&marker_symbol(&features)).set_style(style);
        }

        if let Some(feature) = selected {
            if let Some((x, y)) = latlon_to_cell(inner, bounds, feature.coordinates) {
                let label = Line::from(vec![
                    Span::styled(glyphs::SELECTED, theme.marker_selected),
                    Span::styled(
                        format!(" {}", short_name(&feature.id)),
                        theme.marker_selected,
                    ),
                ]);
                buf.set_line(x, y, &label, inner.right() - x);
            }
        }

        if self.map.legend_open {
            Legend { registry, theme }.render(canvas_inner(area), buf);
        }
    }
}

/// Collapsible key in the lower-left corner of the canvas.
struct Legend<'a> {
    registry: &'a FeatureRegistry,
    theme: &'a Theme,
}

impl Legend<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let theme = self.theme;
        let mut lines: Vec<Line> = FeatureCategory::all()
            .iter()
            .map(|cat| {
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", glyphs::category(*cat)),
                        Style::default().fg(theme.marker(*cat)),
                    ),
                    Span::styled(cat.legend_label(), theme.list_item),
                ])
            })
            .collect();
        for overlay in self.registry.overlays() {
            let stroke = if overlay.dashed { " \u{254c} " } else { " \u{2501} " };
            lines.push(Line::from(vec![
                Span::styled(stroke, Style::default().fg(theme.overlay(overlay.role))),
                Span::styled(overlay.role.legend_label(), theme.list_item),
            ]));
        }
        lines
    }
}

impl Widget for Legend<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 3;
        let height = lines.len() as u16 + 2;
        if area.width < width || area.height < height {
            return;
        }
        let legend_area = Rect {
            x: area.x,
            y: area.bottom() - height,
            width,
            height,
        };
        Clear.render(legend_area, buf);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} LEGEND ", glyphs::LEGEND),
                self.theme.header_item,
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(self.theme.border);
        Paragraph::new(lines).block(block).render(legend_area, buf);
    }
}
