use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("duplicate feature id: '{0}'")]
    DuplicateFeatureId(String),
    #[error("feature id must not be empty")]
    EmptyFeatureId,
    #[error("overlay '{name}' needs at least {min} points")]
    TooFewPoints { name: String, min: usize },
}

/// A validated (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    lat: f64,
    lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Equirectangular approximation, in degrees. Good enough for picking markers.
    #[must_use]
    pub fn distance_deg(&self, other: &LatLon) -> f64 {
        let mean_lat = ((self.lat + other.lat) / 2.0).to_radians();
        let dx = (self.lon - other.lon) * mean_lat.cos();
        let dy = self.lat - other.lat;
        dx.hypot(dy)
    }
}

/// Popup format: signed degrees with fixed `°N`/`°E` suffixes.
impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}°N, {:.3}°E", self.lat, self.lon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    Disputed,
    Militarized,
    Resource,
    Outpost,
}

impl FeatureCategory {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureCategory::Disputed => "disputed",
            FeatureCategory::Militarized => "militarized",
            FeatureCategory::Resource => "resource",
            FeatureCategory::Outpost => "outpost",
        }
    }

    #[must_use]
    pub fn legend_label(&self) -> &'static str {
        match self {
            FeatureCategory::Disputed => "Contested / Disputed features",
            FeatureCategory::Militarized => "Militarized / reclaimed features",
            FeatureCategory::Resource => "Resource / hydrocarbon zones",
            FeatureCategory::Outpost => "Philippine outposts",
        }
    }

    #[must_use]
    pub fn all() -> &'static [FeatureCategory] {
        &[
            FeatureCategory::Disputed,
            FeatureCategory::Militarized,
            FeatureCategory::Resource,
            FeatureCategory::Outpost,
        ]
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    pub id: String,
    pub coordinates: LatLon,
    pub category: FeatureCategory,
    pub description: String,
    pub status_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Polygon,
    Polyline,
}

/// What an overlay stands for; the theme decides how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRole {
    EezBoundary,
    MonitoringDomain,
    ClaimLine,
}

impl OverlayRole {
    #[must_use]
    pub fn legend_label(&self) -> &'static str {
        match self {
            OverlayRole::EezBoundary => "Philippine EEZ boundary",
            OverlayRole::MonitoringDomain => "PAGASA area of responsibility",
            OverlayRole::ClaimLine => "China's Nine-Dash Line (invalid)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayGeometry {
    pub name: String,
    pub kind: OverlayKind,
    pub role: OverlayRole,
    pub dashed: bool,
    points: Vec<LatLon>,
}

impl OverlayGeometry {
    pub fn new(
        name: &str,
        kind: OverlayKind,
        role: OverlayRole,
        dashed: bool,
        points: Vec<LatLon>,
    ) -> Result<Self, GeoError> {
        let min = match kind {
            OverlayKind::Polygon => 3,
            OverlayKind::Polyline => 2,
        };
        if points.len() < min {
            return Err(GeoError::TooFewPoints {
                name: name.to_string(),
                min,
            });
        }
        Ok(Self {
            name: name.to_string(),
            kind,
            role,
            dashed,
            points,
        })
    }

    #[must_use]
    pub fn points(&self) -> &[LatLon] {
        &self.points
    }

    /// Consecutive point pairs. Polygons are closed even when the source ring is open.
    #[must_use]
    pub fn segments(&self) -> Vec<(LatLon, LatLon)> {
        let mut segments: Vec<_> = self.points.windows(2).map(|w| (w[0], w[1])).collect();
        if self.kind == OverlayKind::Polygon {
            if let (Some(first), Some(last)) = (self.points.first(), self.points.last()) {
                if first != last {
                    segments.push((*last, *first));
                }
            }
        }
        segments
    }
}

/// Axis-aligned lat/lon box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    fn around(p: LatLon) -> Self {
        Self {
            min_lat: p.lat,
            max_lat: p.lat,
            min_lon: p.lon,
            max_lon: p.lon,
        }
    }

    fn extend(&mut self, p: LatLon) {
        self.min_lat = self.min_lat.min(p.lat);
        self.max_lat = self.max_lat.max(p.lat);
        self.min_lon = self.min_lon.min(p.lon);
        self.max_lon = self.max_lon.max(p.lon);
    }

    #[must_use]
    pub fn padded(self, degrees: f64) -> Self {
        Self {
            min_lat: (self.min_lat - degrees).max(-90.0),
            max_lat: (self.max_lat + degrees).min(90.0),
            min_lon: (self.min_lon - degrees).max(-180.0),
            max_lon: (self.max_lon + degrees).min(180.0),
        }
    }
}

pub const MAP_CENTER: LatLon = LatLon {
    lat: 12.5,
    lon: 119.0,
};

/// Read-only set of features and overlays shared by the map and the selector.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRegistry {
    features: Vec<GeoFeature>,
    overlays: Vec<OverlayGeometry>,
}

impl FeatureRegistry {
    pub fn new(
        features: Vec<GeoFeature>,
        overlays: Vec<OverlayGeometry>,
    ) -> Result<Self, GeoError> {
        for (i, feature) in features.iter().enumerate() {
            if feature.id.trim().is_empty() {
                return Err(GeoError::EmptyFeatureId);
            }
            if features[..i].iter().any(|f| f.id == feature.id) {
                return Err(GeoError::DuplicateFeatureId(feature.id.clone()));
            }
        }
        Ok(Self { features, overlays })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GeoFeature> {
        self.features.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.features.iter().position(|f| f.id == id)
    }

    #[must_use]
    pub fn features(&self) -> &[GeoFeature] {
        &self.features
    }

    #[must_use]
    pub fn overlays(&self) -> &[OverlayGeometry] {
        &self.overlays
    }

    /// Box covering every feature and overlay point; centered on `MAP_CENTER` when empty.
    #[must_use]
    pub fn bounds(&self) -> GeoBounds {
        let mut points = self
            .features
            .iter()
            .map(|f| f.coordinates)
            .chain(self.overlays.iter().flat_map(|o| o.points.iter().copied()));
        let Some(first) = points.next() else {
            return GeoBounds::around(MAP_CENTER).padded(5.0);
        };
        let mut bounds = GeoBounds::around(first);
        for p in points {
            bounds.extend(p);
        }
        bounds
    }

    /// Closest feature to `point`, if one lies within `max_distance` degrees.
    #[must_use]
    pub fn nearest(&self, point: &LatLon, max_distance: f64) -> Option<&GeoFeature> {
        self.features
            .iter()
            .map(|f| (f, f.coordinates.distance_deg(point)))
            .filter(|(_, d)| *d <= max_distance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(f, _)| f)
    }
}

impl Default for FeatureRegistry {
    fn default() -> Self {
        Self {
            features: builtin_features(),
            overlays: builtin_overlays(),
        }
    }
}

const FEATURES: [(&str, f64, f64, FeatureCategory, &str, &str); 5] = [
    (
        "Scarborough Shoal (Panatag Shoal)",
        15.138,
        117.756,
        FeatureCategory::Disputed,
        "A critical fishing ground for Filipino fishermen, located well within the Philippines' Exclusive Economic Zone (EEZ). Significant maritime contention here.",
        "CONTESTED",
    ),
    (
        "Mischief Reef (Panganiban Reef)",
        9.897,
        115.535,
        FeatureCategory::Militarized,
        "Originally a submerged reef; heavily modified by land reclamation and infrastructure. Located within the Philippines' EEZ according to the 2016 arbitral award.",
        "MILITARIZED",
    ),
    (
        "Reed Bank (Recto Bank)",
        11.417,
        116.833,
        FeatureCategory::Resource,
        "An area believed to hold reserves of oil and natural gas. The 2016 arbitral ruling confirmed the Philippines' sovereign rights to explore resources here.",
        "RESOURCE ZONE",
    ),
    (
        "Ayungin Shoal (Second Thomas Shoal)",
        9.733,
        115.866,
        FeatureCategory::Outpost,
        "Home to the BRP Sierra Madre (deliberately grounded Philippine ship) used as an outpost to assert sovereignty.",
        "PH OUTPOST",
    ),
    (
        "Thitu Island (Pag-asa Island)",
        11.051,
        114.284,
        FeatureCategory::Outpost,
        "Largest Philippine-controlled island in the Spratlys, with civilian population and Philippine government presence.",
        "PH CONTROLLED",
    ),
];

// Simplified bounding polygon, not a high-resolution EEZ.
const EEZ: [(f64, f64); 5] = [
    (22.2536, 113.6804),
    (22.2536, 129.9438),
    (3.1114, 129.9438),
    (3.1114, 113.6804),
    (22.2536, 113.6804),
];

const PAR: [(f64, f64); 7] = [
    (5.0, 115.0),
    (15.0, 115.0),
    (21.0, 120.0),
    (25.0, 120.0),
    (25.0, 135.0),
    (5.0, 135.0),
    (5.0, 115.0),
];

// Approximate, for display only.
const NINE_DASH: [(f64, f64); 9] = [
    (21.0, 109.5),
    (20.0, 111.5),
    (18.5, 114.5),
    (16.5, 116.5),
    (14.5, 117.5),
    (12.0, 116.5),
    (9.5, 114.0),
    (7.5, 112.5),
    (5.5, 111.5),
];

fn builtin_features() -> Vec<GeoFeature> {
    FEATURES
        .iter()
        .map(|(id, lat, lon, category, description, status)| GeoFeature {
            id: (*id).to_string(),
            coordinates: LatLon {
                lat: *lat,
                lon: *lon,
            },
            category: *category,
            description: (*description).to_string(),
            status_label: (*status).to_string(),
        })
        .collect()
}

fn ring(points: &[(f64, f64)]) -> Vec<LatLon> {
    points
        .iter()
        .map(|(lat, lon)| LatLon {
            lat: *lat,
            lon: *lon,
        })
        .collect()
}

/// The static overlays every registry is drawn with.
#[must_use]
pub fn builtin_overlays() -> Vec<OverlayGeometry> {
    vec![
        OverlayGeometry {
            name: "Philippine EEZ".to_string(),
            kind: OverlayKind::Polygon,
            role: OverlayRole::EezBoundary,
            dashed: true,
            points: ring(&EEZ),
        },
        OverlayGeometry {
            name: "PAGASA PAR".to_string(),
            kind: OverlayKind::Polygon,
            role: OverlayRole::MonitoringDomain,
            dashed: true,
            points: ring(&PAR),
        },
        OverlayGeometry {
            name: "Nine-dash line".to_string(),
            kind: OverlayKind::Polyline,
            role: OverlayRole::ClaimLine,
            dashed: true,
            points: ring(&NINE_DASH),
        },
    ]
}
