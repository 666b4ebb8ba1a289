//! Map scene for one itinerary day.
//!
//! A scene is a complete description of what the map shows: centre and
//! zoom, tile layer, the route polyline, one marker per stop and the
//! viewport to fit. It is rebuilt from scratch on every render, so rendering
//! the same day twice yields equal scenes.
//!
//! Every day's route starts at the trip's lodging point, which is injected
//! here rather than fetched.

use serde::Serialize;

use crate::domain::{AttractionId, DayNumber, ItineraryEntry, LatLon};

/// Identifier of the default lodging point.
pub const ORIGIN_ID: u64 = 130_886_805;

/// The fixed starting point drawn first on every day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Origin {
    pub id: AttractionId,
    pub name: String,
    pub position: LatLon,
    pub note: String,
}

impl Default for Origin {
    fn default() -> Self {
        Self {
            id: AttractionId::from(ORIGIN_ID),
            name: "清华（暂定住宿点）".to_string(),
            position: LatLon::new(40.003147, 116.326539),
            note: "出发点".to_string(),
        }
    }
}

/// Raster tile source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    /// URL template with `{s}`, `{z}`, `{x}` and `{y}` placeholders.
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap".to_string(),
        }
    }
}

/// A custom marker icon. Sizes and anchors are in pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconSpec {
    pub icon_url: String,
    pub shadow_url: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
    pub shadow_size: [u32; 2],
}

impl IconSpec {
    /// The red pin used for the lodging point.
    pub fn red_pin() -> Self {
        Self {
            icon_url: "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-red.png".to_string(),
            shadow_url: "https://unpkg.com/leaflet@1.7.1/dist/images/marker-shadow.png".to_string(),
            icon_size: [25, 41],
            icon_anchor: [12, 41],
            popup_anchor: [1, -34],
            shadow_size: [41, 41],
        }
    }
}

/// Configuration for map scenes.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Starting point injected into every day.
    pub origin: Origin,

    /// Initial zoom level, before the viewport is fitted.
    pub zoom: u8,

    pub tiles: TileLayer,

    /// Icon distinguishing the origin marker.
    pub origin_icon: IconSpec,

    /// Stroke colour of the route polyline.
    pub route_color: String,

    /// Padding around the fitted viewport, in pixels.
    pub padding: [u32; 2],
}

impl MapConfig {
    /// Set the starting point.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            origin: Origin::default(),
            zoom: 11,
            tiles: TileLayer::default(),
            origin_icon: IconSpec::red_pin(),
            route_color: "blue".to_string(),
            padding: [50, 50],
        }
    }
}

/// What a plotted point stands for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stop {
    /// The injected starting point.
    Origin { id: AttractionId },
    /// An itinerary entry.
    Regular { id: AttractionId },
}

impl Stop {
    pub fn id(&self) -> &AttractionId {
        match self {
            Stop::Origin { id } | Stop::Regular { id } => id,
        }
    }

    pub fn is_origin(&self) -> bool {
        matches!(self, Stop::Origin { .. })
    }
}

/// Marker icon choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerIcon {
    /// The map library's default pin.
    Standard,
    Custom(IconSpec),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipDirection {
    Top,
}

/// Always-visible label next to a marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub text: String,
    pub permanent: bool,
    pub direction: TooltipDirection,
    pub offset: [i32; 2],
}

impl Tooltip {
    fn permanent(text: &str) -> Self {
        Self {
            text: text.to_string(),
            permanent: true,
            direction: TooltipDirection::Top,
            offset: [0, -10],
        }
    }
}

/// Click-to-open marker popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    /// "Day{d} {name}"
    pub title: String,
    pub body: String,
}

impl Popup {
    fn new(day: DayNumber, name: &str, note: &str) -> Self {
        Self {
            title: format!("{} {}", day.label(), name),
            body: note.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub stop: Stop,
    pub name: String,
    pub position: LatLon,
    pub icon: MarkerIcon,
    pub tooltip: Tooltip,
    pub popup: Popup,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<LatLon>,
    pub color: String,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: LatLon,
    pub north_east: LatLon,
}

impl Bounds {
    /// Smallest box containing every point; `None` for no points.
    pub fn enclosing(points: &[LatLon]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Bounds {
            south_west: *first,
            north_east: *first,
        };
        for p in rest {
            bounds.south_west.lat = bounds.south_west.lat.min(p.lat);
            bounds.south_west.lon = bounds.south_west.lon.min(p.lon);
            bounds.north_east.lat = bounds.north_east.lat.max(p.lat);
            bounds.north_east.lon = bounds.north_east.lon.max(p.lon);
        }
        Some(bounds)
    }

    pub fn contains(&self, p: LatLon) -> bool {
        (self.south_west.lat..=self.north_east.lat).contains(&p.lat)
            && (self.south_west.lon..=self.north_east.lon).contains(&p.lon)
    }
}

/// Viewport to fit after drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Viewport {
    pub bounds: Bounds,
    pub padding: [u32; 2],
}

/// Everything the map shows for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub day: DayNumber,
    pub center: LatLon,
    pub zoom: u8,
    pub tiles: TileLayer,
    pub route: Polyline,
    pub markers: Vec<Marker>,
    pub viewport: Viewport,
}

impl MapScene {
    /// Number of plotted points, origin included.
    pub fn point_count(&self) -> usize {
        self.route.points.len()
    }
}

/// Build the scene for one day.
///
/// Returns `None` when the day has no entries; the map is then left empty.
/// Otherwise the origin comes first, followed by the day's entries in their
/// original relative order.
pub fn render_day(
    entries: &[ItineraryEntry],
    day: DayNumber,
    config: &MapConfig,
) -> Option<MapScene> {
    let day_entries: Vec<&ItineraryEntry> = entries.iter().filter(|e| e.day == day).collect();
    if day_entries.is_empty() {
        return None;
    }

    let origin = &config.origin;
    let mut markers = Vec::with_capacity(day_entries.len() + 1);

    markers.push(Marker {
        stop: Stop::Origin {
            id: origin.id.clone(),
        },
        name: origin.name.clone(),
        position: origin.position,
        icon: MarkerIcon::Custom(config.origin_icon.clone()),
        tooltip: Tooltip::permanent(&origin.name),
        popup: Popup::new(day, &origin.name, &origin.note),
    });

    markers.extend(day_entries.iter().map(|e| Marker {
        stop: Stop::Regular {
            id: e.attraction.id.clone(),
        },
        name: e.attraction.name.clone(),
        position: e.attraction.position(),
        icon: MarkerIcon::Standard,
        tooltip: Tooltip::permanent(&e.attraction.name),
        popup: Popup::new(day, &e.attraction.name, &e.note),
    }));

    let points: Vec<LatLon> = markers.iter().map(|m| m.position).collect();
    let bounds = Bounds::enclosing(&points)?;

    Some(MapScene {
        day,
        center: origin.position,
        zoom: config.zoom,
        tiles: config.tiles.clone(),
        route: Polyline {
            points,
            color: config.route_color.clone(),
        },
        markers,
        viewport: Viewport {
            bounds,
            padding: config.padding,
        },
    })
}
