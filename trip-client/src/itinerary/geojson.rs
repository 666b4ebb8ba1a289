//! GeoJSON export of itinerary stops.

use serde::Serialize;

use crate::domain::{AttractionId, DayNumber, ItineraryEntry};

use super::map::MapScene;

/// A GeoJSON `FeatureCollection` of point features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    pub properties: StopProperties,
    pub geometry: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopProperties {
    pub id: AttractionId,
    pub day: DayNumber,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    #[serde(rename = "type")]
    kind: &'static str,
    /// `[lon, lat]`, as GeoJSON orders them.
    pub coordinates: [f64; 2],
}

impl Feature {
    fn point(id: &AttractionId, day: DayNumber, name: &str, lat: f64, lon: f64) -> Self {
        Self {
            kind: "Feature",
            properties: StopProperties {
                id: id.clone(),
                day,
                name: name.to_string(),
            },
            geometry: Point {
                kind: "Point",
                coordinates: [lon, lat],
            },
        }
    }
}

impl FeatureCollection {
    fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection",
            features,
        }
    }

    /// One feature per itinerary entry, in itinerary order.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a ItineraryEntry>) -> Self {
        Self::new(
            entries
                .into_iter()
                .map(|e| {
                    let a = &e.attraction;
                    Feature::point(&a.id, e.day, &a.name, a.lat, a.lon)
                })
                .collect(),
        )
    }

    /// One feature per plotted stop of a day's scene, origin included.
    pub fn from_scene(scene: &MapScene) -> Self {
        Self::new(
            scene
                .markers
                .iter()
                .map(|m| {
                    Feature::point(
                        m.stop.id(),
                        scene.day,
                        &m.name,
                        m.position.lat,
                        m.position.lon,
                    )
                })
                .collect(),
        )
    }
}
