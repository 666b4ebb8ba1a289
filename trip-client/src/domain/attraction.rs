//! Attraction types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Error returned when parsing an invalid attraction identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid attraction id: {reason}")]
pub struct InvalidAttractionId {
    reason: &'static str,
}

/// Stable identifier of an attraction.
///
/// Identifiers travel as a single URL path segment, so they must be
/// non-empty and free of path, query and fragment delimiters. The backend
/// usually emits string ids, but some records (the fixed lodging point among
/// them) carry numeric ids; both decode to the same textual form.
///
/// # Examples
///
/// ```
/// use trip_client::domain::AttractionId;
///
/// let id = AttractionId::parse("a-17").unwrap();
/// assert_eq!(id.as_str(), "a-17");
///
/// assert!(AttractionId::parse("").is_err());
/// assert!(AttractionId::parse("a/b").is_err());
/// assert_eq!(AttractionId::from(130886805).as_str(), "130886805");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AttractionId(String);

impl AttractionId {
    /// Parse an identifier, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidAttractionId> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidAttractionId {
                reason: "must not be empty",
            });
        }

        if trimmed.contains(['/', '?', '#']) {
            return Err(InvalidAttractionId {
                reason: "must not contain '/', '?' or '#'",
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for AttractionId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Debug for AttractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttractionId({})", self.0)
    }
}

impl fmt::Display for AttractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AttractionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => AttractionId::parse(&s).map_err(serde::de::Error::custom),
            Raw::Number(n) => Ok(AttractionId::from(n)),
        }
    }
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A point of interest as served by the backend.
///
/// Optional text fields decode to empty strings and optional lists to empty
/// vectors, whether the backend omits them or sends `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: AttractionId,

    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Image URLs; the first one is the cover.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub pros: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cons: Vec<String>,

    /// Links to the posts the pros/cons were summarised from.
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_posts: Vec<String>,

    pub lat: f64,

    pub lon: f64,
}

impl Attraction {
    /// Returns the attraction's coordinates.
    pub fn position(&self) -> LatLon {
        LatLon::new(self.lat, self.lon)
    }

    /// Returns the cover image URL, if any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Tags joined for display, e.g. "历史、文化".
    pub fn tag_line(&self) -> String {
        self.tags.join("、")
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
