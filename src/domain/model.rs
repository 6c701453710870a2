use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// 座標保留的小數位數 (約 1.1 公尺)
pub const COORDINATE_DECIMALS: i32 = 5;

/// Rounds a coordinate to five decimal places.
///
/// The value is scaled by 10^5 and rounded half away from zero with
/// [`f64::round`], so latitude and longitude always follow the same policy.
pub fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(COORDINATE_DECIMALS);
    (value * scale).round() / scale
}

/// One landmark to look up: the key used in the output and the text sent to the services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceQuery {
    pub display_key: String,
    pub search_term: String,
}

impl PlaceQuery {
    pub fn new(display_key: impl Into<String>, search_term: impl Into<String>) -> Self {
        Self {
            display_key: display_key.into(),
            search_term: search_term.into(),
        }
    }
}

/// Fields taken from the first maps search result.
#[derive(Debug, Clone, PartialEq)]
pub struct MapsPlace {
    pub name: String,
    pub place_id: String,
    pub description: String,
    pub type_ids: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f64,
    pub num_reviews: u64,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiArticle {
    pub title: String,
    pub url: String,
}

/// The merged output record for one landmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceRecord {
    pub name: String,
    pub place_id: String,
    pub description: String,
    pub type_ids: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f64,
    pub num_reviews: u64,
    // 下游使用者依賴的欄位名稱，不可改
    #[serde(rename = "adresse")]
    pub address: String,
    pub country_iso: Option<String>,
    pub wiki_title: String,
    pub wiki_url: String,
}

impl PlaceRecord {
    pub fn merge(place: MapsPlace, country_iso: Option<String>, article: WikiArticle) -> Self {
        Self {
            name: place.name,
            place_id: place.place_id,
            description: place.description,
            type_ids: place.type_ids,
            latitude: place.latitude,
            longitude: place.longitude,
            rating: place.rating,
            num_reviews: place.num_reviews,
            address: place.address,
            country_iso,
            wiki_title: article.title,
            wiki_url: article.url,
        }
    }
}

/// Records keyed by display key, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<(String, PlaceRecord)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the record in place when the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, record: PlaceRecord) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = record,
            None => self.entries.push((key, record)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PlaceRecord> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlaceRecord)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, record) in &self.entries {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}
