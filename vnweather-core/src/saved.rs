//! The user's saved-city list.

use crate::model::CurrentWeather;

/// Ordered snapshots, newest search first, never two with the same city id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedCities {
    cities: Vec<CurrentWeather>,
}

impl SavedCities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a persisted blob (a JSON array of snapshots).
    ///
    /// Duplicate ids in the blob are dropped, keeping the first.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let decoded: Vec<CurrentWeather> = serde_json::from_slice(bytes)?;
        let mut saved = Self::new();
        for city in decoded {
            if !saved.contains(city.id) {
                saved.cities.push(city);
            }
        }
        Ok(saved)
    }

    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.cities)
    }

    /// Put `city` at the front unless its id is already saved.
    ///
    /// Returns `false` and leaves the list untouched for a known id; the
    /// earlier snapshot is kept.
    pub fn add(&mut self, city: CurrentWeather) -> bool {
        if self.contains(city.id) {
            return false;
        }
        self.cities.insert(0, city);
        true
    }

    /// Drop the city with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.cities.len();
        self.cities.retain(|c| c.id != id);
        self.cities.len() != before
    }

    pub fn contains(&self, id: u64) -> bool {
        self.cities.iter().any(|c| c.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&CurrentWeather> {
        self.cities.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurrentWeather> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
