//! Home and detail screen state, independent of any UI toolkit.
//!
//! Each action performs at most one request and applies its result before
//! returning. The saved list is rewritten through the storage port after every
//! change.

use tracing::{info, warn};

use crate::{
    confirm::{Confirm, DELETE_PROMPT, DELETE_TITLE},
    detail::DetailView,
    error::WeatherError,
    model::CurrentWeather,
    provider::WeatherProvider,
    saved::SavedCities,
    storage::CityStore,
};

pub struct WeatherApp {
    provider: Box<dyn WeatherProvider>,
    store: Box<dyn CityStore>,
    saved: SavedCities,
    current: Option<CurrentWeather>,
    last_error: Option<WeatherError>,
}

impl WeatherApp {
    /// Create the app and load the saved list from `store`.
    pub fn new(provider: Box<dyn WeatherProvider>, store: Box<dyn CityStore>) -> Self {
        let saved = load_saved(&*store);
        Self {
            provider,
            store,
            saved,
            current: None,
            last_error: None,
        }
    }

    pub fn saved(&self) -> &SavedCities {
        &self.saved
    }

    /// Result of the most recent successful search.
    pub fn current(&self) -> Option<&CurrentWeather> {
        self.current.as_ref()
    }

    /// Error from the most recent search, cleared by the next one.
    pub fn last_error(&self) -> Option<&WeatherError> {
        self.last_error.as_ref()
    }

    /// Look up `city` and, on success, save it unless its id is already saved.
    pub async fn search(&mut self, city: &str) -> Result<CurrentWeather, WeatherError> {
        self.current = None;
        self.last_error = None;

        match self.provider.current_weather(city).await {
            Ok(weather) => {
                if self.saved.add(weather.clone()) {
                    info!(id = weather.id, name = %weather.name, "saved city");
                    self.persist();
                }
                self.current = Some(weather.clone());
                Ok(weather)
            }
            Err(err) => {
                warn!(%city, "search failed: {err}");
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Remove a saved city after the user confirms.
    ///
    /// Returns `true` only when something was removed.
    pub fn delete(&mut self, id: u64, confirm: &dyn Confirm) -> bool {
        if !self.saved.contains(id) {
            return false;
        }
        if !confirm.confirm(DELETE_TITLE, DELETE_PROMPT) {
            return false;
        }

        let removed = self.saved.remove(id);
        if removed {
            info!(id, "removed saved city");
            self.persist();
        }
        removed
    }

    /// Detail screen for `weather` at `now` (Unix seconds).
    ///
    /// A forecast failure leaves the strip empty rather than failing the screen.
    pub async fn detail(&self, weather: &CurrentWeather, now: i64) -> DetailView {
        let entries = match self.provider.forecast(&weather.name).await {
            Ok(forecast) => forecast.list,
            Err(err) => {
                warn!(city = %weather.name, "forecast failed: {err}");
                Vec::new()
            }
        };
        DetailView::build(weather, &entries, now)
    }

    fn persist(&self) {
        match self.saved.to_json() {
            Ok(bytes) => self.store.save(bytes),
            Err(e) => warn!("Failed to encode saved cities: {e}"),
        }
    }
}

fn load_saved(store: &dyn CityStore) -> SavedCities {
    let Some(bytes) = store.load() else {
        return SavedCities::new();
    };

    match SavedCities::from_json(&bytes) {
        Ok(saved) => saved,
        Err(e) => {
            warn!("Ignoring unreadable saved cities: {e}");
            SavedCities::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{current, forecast_entries};
    use crate::model::Forecast;
    use crate::storage::MemoryStore;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Canned answers keyed by query; records every call.
    #[derive(Debug, Default)]
    struct FakeProvider {
        current: HashMap<String, Result<CurrentWeather, WeatherError>>,
        forecast: Option<Result<Forecast, WeatherError>>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl FakeProvider {
        fn with_city(mut self, query: &str, weather: CurrentWeather) -> Self {
            self.current.insert(query.to_string(), Ok(weather));
            self
        }
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn current_weather(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
            self.calls.lock().push(city.to_string());
            self.current
                .get(city)
                .cloned()
                .unwrap_or(Err(WeatherError::NotFound))
        }

        async fn forecast(&self, city: &str) -> Result<Forecast, WeatherError> {
            self.calls.lock().push(format!("forecast:{city}"));
            self.forecast
                .clone()
                .unwrap_or(Err(WeatherError::Unknown("no forecast".into())))
        }
    }

    fn app_with(provider: FakeProvider, store: Arc<MemoryStore>) -> WeatherApp {
        WeatherApp::new(Box::new(provider), Box::new(store))
    }

    #[tokio::test]
    async fn search_saves_new_city_and_persists() {
        let store = Arc::new(MemoryStore::new());
        let provider = FakeProvider::default().with_city("Hanoi", current(1581130, "Hanoi"));
        let mut app = app_with(provider, store.clone());

        let weather = app.search("Hanoi").await.unwrap();

        assert_eq!(weather.id, 1581130);
        assert_eq!(app.current().map(|c| c.id), Some(1581130));
        assert!(app.last_error().is_none());
        assert_eq!(app.saved().len(), 1);
        assert_eq!(store.writes(), 1);

        let persisted = SavedCities::from_json(&store.blob().unwrap()).unwrap();
        assert_eq!(&persisted, app.saved());
    }

    #[tokio::test]
    async fn searching_same_city_twice_keeps_one_entry() {
        let store = Arc::new(MemoryStore::new());
        let provider = FakeProvider::default()
            .with_city("Hanoi", current(1581130, "Hanoi"))
            .with_city("Hà Nội", current(1581130, "Hà Nội"));
        let mut app = app_with(provider, store.clone());

        app.search("Hanoi").await.unwrap();
        app.search("Hà Nội").await.unwrap();

        assert_eq!(app.saved().len(), 1);
        assert_eq!(app.saved().get(1581130).unwrap().name, "Hanoi");
        // Second search changed nothing, so nothing was rewritten.
        assert_eq!(store.writes(), 1);
        // But the current result is the fresh snapshot.
        assert_eq!(app.current().unwrap().name, "Hà Nội");
    }

    #[tokio::test]
    async fn failed_search_records_error_and_clears_current() {
        let store = Arc::new(MemoryStore::new());
        let provider = FakeProvider::default().with_city("Hanoi", current(1, "Hanoi"));
        let mut app = app_with(provider, store.clone());

        app.search("Hanoi").await.unwrap();
        let err = app.search("Atlantis").await.unwrap_err();

        assert_eq!(err, WeatherError::NotFound);
        assert!(app.current().is_none());
        assert_eq!(app.last_error(), Some(&WeatherError::NotFound));
        assert_eq!(app.saved().len(), 1);
    }

    #[tokio::test]
    async fn loads_saved_list_at_startup() {
        let mut saved = SavedCities::new();
        saved.add(current(1, "Hanoi"));
        saved.add(current(2, "Hue"));
        let store = Arc::new(MemoryStore::with_blob(saved.to_json().unwrap()));

        let app = app_with(FakeProvider::default(), store.clone());

        assert_eq!(app.saved(), &saved);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn unreadable_blob_starts_empty() {
        let store = Arc::new(MemoryStore::with_blob(b"{oops".to_vec()));
        let app = app_with(FakeProvider::default(), store);
        assert!(app.saved().is_empty());
    }

    #[tokio::test]
    async fn delete_requires_confirmation() {
        let store = Arc::new(MemoryStore::new());
        let provider = FakeProvider::default().with_city("Hue", current(2, "Hue"));
        let mut app = app_with(provider, store.clone());
        app.search("Hue").await.unwrap();

        let prompts = Mutex::new(Vec::new());
        let decline = |title: &str, message: &str| {
            prompts.lock().push((title.to_string(), message.to_string()));
            false
        };
        assert!(!app.delete(2, &decline));
        assert_eq!(app.saved().len(), 1);
        assert_eq!(store.writes(), 1);
        assert_eq!(
            prompts.lock().as_slice(),
            [(DELETE_TITLE.to_string(), DELETE_PROMPT.to_string())]
        );

        let accept = |_: &str, _: &str| true;
        assert!(app.delete(2, &accept));
        assert!(app.saved().is_empty());
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn delete_unknown_id_does_not_prompt() {
        let store = Arc::new(MemoryStore::new());
        let mut app = app_with(FakeProvider::default(), store.clone());

        let asked = Mutex::new(false);
        let confirm = |_: &str, _: &str| {
            *asked.lock() = true;
            true
        };

        assert!(!app.delete(42, &confirm));
        assert!(!*asked.lock());
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn detail_loads_forecast_by_city_name() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let provider = FakeProvider {
            forecast: Some(Ok(Forecast {
                list: forecast_entries(5),
                city: None,
            })),
            calls: calls.clone(),
            ..FakeProvider::default()
        };
        let app = app_with(provider, Arc::new(MemoryStore::new()));

        let weather = current(1581130, "Hanoi");
        let view = app.detail(&weather, weather.sys.sunrise + 60).await;

        assert_eq!(view.forecast.len(), 5);
        assert_eq!(calls.lock().as_slice(), ["forecast:Hanoi".to_string()]);
    }

    #[tokio::test]
    async fn detail_survives_forecast_failure() {
        let app = app_with(FakeProvider::default(), Arc::new(MemoryStore::new()));

        let weather = current(1, "Hanoi");
        let view = app.detail(&weather, weather.sys.sunrise).await;

        assert!(view.forecast.is_empty());
        assert_eq!(view.city, "Hanoi");
    }
}
