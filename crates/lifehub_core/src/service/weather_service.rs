//! Mock weather provider.

use crate::clock::Clock;
use crate::model::weather::{DailyForecast, WeatherReport};
use chrono::Duration;
use std::sync::Arc;

/// Weather lookup contract.
pub trait WeatherService {
    /// Current conditions and a short forecast for `location`.
    fn current(&self, location: &str) -> WeatherReport;
}

/// Returns the same synthetic conditions for every location.
pub struct MockWeatherService {
    clock: Arc<dyn Clock>,
}

impl MockWeatherService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl WeatherService for MockWeatherService {
    fn current(&self, location: &str) -> WeatherReport {
        let today = self.clock.today();
        let day = |offset: i64, min_c: f64, max_c: f64, condition: &str| DailyForecast {
            date: today + Duration::days(offset),
            min_c,
            max_c,
            condition: condition.to_string(),
        };

        WeatherReport {
            location: location.to_string(),
            temperature_c: 18.5,
            condition: "Partly Cloudy".to_string(),
            icon_code: "partly-cloudy".to_string(),
            humidity: 65,
            wind_speed: 8.5,
            observed_at: self.clock.now(),
            forecast: vec![
                day(1, 12.0, 20.0, "Sunny"),
                day(2, 11.0, 19.0, "Rain"),
                day(3, 10.0, 18.0, "Cloudy"),
            ],
        }
    }
}
