//! Weather report model and temperature units.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Current conditions plus a short daily forecast.
///
/// Temperatures are always stored in Celsius; convert at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: f64,
    pub condition: String,
    pub icon_code: String,
    /// Relative humidity in percent.
    pub humidity: u8,
    pub wind_speed: f64,
    pub observed_at: NaiveDateTime,
    pub forecast: Vec<DailyForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub min_c: f64,
    pub max_c: f64,
    pub condition: String,
}

/// Display unit for temperatures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Converts a Celsius reading into this unit.
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// Formats a Celsius reading in this unit with one decimal.
    pub fn format(self, celsius: f64) -> String {
        format!("{:.1}{}", self.from_celsius(celsius), self.symbol())
    }
}

impl std::str::FromStr for TemperatureUnit {
    type Err = UnknownUnitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" | "metric" => Ok(Self::Celsius),
            "f" | "fahrenheit" | "imperial" => Ok(Self::Fahrenheit),
            other => Err(UnknownUnitError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUnitError(pub String);

impl Display for UnknownUnitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported temperature unit `{}`; expected celsius|fahrenheit",
            self.0
        )
    }
}

impl Error for UnknownUnitError {}
