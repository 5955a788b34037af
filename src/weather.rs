use std::fmt;
use std::str::FromStr;

use crate::foundation::error::SkypaintError;

/// Weather conditions the backdrop knows how to paint.
///
/// Integer codes match the order below (`None = 0` ... `Hazy = 8`) and are stable.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum WeatherType {
    #[default]
    None,
    Cloudy,
    Sunny,
    Overcast,
    Sandy,
    Snowy,
    Rainy,
    Foggy,
    Hazy,
}

impl WeatherType {
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::Cloudy,
        Self::Sunny,
        Self::Overcast,
        Self::Sandy,
        Self::Snowy,
        Self::Rainy,
        Self::Foggy,
        Self::Hazy,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Cloudy => "cloudy",
            Self::Sunny => "sunny",
            Self::Overcast => "overcast",
            Self::Sandy => "sandy",
            Self::Snowy => "snowy",
            Self::Rainy => "rainy",
            Self::Foggy => "foggy",
            Self::Hazy => "hazy",
        }
    }
}

impl fmt::Display for WeatherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeatherType {
    type Err = SkypaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|w| w.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SkypaintError::validation(format!("unknown weather type \"{wanted}\"")))
    }
}

#[cfg(test)]
#[path = "../tests/unit/weather.rs"]
mod tests;
