//! Condition code classification.
//!
//! OpenWeather groups condition codes into bands of a hundred
//! (see <https://openweathermap.org/weather-conditions>). Each band maps to a
//! category, and each category to the glyph and color used by the renderer.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionCategory {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Cloudy,
    Unknown,
}

/// Terminal colors available to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Red,
    Cyan,
    Blue,
    White,
    Yellow,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayParams {
    pub glyph: &'static str,
    pub color: ColorToken,
}

/// Half-open code ranges, scanned in order. Anything unmatched is `Unknown`.
const CATEGORY_TABLE: &[(Range<i64>, ConditionCategory)] = &[
    (200..300, ConditionCategory::Thunderstorm),
    (300..400, ConditionCategory::Drizzle),
    (500..600, ConditionCategory::Rain),
    (600..700, ConditionCategory::Snow),
    (700..800, ConditionCategory::Atmosphere),
    (800..801, ConditionCategory::Clear),
    (801..900, ConditionCategory::Cloudy),
];

impl ConditionCategory {
    pub fn from_code(code: i64) -> Self {
        CATEGORY_TABLE
            .iter()
            .find(|(range, _)| range.contains(&code))
            .map(|(_, category)| *category)
            .unwrap_or(ConditionCategory::Unknown)
    }

    pub fn display_params(&self) -> DisplayParams {
        let (glyph, color) = match self {
            ConditionCategory::Thunderstorm => ("🌩", ColorToken::Red),
            ConditionCategory::Drizzle => ("💧", ColorToken::Cyan),
            ConditionCategory::Rain => ("🌧️", ColorToken::Blue),
            ConditionCategory::Snow => ("⛄️", ColorToken::White),
            ConditionCategory::Atmosphere => ("🌀", ColorToken::Blue),
            ConditionCategory::Clear => ("🌞", ColorToken::Yellow),
            ConditionCategory::Cloudy => ("💨", ColorToken::White),
            ConditionCategory::Unknown => ("🌈", ColorToken::Default),
        };

        DisplayParams { glyph, color }
    }
}

/// Glyph and color for a raw condition code.
pub fn display_params_for(code: i64) -> DisplayParams {
    ConditionCategory::from_code(code).display_params()
}
