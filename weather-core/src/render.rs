use std::io::{self, Write};

use crate::{
    condition::{ColorToken, DisplayParams},
    model::{UnitSystem, WeatherRecord},
};

/// Width of the centered city and description fields.
pub const PADDING: usize = 20;

const REVERSE: &str = "\x1b[;7m";
const RESET: &str = "\x1b[0m";

impl ColorToken {
    pub fn escape(&self) -> &'static str {
        match self {
            ColorToken::Red => "\x1b[1;31m",
            ColorToken::Cyan => "\x1b[1;36m",
            ColorToken::Blue => "\x1b[1;34m",
            ColorToken::White => "\x1b[37m",
            ColorToken::Yellow => "\x1b[33m",
            ColorToken::Default => RESET,
        }
    }
}

/// The single output line, without trailing newline.
pub fn format_line(record: &WeatherRecord, units: UnitSystem, params: DisplayParams) -> String {
    format!(
        "{REVERSE}{city:^width$}{RESET}{color}\t{glyph}\t{description:^width$} {RESET}{temp}°{unit}",
        city = record.city_name,
        color = params.color.escape(),
        glyph = params.glyph,
        description = capitalize(&record.description),
        temp = record.temperature,
        unit = units.symbol(),
        width = PADDING,
    )
}

pub fn write_line<W: Write>(
    out: &mut W,
    record: &WeatherRecord,
    units: UnitSystem,
    params: DisplayParams,
) -> io::Result<()> {
    writeln!(out, "{}", format_line(record, units, params))?;
    out.flush()
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
