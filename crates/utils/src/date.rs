use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Locale used for long-form dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateLocale {
    /// `19 de octubre de 2026, 14:05`
    #[default]
    Es,
    /// `October 19, 2026, 02:05 PM`
    En,
}

const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Long month, numeric day and year, two-digit hour and minute, in the value's own offset.
pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>, locale: DateLocale) -> String {
    let month = dt.month0() as usize;
    match locale {
        DateLocale::Es => format!(
            "{} de {} de {}, {:02}:{:02}",
            dt.day(),
            MONTHS_ES[month],
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        DateLocale::En => {
            let (pm, hour12) = dt.hour12();
            format!(
                "{} {}, {}, {:02}:{:02} {}",
                MONTHS_EN[month],
                dt.day(),
                dt.year(),
                hour12,
                dt.minute(),
                if pm { "PM" } else { "AM" }
            )
        }
    }
}

/// Parse an RFC 3339 timestamp and format it; `None` when the input is not a date.
pub fn format_date_str(raw: &str, locale: DateLocale) -> Option<String> {
    DateTime::parse_from_rfc3339(raw.trim()).ok().map(|dt| format_date(&dt, locale))
}
