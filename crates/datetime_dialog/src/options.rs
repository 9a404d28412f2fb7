//! Turning an untyped options object into typed, validated options.
//!
//! Every option is checked independently, so one call reports every problem at once.

use ecolor::Color32;
use serde_json::{Map, Value};

use crate::{CalendarValue, FieldError, FieldProblem, Platform};

/// An option name, plus older spellings that mean the same thing.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Key {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

impl Key {
    const fn new(name: &'static str) -> Self {
        Self { name, aliases: &[] }
    }

    fn spellings(self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

pub(crate) const INITIAL_DATE: Key = Key {
    name: "initialDate",
    aliases: &["date"],
};
pub(crate) const MIN_DATE: Key = Key::new("minDate");
pub(crate) const MAX_DATE: Key = Key::new("maxDate");
pub(crate) const SELECTABLE_DAYS: Key = Key::new("selectableDays");
pub(crate) const HIGHLIGHTED_DAYS: Key = Key::new("highlightedDays");
pub(crate) const SHOW_YEAR_PICKER_FIRST: Key = Key::new("showYearPickerFirst");
pub(crate) const COLOR: Key = Key::new("color");
pub(crate) const TITLE: Key = Key::new("title");
pub(crate) const OK_TEXT: Key = Key::new("okText");
pub(crate) const CANCEL_TEXT: Key = Key::new("cancelText");
pub(crate) const THEME_DARK: Key = Key::new("themeDark");
pub(crate) const IS_24_HOUR_FORMAT: Key = Key {
    name: "is24HourFormat",
    aliases: &["24hourFormat"],
};

const COMMON_KEYS: [Key; 6] = [INITIAL_DATE, COLOR, TITLE, OK_TEXT, CANCEL_TEXT, THEME_DARK];

const DATE_KEYS: [Key; 5] = [
    MIN_DATE,
    MAX_DATE,
    SELECTABLE_DAYS,
    HIGHLIGHTED_DAYS,
    SHOW_YEAR_PICKER_FIRST,
];

const TIME_KEYS: [Key; 1] = [IS_24_HOUR_FORMAT];

// ----------------------------------------------------------------------------

/// Read access to the options object, recording every problem in `errors`.
struct RawOptions<'a> {
    map: Option<&'a Map<String, Value>>,
    errors: Vec<FieldError>,
}

impl<'a> RawOptions<'a> {
    /// `null` counts as an empty object.
    fn new(options: &'a Value) -> Self {
        match options {
            Value::Null => Self {
                map: None,
                errors: vec![],
            },
            Value::Object(map) => Self {
                map: Some(map),
                errors: vec![],
            },
            other => Self {
                map: None,
                errors: vec![FieldError::new(
                    "options",
                    FieldProblem::WrongType { expected: "object" },
                    format!("got {}", type_name(other)),
                )],
            },
        }
    }

    /// The value of the first spelling present. `null` counts as absent.
    fn get(&self, key: Key) -> Option<(&'static str, &'a Value)> {
        let map = self.map?;
        key.spellings()
            .find_map(|name| {
                map.get(name)
                    .filter(|value| !value.is_null())
                    .map(|value| (name, value))
            })
    }

    fn wrong_type(&mut self, name: &'static str, expected: &'static str, value: &Value) {
        self.errors.push(FieldError::new(
            name,
            FieldProblem::WrongType { expected },
            format!("expected {expected}, got {}", type_name(value)),
        ));
    }

    fn string(&mut self, key: Key) -> Option<&'a str> {
        let (name, value) = self.get(key)?;
        let string = value.as_str();
        if string.is_none() {
            self.wrong_type(name, "a string", value);
        }
        string
    }

    fn bool(&mut self, key: Key) -> Option<bool> {
        let (name, value) = self.get(key)?;
        let boolean = value.as_bool();
        if boolean.is_none() {
            self.wrong_type(name, "a boolean", value);
        }
        boolean
    }

    fn date(&mut self, key: Key) -> Option<CalendarValue> {
        let (name, value) = self.get(key)?;
        let Some(string) = value.as_str() else {
            self.errors.push(FieldError::new(
                name,
                FieldProblem::InvalidDate,
                format!("expected a string, got {}", type_name(value)),
            ));
            return None;
        };
        match CalendarValue::parse(string) {
            Ok(date) => Some(date),
            Err(err) => {
                self.errors
                    .push(FieldError::new(name, FieldProblem::InvalidDate, err));
                None
            }
        }
    }

    /// Parses each entry on its own. Good entries are kept in order, each bad one is reported with its index.
    fn dates(&mut self, key: Key) -> Option<Vec<CalendarValue>> {
        let (name, value) = self.get(key)?;
        let Some(items) = value.as_array() else {
            self.wrong_type(name, "an array", value);
            return None;
        };

        let mut dates = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let parsed = match item.as_str() {
                Some(string) => CalendarValue::parse(string).map_err(|err| err.to_string()),
                None => Err(format!("expected a string, got {}", type_name(item))),
            };
            match parsed {
                Ok(date) => dates.push(date),
                Err(detail) => self.errors.push(
                    FieldError::new(name, FieldProblem::InvalidDate, detail).at(index),
                ),
            }
        }
        Some(dates)
    }

    fn color<P: Platform + ?Sized>(&mut self, key: Key, platform: &P) -> Option<Color32> {
        let string = self.string(key)?;
        match platform.parse_color(string) {
            Ok(color) => Some(color),
            Err(err) => {
                self.errors
                    .push(FieldError::new(key.name, FieldProblem::InvalidColor, err));
                None
            }
        }
    }

    /// Mention keys we don't know (or that belong to the other kind of picker).
    fn log_ignored(&self, picker: &str, known: &[Key]) {
        let Some(map) = self.map else {
            return;
        };
        for name in map.keys() {
            let is_known = known
                .iter()
                .any(|key| key.spellings().any(|spelling| spelling == name.as_str()));
            if !is_known {
                log::debug!("{picker}: ignoring option `{name}`");
            }
        }
    }

    fn finish<T>(self, parsed: T) -> Result<T, Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(parsed)
        } else {
            Err(self.errors)
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ----------------------------------------------------------------------------

/// Options shared by date and time pickers. `None` means "leave the dialog's default".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommonOptions {
    /// `color`
    pub accent_color: Option<Color32>,

    /// `title`
    pub title: Option<String>,

    /// `okText`
    pub ok_text: Option<String>,

    /// `cancelText`
    pub cancel_text: Option<String>,

    /// `themeDark`
    pub theme_dark: Option<bool>,
}

impl CommonOptions {
    fn read<P: Platform + ?Sized>(raw: &mut RawOptions<'_>, platform: &P) -> Self {
        Self {
            accent_color: raw.color(COLOR, platform),
            title: raw.string(TITLE).map(ToOwned::to_owned),
            ok_text: raw.string(OK_TEXT).map(ToOwned::to_owned),
            cancel_text: raw.string(CANCEL_TEXT).map(ToOwned::to_owned),
            theme_dark: raw.bool(THEME_DARK),
        }
    }
}

/// The initial value of a picker: `initialDate` if given, otherwise now.
///
/// An invalid `initialDate` is recorded as an error, and now is returned anyway
/// so the remaining options can still be checked.
fn resolve_initial_value(raw: &mut RawOptions<'_>) -> CalendarValue {
    raw.date(INITIAL_DATE).unwrap_or_else(CalendarValue::now)
}

/// Validated options for a date picker.
#[derive(Clone, Debug, PartialEq)]
pub struct DateOptions {
    /// `initialDate`, or now.
    pub initial_date: CalendarValue,

    /// `minDate`
    pub min_date: Option<CalendarValue>,

    /// `maxDate`
    pub max_date: Option<CalendarValue>,

    /// `showYearPickerFirst`
    pub show_year_picker_first: Option<bool>,

    /// `selectableDays`
    pub selectable_days: Option<Vec<CalendarValue>>,

    /// `highlightedDays`
    pub highlighted_days: Option<Vec<CalendarValue>>,

    pub common: CommonOptions,
}

impl DateOptions {
    /// Check every option.
    ///
    /// # Errors
    /// Every rejected option (and every rejected list entry), in key order.
    pub fn parse<P: Platform + ?Sized>(
        options: &Value,
        platform: &P,
    ) -> Result<Self, Vec<FieldError>> {
        let mut raw = RawOptions::new(options);
        raw.log_ignored("DatePicker", &[COMMON_KEYS.as_slice(), DATE_KEYS.as_slice()].concat());

        let initial_date = resolve_initial_value(&mut raw);
        let common = CommonOptions::read(&mut raw, platform);
        let min_date = raw.date(MIN_DATE);
        let max_date = raw.date(MAX_DATE);
        let show_year_picker_first = raw.bool(SHOW_YEAR_PICKER_FIRST);
        let selectable_days = raw.dates(SELECTABLE_DAYS);
        let highlighted_days = raw.dates(HIGHLIGHTED_DAYS);

        if let (Some(min), Some(max)) = (min_date, max_date)
            && min.date() > max.date()
        {
            raw.errors.push(FieldError::new(
                MIN_DATE.name,
                FieldProblem::BoundsOutOfOrder,
                format!("{min} is after `maxDate` {max}"),
            ));
        }

        raw.finish(Self {
            initial_date,
            min_date,
            max_date,
            show_year_picker_first,
            selectable_days,
            highlighted_days,
            common,
        })
    }
}

/// Validated options for a time picker.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeOptions {
    /// `initialDate`, or now. Only the time of day is used.
    pub initial_time: CalendarValue,

    /// `is24HourFormat`, or the platform's preference.
    pub is_24_hour_format: bool,

    pub common: CommonOptions,
}

impl TimeOptions {
    /// Check every option.
    ///
    /// # Errors
    /// Every rejected option, in key order.
    pub fn parse<P: Platform + ?Sized>(
        options: &Value,
        platform: &P,
    ) -> Result<Self, Vec<FieldError>> {
        let mut raw = RawOptions::new(options);
        raw.log_ignored("TimePicker", &[COMMON_KEYS.as_slice(), TIME_KEYS.as_slice()].concat());

        let initial_time = resolve_initial_value(&mut raw);
        let common = CommonOptions::read(&mut raw, platform);
        let is_24_hour_format = raw
            .bool(IS_24_HOUR_FORMAT)
            .unwrap_or_else(|| platform.prefers_24_hour_format());

        raw.finish(Self {
            initial_time,
            is_24_hour_format,
            common,
        })
    }
}
