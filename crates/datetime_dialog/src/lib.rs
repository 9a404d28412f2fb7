//! Show date and time picker dialogs from a declarative options object.
//!
//! You hand [`show_date_picker`] or [`show_time_picker`] a [`Platform`] (something that can make
//! and show dialogs) and a JSON options object such as
//!
//! ```json
//! { "initialDate": "2024-05-17T00:00:00.000Z", "minDate": "2024-01-01T00:00:00.000Z", "okText": "Pick" }
//! ```
//!
//! and get back a [`PickerPromise`] that settles exactly once: with the user's selection,
//! or with a [`PickerError`].
//!
//! All dates are strings of the form `yyyy-MM-ddTHH:mm:ss.SSSZ` (see [`DATE_TIME_FORMAT`]).
//!
//! ## Options
//! | key | type | picker |
//! |---|---|---|
//! | `initialDate` (or `date`) | date string | both |
//! | `color` | `#RRGGBB`, `#AARRGGBB` or a color name | both |
//! | `title`, `okText`, `cancelText` | string | both |
//! | `themeDark` | bool | both |
//! | `minDate`, `maxDate` | date string | date |
//! | `selectableDays`, `highlightedDays` | array of date strings | date |
//! | `showYearPickerFirst` | bool | date |
//! | `is24HourFormat` (or `24hourFormat`) | bool | time |
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod bridge;
mod color;
mod date_time;
mod error;
pub mod fields;
mod options;
mod picker;
mod platform;
mod selection;

pub use ecolor::Color32;

pub use crate::{
    bridge::{Completion, PickerPromise, ResultBridge},
    color::{ParseColorError, parse_color},
    date_time::{CalendarValue, DATE_TIME_FORMAT, DateTimeParseError},
    error::{
        ERROR_DISMISSED, ERROR_INVALID_CONFIGURATION, ERROR_INVALID_DATE, ERROR_NO_ACTIVITY,
        ErrorKind, FieldError, FieldProblem, PickerError,
    },
    options::{CommonOptions, DateOptions, TimeOptions},
    picker::{show_date_picker, show_time_picker},
    platform::{DateDialog, PickerDialog, Platform, TimeDialog},
    selection::{DateSelection, TimeSelection},
};
