//! Date and time picker dialogs for [`egui`](https://github.com/emilk/egui).
//!
//! [`DialogHost`] implements [`datetime_dialog::Platform`]: hand it to
//! [`datetime_dialog::show_date_picker`] or [`datetime_dialog::show_time_picker`]
//! and the dialogs show up as modals the next time you call [`DialogHost::show`].
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod calendar;
mod chrome;
mod date;
mod host;
mod time;

pub use crate::{
    date::EguiDateDialog,
    host::{DialogHost, DialogHostOptions},
    time::EguiTimeDialog,
};
