use serde_json::Value;

use crate::{
    DateOptions, DateSelection, FieldError, PickerError, PickerPromise, Platform, ResultBridge,
    TimeOptions, TimeSelection,
    fields::{COMMON_FIELDS, DATE_FIELDS, apply_fields},
};

/// Show a date picker.
///
/// All options are validated before anything is shown.
/// If any are rejected the returned promise is already settled with
/// [`PickerError::InvalidDate`] or [`PickerError::InvalidConfiguration`] listing all of them,
/// and no dialog is created.
///
/// Otherwise a dialog is created, configured and handed to the platform.
/// The promise then settles when the user confirms, or with [`PickerError::Dismissed`]
/// if the dialog goes away without a selection.
/// If there is no surface to show the dialog on, it settles with [`PickerError::NoPresentableSurface`].
///
/// The promise settles exactly once.
pub fn show_date_picker<P: Platform + ?Sized>(
    platform: &P,
    options: &Value,
) -> PickerPromise<DateSelection> {
    let (bridge, promise) = ResultBridge::new();

    let options = match DateOptions::parse(options, platform) {
        Ok(options) => options,
        Err(errors) => {
            reject_options(&bridge, "DatePicker", errors);
            return promise;
        }
    };

    let mut dialog = platform.new_date_dialog(options.initial_date, bridge.completion());
    let mut applied = apply_fields(COMMON_FIELDS, &options.common, &mut dialog);
    applied.extend(apply_fields(DATE_FIELDS, &options, &mut dialog));
    log::debug!(
        "DatePicker: initial date {}, options {applied:?}",
        options.initial_date
    );

    if let Some(surface) = platform.current_surface() {
        platform.present_date_dialog(dialog, &surface);
    } else {
        no_surface(&bridge, "DatePicker");
        drop(dialog);
    }

    promise
}

/// Show a time picker.
///
/// Works like [`show_date_picker`]. Only the time of day of `initialDate` is used,
/// and `is24HourFormat` falls back to [`Platform::prefers_24_hour_format`].
pub fn show_time_picker<P: Platform + ?Sized>(
    platform: &P,
    options: &Value,
) -> PickerPromise<TimeSelection> {
    let (bridge, promise) = ResultBridge::new();

    let options = match TimeOptions::parse(options, platform) {
        Ok(options) => options,
        Err(errors) => {
            reject_options(&bridge, "TimePicker", errors);
            return promise;
        }
    };

    let mut dialog = platform.new_time_dialog(
        options.initial_time,
        options.is_24_hour_format,
        bridge.completion(),
    );
    let applied = apply_fields(COMMON_FIELDS, &options.common, &mut dialog);
    log::debug!(
        "TimePicker: initial time {}, 24 hour format: {}, options {applied:?}",
        options.initial_time,
        options.is_24_hour_format
    );

    if let Some(surface) = platform.current_surface() {
        platform.present_time_dialog(dialog, &surface);
    } else {
        no_surface(&bridge, "TimePicker");
        drop(dialog);
    }

    promise
}

fn reject_options<T: Send + 'static>(
    bridge: &ResultBridge<T>,
    picker: &str,
    errors: Vec<FieldError>,
) {
    let error = PickerError::from_field_errors(errors);
    log::warn!("{picker} rejected ({}): {error}", error.code());
    bridge.settle(Err(error));
}

fn no_surface<T: Send + 'static>(bridge: &ResultBridge<T>, picker: &str) {
    log::warn!("{picker}: nothing to show the dialog on");
    bridge.settle(Err(PickerError::NoPresentableSurface));
}
