//! Which option maps to which dialog setter.
//!
//! Each entry applies one option if it is present, and reports whether it did.
//! Options that are absent never touch the dialog.

use crate::{
    CommonOptions, DateDialog, DateOptions, PickerDialog,
    options::{
        CANCEL_TEXT, COLOR, HIGHLIGHTED_DAYS, MAX_DATE, MIN_DATE, OK_TEXT, SELECTABLE_DAYS,
        SHOW_YEAR_PICKER_FIRST, THEME_DARK, TITLE,
    },
};

/// Applies one option to a dialog.
pub struct FieldApplicator<O, D: ?Sized> {
    /// The option name.
    pub field: &'static str,

    /// Returns `true` if the option was present and applied.
    pub apply: fn(&O, &mut D) -> bool,
}

/// Options every picker has.
pub const COMMON_FIELDS: &[FieldApplicator<CommonOptions, dyn PickerDialog>] = &[
    FieldApplicator {
        field: COLOR.name,
        apply: |options, dialog| {
            let Some(color) = options.accent_color else {
                return false;
            };
            dialog.set_accent_color(color);
            true
        },
    },
    FieldApplicator {
        field: TITLE.name,
        apply: |options, dialog| {
            let Some(title) = &options.title else {
                return false;
            };
            dialog.set_title(title);
            true
        },
    },
    FieldApplicator {
        field: OK_TEXT.name,
        apply: |options, dialog| {
            let Some(text) = &options.ok_text else {
                return false;
            };
            dialog.set_ok_text(text);
            true
        },
    },
    FieldApplicator {
        field: CANCEL_TEXT.name,
        apply: |options, dialog| {
            let Some(text) = &options.cancel_text else {
                return false;
            };
            dialog.set_cancel_text(text);
            true
        },
    },
    FieldApplicator {
        field: THEME_DARK.name,
        apply: |options, dialog| {
            let Some(dark) = options.theme_dark else {
                return false;
            };
            dialog.set_theme_dark(dark);
            true
        },
    },
];

/// Options only date pickers have.
pub const DATE_FIELDS: &[FieldApplicator<DateOptions, dyn DateDialog>] = &[
    FieldApplicator {
        field: MIN_DATE.name,
        apply: |options, dialog| {
            let Some(date) = options.min_date else {
                return false;
            };
            dialog.set_min_date(date);
            true
        },
    },
    FieldApplicator {
        field: MAX_DATE.name,
        apply: |options, dialog| {
            let Some(date) = options.max_date else {
                return false;
            };
            dialog.set_max_date(date);
            true
        },
    },
    FieldApplicator {
        field: SHOW_YEAR_PICKER_FIRST.name,
        apply: |options, dialog| {
            let Some(year_first) = options.show_year_picker_first else {
                return false;
            };
            dialog.show_year_picker_first(year_first);
            true
        },
    },
    FieldApplicator {
        field: SELECTABLE_DAYS.name,
        apply: |options, dialog| {
            let Some(days) = &options.selectable_days else {
                return false;
            };
            dialog.set_selectable_days(days);
            true
        },
    },
    FieldApplicator {
        field: HIGHLIGHTED_DAYS.name,
        apply: |options, dialog| {
            let Some(days) = &options.highlighted_days else {
                return false;
            };
            dialog.set_highlighted_days(days);
            true
        },
    },
];

/// Run every applicator in `fields`, returning the names of the options that were applied.
pub fn apply_fields<O, D: ?Sized>(
    fields: &[FieldApplicator<O, D>],
    options: &O,
    dialog: &mut D,
) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|field| (field.apply)(options, dialog))
        .map(|field| field.field)
        .collect()
}
