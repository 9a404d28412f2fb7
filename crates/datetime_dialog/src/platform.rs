//! The traits a dialog implementation and its host provide.

use ecolor::Color32;

use crate::{CalendarValue, Completion, DateSelection, ParseColorError, TimeSelection};

/// Settings shared by date and time dialogs.
///
/// Each setter is only called when the corresponding option was given.
/// An implementation should keep its own defaults for everything else.
pub trait PickerDialog {
    fn set_accent_color(&mut self, color: Color32);

    fn set_title(&mut self, title: &str);

    /// Label of the confirm button.
    fn set_ok_text(&mut self, text: &str);

    /// Label of the cancel button.
    fn set_cancel_text(&mut self, text: &str);

    fn set_theme_dark(&mut self, dark: bool);
}

/// A date picker dialog.
///
/// Created with an initial date and a [`Completion`] it must call when the user confirms.
pub trait DateDialog: PickerDialog {
    /// Earliest selectable day (inclusive).
    fn set_min_date(&mut self, date: CalendarValue);

    /// Latest selectable day (inclusive).
    fn set_max_date(&mut self, date: CalendarValue);

    /// Open on the year list instead of the month grid.
    fn show_year_picker_first(&mut self, year_first: bool);

    /// Only these days can be picked.
    fn set_selectable_days(&mut self, days: &[CalendarValue]);

    /// These days are drawn emphasized.
    fn set_highlighted_days(&mut self, days: &[CalendarValue]);
}

/// A time picker dialog.
///
/// Whether it shows a 24 hour clock is decided when it is created.
pub trait TimeDialog: PickerDialog {}

/// Creates dialogs, and knows where (and whether) they can be shown.
pub trait Platform {
    /// Whatever a dialog needs to be shown on, e.g. a window.
    type Surface;

    type DateDialog: DateDialog + 'static;

    type TimeDialog: TimeDialog + 'static;

    /// The surface to show a dialog on right now, if any.
    fn current_surface(&self) -> Option<Self::Surface>;

    /// Does the user prefer a 24 hour clock?
    fn prefers_24_hour_format(&self) -> bool;

    /// Parse a color string from the options.
    ///
    /// # Errors
    /// If the platform doesn't understand the color.
    fn parse_color(&self, color: &str) -> Result<Color32, ParseColorError> {
        crate::parse_color(color)
    }

    fn new_date_dialog(
        &self,
        initial: CalendarValue,
        on_date_set: Completion<DateSelection>,
    ) -> Self::DateDialog;

    fn new_time_dialog(
        &self,
        initial: CalendarValue,
        is_24_hour_format: bool,
        on_time_set: Completion<TimeSelection>,
    ) -> Self::TimeDialog;

    /// Show the dialog. The platform owns it from here on.
    fn present_date_dialog(&self, dialog: Self::DateDialog, surface: &Self::Surface);

    /// Show the dialog. The platform owns it from here on.
    fn present_time_dialog(&self, dialog: Self::TimeDialog, surface: &Self::Surface);
}
