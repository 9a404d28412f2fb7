use datetime_dialog::{Color32, Completion, PickerDialog, TimeDialog, TimeSelection};
use egui::{Context, DragValue, Id, Ui};

use crate::{
    DialogHostOptions,
    chrome::{Chrome, DialogAction},
};

/// A time picker shown as an egui modal.
///
/// Created through [`crate::DialogHost`].
#[derive(Debug)]
pub struct EguiTimeDialog {
    id: Id,
    chrome: Chrome,
    picker: TimePicker,
    on_time_set: Option<Completion<TimeSelection>>,
}

impl EguiTimeDialog {
    pub(crate) fn new(
        id: Id,
        initial: TimeSelection,
        is_24_hour_format: bool,
        options: &DialogHostOptions,
        on_time_set: Completion<TimeSelection>,
    ) -> Self {
        Self {
            id,
            chrome: Chrome::new(options),
            picker: TimePicker {
                time: initial,
                is_24_hour_format,
            },
            on_time_set: Some(on_time_set),
        }
    }

    /// The currently selected time.
    pub fn selection(&self) -> TimeSelection {
        self.picker.time
    }

    pub fn is_24_hour_format(&self) -> bool {
        self.picker.is_24_hour_format
    }

    /// Show the dialog. Returns `false` once it is done and should be dropped.
    pub(crate) fn show(&mut self, ctx: &Context) -> bool {
        let Self {
            id,
            chrome,
            picker,
            on_time_set,
        } = self;

        match chrome.show(ctx, *id, |ui| picker.ui(ui)) {
            DialogAction::None => true,
            DialogAction::Confirm => {
                if let Some(on_time_set) = on_time_set.take() {
                    on_time_set.complete(picker.time);
                }
                false
            }
            DialogAction::Cancel => false,
        }
    }
}

impl PickerDialog for EguiTimeDialog {
    fn set_accent_color(&mut self, color: Color32) {
        self.chrome.accent_color = Some(color);
    }

    fn set_title(&mut self, title: &str) {
        self.chrome.title = Some(title.to_owned());
    }

    fn set_ok_text(&mut self, text: &str) {
        text.clone_into(&mut self.chrome.ok_text);
    }

    fn set_cancel_text(&mut self, text: &str) {
        text.clone_into(&mut self.chrome.cancel_text);
    }

    fn set_theme_dark(&mut self, dark: bool) {
        self.chrome.theme_dark = Some(dark);
    }
}

impl TimeDialog for EguiTimeDialog {}

// ----------------------------------------------------------------------------

#[derive(Debug)]
struct TimePicker {
    /// Always on the 24 hour clock, whatever is shown.
    time: TimeSelection,
    is_24_hour_format: bool,
}

impl TimePicker {
    /// A time can always be confirmed.
    fn ui(&mut self, ui: &mut Ui) -> bool {
        let is_24_hour_format = self.is_24_hour_format;
        let TimeSelection {
            hour_of_day,
            minute,
            second,
        } = &mut self.time;

        ui.horizontal(|ui| {
            let mut twelve_hour = (!is_24_hour_format).then(|| to_12_hour(*hour_of_day));

            match &mut twelve_hour {
                None => ui.add(DragValue::new(&mut *hour_of_day).range(0..=23)),
                Some((hour, _)) => ui.add(DragValue::new(hour).range(1..=12)),
            };
            ui.label(":");
            ui.add(DragValue::new(&mut *minute).range(0..=59));
            ui.label(":");
            ui.add(DragValue::new(&mut *second).range(0..=59));

            if let Some((hour, pm)) = &mut twelve_hour {
                ui.selectable_value(pm, false, "AM");
                ui.selectable_value(pm, true, "PM");
                *hour_of_day = from_12_hour(*hour, *pm);
            }
        });

        true
    }
}

/// `(1..=12, is_pm)`
fn to_12_hour(hour_of_day: u32) -> (u32, bool) {
    let hour = match hour_of_day % 12 {
        0 => 12,
        hour => hour,
    };
    (hour, hour_of_day >= 12)
}

/// `0..=23`
fn from_12_hour(hour: u32, pm: bool) -> u32 {
    hour % 12 + if pm { 12 } else { 0 }
}
