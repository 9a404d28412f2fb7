use std::sync::Arc;

use datetime_dialog::{CalendarValue, Completion, DateSelection, Platform, TimeSelection};
use egui::{Context, Id};
use parking_lot::Mutex;

use crate::{EguiDateDialog, EguiTimeDialog};

/// Settings for a [`DialogHost`].
#[derive(Clone, Debug, PartialEq)]
pub struct DialogHostOptions {
    /// Used for time pickers that don't say `is24HourFormat`.
    ///
    /// Default: `false`.
    pub prefers_24_hour_format: bool,

    /// Confirm button label, unless `okText` is given. Default: `"OK"`.
    pub default_ok_text: String,

    /// Cancel button label, unless `cancelText` is given. Default: `"Cancel"`.
    pub default_cancel_text: String,

    /// How many years before and after the selection the year list shows,
    /// unless `minDate`/`maxDate` narrow it. Default: 100.
    pub year_span: i32,
}

impl Default for DialogHostOptions {
    fn default() -> Self {
        Self {
            prefers_24_hour_format: false,
            default_ok_text: "OK".to_owned(),
            default_cancel_text: "Cancel".to_owned(),
            year_span: 100,
        }
    }
}

enum OpenDialog {
    Date(EguiDateDialog),
    Time(EguiTimeDialog),
}

impl OpenDialog {
    /// Returns `false` once the dialog is done.
    fn show(&mut self, ctx: &Context) -> bool {
        match self {
            Self::Date(dialog) => dialog.show(ctx),
            Self::Time(dialog) => dialog.show(ctx),
        }
    }
}

#[derive(Default)]
struct HostState {
    options: DialogHostOptions,

    /// Set while the app is running and can show dialogs.
    surface: Option<Context>,

    dialogs: Vec<OpenDialog>,
    next_id: u64,
}

/// Shows picker dialogs inside an egui app.
///
/// Pass it to [`datetime_dialog::show_date_picker`] and [`datetime_dialog::show_time_picker`],
/// and call [`Self::show`] once per frame:
///
/// ```no_run
/// # let ctx = egui::Context::default();
/// let host = egui_datetime_dialog::DialogHost::default();
/// host.attach(&ctx);
///
/// let promise = datetime_dialog::show_date_picker(&host, &serde_json::json!({ "title": "Pick a day" }));
///
/// // Every frame:
/// host.show(&ctx);
/// if let Some(result) = promise.ready() {
///     // …
/// }
/// ```
///
/// Cloning gives another handle to the same host.
#[derive(Clone, Default)]
pub struct DialogHost {
    state: Arc<Mutex<HostState>>,
}

impl DialogHost {
    pub fn new(options: DialogHostOptions) -> Self {
        Self {
            state: Arc::new(Mutex::new(HostState {
                options,
                ..Default::default()
            })),
        }
    }

    pub fn options(&self) -> DialogHostOptions {
        self.state.lock().options.clone()
    }

    /// From now on dialogs are shown on `ctx`.
    pub fn attach(&self, ctx: &Context) {
        self.state.lock().surface = Some(ctx.clone());
    }

    /// Nothing can be shown anymore.
    ///
    /// Every open dialog is closed, and its picker settles as dismissed.
    pub fn detach(&self) {
        let dialogs = {
            let mut state = self.state.lock();
            state.surface = None;
            std::mem::take(&mut state.dialogs)
        };
        if !dialogs.is_empty() {
            log::debug!("Detached with {} open dialog(s)", dialogs.len());
        }
        drop(dialogs); // outside the lock
    }

    pub fn is_attached(&self) -> bool {
        self.state.lock().surface.is_some()
    }

    /// How many dialogs are waiting for the user.
    pub fn open_dialogs(&self) -> usize {
        self.state.lock().dialogs.len()
    }

    /// Show all open dialogs. Call this once per frame.
    pub fn show(&self, ctx: &Context) {
        // Dialogs settle their pickers while shown, so don't hold the lock meanwhile.
        let mut dialogs = std::mem::take(&mut self.state.lock().dialogs);
        dialogs.retain_mut(|dialog| dialog.show(ctx));

        let mut state = self.state.lock();
        dialogs.append(&mut state.dialogs);
        state.dialogs = dialogs;
    }

    fn next_id(&self) -> (Id, DialogHostOptions) {
        let mut state = self.state.lock();
        state.next_id += 1;
        let id = Id::new(("datetime_dialog", state.next_id));
        (id, state.options.clone())
    }

    fn open(&self, dialog: OpenDialog, surface: &Context) {
        self.state.lock().dialogs.push(dialog);
        surface.request_repaint();
    }
}

impl Platform for DialogHost {
    type Surface = Context;
    type DateDialog = EguiDateDialog;
    type TimeDialog = EguiTimeDialog;

    fn current_surface(&self) -> Option<Context> {
        self.state.lock().surface.clone()
    }

    fn prefers_24_hour_format(&self) -> bool {
        self.state.lock().options.prefers_24_hour_format
    }

    fn new_date_dialog(
        &self,
        initial: CalendarValue,
        on_date_set: Completion<DateSelection>,
    ) -> EguiDateDialog {
        let (id, options) = self.next_id();
        EguiDateDialog::new(id, initial.date(), &options, on_date_set)
    }

    fn new_time_dialog(
        &self,
        initial: CalendarValue,
        is_24_hour_format: bool,
        on_time_set: Completion<TimeSelection>,
    ) -> EguiTimeDialog {
        let (id, options) = self.next_id();
        let initial = TimeSelection {
            hour_of_day: initial.hour(),
            minute: initial.minute(),
            second: initial.second(),
        };
        EguiTimeDialog::new(id, initial, is_24_hour_format, &options, on_time_set)
    }

    fn present_date_dialog(&self, dialog: EguiDateDialog, surface: &Context) {
        self.open(OpenDialog::Date(dialog), surface);
    }

    fn present_time_dialog(&self, dialog: EguiTimeDialog, surface: &Context) {
        self.open(OpenDialog::Time(dialog), surface);
    }
}
