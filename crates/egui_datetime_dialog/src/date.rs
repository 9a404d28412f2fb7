use std::collections::BTreeSet;

use chrono::{Datelike as _, NaiveDate};
use datetime_dialog::{
    CalendarValue, Color32, Completion, DateDialog, DateSelection, PickerDialog,
};
use egui::{Align, Button, Context, Grid, Id, Layout, RichText, ScrollArea, Ui, vec2};

use crate::{
    DialogHostOptions,
    calendar::{
        WEEKDAY_NAMES, last_day_of_month, month_name, month_weeks, next_month, previous_month,
    },
    chrome::{Chrome, DialogAction},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    Calendar,
    Years,
}

/// A date picker shown as an egui modal.
///
/// Created through [`crate::DialogHost`].
#[derive(Debug)]
pub struct EguiDateDialog {
    id: Id,
    chrome: Chrome,
    picker: DatePicker,
    on_date_set: Option<Completion<DateSelection>>,
}

impl EguiDateDialog {
    pub(crate) fn new(
        id: Id,
        initial: NaiveDate,
        options: &DialogHostOptions,
        on_date_set: Completion<DateSelection>,
    ) -> Self {
        Self {
            id,
            chrome: Chrome::new(options),
            picker: DatePicker::new(initial, options.year_span),
            on_date_set: Some(on_date_set),
        }
    }

    /// The currently selected day.
    pub fn selection(&self) -> NaiveDate {
        self.picker.selection
    }

    /// Show the dialog. Returns `false` once it is done and should be dropped.
    pub(crate) fn show(&mut self, ctx: &Context) -> bool {
        let Self {
            id,
            chrome,
            picker,
            on_date_set,
        } = self;

        match chrome.show(ctx, *id, |ui| picker.ui(ui)) {
            DialogAction::None => true,
            DialogAction::Confirm => {
                if let Some(on_date_set) = on_date_set.take() {
                    on_date_set.complete(DateSelection::from_date(picker.selection));
                }
                false
            }
            DialogAction::Cancel => false,
        }
    }
}

impl PickerDialog for EguiDateDialog {
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

impl DateDialog for EguiDateDialog {
    fn set_min_date(&mut self, date: CalendarValue) {
        self.picker.min = Some(date.date());
    }

    fn set_max_date(&mut self, date: CalendarValue) {
        self.picker.max = Some(date.date());
    }

    fn show_year_picker_first(&mut self, year_first: bool) {
        self.picker.view = if year_first {
            View::Years
        } else {
            View::Calendar
        };
    }

    fn set_selectable_days(&mut self, days: &[CalendarValue]) {
        self.picker.selectable = Some(days.iter().map(CalendarValue::date).collect());
    }

    fn set_highlighted_days(&mut self, days: &[CalendarValue]) {
        self.picker.highlighted = days.iter().map(CalendarValue::date).collect();
    }
}

// ----------------------------------------------------------------------------

#[derive(Debug)]
struct DatePicker {
    selection: NaiveDate,

    /// The month on screen, 1-based.
    shown_month: (i32, u32),

    view: View,
    scroll_to_year: bool,
    year_span: i32,

    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    selectable: Option<BTreeSet<NaiveDate>>,
    highlighted: BTreeSet<NaiveDate>,

    /// Bounds are set after construction, so the selection is fixed up on first show.
    settled_initial: bool,
}

impl DatePicker {
    fn new(initial: NaiveDate, year_span: i32) -> Self {
        Self {
            selection: initial,
            shown_month: (initial.year(), initial.month()),
            view: View::Calendar,
            scroll_to_year: true,
            year_span,
            min: None,
            max: None,
            selectable: None,
            highlighted: BTreeSet::new(),
            settled_initial: false,
        }
    }

    fn is_selectable(&self, day: NaiveDate) -> bool {
        self.min.is_none_or(|min| min <= day)
            && self.max.is_none_or(|max| day <= max)
            && self
                .selectable
                .as_ref()
                .is_none_or(|selectable| selectable.contains(&day))
    }

    /// Move `day` into the allowed range, and onto an allowed day if there is a list of them.
    fn nearest_selectable(&self, day: NaiveDate) -> NaiveDate {
        let mut day = day;
        if let Some(min) = self.min {
            day = day.max(min);
        }
        if let Some(max) = self.max {
            day = day.min(max);
        }
        if let Some(selectable) = &self.selectable {
            let allowed = |candidate: &&NaiveDate| self.is_selectable(**candidate);
            if let Some(candidate) = selectable
                .range(day..)
                .find(allowed)
                .or_else(|| selectable.range(..day).rev().find(allowed))
            {
                day = *candidate;
            }
        }
        day
    }

    fn years(&self) -> std::ops::RangeInclusive<i32> {
        let year = self.selection.year();
        let first = self
            .min
            .map_or(year.saturating_sub(self.year_span), |min| min.year());
        let last = self
            .max
            .map_or(year.saturating_add(self.year_span), |max| max.year());
        first..=last
    }

    fn select_year(&mut self, year: i32) {
        let month = self.selection.month();
        let day = self.selection.day().min(last_day_of_month(year, month));
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            self.selection = self.nearest_selectable(date);
            self.shown_month = (self.selection.year(), self.selection.month());
        }
    }

    /// Returns whether the selection may be confirmed.
    fn ui(&mut self, ui: &mut Ui) -> bool {
        if !self.settled_initial {
            self.selection = self.nearest_selectable(self.selection);
            self.shown_month = (self.selection.year(), self.selection.month());
            self.settled_initial = true;
        }

        self.header_ui(ui);

        match self.view {
            View::Calendar => self.calendar_ui(ui),
            View::Years => self.years_ui(ui),
        }

        self.is_selectable(self.selection)
    }

    fn header_ui(&mut self, ui: &mut Ui) {
        let (year, month) = self.shown_month;
        ui.horizontal(|ui| {
            let year_button = ui
                .selectable_label(self.view == View::Years, year.to_string())
                .on_hover_text("Pick a year");
            if year_button.clicked() {
                self.view = match self.view {
                    View::Calendar => View::Years,
                    View::Years => View::Calendar,
                };
                self.scroll_to_year = true;
            }

            if self.view == View::Calendar {
                ui.label(month_name(month));

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let (next_year, next) = next_month(year, month);
                    let can_go_forward = self
                        .max
                        .is_none_or(|max| (next_year, next) <= (max.year(), max.month()));
                    if ui
                        .add_enabled(can_go_forward, Button::new(">"))
                        .on_hover_text("Next month")
                        .clicked()
                    {
                        self.shown_month = (next_year, next);
                    }

                    let (previous_year, previous) = previous_month(year, month);
                    let can_go_back = self
                        .min
                        .is_none_or(|min| (previous_year, previous) >= (min.year(), min.month()));
                    if ui
                        .add_enabled(can_go_back, Button::new("<"))
                        .on_hover_text("Previous month")
                        .clicked()
                    {
                        self.shown_month = (previous_year, previous);
                    }
                });
            }
        });
    }

    fn calendar_ui(&mut self, ui: &mut Ui) {
        let (year, month) = self.shown_month;
        let today = chrono::Local::now().date_naive();

        Grid::new("datetime_dialog_calendar")
            .num_columns(7)
            .spacing(vec2(2.0, 2.0))
            .show(ui, |ui| {
                for name in WEEKDAY_NAMES {
                    ui.label(RichText::new(name).weak());
                }
                ui.end_row();

                for week in month_weeks(year, month) {
                    for day in week {
                        if let Some(day) = day {
                            self.day_ui(ui, day, today);
                        } else {
                            ui.label("");
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn day_ui(&mut self, ui: &mut Ui, day: NaiveDate, today: NaiveDate) {
        let selected = day == self.selection;

        let mut text = RichText::new(day.day().to_string());
        if self.highlighted.contains(&day) {
            text = text.strong().underline();
            if !selected {
                text = text.color(ui.visuals().selection.bg_fill);
            }
        }

        let mut button = Button::new(text).min_size(vec2(28.0, 22.0));
        if selected {
            button = button.fill(ui.visuals().selection.bg_fill);
        }

        let response = ui.add_enabled(self.is_selectable(day), button);

        if day == today {
            // Encircle today's date
            let stroke = ui.visuals().widgets.inactive.fg_stroke;
            ui.painter()
                .circle_stroke(response.rect.center(), 10.0, stroke);
        }

        if response.clicked() {
            self.selection = day;
        }
    }

    fn years_ui(&mut self, ui: &mut Ui) {
        let shown_year = self.shown_month.0;
        let mut picked = None;

        ScrollArea::vertical()
            .max_height(180.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                ui.with_layout(Layout::top_down_justified(Align::Center), |ui| {
                    for year in self.years() {
                        let response = ui.selectable_label(year == shown_year, year.to_string());
                        if year == shown_year && self.scroll_to_year {
                            response.scroll_to_me(Some(Align::Center));
                        }
                        if response.clicked() {
                            picked = Some(year);
                        }
                    }
                });
            });
        self.scroll_to_year = false;

        if let Some(year) = picked {
            self.select_year(year);
            self.view = View::Calendar;
        }
    }
}
