use std::cell::{Cell, RefCell};

use datetime_dialog::{
    CalendarValue, Color32, Completion, DateDialog, DateSelection, ErrorKind, FieldError,
    FieldProblem, PickerDialog, PickerError, Platform, TimeDialog, TimeSelection,
    show_date_picker, show_time_picker,
};
use serde_json::json;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    AccentColor(Color32),
    Title(String),
    OkText(String),
    CancelText(String),
    ThemeDark(bool),
    MinDate(CalendarValue),
    MaxDate(CalendarValue),
    YearPickerFirst(bool),
    SelectableDays(Vec<CalendarValue>),
    HighlightedDays(Vec<CalendarValue>),
}

#[derive(Debug)]
struct MockDateDialog {
    initial: CalendarValue,
    calls: Vec<Call>,
    on_date_set: Completion<DateSelection>,
}

impl MockDateDialog {
    /// The user presses OK without changing anything.
    fn confirm(self) {
        self.on_date_set
            .complete(DateSelection::from_date(self.initial.date()));
    }
}

impl PickerDialog for MockDateDialog {
    fn set_accent_color(&mut self, color: Color32) {
        self.calls.push(Call::AccentColor(color));
    }

    fn set_title(&mut self, title: &str) {
        self.calls.push(Call::Title(title.to_owned()));
    }

    fn set_ok_text(&mut self, text: &str) {
        self.calls.push(Call::OkText(text.to_owned()));
    }

    fn set_cancel_text(&mut self, text: &str) {
        self.calls.push(Call::CancelText(text.to_owned()));
    }

    fn set_theme_dark(&mut self, dark: bool) {
        self.calls.push(Call::ThemeDark(dark));
    }
}

impl DateDialog for MockDateDialog {
    fn set_min_date(&mut self, date: CalendarValue) {
        self.calls.push(Call::MinDate(date));
    }

    fn set_max_date(&mut self, date: CalendarValue) {
        self.calls.push(Call::MaxDate(date));
    }

    fn show_year_picker_first(&mut self, year_first: bool) {
        self.calls.push(Call::YearPickerFirst(year_first));
    }

    fn set_selectable_days(&mut self, days: &[CalendarValue]) {
        self.calls.push(Call::SelectableDays(days.to_vec()));
    }

    fn set_highlighted_days(&mut self, days: &[CalendarValue]) {
        self.calls.push(Call::HighlightedDays(days.to_vec()));
    }
}

#[derive(Debug)]
struct MockTimeDialog {
    initial: CalendarValue,
    is_24_hour_format: bool,
    calls: Vec<Call>,
    on_time_set: Completion<TimeSelection>,
}

impl MockTimeDialog {
    fn confirm(self) {
        self.on_time_set.complete(TimeSelection {
            hour_of_day: self.initial.hour(),
            minute: self.initial.minute(),
            second: self.initial.second(),
        });
    }
}

impl PickerDialog for MockTimeDialog {
    fn set_accent_color(&mut self, color: Color32) {
        self.calls.push(Call::AccentColor(color));
    }

    fn set_title(&mut self, title: &str) {
        self.calls.push(Call::Title(title.to_owned()));
    }

    fn set_ok_text(&mut self, text: &str) {
        self.calls.push(Call::OkText(text.to_owned()));
    }

    fn set_cancel_text(&mut self, text: &str) {
        self.calls.push(Call::CancelText(text.to_owned()));
    }

    fn set_theme_dark(&mut self, dark: bool) {
        self.calls.push(Call::ThemeDark(dark));
    }
}

impl TimeDialog for MockTimeDialog {}

#[derive(Default)]
struct MockPlatform {
    attached: bool,
    prefers_24_hour_format: bool,
    created: Cell<usize>,
    date_dialogs: RefCell<Vec<MockDateDialog>>,
    time_dialogs: RefCell<Vec<MockTimeDialog>>,
}

impl MockPlatform {
    fn attached() -> Self {
        Self {
            attached: true,
            ..Default::default()
        }
    }

    fn take_date_dialog(&self) -> MockDateDialog {
        let mut dialogs = self.date_dialogs.borrow_mut();
        assert_eq!(dialogs.len(), 1, "expected exactly one presented date dialog");
        dialogs.remove(0)
    }

    fn take_time_dialog(&self) -> MockTimeDialog {
        let mut dialogs = self.time_dialogs.borrow_mut();
        assert_eq!(dialogs.len(), 1, "expected exactly one presented time dialog");
        dialogs.remove(0)
    }
}

impl Platform for MockPlatform {
    type Surface = ();
    type DateDialog = MockDateDialog;
    type TimeDialog = MockTimeDialog;

    fn current_surface(&self) -> Option<()> {
        self.attached.then_some(())
    }

    fn prefers_24_hour_format(&self) -> bool {
        self.prefers_24_hour_format
    }

    fn new_date_dialog(
        &self,
        initial: CalendarValue,
        on_date_set: Completion<DateSelection>,
    ) -> MockDateDialog {
        self.created.set(self.created.get() + 1);
        MockDateDialog {
            initial,
            calls: vec![],
            on_date_set,
        }
    }

    fn new_time_dialog(
        &self,
        initial: CalendarValue,
        is_24_hour_format: bool,
        on_time_set: Completion<TimeSelection>,
    ) -> MockTimeDialog {
        self.created.set(self.created.get() + 1);
        MockTimeDialog {
            initial,
            is_24_hour_format,
            calls: vec![],
            on_time_set,
        }
    }

    fn present_date_dialog(&self, dialog: MockDateDialog, _surface: &()) {
        self.date_dialogs.borrow_mut().push(dialog);
    }

    fn present_time_dialog(&self, dialog: MockTimeDialog, _surface: &()) {
        self.time_dialogs.borrow_mut().push(dialog);
    }
}

fn date(s: &str) -> CalendarValue {
    CalendarValue::parse(s).unwrap()
}

fn error_of<T: std::fmt::Debug + Send>(
    promise: &datetime_dialog::PickerPromise<T>,
) -> PickerError {
    match promise.ready() {
        Some(Err(err)) => err.clone(),
        other => panic!("expected a settled error, got {other:?}"),
    }
}

// ----------------------------------------------------------------------------

#[test]
fn empty_options_default_to_today() {
    let platform = MockPlatform::attached();
    let before = chrono::Local::now().date_naive();
    let promise = show_date_picker(&platform, &json!({}));

    assert!(promise.ready().is_none(), "settled before the user acted");

    let dialog = platform.take_date_dialog();
    assert!(dialog.calls.is_empty(), "absent options were applied");
    dialog.confirm();

    let after = chrono::Local::now().date_naive();
    let selection = promise.block_and_take().unwrap();
    let picked = selection.to_date().unwrap();
    assert!(picked == before || picked == after, "{picked} is not today");
}

#[test]
fn null_options_are_empty_options() {
    let platform = MockPlatform::attached();
    let promise = show_date_picker(&platform, &serde_json::Value::Null);
    let dialog = platform.take_date_dialog();
    assert!(dialog.calls.is_empty());
    drop(dialog);
    assert_eq!(promise.ready(), Some(&Err(PickerError::Dismissed)));
}

#[test]
fn every_date_option_is_applied() {
    let platform = MockPlatform::attached();
    let promise = show_date_picker(
        &platform,
        &json!({
            "initialDate": "2024-03-15T08:30:00.000Z",
            "color": "#336699",
            "title": "Birthday",
            "okText": "Pick",
            "cancelText": "Never mind",
            "themeDark": true,
            "minDate": "2024-01-01T00:00:00.000Z",
            "maxDate": "2024-12-31T00:00:00.000Z",
            "showYearPickerFirst": false,
            "selectableDays": ["2024-03-15T00:00:00.000Z", "2024-03-16T00:00:00.000Z"],
            "highlightedDays": ["2024-03-20T00:00:00.000Z"],
        }),
    );

    let dialog = platform.take_date_dialog();
    assert_eq!(dialog.initial, date("2024-03-15T08:30:00.000Z"));
    assert_eq!(
        dialog.calls,
        vec![
            Call::AccentColor(Color32::from_rgb(0x33, 0x66, 0x99)),
            Call::Title("Birthday".to_owned()),
            Call::OkText("Pick".to_owned()),
            Call::CancelText("Never mind".to_owned()),
            Call::ThemeDark(true),
            Call::MinDate(date("2024-01-01T00:00:00.000Z")),
            Call::MaxDate(date("2024-12-31T00:00:00.000Z")),
            Call::YearPickerFirst(false),
            Call::SelectableDays(vec![
                date("2024-03-15T00:00:00.000Z"),
                date("2024-03-16T00:00:00.000Z"),
            ]),
            Call::HighlightedDays(vec![date("2024-03-20T00:00:00.000Z")]),
        ]
    );

    dialog.confirm();
    assert_eq!(
        promise.block_and_take(),
        Ok(DateSelection {
            year: 2024,
            month_of_year: 2,
            day_of_month: 15,
        })
    );
}

#[test]
fn only_present_options_are_applied() {
    let platform = MockPlatform::attached();
    let _promise = show_date_picker(
        &platform,
        &json!({ "title": "Only a title", "okText": null, "somethingElse": 42 }),
    );
    let dialog = platform.take_date_dialog();
    assert_eq!(dialog.calls, vec![Call::Title("Only a title".to_owned())]);
}

#[test]
fn date_is_an_alias_for_initial_date() {
    let platform = MockPlatform::attached();
    let _promise = show_date_picker(&platform, &json!({ "date": "1990-07-04T00:00:00.000Z" }));
    let dialog = platform.take_date_dialog();
    assert_eq!(dialog.initial, date("1990-07-04T00:00:00.000Z"));

    let _promise = show_date_picker(
        &platform,
        &json!({ "initialDate": null, "date": "1990-07-04T00:00:00.000Z" }),
    );
    let dialog = platform.take_date_dialog();
    assert_eq!(dialog.initial, date("1990-07-04T00:00:00.000Z"));

    let promise = show_date_picker(&platform, &json!({ "date": "July 4th" }));
    let error = error_of(&promise);
    assert_eq!(error.kind(), ErrorKind::InvalidDate);
    assert_eq!(error.field_errors()[0].field, "date");
}

#[test]
fn invalid_calendar_day_in_selectable_days() {
    let platform = MockPlatform::attached();
    let promise = show_date_picker(
        &platform,
        &json!({ "selectableDays": ["2024-02-30T00:00:00.000Z"] }),
    );

    let error = error_of(&promise);
    assert_eq!(error.code(), "E_INVALID_DATE");
    let [field_error] = error.field_errors() else {
        panic!("expected one field error, got {error:?}");
    };
    assert_eq!(field_error.field, "selectableDays");
    assert_eq!(field_error.index, Some(0));
    assert_eq!(field_error.problem, FieldProblem::InvalidDate);
    assert!(
        field_error
            .to_string()
            .starts_with("Invalid `selectableDays` at [0] param passed to DatePicker"),
        "{field_error}"
    );

    assert_eq!(platform.created.get(), 0, "a dialog was built after a parse error");
}

#[test]
fn all_errors_are_reported_in_one_settlement() {
    let platform = MockPlatform::attached();
    let promise = show_date_picker(
        &platform,
        &json!({
            "initialDate": "yesterday",
            "color": "not a color",
            "minDate": "2024-01-01",
            "selectableDays": ["2024-01-01T00:00:00.000Z", 17, "2024-01-03T00:00:00.000Z", "nope"],
            "highlightedDays": "2024-01-01T00:00:00.000Z",
        }),
    );

    let error = error_of(&promise);
    assert_eq!(error.kind(), ErrorKind::InvalidDate);

    let reported: Vec<(&str, Option<usize>)> = error
        .field_errors()
        .iter()
        .map(|FieldError { field, index, .. }| (*field, *index))
        .collect();
    assert_eq!(
        reported,
        vec![
            ("initialDate", None),
            ("color", None),
            ("minDate", None),
            ("selectableDays", Some(1)),
            ("selectableDays", Some(3)),
            ("highlightedDays", None),
        ]
    );
    assert_eq!(
        error.field_errors()[5].problem,
        FieldProblem::WrongType {
            expected: "an array"
        }
    );
    assert_eq!(platform.created.get(), 0);
}

#[test]
fn configuration_errors_without_date_errors() {
    let platform = MockPlatform::attached();

    let promise = show_date_picker(&platform, &json!({ "color": "#12345", "themeDark": "yes" }));
    let error = error_of(&promise);
    assert_eq!(error.code(), "E_INVALID_CONFIGURATION");
    assert_eq!(error.field_errors()[0].problem, FieldProblem::InvalidColor);
    assert_eq!(
        error.field_errors()[1].problem,
        FieldProblem::WrongType {
            expected: "a boolean"
        }
    );

    let promise = show_date_picker(&platform, &json!(["not", "an", "object"]));
    let error = error_of(&promise);
    assert_eq!(error.kind(), ErrorKind::InvalidConfiguration);
    assert_eq!(error.field_errors()[0].field, "options");

    assert_eq!(platform.created.get(), 0);
}

#[test]
fn min_after_max_is_rejected() {
    let platform = MockPlatform::attached();
    let promise = show_date_picker(
        &platform,
        &json!({
            "minDate": "2024-01-01T00:00:00.000Z",
            "maxDate": "2023-01-01T00:00:00.000Z",
        }),
    );
    let error = error_of(&promise);
    assert_eq!(error.kind(), ErrorKind::InvalidConfiguration);
    assert_eq!(error.field_errors()[0].field, "minDate");
    assert_eq!(
        error.field_errors()[0].problem,
        FieldProblem::BoundsOutOfOrder
    );

    // A single allowed day is fine:
    let _promise = show_date_picker(
        &platform,
        &json!({
            "minDate": "2024-01-01T00:00:00.000Z",
            "maxDate": "2024-01-01T00:00:00.000Z",
        }),
    );
    assert_eq!(platform.take_date_dialog().calls.len(), 2);

    // Bounds are whole days, so the time of day doesn't matter:
    let _promise = show_date_picker(
        &platform,
        &json!({
            "minDate": "2024-01-01T12:00:00.000Z",
            "maxDate": "2024-01-01T08:00:00.000Z",
        }),
    );
    assert_eq!(platform.take_date_dialog().calls.len(), 2);
}

#[test]
fn no_surface_settles_once() {
    let platform = MockPlatform::default();
    let promise = show_date_picker(&platform, &json!({ "title": "Nowhere" }));

    // The dialog was built, dropped unshown, and its dropped callback did not override the error:
    assert_eq!(platform.created.get(), 1);
    assert!(platform.date_dialogs.borrow().is_empty());
    assert_eq!(promise.ready(), Some(&Err(PickerError::NoPresentableSurface)));
    assert_eq!(promise.block_and_take().unwrap_err().code(), "E_NO_ACTIVITY");
}

#[test]
fn parse_errors_win_over_missing_surface() {
    let platform = MockPlatform::default();
    let promise = show_date_picker(&platform, &json!({ "maxDate": "soon" }));
    assert_eq!(error_of(&promise).kind(), ErrorKind::InvalidDate);
    assert_eq!(platform.created.get(), 0);
}

#[test]
fn dismissing_the_dialog_settles() {
    let platform = MockPlatform::attached();
    let promise = show_date_picker(&platform, &json!({}));
    drop(platform.take_date_dialog());
    assert_eq!(promise.block_and_take(), Err(PickerError::Dismissed));
}

#[test]
fn invocations_are_independent() {
    let platform = MockPlatform::attached();
    let first = show_date_picker(&platform, &json!({ "date": "2020-01-01T00:00:00.000Z" }));
    let second = show_date_picker(&platform, &json!({ "date": "2021-06-01T00:00:00.000Z" }));

    let mut dialogs = platform.date_dialogs.take();
    assert_eq!(dialogs.len(), 2);
    dialogs.remove(1).confirm();
    assert!(first.ready().is_none());
    assert_eq!(second.ready().unwrap().as_ref().unwrap().year, 2021);

    dialogs.remove(0).confirm();
    assert_eq!(first.block_and_take().unwrap().year, 2020);
}

// ----------------------------------------------------------------------------

#[test]
fn explicit_24_hour_format_beats_platform_preference() {
    let platform = MockPlatform::attached();
    let promise = show_time_picker(
        &platform,
        &json!({ "24hourFormat": true, "date": "2024-01-01T23:15:30.000Z" }),
    );

    let dialog = platform.take_time_dialog();
    assert!(dialog.is_24_hour_format);
    dialog.confirm();

    let time = promise.block_and_take().unwrap();
    assert_eq!(
        time,
        TimeSelection {
            hour_of_day: 23,
            minute: 15,
            second: 30,
        }
    );
}

#[test]
fn time_format_defaults_to_platform_preference() {
    for prefers_24_hour_format in [false, true] {
        let platform = MockPlatform {
            attached: true,
            prefers_24_hour_format,
            ..Default::default()
        };
        let _promise = show_time_picker(&platform, &json!({}));
        assert_eq!(
            platform.take_time_dialog().is_24_hour_format,
            prefers_24_hour_format
        );
    }

    let platform = MockPlatform {
        attached: true,
        prefers_24_hour_format: true,
        ..Default::default()
    };
    let _promise = show_time_picker(&platform, &json!({ "is24HourFormat": false }));
    assert!(!platform.take_time_dialog().is_24_hour_format);
}

#[test]
fn time_picker_applies_common_options_only() {
    let platform = MockPlatform::attached();
    let _promise = show_time_picker(
        &platform,
        &json!({
            "color": "purple",
            "title": "Wake up",
            "themeDark": false,
            "minDate": "not even a date",
            "showYearPickerFirst": true,
        }),
    );
    let dialog = platform.take_time_dialog();
    assert_eq!(
        dialog.calls,
        vec![
            Call::AccentColor(Color32::from_rgb(0x80, 0, 0x80)),
            Call::Title("Wake up".to_owned()),
            Call::ThemeDark(false),
        ]
    );
}

#[test]
fn time_picker_errors() {
    let platform = MockPlatform::attached();

    let promise = show_time_picker(
        &platform,
        &json!({ "initialDate": "2024-01-01T25:00:00.000Z", "24hourFormat": 1 }),
    );
    let error = error_of(&promise);
    assert_eq!(error.kind(), ErrorKind::InvalidDate);
    assert_eq!(error.field_errors().len(), 2);
    assert_eq!(error.field_errors()[1].field, "24hourFormat");

    let platform = MockPlatform::default();
    let promise = show_time_picker(&platform, &json!({}));
    assert_eq!(error_of(&promise), PickerError::NoPresentableSurface);
}
