use chrono::NaiveDate;

/// The date a user confirmed in a date picker.
///
/// Serializes as `{"year", "monthOfYear", "dayOfMonth"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateSelection {
    pub year: i32,

    /// Starts at 0 for January.
    pub month_of_year: u32,

    /// Starts at 1.
    pub day_of_month: u32,
}

impl DateSelection {
    pub fn from_date(date: NaiveDate) -> Self {
        use chrono::Datelike as _;
        Self {
            year: date.year(),
            month_of_year: date.month0(),
            day_of_month: date.day(),
        }
    }

    /// `None` if the fields don't form a real date.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month_of_year.checked_add(1)?, self.day_of_month)
    }
}

/// The time a user confirmed in a time picker.
///
/// Serializes as `{"hourOfDay", "minute", "second"}`.
/// The hour is always on the 24 hour clock, also when the picker showed a 12 hour clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSelection {
    /// `0..=23`
    pub hour_of_day: u32,

    /// `0..=59`
    pub minute: u32,

    /// `0..=59`
    pub second: u32,
}

#[test]
fn test_payload_keys() {
    let date = DateSelection::from_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    assert_eq!(
        serde_json::to_value(date).unwrap(),
        serde_json::json!({ "year": 2024, "monthOfYear": 0, "dayOfMonth": 31 })
    );
    assert_eq!(date.to_date(), NaiveDate::from_ymd_opt(2024, 1, 31));

    let time = TimeSelection {
        hour_of_day: 23,
        minute: 5,
        second: 0,
    };
    assert_eq!(
        serde_json::to_value(time).unwrap(),
        serde_json::json!({ "hourOfDay": 23, "minute": 5, "second": 0 })
    );
}
