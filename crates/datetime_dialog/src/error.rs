use std::fmt;

/// Error code for [`PickerError::InvalidDate`].
pub const ERROR_INVALID_DATE: &str = "E_INVALID_DATE";

/// Error code for [`PickerError::InvalidConfiguration`].
pub const ERROR_INVALID_CONFIGURATION: &str = "E_INVALID_CONFIGURATION";

/// Error code for [`PickerError::NoPresentableSurface`].
pub const ERROR_NO_ACTIVITY: &str = "E_NO_ACTIVITY";

/// Error code for [`PickerError::Dismissed`].
pub const ERROR_DISMISSED: &str = "E_DISMISSED";

/// What was wrong with a single option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldProblem {
    /// Not a `yyyy-MM-ddTHH:mm:ss.SSSZ` string, or not a real date.
    InvalidDate,

    /// Not a color the platform understands.
    InvalidColor,

    /// The option had the wrong type, e.g. a number where a string was expected.
    WrongType { expected: &'static str },

    /// `minDate` is after `maxDate`.
    BoundsOutOfOrder,
}

/// One rejected option, or one rejected entry of a list option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// The option name, e.g. `"minDate"`.
    pub field: &'static str,

    /// Set for entries of list options like `selectableDays`.
    pub index: Option<usize>,

    pub problem: FieldProblem,

    /// Details from the underlying parser.
    pub detail: String,
}

impl FieldError {
    pub(crate) fn new(field: &'static str, problem: FieldProblem, detail: impl ToString) -> Self {
        Self {
            field,
            index: None,
            problem,
            detail: detail.to_string(),
        }
    }

    pub(crate) fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            field,
            index,
            problem: _,
            detail,
        } = self;
        match index {
            Some(index) => write!(f, "Invalid `{field}` at [{index}] param passed to DatePicker")?,
            None => write!(f, "Invalid `{field}` param passed to DatePicker")?,
        }
        if !detail.is_empty() {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

/// The category of a [`PickerError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidDate,
    InvalidConfiguration,
    NoPresentableSurface,
    Dismissed,
}

impl ErrorKind {
    /// The stable string code reported to callers, e.g. `"E_INVALID_DATE"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidDate => ERROR_INVALID_DATE,
            Self::InvalidConfiguration => ERROR_INVALID_CONFIGURATION,
            Self::NoPresentableSurface => ERROR_NO_ACTIVITY,
            Self::Dismissed => ERROR_DISMISSED,
        }
    }
}

/// Why a picker invocation failed.
///
/// Every invocation settles with at most one of these.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// At least one date option could not be parsed.
    /// Holds every rejected option, not just the date ones.
    #[error("{}", join_lines(.0))]
    InvalidDate(Vec<FieldError>),

    /// The options were malformed in some other way (types, colors, bounds).
    #[error("{}", join_lines(.0))]
    InvalidConfiguration(Vec<FieldError>),

    /// There was nowhere to show the dialog.
    #[error("No Activity currently attached")]
    NoPresentableSurface,

    /// The dialog went away without the user picking anything.
    #[error("The dialog was dismissed without a selection")]
    Dismissed,
}

impl PickerError {
    /// Pick the error kind that best describes a non-empty set of rejected options.
    pub(crate) fn from_field_errors(errors: Vec<FieldError>) -> Self {
        if errors
            .iter()
            .any(|error| error.problem == FieldProblem::InvalidDate)
        {
            Self::InvalidDate(errors)
        } else {
            Self::InvalidConfiguration(errors)
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDate(_) => ErrorKind::InvalidDate,
            Self::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            Self::NoPresentableSurface => ErrorKind::NoPresentableSurface,
            Self::Dismissed => ErrorKind::Dismissed,
        }
    }

    /// Shorthand for `self.kind().code()`.
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// The rejected options, if this is an option error.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::InvalidDate(errors) | Self::InvalidConfiguration(errors) => errors,
            Self::NoPresentableSurface | Self::Dismissed => &[],
        }
    }
}

fn join_lines(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
