use std::fmt::Display;

/// Error returned when a calendar is requested for a month that does not
/// exist in the supported date range.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InvalidMonth {
    pub year: i32,
    pub month: u32,
}

impl Display for InvalidMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no such month: {:04}-{:02}", self.year, self.month)
    }
}

impl std::error::Error for InvalidMonth {}
