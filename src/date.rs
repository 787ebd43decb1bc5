use core::fmt;

/// Just a date
///
/// Three integers and nothing more.  No range is enforced: `Date { day: 42,
/// month: -3, year: 0 }` is as valid as any other value, and the fields can
/// be reassigned freely.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl Date {
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Date { day, month, year }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::civil::Date> for Date {
    fn from(date: jiff::civil::Date) -> Self {
        Date {
            day: i32::from(date.day()),
            month: i32::from(date.month()),
            year: i32::from(date.year()),
        }
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Date {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Date {
            day: date.day() as i32,
            month: date.month() as i32,
            year: date.year(),
        }
    }
}
