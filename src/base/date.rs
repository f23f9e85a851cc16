/// A date type without time or timezone information. Values are guaranteed to
/// be between `0000-01-01` and `9999-12-31`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(into = "String", try_from = "&str")]
pub struct Date(time::Date);

impl Date {
    /// 0000-01-01
    pub const MIN: Self = Self(time::macros::date!(0000 - 01 - 01));

    /// 9999-12-31
    pub const MAX: Self = Self(time::macros::date!(9999 - 12 - 31));

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> time::Month {
        self.0.month()
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    fn new(inner: time::Date) -> Option<Self> {
        let dt = Self(inner);
        if dt >= Self::MIN && dt <= Self::MAX {
            Some(dt)
        } else {
            None
        }
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .and_then(Self::new)
    }

    /// Returns the local date, falling back to UTC if the local offset cannot
    /// be determined.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self(now.date())
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self::from_ymd(2015, 3, 30).expect("'today' for tests should be valid")
    }

    /// Offsets the date by a number of days, returning `None` if the resultant
    /// date is out of bounds.
    pub fn shift_days(self, offset: i64) -> Option<Self> {
        const SECONDS_PER_DAY: i64 = 86_400;
        let seconds = offset.checked_mul(SECONDS_PER_DAY)?;
        self.0
            .checked_add(time::Duration::seconds(seconds))
            .and_then(Self::new)
    }
}

impl std::fmt::Display for Date {
    /// Formats as ISO 8601, `yyyy-mm-dd`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = format!(
            "{:04}-{:02}-{:02}",
            self.year(),
            u8::from(self.month()),
            self.day()
        );
        f.pad(&s)
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("input is not in the format yyyy-mm-dd")]
    BadFormat,
    #[error("date does not exist")]
    Nonexistent,
    #[error("date is before 0000-01-01 or after 9999-12-31")]
    OutOfRange,
    #[error("first character is not one of {{d, D}}")]
    InvalidFirstChar,
    #[error(transparent)]
    InvalidOffset(#[from] std::num::ParseIntError),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a string to a date. Inputs must be in one of the following formats:
    /// - `yyyy-mm-dd`
    /// - `dn` or `Dn`, meaning `n` days from today, where `n` is an optional
    ///   integer
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        if s.as_bytes()[0].is_ascii_digit() {
            let parts = s.split('-').collect::<Vec<_>>();
            let [y, m, d] = parts.as_slice() else {
                return Err(Self::Err::BadFormat);
            };
            if [y, m, d]
                .iter()
                .any(|x| x.is_empty() || !x.bytes().all(|b| b.is_ascii_digit()))
            {
                return Err(Self::Err::BadFormat);
            }
            let year = y.parse::<i32>().map_err(|_| Self::Err::OutOfRange)?;
            if !(0..=9999).contains(&year) {
                return Err(Self::Err::OutOfRange);
            }
            let month = m.parse::<u8>().map_err(|_| Self::Err::Nonexistent)?;
            let day = d.parse::<u8>().map_err(|_| Self::Err::Nonexistent)?;
            return Self::from_ymd(year, month, day).ok_or(Self::Err::Nonexistent);
        }

        let (first, rest) = s.split_at(s.chars().next().map_or(0, char::len_utf8));
        if !matches!(first, "d" | "D") {
            return Err(Self::Err::InvalidFirstChar);
        }
        let offset = if rest.is_empty() {
            0
        } else {
            rest.parse::<i64>()?
        };
        Self::today()
            .shift_days(offset)
            .ok_or(Self::Err::OutOfRange)
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
