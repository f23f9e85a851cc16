use crate::base;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Set of calendar months, irrespective of year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MonthSet(u16);

impl MonthSet {
    pub const EMPTY: Self = Self(0);

    fn bit(month: time::Month) -> u16 {
        1 << (u8::from(month) - 1)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn contains(self, month: time::Month) -> bool {
        self.0 & Self::bit(month) != 0
    }

    pub fn insert(&mut self, month: time::Month) {
        self.0 |= Self::bit(month)
    }

    /// Months in calendar order.
    pub fn iter(self) -> impl Iterator<Item = time::Month> {
        (1..=12)
            .filter_map(|m| time::Month::try_from(m).ok())
            .filter(move |&m| self.contains(m))
    }
}

impl FromIterator<time::Month> for MonthSet {
    fn from_iter<T: IntoIterator<Item = time::Month>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for m in iter {
            set.insert(m);
        }
        set
    }
}

/// Which transactions a view covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Every transaction.
    All,
    /// Transactions in any of the months, in any year. An empty set selects
    /// every transaction, same as [`Period::All`].
    Months(MonthSet),
    /// Transactions in one month of one year.
    MonthYear { month: time::Month, year: i32 },
}

impl Period {
    pub fn month(month: time::Month) -> Self {
        Self::Months(MonthSet::from_iter([month]))
    }

    /// Validates a month number (1 to 12) and a year (0 to 9999).
    pub fn month_year(month: u8, year: i32) -> Result<Self, ParseError> {
        let month = time::Month::try_from(month).map_err(|_| ParseError::InvalidMonth(month.to_string()))?;
        if !(0..=9999).contains(&year) {
            return Err(ParseError::InvalidYear);
        }
        Ok(Self::MonthYear { month, year })
    }

    pub fn contains(&self, date: base::Date) -> bool {
        match *self {
            Self::All => true,
            Self::Months(set) => set.is_empty() || set.contains(date.month()),
            Self::MonthYear { month, year } => date.month() == month && date.year() == year,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::All => f.write_str("all"),
            Self::Months(set) if set.is_empty() => f.write_str("all"),
            Self::Months(set) => {
                let names = set
                    .iter()
                    .map(|m| &MONTH_NAMES[usize::from(u8::from(m)) - 1][..3])
                    .collect::<Vec<_>>();
                f.write_str(&names.join(","))
            }
            Self::MonthYear { month, year } => write!(f, "{:04}-{:02}", year, u8::from(month)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("invalid month '{0}'")]
    InvalidMonth(String),
    #[error("year is not between 0 and 9999")]
    InvalidYear,
    #[error(transparent)]
    InvalidOffset(#[from] std::num::ParseIntError),
}

/// Parses a month number (`1`..`12`) or an English month name, abbreviated
/// to at least three letters.
fn parse_month(s: &str) -> Result<time::Month, ParseError> {
    let token = s.trim().to_ascii_lowercase();
    let invalid = || ParseError::InvalidMonth(s.trim().to_string());
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        let n = token.parse::<u8>().map_err(|_| invalid())?;
        return time::Month::try_from(n).map_err(|_| invalid());
    }
    if token.len() < 3 {
        return Err(invalid());
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.starts_with(token.as_str()))
        .and_then(|i| time::Month::try_from(i as u8 + 1).ok())
        .ok_or_else(invalid)
}

impl std::str::FromStr for Period {
    type Err = ParseError;

    /// Accepts one of:
    /// - `all`
    /// - `mn`: the month `n` months from the current one, `n` defaulting to 0
    /// - `yyyy-mm`: one month of one year
    /// - a comma-separated list of months, by number or name, in any year
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        if let Some(offset) = s.strip_prefix(['m', 'M']).filter(|rest| {
            rest.is_empty() || rest.starts_with(['+', '-']) || rest.bytes().all(|b| b.is_ascii_digit())
        }) {
            let offset = if offset.is_empty() {
                0
            } else {
                offset.parse::<i32>()?
            };
            let today = base::Date::today();
            let index = (today.year() * 12 + i32::from(u8::from(today.month())) - 1)
                .checked_add(offset)
                .ok_or(ParseError::InvalidYear)?;
            let year = index.div_euclid(12);
            let month = (index.rem_euclid(12) + 1) as u8;
            return Self::month_year(month, year);
        }
        if let Some((y, m)) = s.split_once('-') {
            if !y.is_empty() && y.bytes().all(|b| b.is_ascii_digit()) {
                let year = y.parse::<i32>().map_err(|_| ParseError::InvalidYear)?;
                let month = parse_month(m)?;
                return Self::month_year(u8::from(month), year);
            }
        }
        s.split(',')
            .map(parse_month)
            .collect::<Result<MonthSet, _>>()
            .map(Self::Months)
    }
}

impl TryFrom<&str> for Period {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
