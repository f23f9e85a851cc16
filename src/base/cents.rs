/// Integral representation of monetary quantities up to two decimal places.
///
/// All ledger arithmetic happens on this type so that totals never drift the
/// way binary floating point would.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Self = Self(0);

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Adds, clamping at the bounds of `i64` instead of overflowing.
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Subtracts, clamping at the bounds of `i64` instead of overflowing.
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl std::fmt::Display for Cents {
    /// Formats with two decimal places and thousands separators. Negative
    /// quantities are wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut digits = self.0.unsigned_abs();
        let mut bytes = Vec::<u8>::with_capacity(32);
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (digits % 10) as u8);
                digits /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b'.');
        pop_digit!();
        let mut i = 1;
        while digits > 0 {
            if i % 3 == 0 {
                bytes.push(b',');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        if self.is_negative() {
            bytes.insert(0, b'(');
            bytes.push(b')');
        }
        let s = std::str::from_utf8(&bytes).expect("all chars should be ascii");
        f.pad(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("input is not a number")]
    NotANumber,
    #[error("input is too large")]
    OutOfRange,
    #[error("input has more than two decimal places")]
    TooPrecise,
}

impl std::str::FromStr for Cents {
    type Err = ParseError;

    /// Parses a cents quantity from a human-readable string, which may contain
    /// comma thousands separators. Decimal places beyond the second must be
    /// zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace(',', "");
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s.as_str())),
        };
        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(ParseError::Empty);
        }
        let is_digits = |x: &str| x.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(whole) || !is_digits(frac) {
            return Err(ParseError::NotANumber);
        }

        let (frac, excess) = frac.split_at(frac.len().min(2));
        if excess.bytes().any(|b| b != b'0') {
            return Err(ParseError::TooPrecise);
        }
        let mut frac = frac.to_string();
        while frac.len() < 2 {
            frac.push('0');
        }
        let whole = if whole.is_empty() {
            0
        } else {
            whole.parse::<i64>().map_err(|_| ParseError::OutOfRange)?
        };
        let frac = frac.parse::<i64>().map_err(|_| ParseError::NotANumber)?;
        let cents = whole
            .checked_mul(100)
            .and_then(|x| x.checked_add(frac))
            .ok_or(ParseError::OutOfRange)?;
        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl TryFrom<&str> for Cents {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
