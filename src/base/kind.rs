/// Direction of a transaction. Amounts are stored unsigned; the kind alone
/// decides whether a transaction adds to or subtracts from the balance.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Kind {
    #[serde(rename = "income")]
    #[strum(serialize = "income")]
    Income,
    #[serde(rename = "expense")]
    #[strum(serialize = "expense")]
    VariableExpense,
    #[serde(rename = "fixed")]
    #[strum(serialize = "fixed")]
    FixedExpense,
}

impl Kind {
    pub const ALL: [Self; 3] = [Self::Income, Self::VariableExpense, Self::FixedExpense];

    /// Human-readable name for report headings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::VariableExpense => "Variable",
            Self::FixedExpense => "Fixed",
        }
    }

    pub fn is_expense(self) -> bool {
        !matches!(self, Self::Income)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("income", Kind::Income)]
    #[case("Income", Kind::Income)]
    #[case("expense", Kind::VariableExpense)]
    #[case("FIXED", Kind::FixedExpense)]
    fn test_from_str(#[case] s: &str, #[case] want: Kind) {
        assert_eq!(s.parse::<Kind>().unwrap(), want)
    }

    #[rstest]
    #[case("")]
    #[case("variable")]
    #[case("fixedexpense")]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Kind>().is_err())
    }

    #[rstest]
    #[case(Kind::Income, r#""income""#)]
    #[case(Kind::VariableExpense, r#""expense""#)]
    #[case(Kind::FixedExpense, r#""fixed""#)]
    fn test_serde(#[case] kind: Kind, #[case] s: &str) {
        assert_eq!(serde_json::to_string(&kind).unwrap(), s);
        assert_eq!(serde_json::from_str::<Kind>(s).unwrap(), kind);
        assert_eq!(format!("\"{}\"", kind), s);
    }
}
