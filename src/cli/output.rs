use crate::cli::render;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    Listing(render::listing::Config),
    Totals(render::totals::Config),
    Barchart(render::barchart::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Listing(config) => {
                if config.is_empty() {
                    writeln!(f, "No transactions.")
                } else {
                    write!(f, "{}", config)
                }
            }
            Output::Totals(config) => write!(f, "{}", config),
            Output::Barchart(config) => write!(f, "{}", config.to_barchart()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::base;

    #[rstest]
    #[case(Output::Str("asdf".into()), "asdf\n")]
    #[case(Output::Str("asdf\n".into()), "asdf\n")]
    #[case(
        Output::Listing(render::listing::Config {
            charset: base::Charset::default(),
            transactions: Vec::new(),
            summary: Some(base::Summary::default()),
        }),
        "No transactions.\n"
    )]
    fn test_to_string(#[case] output: Output, #[case] want: &str) {
        assert_eq!(output.to_string(), want)
    }
}
