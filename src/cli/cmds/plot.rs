use crate::base;
use crate::cli;

/// Plot transaction totals by kind
#[derive(clap::Parser)]
pub struct Plot {
    #[arg(
        default_value = "m",
        help = cli::sharedopts::PERIOD_HELP,
        long_help = cli::sharedopts::PERIOD_HELP_LONG,
    )]
    period: base::Period,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,
}

impl Plot {
    pub fn run(
        &self,
        ledger: &base::Ledger<base::FileSlot>,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let view = ledger.view(&self.period, &self.categories_opts.categories);
        if view.is_empty() {
            return Ok(cli::Output::Str("No transactions.".to_string()));
        }
        Ok(cli::Output::Barchart(cli::render::barchart::Config {
            charset: cli::util::charset_from_config(config),
            term_width: terminal_size::terminal_size()
                .map(|(w, _)| w.0)
                .unwrap_or_default() as usize,
            summary: view.summary,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    cli::testing::generate_testcases![
        (
            empty,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "plot", "all"],
                    res: cli::testing::ResultMatcher::OkStrGlob("no transactions."),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}"),
            }
        ),
        (
            scenario,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "plot", "all"],
                    res: cli::testing::ResultMatcher::OkRenderedGlob(
                        "income   |+* 5,000.00\nvariable |-* 300.00\nfixed    |-* 1,500.00\n"
                    ),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}").with_journal(
                    r#"[
                        {"id":1,"description":"Salary","amount":500000,"kind":"income","date":"2024-01-05"},
                        {"id":2,"description":"Rent","amount":150000,"kind":"fixed","date":"2024-01-01"},
                        {"id":3,"description":"Groceries","amount":30000,"kind":"expense","date":"2024-02-10"}
                    ]"#
                ),
            }
        ),
    ];
}
