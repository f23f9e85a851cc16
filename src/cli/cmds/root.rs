use anyhow::Context;

use crate::base;
use crate::cli;

/// Personal finance ledger
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Add(cli::cmds::add::Add),
    Rm(cli::cmds::rm::Rm),
    View(cli::cmds::view::View),
    Sum(cli::cmds::sum::Sum),
    Plot(cli::cmds::plot::Plot),
    Export(cli::cmds::export::Export),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let store = base::Store::load(fs.slot::<base::Journal>()).with_context(|| {
            format!("failed to read '{}'", fs.path::<base::Journal>().display())
        })?;
        let ledger = base::Ledger::from_config(store, &config);

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Add(cmd) => cmd.run(ledger, &config, fs),
            Commands::Rm(cmd) => cmd.run(ledger, fs),
            Commands::View(cmd) => cmd.run(&ledger, &config),
            Commands::Sum(cmd) => cmd.run(&ledger, &config),
            Commands::Plot(cmd) => cmd.run(&ledger, &config),
            Commands::Export(cmd) => cmd.run(&ledger),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::cli::testing;

    #[rstest]
    #[case(&["", "add", "Coffee", "3.50"])]
    #[case(&["", "rm", "1"])]
    #[case(&["", "view"])]
    #[case(&["", "sum"])]
    #[case(&["", "plot"])]
    #[case(&["", "export", "all"])]
    fn test_error_if_not_a_repo(#[case] args: &[&str]) {
        let (fs, _td) = testing::tempfs();
        let root = match <Root as clap::Parser>::try_parse_from(args) {
            Ok(cmd) => cmd,
            Err(e) => panic!("{}", e),
        };
        let res = root.run(&fs);
        assert!(matches!(res, Err(ref e) if e.to_string() == "not a repository"))
    }

    #[test]
    fn test_unreadable_ledger_starts_empty() {
        let (fs, _td) = testing::tempfs();
        fs.write(&base::Config::default()).unwrap();
        std::fs::write(fs.path::<base::Journal>(), "{not json").unwrap();
        let root = <Root as clap::Parser>::try_parse_from(["", "view", "all"]).unwrap();
        assert_eq!(root.run(&fs).unwrap().to_string(), "No transactions.\n");
    }
}
