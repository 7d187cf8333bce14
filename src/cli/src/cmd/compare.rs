use async_trait::async_trait;
use clap::{Arg, Command};
use colored::Colorize;
use std::path::PathBuf;

use libschemadiff::command;
use libschemadiff::error::SchemaDiffError;
use libschemadiff::opts::CompareOpts;

use crate::cmd::RunCmd;
pub const NAME: &str = "compare";
pub struct CompareCmd;

#[async_trait]
impl RunCmd for CompareCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        // Setups the CLI args for the command
        Command::new(NAME)
            .about("Compare the schemas of several datasets and write a field by field report. Defaults to the January 2019 yellow, green and fhv taxi trip files.")
            .arg(
                Arg::new("config")
                    .long("config")
                    .short('c')
                    .help("Path to a toml file listing the [[sources]] to compare.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("source")
                    .long("source")
                    .short('s')
                    .help("A source to compare in the form name=path/to/file.parquet. Repeat for every source, replaces the configured sources.")
                    .action(clap::ArgAction::Append),
            )
            .arg(
                Arg::new("label")
                    .long("label")
                    .short('l')
                    .help("Display label for a source in the form name=Label.")
                    .action(clap::ArgAction::Append),
            )
            .arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .help("Where to write the report. Defaults to schema_comparison.txt")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("title")
                    .long("title")
                    .help("Title printed at the top of the report.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("json")
                    .long("json")
                    .help("Print the summary as json instead of text.")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), SchemaDiffError> {
        // Parse Args
        let opts = CompareCmd::parse_args(args);
        let config = opts.to_config()?;

        let result = command::compare(&config)?;
        let summary = result.report.summary();

        if args.get_flag("json") {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        println!(
            "Schema comparison saved to: {}",
            result.output.display().to_string().green()
        );
        println!("\nQuick Summary:");
        for line in summary.quick_summary_lines() {
            println!("  {line}");
        }

        if !result.report.has_differences() {
            println!("\n{}", "Schemas are identical.".green());
        }

        Ok(())
    }
}

impl CompareCmd {
    pub fn parse_args(args: &clap::ArgMatches) -> CompareOpts {
        let sources: Vec<String> = match args.get_many::<String>("source") {
            Some(values) => values.cloned().collect(),
            None => Vec::new(),
        };

        let labels: Vec<String> = match args.get_many::<String>("label") {
            Some(values) => values.cloned().collect(),
            None => Vec::new(),
        };

        CompareOpts {
            config: args.get_one::<String>("config").map(PathBuf::from),
            sources,
            labels,
            output: args.get_one::<String>("output").map(PathBuf::from),
            title: args.get_one::<String>("title").cloned(),
        }
    }
}
