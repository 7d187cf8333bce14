use async_trait::async_trait;
use clap::{arg, Arg, Command};

use libschemadiff::command;
use libschemadiff::error::SchemaDiffError;

use crate::cmd::RunCmd;
pub const NAME: &str = "schema";
pub struct SchemaCmd;

#[async_trait]
impl RunCmd for SchemaCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        // Setups the CLI args for the command
        Command::new(NAME)
            .about("Show the columns and type descriptors read from a single file.")
            .arg(arg!(<PATH> "Path of the parquet, arrow, csv or tsv file."))
            .arg(
                Arg::new("flatten")
                    .long("flatten")
                    .help("Print the schema as name:dtype pairs on one line")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), SchemaDiffError> {
        let Some(path) = args.get_one::<String>("PATH") else {
            return Err(SchemaDiffError::basic_str(
                "Must supply a path of the file you want to inspect.",
            ));
        };

        let schema = command::schema(path)?;
        if args.get_flag("flatten") {
            let pairs: Vec<String> = schema
                .fields
                .iter()
                .map(|f| format!("{}:{}", f.name, f.dtype))
                .collect();
            println!("{}", pairs.join(","));
        } else {
            println!("{schema}");
        }

        Ok(())
    }
}
