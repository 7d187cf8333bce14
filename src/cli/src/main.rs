use std::collections::HashMap;
use std::process::ExitCode;

use clap::Command;

pub mod cmd;

#[tokio::main]
async fn main() -> ExitCode {
    libschemadiff::util::logging::init_logging();

    let cmds: Vec<Box<dyn cmd::RunCmd>> = vec![Box::new(cmd::CompareCmd), Box::new(cmd::SchemaCmd)];

    let mut command = Command::new("schemadiff")
        .version(libschemadiff::constants::SCHEMADIFF_VERSION)
        .about("Compare the column schemas of related columnar datasets")
        .subcommand_required(true)
        .arg_required_else_help(true);

    // Add all the commands to the command line
    let mut runners: HashMap<String, Box<dyn cmd::RunCmd>> = HashMap::new();
    for cmd in cmds {
        command = command.subcommand(cmd.args());
        runners.insert(cmd.name().to_string(), cmd);
    }

    // Parse the command line args and run the appropriate command
    let matches = command.get_matches();
    match matches.subcommand() {
        Some((command, args)) => {
            // Lookup command in runners and run on args
            if let Some(runner) = runners.get(command) {
                match runner.run(args).await {
                    Ok(_) => {}
                    Err(err) => {
                        eprintln!("{err}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                eprintln!("Unknown command `schemadiff {command}`");
                return ExitCode::FAILURE;
            }
        }
        _ => unreachable!(), // subcommand_required makes a missing subcommand unreachable
    }

    ExitCode::SUCCESS
}
