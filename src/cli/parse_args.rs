use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn cli() -> Command {
    Command::new("stalmarck_sat")
        .about("Determines whether a formula is satisfiable, by Stålmarck's method")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("path")
                .required(true)
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("The DIMACS form CNF file to check, or '-' for stdin."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Communicate details of the solve; repeat for more."),
        )
        .arg(
            Arg::new("dilemma")
                .short('d')
                .long("dilemma")
                .action(ArgAction::SetTrue)
                .help("Apply the dilemma rule before case splits.")
                .long_help(
                    "Apply the dilemma rule before case splits.

Both values of each open atom are propagated and rolled back, and whatever
held on both branches is committed.
The verdict is unchanged; formulas hard for plain case splitting may be
settled with (far) fewer splits.",
                ),
        )
}
