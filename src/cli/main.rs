use std::{io::BufReader, path::PathBuf};

use stalmarck_sat::{config::Config, context::Context, reports::Report};

mod parse_args;

fn main() {
    env_logger::init();

    let matches = match parse_args::cli().try_get_matches() {
        Ok(matches) => matches,

        // Help and version are routed through clap as errors, though are not errors here.
        Err(e) => {
            use clap::error::ErrorKind::{DisplayHelp, DisplayVersion};
            let code = match e.kind() {
                DisplayHelp | DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let verbosity = matches.get_count("verbose");

    let mut config = Config::default();
    if matches.get_flag("dilemma") {
        config.dilemma.value = true;
    }

    println!("c stalmarck_sat {}", env!("CARGO_PKG_VERSION"));

    let mut ctx = Context::from_config(config);

    let path = match matches.get_one::<PathBuf>("path") {
        Some(path) => path.clone(),
        None => {
            eprintln!("c A path to a CNF file is required");
            std::process::exit(1);
        }
    };

    let parse_result = if path.as_os_str() == "-" {
        ctx.read_dimacs(std::io::stdin().lock())
    } else {
        let file = match std::fs::File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("c Failed to open {}: {e}", path.display());
                std::process::exit(1);
            }
        };

        match path.extension() {
            Some(extension) if extension == "xz" => {
                ctx.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(file)))
            }
            _ => ctx.read_dimacs(BufReader::new(file)),
        }
    };

    let info = match parse_result {
        Ok(info) => info,
        Err(e) => {
            eprintln!("c Error parsing {}: {e:?}", path.display());
            std::process::exit(1);
        }
    };

    if verbosity > 0 {
        println!(
            "c Parsed {} clauses over {} atoms",
            info.added_clauses, info.added_atoms
        );
        if let (Some(clauses), Some(atoms)) = (info.expected_clauses, info.expected_atoms) {
            if clauses != info.added_clauses || atoms != info.added_atoms {
                println!("c The problem specification declared {clauses} clauses over {atoms} atoms");
            }
        }
    }

    let report = match ctx.solve() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("c Error during solve: {e:?}");
            std::process::exit(1);
        }
    };

    if verbosity > 0 {
        println!(
            "c {} sweeps, {} propagations, {} case splits, {} dilemma commits",
            ctx.counters.sweeps,
            ctx.counters.propagations,
            ctx.counters.branches,
            ctx.counters.dilemma_commits
        );
    }

    match report {
        Report::Satisfiable => {
            if verbosity > 0 {
                println!("v {}", ctx.valuation_string());
            }
            println!("s SATISFIABLE");
            std::process::exit(10);
        }

        Report::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            std::process::exit(20);
        }

        Report::Unknown => {
            println!("s UNKNOWN");
            std::process::exit(1);
        }
    };
}
