use stalmarck_sat::{config::Config, context::Context, reports::Report, types::err};

fn context_of(dimacs: &str) -> Context {
    let mut ctx = Context::from_config(Config::default());
    ctx.read_dimacs(dimacs.as_bytes()).expect("parse failure");
    ctx
}

fn report_of(dimacs: &str) -> Report {
    context_of(dimacs).solve().expect("solve failure")
}

#[test]
fn commented_satisfiable() {
    let dimacs = "
c The example formula of many a DIMACS description.
p cnf 4 3
 1  3 -4 0
 4 0
 2 -3 0
";

    assert_eq!(report_of(dimacs), Report::Satisfiable);
}

#[test]
fn all_polarities_unsatisfiable() {
    let dimacs = "
p cnf 2 4
 1  2 0
 1 -2 0
-1  2 0
-1 -2 0
";

    assert_eq!(report_of(dimacs), Report::Unsatisfiable);
}

#[test]
fn unit_chain_satisfiable() {
    let dimacs = "
p cnf 3 3
 1 0
-1  2 0
-2  3 0
";

    let mut ctx = context_of(dimacs);
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    assert_eq!(ctx.valuation_string(), "1 2 3");
}

#[test]
fn percent_terminated() {
    let dimacs = "
p cnf 2 2
 1  2 0
-1  2 0
%
0
";

    assert_eq!(report_of(dimacs), Report::Satisfiable);
}

#[test]
fn empty_input_satisfiable() {
    assert_eq!(report_of(""), Report::Satisfiable);
}

#[test]
fn missing_header_tolerated() {
    let dimacs = "
 1  2 0
-1 0
";

    let mut ctx = Context::from_config(Config::default());
    let info = ctx.read_dimacs(dimacs.as_bytes()).expect("parse failure");

    assert_eq!(info.expected_atoms, None);
    assert_eq!(info.added_atoms, 2);
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    assert_eq!(ctx.value_of(2), Some(true));
}

#[test]
fn oversized_literal_rejected() {
    let dimacs = "
p cnf 2 1
1 2 3 0
";

    let mut ctx = Context::from_config(Config::default());
    assert_eq!(
        ctx.read_dimacs(dimacs.as_bytes()),
        Err(err::ErrorKind::Parse(err::ParseError::OversizedLiteral(2)))
    );
}

#[test]
fn pigeons_in_dimacs() {
    // Three pigeons, two holes, with the dilemma rule settling the splits.
    let dimacs = "
c PHP 3 2
p cnf 6 9
 1  2 0
 3  4 0
 5  6 0
-1 -3 0
-1 -5 0
-3 -5 0
-2 -4 0
-2 -6 0
-4 -6 0
";

    let mut config = Config::default();
    config.dilemma.value = true;

    let mut ctx = Context::from_config(config);
    ctx.read_dimacs(dimacs.as_bytes()).expect("parse failure");

    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
}
