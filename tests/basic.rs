use stalmarck_sat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{clause::CClause, literal::Literal},
};

fn clause_of(literals: &[i32]) -> CClause {
    literals.iter().map(|l| l.canonical()).collect()
}

fn context_over(clauses: &[&[i32]], dilemma: bool) -> Context {
    let mut config = Config::default();
    config.dilemma.value = dilemma;

    let mut ctx = Context::from_config(config);
    for clause in clauses {
        assert!(ctx.add_clause(clause_of(clause)).is_ok());
    }
    ctx
}

/// The verdict on the clauses, checked to be the same with and without the dilemma rule.
fn verdict(clauses: &[&[i32]]) -> Report {
    let mut plain = context_over(clauses, false);
    let plain_report = plain.solve().expect("solve failure");

    let mut dilemma = context_over(clauses, true);
    let dilemma_report = dilemma.solve().expect("solve failure");

    assert_eq!(plain_report, dilemma_report);

    if plain_report == Report::Satisfiable {
        assert!(plain.is_satisfying_assignment());
        assert!(dilemma.is_satisfying_assignment());
    }

    plain_report
}

mod boundary {
    use super::*;

    #[test]
    fn empty_formula() {
        assert_eq!(verdict(&[]), Report::Satisfiable);
    }

    #[test]
    fn one_literal() {
        let mut ctx = context_over(&[&[-3]], false);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(3), Some(false));
    }

    #[test]
    fn contradictory_units() {
        assert_eq!(verdict(&[&[1], &[-1]]), Report::Unsatisfiable);
    }

    #[test]
    fn empty_clause() {
        assert_eq!(verdict(&[&[1, 2], &[]]), Report::Unsatisfiable);
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn excluded_middle() {
        assert_eq!(verdict(&[&[1, -1]]), Report::Satisfiable);
    }

    #[test]
    fn chained_implications() {
        assert_eq!(verdict(&[&[1, 2], &[-1, 3]]), Report::Satisfiable);
    }

    #[test]
    fn crossed_pairs() {
        assert_eq!(
            verdict(&[&[1, 2], &[3, 4], &[-1, -3], &[-2, -4]]),
            Report::Satisfiable
        );
    }

    #[test]
    fn triangle() {
        let mut ctx = context_over(&[&[1, 2], &[-1, 3], &[-2, -3], &[-1, -2]], false);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.is_satisfying_assignment());
    }

    #[test]
    fn full_square() {
        assert_eq!(
            verdict(&[&[1, 2], &[1, -2], &[-1, 2], &[-1, -2]]),
            Report::Unsatisfiable
        );

        let mut ctx = context_over(&[&[1, 2], &[1, -2], &[-1, 2], &[-1, -2]], false);
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.assignment.has_contradiction());
    }

    #[test]
    fn forced_chain() {
        let mut clauses: Vec<Vec<i32>> = (1..=19).map(|i| vec![i, i + 1]).collect();
        clauses.push(vec![-1]);
        clauses.push(vec![-10]);
        clauses.push(vec![20]);
        let borrowed: Vec<&[i32]> = clauses.iter().map(|c| c.as_slice()).collect();

        let mut ctx = context_over(&borrowed, false);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(1), Some(false));
        assert_eq!(ctx.value_of(2), Some(true));
        assert_eq!(ctx.value_of(10), Some(false));
        assert_eq!(ctx.value_of(11), Some(true));
        assert_eq!(ctx.value_of(20), Some(true));
        assert!(ctx.is_satisfying_assignment());
    }

    #[test]
    fn hole_too_small() {
        // Three pigeons, two holes.
        let clauses: &[&[i32]] = &[
            &[1, 2],
            &[3, 4],
            &[5, 6],
            &[-1, -3],
            &[-1, -5],
            &[-3, -5],
            &[-2, -4],
            &[-2, -6],
            &[-4, -6],
        ];

        assert_eq!(verdict(clauses), Report::Unsatisfiable);
    }
}

mod laws {
    use super::*;

    #[test]
    fn repeated_clause_indifference() {
        let once: &[&[i32]] = &[&[1, 2], &[-1, 3], &[-3]];
        let twice: &[&[i32]] = &[&[1, 2], &[-1, 3], &[-3], &[-1, 3]];

        assert_eq!(verdict(once), verdict(twice));
    }

    #[test]
    fn tautological_clause_indifference() {
        let without: &[&[i32]] = &[&[1, 2], &[-1, -2]];
        let with: &[&[i32]] = &[&[1, 2], &[2, -2], &[-1, -2]];

        assert_eq!(verdict(without), verdict(with));

        let unsat_without: &[&[i32]] = &[&[1], &[-1]];
        let unsat_with: &[&[i32]] = &[&[1], &[3, -3], &[-1]];

        assert_eq!(verdict(unsat_without), verdict(unsat_with));
    }

    #[test]
    fn duplicate_literal_indifference() {
        assert_eq!(verdict(&[&[1, 1, 2]]), Report::Satisfiable);
        assert_eq!(
            verdict(&[&[1, 1], &[-1, -1]]),
            Report::Unsatisfiable
        );
    }

    #[test]
    fn deterministic_valuation() {
        let clauses: &[&[i32]] = &[&[1, 2, 3], &[-2, 4], &[-1, -3]];

        let mut first = context_over(clauses, false);
        assert_eq!(first.solve(), Ok(Report::Satisfiable));

        let mut second = context_over(clauses, false);
        assert_eq!(second.solve(), Ok(Report::Satisfiable));

        assert_eq!(first.valuation_string(), second.valuation_string());
    }
}
