use crate::{
    context::Context,
    structures::{
        clause::CClause,
        literal::{IntLiteral, Literal},
    },
    types::err::{self, ParseError},
};

use std::io::BufRead;

/// Details of a parse, against which the problem specification may be checked.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms declared in the problem specification, if a specification was read.
    pub expected_atoms: Option<usize>,

    /// The count of clauses declared in the problem specification, if a specification was read.
    pub expected_clauses: Option<usize>,

    /// The count of atoms observed.
    pub added_atoms: usize,

    /// The count of clauses added.
    pub added_clauses: usize,
}

impl Context {
    /// Reads a DIMACS representation of a formula into the context.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// A `p cnf <atoms> <clauses>` specification is checked when present, though is not
    /// required --- without one the count of variables derives from the literals observed.
    /// Comment lines, clauses spanning multiple lines, and a terminating `%` are all
    /// tolerated.
    ///
    /// ```rust
    /// # use stalmarck_sat::config::Config;
    /// # use stalmarck_sat::context::Context;
    /// # use std::io::Write;
    /// let mut ctx = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c Every variable, every polarity.
    /// p cnf 2 4
    ///  1  2 0
    ///  1 -2 0
    /// -1  2 0
    /// -1 -2 0
    /// ");
    ///
    /// assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut buffer = String::default();
        let mut clause_buffer: CClause = Vec::default();
        let mut info = ParserInfo::default();

        let mut lines = 0;

        // First phase, read until the formula begins.
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'preamble_loop,
                Ok(1) if buffer.starts_with('\n') => {
                    buffer.clear();
                    continue 'preamble_loop;
                }
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
            }

            match buffer.chars().next() {
                Some('c') => {
                    buffer.clear();
                    continue 'preamble_loop;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace().skip(1);

                    match problem_details.next() {
                        Some("cnf") => {}
                        _ => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                    }

                    let atoms: usize = match problem_details.next().map(|s| s.parse()) {
                        Some(Ok(count)) => count,
                        _ => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                    };

                    let clauses: usize = match problem_details.next().map(|s| s.parse()) {
                        Some(Ok(count)) => count,
                        _ => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                    };

                    buffer.clear();

                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                _ => break 'preamble_loop,
            }
        }

        // Second phase, read until the formula ends.
        // The line is advanced at the end of the loop, as the preamble has already set up a
        // relevant line.
        'formula_loop: loop {
            match buffer.chars().next() {
                None | Some('%') => break 'formula_loop,

                Some('c') => {}

                Some('p') => {
                    return Err(err::ErrorKind::from(ParseError::MisplacedProblem(lines)));
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let clause = std::mem::take(&mut clause_buffer);
                                info.added_clauses += 1;
                                self.add_clause(clause)?;
                            }

                            _ => {
                                let literal = match item.parse::<IntLiteral>() {
                                    Ok(0) | Err(_) => {
                                        return Err(err::ErrorKind::from(
                                            ParseError::UnreadableLiteral(lines),
                                        ))
                                    }
                                    Ok(int) => int.canonical(),
                                };

                                if let Some(limit) = info.expected_atoms {
                                    if literal.atom() as usize > limit {
                                        return Err(err::ErrorKind::from(
                                            ParseError::OversizedLiteral(lines),
                                        ));
                                    }
                                }

                                clause_buffer.push(literal);
                            }
                        }
                    }
                }
            }

            buffer.clear();

            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ErrorKind::from(ParseError::MissingDelimiter));
        }

        info.added_atoms = self.formula.num_variables() as usize;

        Ok(info)
    }
}
