/*!
Translation of a formula to an equi-satisfiable conjunction of triplets.

The translation proceeds in two passes.

# Pass one, clauses

A clause `ℓ₁ ∨ ℓ₂ ∨ … ∨ ℓₖ` is rewritten right-associatively as the implication chain
`¬ℓ₁ → (¬ℓ₂ → (… → ℓₖ))`.
Fresh representatives are allocated bottom-up and the defining triplets are emitted innermost
first:
- `rₖ₋₁ ↔ (¬ℓₖ₋₁ → ℓₖ)`, and
- `rᵢ ↔ (¬ℓᵢ → rᵢ₊₁)` for each remaining `i`, down to `r₁`.

`r₁` is the representative of the clause.
A unit clause is its own representative, with no triplet emitted, and the representative of
the empty clause is the falsum literal.

# Pass two, the conjunction

The representatives `R₁, …, Rₘ` of the clauses are chained through the equivalence
`A ∧ B ≡ ¬(A → ¬B)`.
With `Lₘ = Rₘ`, a fresh `aᵢ` is allocated for each `i = m−1 … 1` with the triplet
`aᵢ ↔ (Rᵢ → ¬Lᵢ₊₁)`, and `Lᵢ = ¬aᵢ` --- so each `Lᵢ` is equivalent to `Rᵢ ∧ … ∧ Rₘ`.
A final root triplet `t ↔ (¬L₁ → falsum)` ties the chain to a positive atom `t` equivalent to
the whole conjunction.
The formula is satisfiable exactly when the triplets are, with `t` true.

Fresh atoms are drawn from a strictly monotonic counter starting above the count of variables
in the formula, so translation of the same formula always yields the same store.
The store is materialized once, and is read-only thereafter.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::Clause,
        formula::Formula,
        literal::{CLiteral, Literal},
        triplet::Triplet,
    },
    types::err::{self, EncodeError},
};

/// A read-only store of triplets, together with the root representative to assert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripletStore {
    /// The triplets, in emission order.
    triplets: Vec<Triplet>,

    /// The count of variables in the source formula.
    original_atoms: Atom,

    /// The highest atom used by any triplet (equal to `original_atoms` for an empty formula).
    top_atom: Atom,

    /// The representative of the formula as a whole, if the formula has any clauses.
    root: Option<CLiteral>,
}

impl TripletStore {
    /// An iterator over the triplets of the store, in emission order.
    pub fn triplets(&self) -> impl Iterator<Item = &Triplet> {
        self.triplets.iter()
    }

    /// The count of triplets in the store.
    pub fn len(&self) -> usize {
        self.triplets.len()
    }

    /// True if the store holds no triplets, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.triplets.is_empty()
    }

    /// The count of variables in the source formula.
    pub fn original_atoms(&self) -> Atom {
        self.original_atoms
    }

    /// The size of the atom range used by the store, reserved atom included.
    ///
    /// An assignment database over the store is sized to this count.
    pub fn atom_count(&self) -> usize {
        self.top_atom as usize + 1
    }

    /// The representative of the formula as a whole, if the formula has any clauses.
    ///
    /// The formula holds under a valuation of the original atoms exactly when the valuation
    /// extends to one which satisfies every triplet with the root representative true.
    pub fn root(&self) -> Option<CLiteral> {
        self.root
    }

    /// A store over the given triplets, for tests which exercise the rules directly.
    #[cfg(test)]
    pub(crate) fn raw(triplets: Vec<Triplet>, atom_count: usize) -> Self {
        TripletStore {
            triplets,
            original_atoms: 0,
            top_atom: atom_count.saturating_sub(1) as Atom,
            root: None,
        }
    }
}

/// A strictly monotonic source of fresh atoms.
struct FreshAtoms {
    last: Atom,
}

impl FreshAtoms {
    fn fresh(&mut self) -> Result<Atom, EncodeError> {
        match self.last {
            ATOM_MAX.. => Err(EncodeError::AtomsExhausted),
            _ => {
                self.last += 1;
                Ok(self.last)
            }
        }
    }
}

/// Translates `formula` to an equi-satisfiable store of triplets.
pub fn encode(formula: &Formula) -> Result<TripletStore, err::ErrorKind> {
    let original_atoms = formula.num_variables();
    let mut counter = FreshAtoms {
        last: original_atoms,
    };
    let mut triplets = Vec::default();

    let mut representatives = Vec::with_capacity(formula.num_clauses());
    for clause in formula.clauses() {
        for literal in clause {
            if literal.atom() == 0 || literal.atom() > original_atoms {
                return Err(err::ErrorKind::from(EncodeError::UnallocatedAtom(
                    literal.atom(),
                )));
            }
        }

        if clause.is_tautology() {
            // The chain is emitted all the same; the simple rules collapse it.
            log::trace!(target: targets::ENCODE,
                "Tautological clause {}", clause.as_dimacs(false));
        }

        representatives.push(encode_clause(clause, &mut counter, &mut triplets)?);
    }

    let root = encode_conjunction(&representatives, &mut counter, &mut triplets)?;

    log::debug!(target: targets::ENCODE,
        "Encoded {} clauses over {} atoms as {} triplets over {} atoms",
        formula.num_clauses(), original_atoms, triplets.len(), counter.last);

    Ok(TripletStore {
        triplets,
        original_atoms,
        top_atom: counter.last,
        root,
    })
}

/// Emits the implication chain of a clause, returning the representative of the clause.
fn encode_clause(
    clause: &[CLiteral],
    counter: &mut FreshAtoms,
    triplets: &mut Vec<Triplet>,
) -> Result<CLiteral, EncodeError> {
    match clause.split_last() {
        // The empty clause is falsum.
        None => Ok(CLiteral::FALSUM),

        // A unit clause is its own representative.
        Some((unit, [])) => Ok(*unit),

        Some((last, rest)) => {
            let mut consequent = *last;
            for literal in rest.iter().rev() {
                let representative = counter.fresh()?;
                triplets.push(Triplet::new(representative, literal.negate(), consequent));
                consequent = CLiteral::new(representative, true);
            }
            Ok(consequent)
        }
    }
}

/// Chains the clause representatives to a root representative of the conjunction.
fn encode_conjunction(
    representatives: &[CLiteral],
    counter: &mut FreshAtoms,
    triplets: &mut Vec<Triplet>,
) -> Result<Option<CLiteral>, EncodeError> {
    match representatives.split_last() {
        None => Ok(None),

        Some((last, rest)) => {
            let mut chain = *last;
            for representative in rest.iter().rev() {
                let auxiliary = counter.fresh()?;
                triplets.push(Triplet::new(auxiliary, *representative, chain.negate()));
                // ¬aᵢ ↔ (Rᵢ ∧ Lᵢ₊₁)
                chain = CLiteral::new(auxiliary, false);
            }

            let root = counter.fresh()?;
            triplets.push(Triplet::new(root, chain.negate(), CLiteral::FALSUM));
            Ok(Some(CLiteral::new(root, true)))
        }
    }
}

#[cfg(test)]
mod encoder_tests {
    use super::*;

    fn formula_of(clauses: &[&[i32]]) -> Formula {
        let mut formula = Formula::default();
        for clause in clauses {
            formula.add_clause(clause.iter().map(|l| l.canonical()).collect());
        }
        formula
    }

    #[test]
    fn empty_formula() {
        let store = encode(&formula_of(&[])).expect("encode failure");

        assert!(store.is_empty());
        assert_eq!(store.root(), None);
        assert_eq!(store.atom_count(), 1);
    }

    #[test]
    fn single_unit_clause() {
        // The unit clause is its own representative, so only the root triplet is emitted.
        let store = encode(&formula_of(&[&[1]])).expect("encode failure");

        assert_eq!(store.len(), 1);
        assert_eq!(store.root(), Some(CLiteral::new(2, true)));
        assert_eq!(
            store.triplets().next(),
            Some(&Triplet::new(2, CLiteral::new(1, false), CLiteral::FALSUM))
        );
    }

    #[test]
    fn binary_clause_chain() {
        let store = encode(&formula_of(&[&[1, 2]])).expect("encode failure");

        let expected = vec![
            Triplet::new(3, CLiteral::new(1, false), CLiteral::new(2, true)),
            Triplet::new(4, CLiteral::new(3, false), CLiteral::FALSUM),
        ];
        assert_eq!(store.triplets().copied().collect::<Vec<_>>(), expected);
        assert_eq!(store.root(), Some(CLiteral::new(4, true)));
    }

    #[test]
    fn clause_triplets_innermost_first() {
        let store = encode(&formula_of(&[&[1, 2, 3]])).expect("encode failure");

        let triplets: Vec<_> = store.triplets().copied().collect();
        // r₂ ↔ (¬ℓ₂ → ℓ₃) precedes r₁ ↔ (¬ℓ₁ → r₂).
        assert_eq!(
            triplets[0],
            Triplet::new(4, CLiteral::new(2, false), CLiteral::new(3, true))
        );
        assert_eq!(
            triplets[1],
            Triplet::new(5, CLiteral::new(1, false), CLiteral::new(4, true))
        );
    }

    #[test]
    fn auxiliaries_defined_exactly_once() {
        let store =
            encode(&formula_of(&[&[1, 2], &[-1, 3], &[2, -3, 1]])).expect("encode failure");

        let mut defined = std::collections::HashSet::new();
        for triplet in store.triplets() {
            assert!(triplet.x > store.original_atoms());
            assert!((triplet.x as usize) < store.atom_count());
            assert!(defined.insert(triplet.x), "{} defined twice", triplet.x);

            assert!((triplet.y.atom() as usize) < store.atom_count());
            assert!((triplet.z.atom() as usize) < store.atom_count());
        }

        // Every auxiliary atom is defined by some triplet.
        for auxiliary in (store.original_atoms() + 1)..(store.atom_count() as Atom) {
            assert!(defined.contains(&auxiliary));
        }
    }

    #[test]
    fn translation_is_reproducible() {
        let formula = formula_of(&[&[1, -2, 3], &[2], &[-3, -1]]);
        assert_eq!(
            encode(&formula).expect("encode failure"),
            encode(&formula).expect("encode failure")
        );
    }

    #[test]
    fn empty_clause_representative() {
        let store = encode(&formula_of(&[&[]])).expect("encode failure");

        // The root triplet closes over the falsum representative directly.
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.triplets().next(),
            Some(&Triplet::new(1, CLiteral::TOP, CLiteral::FALSUM))
        );
    }
}
