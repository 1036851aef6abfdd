/*!
Checking arguments.

An argument is a list of premises together with a conclusion.
When an argument is given as a single list of wffs, the last wff is the conclusion and every other wff is a premise.

An argument is valid exactly when the premises together with the negation of the conclusion are unsatisfiable.
So, [check_argument](Context::check_argument) builds a tableau from the conjunction of the premises and the negated conclusion.

```rust
# use wff_prover::context::Context;
# use wff_prover::reports::Report;
# use wff_prover::structures::wff::Wff;
let p = Wff::atom('P');
let q = Wff::atom('Q');
let premises = [Wff::implies(p.clone(), q.clone()), p.clone()];

let mut the_context = Context::default();
assert_eq!(the_context.check_argument(&premises, &q), Ok(Report::Valid));
assert_eq!(the_context.check_argument(&premises, &q.negate()), Ok(Report::Invalid));
```
*/

use crate::{
    context::Context,
    db::tableau::Tableau,
    procedures::deduction::{DerivationLine, ProofType},
    reports::Report,
    structures::wff::Wff,
    types::err::{self},
};

/// Splits a list of wffs into premises and a conclusion.
pub fn split_argument(wffs: &[Wff]) -> Result<(&[Wff], &Wff), err::DeductionError> {
    match wffs.split_last() {
        Some((conclusion, premises)) => Ok((premises, conclusion)),
        None => Err(err::DeductionError::EmptyArgument),
    }
}

/// The conjunction of the premises and the negation of the conclusion.
pub fn counterexample_wff(premises: &[Wff], conclusion: &Wff) -> Wff {
    premises
        .iter()
        .rev()
        .fold(conclusion.unrooted().negate(), |conjunction, premise| {
            Wff::and(premise.unrooted().clone(), conjunction)
        })
}

impl Context {
    /// Checks the validity of an argument by a tableau.
    ///
    /// The context is [reset](Context::reset) before the check.
    pub fn check_argument(&mut self, premises: &[Wff], conclusion: &Wff) -> Result<Report, err::ErrorKind> {
        self.reset();

        let mut tableau = Tableau::from_root(counterexample_wff(premises, conclusion));
        let report = match self.expand(&mut tableau)? {
            Report::Closed => Report::Valid,
            Report::Open => Report::Invalid,
            _ => Report::Unknown,
        };

        self.set_report(report);
        Ok(report)
    }

    /// Searches for a derivation of the last of `wffs` from the others.
    pub fn prove_argument(
        &mut self,
        wffs: &[Wff],
        proof_type: ProofType,
    ) -> Result<Option<Vec<DerivationLine>>, err::ErrorKind> {
        let (premises, conclusion) = split_argument(wffs)?;
        self.prove(premises, conclusion, proof_type)
    }
}
