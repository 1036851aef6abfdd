/*!
A natural deduction search.

The search forward-chains the rules of a natural deduction system over a growing list of derivations, starting from the premises of an argument.
The search stops when:
- The conclusion is derived, and the argument is proved.
- Some derivation and its negation are derived, and the conclusion follows by contradiction.
- A pass over every derivation derives nothing new, and the argument is not proved.
- The limit on passes is reached, or constants run out, and the result is unknown.

# Overview

Premises are deduplicated and sorted so simple premises come first, and any premise whose operands are structurally equal (e.g. `A ∧ A`) is dropped.
Likewise, no derivation is made with more than [NEGATION_MAX](crate::config::NEGATION_MAX) consecutive negations, other than the conclusion and any assumption.
For an [indirect](ProofType::Indirect) proof, the negation of the conclusion is then assumed.

Each pass applies every rule to every derivation present at the start of the pass, and then tries to introduce the conclusion from what has been derived.
Most rules apply at most once to a derivation, and this is recorded with an [Applied](crate::db::derivation::Applied) mark on the derivation.
A derivation made by one of a pair of inverse rules (e.g. double negation introduction and elimination) is marked as though the inverse rule had already been applied.

| Rule | From | Derives |
|------|------|---------|
| &E   | P ∧ Q | P, Q |
| DNE  | ¬¬P | P |
| ↔E   | P ↔ Q | (P → Q) ∧ (Q → P) |
| MP   | P → Q, P | Q |
| MT   | P → Q, ¬Q | ¬P |
| DS   | P ∨ Q, ¬P (or ¬Q, but not both) | Q (or P) |
| HS   | P → Q, Q → R | P → R |
| CD   | P ∨ Q, P → R, Q → S | R ∨ S, S ∨ R |
| DD   | ¬R ∨ ¬S, P → R, Q → S | ¬P ∨ ¬Q, ¬Q ∨ ¬P |
| DeM  | ¬(P ∧ Q), ¬P ∨ ¬Q, ¬(P ∨ Q), ¬P ∧ ¬Q, ¬(P → Q), ¬(P ↔ Q) | the De Morgan dual |
| TP   | P → Q | ¬Q → ¬P |
| MI   | P → Q, or ¬P ∨ Q | ¬P ∨ Q, or P → Q, if a goal |
| DNI  | P | ¬¬P, if a goal within a few negations |
| ∃E   | (∃x)Px | Pc, for a fresh c |
| UE   | (∀x)Px | Pc, for each known c |

The conclusion may also be introduced by &I, ∨I, ↔I, ∃I, or UI, when the search has derived what is needed.

# Example

```rust
# use wff_prover::context::Context;
# use wff_prover::procedures::deduction::ProofType;
# use wff_prover::structures::{step::Step, wff::Wff};
let p = Wff::atom('P');
let q = Wff::atom('Q');

let mut the_context = Context::default();
let proof = the_context
    .prove(&[Wff::implies(p.clone(), q.clone()), p], &q, ProofType::Direct)
    .unwrap()
    .unwrap();

assert_eq!(proof.len(), 3);
assert_eq!(proof[2].step, Step::ModusPonens);
assert_eq!(proof[2].parents, vec![1, 2]);
```
*/

mod finalize;
mod quantifier;
mod rules;

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    config::NEGATION_MAX,
    context::Context,
    db::derivation::DerivationDB,
    misc::log::targets::{self},
    reports::{Diagnostic, Report},
    structures::{constant::Constant, step::Step, wff::Wff},
    types::err::{self},
};

/// Whether to search for the conclusion directly, or by assuming the negation of the conclusion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ProofType {
    #[default]
    Direct,
    Indirect,
}

/// A line of a finished proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DerivationLine {
    pub formula: Wff,
    pub step: Step,

    /// Line numbers (from 1) of the lines justifying this line, in ascending order.
    pub parents: Vec<usize>,
}

impl DerivationLine {
    /// The step and parent lines of the line, e.g. `MP 1, 2`.
    pub fn justification(&self) -> String {
        let parents = self
            .parents
            .iter()
            .map(|parent| parent.to_string())
            .collect::<Vec<_>>();

        match parents.is_empty() {
            true => self.step.code().to_string(),
            false => format!("{} {}", self.step.code(), parents.join(", ")),
        }
    }
}

impl std::fmt::Display for DerivationLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}    {}", self.formula, self.justification())
    }
}

/// The order of premises, by kind.
fn simplicity(wff: &Wff) -> u8 {
    match wff {
        Wff::Atom(_) => 0,
        Wff::Predicate(..) => 1,
        Wff::Identity(..) => 2,
        Wff::Not(_) => 3,
        Wff::And(..) => 4,
        Wff::Or(..) => 5,
        Wff::Implies(..) => 6,
        Wff::Iff(..) => 7,
        Wff::Xor(..) => 8,
        Wff::Existential(..) => 9,
        Wff::Universal(..) => 10,
        Wff::False => 11,
        Wff::Variable(_) | Wff::Constant(_) | Wff::Root(_) => 12,
    }
}

/// Premises without root wrappers or structural duplicates, sorted by kind and then by length.
pub fn order_premises(premises: &[Wff]) -> Vec<Wff> {
    let mut ordered: Vec<Wff> = Vec::with_capacity(premises.len());
    for premise in premises {
        let premise = premise.unrooted();
        if !ordered.iter().any(|other| other.structurally_equals(premise)) {
            ordered.push(premise.clone());
        }
    }

    ordered.sort_by_key(|premise| (simplicity(premise), premise.canonical().chars().count()));
    ordered
}

/// The inverse of a rule, which need not be applied to a derivation made by the rule.
fn inverse_step(step: Step) -> Option<Step> {
    match step {
        Step::ConjunctionIntroduction => Some(Step::ConjunctionElimination),
        Step::BiconditionalIntroduction => Some(Step::BiconditionalElimination),
        Step::DoubleNegationIntroduction => Some(Step::DoubleNegationElimination),
        Step::DoubleNegationElimination => Some(Step::DoubleNegationIntroduction),
        Step::DeMorgan => Some(Step::DeMorgan),
        Step::MaterialImplication => Some(Step::MaterialImplication),
        Step::Transposition => Some(Step::Transposition),
        _ => None,
    }
}

/// The state of a search.
pub(crate) struct Deduction {
    pub db: DerivationDB,
    conclusion: Wff,
    negation_limit: usize,

    /// The index of the conclusion, once derived.
    found: Option<usize>,

    /// Set when a fresh constant was required and none was available.
    exhausted: bool,

    /// Constants of the premises and conclusion, together with any introduced during the search.
    known: BTreeSet<Constant>,

    /// Constants introduced without reference to any premise, conclusion, or existential.
    arbitrary: BTreeSet<Constant>,

    /// A count of derivations added in the current pass.
    added: usize,
}

impl Deduction {
    pub fn new(premises: &[Wff], conclusion: &Wff, negation_limit: usize) -> Self {
        let conclusion = conclusion.unrooted().clone();
        let mut known = conclusion.constants();
        for premise in premises {
            known.extend(premise.constants());
        }

        Deduction {
            db: DerivationDB::default(),
            conclusion,
            negation_limit,
            found: None,
            exhausted: false,
            known,
            arbitrary: BTreeSet::default(),
            added: 0,
        }
    }

    pub fn conclusion(&self) -> &Wff {
        &self.conclusion
    }

    pub fn is_finished(&self) -> bool {
        self.found.is_some() || self.exhausted
    }

    /// Adds a derivation, unless the search is finished, the derivation is redundant, or the derivation is already present.
    ///
    /// A derivation with a run of more than [NEGATION_MAX] negations is also skipped, unless it is the conclusion or an assumption.
    ///
    /// After a derivation is added the search is finished if the derivation is the conclusion, or contradicts some other derivation.
    pub fn add(
        &mut self,
        wff: Wff,
        step: Step,
        parents: Vec<usize>,
    ) -> Result<Option<usize>, err::ErrorKind> {
        if self.is_finished() {
            return Ok(None);
        }

        let is_conclusion = wff.structurally_equals(&self.conclusion);
        if !is_conclusion && wff.is_redundant() {
            log::trace!(target: targets::DEDUCTION, "Redundant: {wff}");
            return Ok(None);
        }

        if !is_conclusion && !step.is_assumption() && wff.negation_depth() > NEGATION_MAX {
            log::trace!(target: targets::DEDUCTION, "Over {NEGATION_MAX} negations: {wff}");
            return Ok(None);
        }

        if self.db.position(&wff).is_some() {
            return Ok(None);
        }

        log::trace!(target: targets::DEDUCTION, "{step}: {wff}");
        let index = self.db.insert(wff, step, parents)?;
        self.added += 1;

        if let Some(inverse) = inverse_step(step) {
            self.db.mark(index, inverse)?;
        }

        match is_conclusion {
            true => self.found = Some(index),
            false => self.check_contradiction(index)?,
        }

        Ok(Some(index))
    }

    /// Finishes the search by contradiction, if the derivation at `index` is falsum, or contradicts some other derivation.
    ///
    /// Pairs of a negation and a double negation are not contradictions.
    fn check_contradiction(&mut self, index: usize) -> Result<(), err::ErrorKind> {
        let wff = self.db.get(index)?.wff().clone();

        let falsum = match &wff {
            Wff::False => Some(index),

            Wff::Not(inner) if inner.is_negation() => None,

            _ => {
                let pair = match &wff {
                    Wff::Not(inner) => self.db.position(inner).map(|positive| (positive, index)),
                    _ => self
                        .db
                        .position(&wff.negate())
                        .map(|negative| (index, negative)),
                };

                match pair {
                    Some((positive, negative)) => {
                        log::trace!(target: targets::DEDUCTION, "Contradiction on {wff}");
                        let falsum = self.db.insert(
                            Wff::False,
                            Step::ContradictionIntroduction,
                            vec![positive, negative],
                        )?;
                        Some(falsum)
                    }
                    None => None,
                }
            }
        };

        if let Some(falsum) = falsum {
            let conclusion = match self.conclusion.is_false() {
                true => falsum,
                false => self.db.insert(
                    self.conclusion.clone(),
                    Step::ContradictionElimination,
                    vec![falsum],
                )?,
            };
            self.found = Some(conclusion);
        }

        Ok(())
    }

    /// True if `wff` is the conclusion, or a premise.
    fn is_goal(&self, wff: &Wff) -> bool {
        wff.structurally_equals(&self.conclusion)
            || self
                .db
                .position(wff)
                .and_then(|index| self.db.get(index).ok())
                .is_some_and(|node| node.step() == Step::Premise)
    }

    /// Applies each rule to each derivation present at the start of the pass, and then tries to introduce the conclusion.
    ///
    /// Returns a count of derivations added.
    pub fn pass(&mut self) -> Result<usize, err::ErrorKind> {
        self.added = 0;

        let length = self.db.len();
        for index in 0..length {
            if self.is_finished() {
                break;
            }
            self.apply_rules(index)?;
        }

        if !self.is_finished() {
            self.introduce_conclusion()?;
        }

        Ok(self.added)
    }

    fn apply_rules(&mut self, index: usize) -> Result<(), err::ErrorKind> {
        let wff = self.db.get(index)?.wff().clone();

        self.conjunction_elimination(index, &wff)?;
        self.double_negation_elimination(index, &wff)?;
        self.biconditional_elimination(index, &wff)?;
        self.modus_ponens(index, &wff)?;
        self.modus_tollens(index, &wff)?;
        self.disjunctive_syllogism(index, &wff)?;
        self.hypothetical_syllogism(index, &wff)?;
        self.constructive_dilemma(index, &wff)?;
        self.destructive_dilemma(index, &wff)?;
        self.de_morgan(index, &wff)?;
        self.transposition(index, &wff)?;
        self.material_implication(index, &wff)?;
        self.double_negation_introduction(index, &wff)?;
        self.existential_elimination(index, &wff)?;
        self.universal_elimination(index, &wff)?;

        Ok(())
    }

    /// Introduces the conclusion, if the conclusion is a conjunction, disjunction, biconditional, or quantifier and what is needed has been derived.
    fn introduce_conclusion(&mut self) -> Result<(), err::ErrorKind> {
        let conclusion = self.conclusion.clone();

        match &conclusion {
            Wff::And(p, q) => {
                if let (Some(i), Some(j)) = (self.db.position(p), self.db.position(q)) {
                    self.add(conclusion.clone(), Step::ConjunctionIntroduction, vec![i, j])?;
                }
            }

            Wff::Or(p, q) => {
                if let Some(i) = self.db.position(p).or_else(|| self.db.position(q)) {
                    self.add(conclusion.clone(), Step::DisjunctionIntroduction, vec![i])?;
                }
            }

            Wff::Iff(p, q) => {
                let forward = Wff::implies(p.as_ref().clone(), q.as_ref().clone());
                let backward = Wff::implies(q.as_ref().clone(), p.as_ref().clone());
                if let (Some(i), Some(j)) = (self.db.position(&forward), self.db.position(&backward)) {
                    self.add(conclusion.clone(), Step::BiconditionalIntroduction, vec![i, j])?;
                }
            }

            Wff::Existential(..) => self.existential_introduction()?,

            Wff::Universal(..) => self.universal_introduction()?,

            _ => {}
        }

        Ok(())
    }
}

impl Context {
    /// Searches for a derivation of `conclusion` from `premises`.
    ///
    /// Returns the lines of the derivation, if found.
    /// Otherwise, the [report](Context::report) distinguishes a finished search ([NotProved](Report::NotProved)) from a search stopped by some limit ([Unknown](Report::Unknown)).
    ///
    /// The context is [reset](Context::reset) before the search.
    pub fn prove(
        &mut self,
        premises: &[Wff],
        conclusion: &Wff,
        proof_type: ProofType,
    ) -> Result<Option<Vec<DerivationLine>>, err::ErrorKind> {
        self.reset();

        let mut deduction = Deduction::new(premises, conclusion, self.config.negation_limit.value);

        for premise in order_premises(premises) {
            deduction.add(premise, Step::Premise, Vec::default())?;
        }

        if proof_type == ProofType::Indirect {
            let assumption = deduction.conclusion().negate();
            deduction.add(assumption, Step::AssumptionForRAA, Vec::default())?;
        }

        let found = self.search(&mut deduction)?;
        self.counters.derivations = deduction.db.len();

        match found {
            Some(index) => {
                let lines = deduction.finalize(index)?;
                self.set_report(Report::Proved);
                Ok(Some(lines))
            }
            None => Ok(None),
        }
    }

    /// Makes passes over the derivations until the search is finished, or no pass derives anything new.
    pub(crate) fn search(&mut self, deduction: &mut Deduction) -> Result<Option<usize>, err::ErrorKind> {
        let limit = self.config.deduction_limit.value;

        'search: loop {
            if let Some(found) = deduction.found {
                log::info!(target: targets::DEDUCTION, "Proved after {} passes", self.counters.passes);
                return Ok(Some(found));
            }

            if deduction.exhausted {
                self.note(Diagnostic::ConstantsExhausted);
                break 'search;
            }

            if self.counters.passes >= limit {
                self.note(Diagnostic::DeductionTimeout {
                    passes: self.counters.passes,
                });
                break 'search;
            }

            self.counters.passes += 1;
            let added = deduction.pass()?;
            log::trace!(target: targets::DEDUCTION, "Pass {} added {added}", self.counters.passes);

            if added == 0 && !deduction.is_finished() {
                self.note(Diagnostic::DeductionExhausted {
                    passes: self.counters.passes,
                });
                self.set_report(Report::NotProved);
                break 'search;
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::config::Config;

    fn p() -> Wff {
        Wff::atom('P')
    }

    fn q() -> Wff {
        Wff::atom('Q')
    }

    fn r() -> Wff {
        Wff::atom('R')
    }

    #[test]
    fn premises_are_ordered() {
        let premises = [
            Wff::implies(p(), q()),
            Wff::and(p(), q()),
            q().negate(),
            p(),
            Wff::and(p(), q()),
        ];
        let ordered = order_premises(&premises);
        assert_eq!(
            ordered,
            vec![p(), q().negate(), Wff::and(p(), q()), Wff::implies(p(), q())]
        );
    }

    #[test]
    fn shorter_first_within_a_kind() {
        let long = Wff::implies(Wff::and(p(), q()), r());
        let short = Wff::implies(p(), r());
        assert_eq!(order_premises(&[long.clone(), short.clone()]), vec![short, long]);
    }

    #[test]
    fn contradictory_premises() {
        let mut the_context = Context::default();
        let proof = the_context
            .prove(&[p(), p().negate()], &r(), ProofType::Direct)
            .unwrap()
            .unwrap();

        let steps = proof.iter().map(|line| line.step).collect::<Vec<_>>();
        assert_eq!(
            steps,
            vec![
                Step::Premise,
                Step::Premise,
                Step::ContradictionIntroduction,
                Step::ContradictionElimination
            ]
        );
        assert_eq!(proof[2].parents, vec![1, 2]);
        assert_eq!(proof[3].parents, vec![3]);
    }

    #[test]
    fn double_negation_pairs_do_not_contradict() {
        let mut deduction = Deduction::new(&[], &r(), 4);
        deduction.add(p().negate(), Step::Premise, vec![]).unwrap();
        deduction
            .add(p().negate().negate(), Step::Premise, vec![])
            .unwrap();
        assert!(!deduction.is_finished());
    }

    #[test]
    fn fixpoint_is_not_proved() {
        let mut the_context = Context::default();
        let proof = the_context.prove(&[p()], &q(), ProofType::Direct).unwrap();
        assert!(proof.is_none());
        assert_eq!(the_context.report(), Report::NotProved);
        assert!(matches!(
            the_context.diagnostics(),
            [Diagnostic::DeductionExhausted { .. }]
        ));
    }

    #[test]
    fn pass_ceiling() {
        // P → Q, Q → R, R → S ⊢ P → S requires two passes.
        let s = Wff::atom('S');
        let premises = [
            Wff::implies(p(), q()),
            Wff::implies(q(), r()),
            Wff::implies(r(), s.clone()),
        ];
        let conclusion = Wff::implies(p(), s);

        let mut config = Config::default();
        config.deduction_limit.set(1).unwrap();
        let mut the_context = Context::from_config(config);
        let proof = the_context
            .prove(&premises, &conclusion, ProofType::Direct)
            .unwrap();
        assert!(proof.is_none());
        assert_eq!(the_context.report(), Report::Unknown);
        assert_eq!(
            the_context.diagnostics(),
            &[Diagnostic::DeductionTimeout { passes: 1 }]
        );

        let mut the_context = Context::default();
        let proof = the_context
            .prove(&premises, &conclusion, ProofType::Direct)
            .unwrap();
        assert!(proof.is_some());
        assert_eq!(the_context.report(), Report::Proved);
    }

    #[test]
    fn negations_are_capped() {
        // Q ↔ ¬Q, R ↔ (R ↔ P), P ⊬ ¬R → Q
        let premises = [
            Wff::iff(q(), q().negate()),
            Wff::iff(r(), Wff::iff(r(), p())),
            p(),
        ];
        let conclusion = Wff::implies(r().negate(), q());

        let mut config = Config::default();
        config.deduction_limit.set(100).unwrap();
        let mut the_context = Context::from_config(config);
        let proof = the_context
            .prove(&premises, &conclusion, ProofType::Direct)
            .unwrap();

        assert!(!the_context.timed_out());
        assert_ne!(the_context.report(), Report::Unknown);
        if proof.is_none() {
            assert!(matches!(
                the_context.diagnostics(),
                [Diagnostic::DeductionExhausted { .. }]
            ));
        }
    }

    #[test]
    fn derived_negations_stay_within_the_cap() {
        let premises = [Wff::implies(q(), q().negate()), Wff::implies(q().negate(), q())];

        let mut the_context = Context::default();
        let mut deduction = Deduction::new(&premises, &r(), 4);
        for premise in order_premises(&premises) {
            deduction.add(premise, Step::Premise, vec![]).unwrap();
        }
        let _ = the_context.search(&mut deduction).unwrap();

        assert_eq!(the_context.report(), Report::NotProved);
        assert!(deduction
            .db
            .iter()
            .all(|node| node.wff().negation_depth() <= NEGATION_MAX));
    }

    #[test]
    fn rules_apply_once() {
        // A mix of premises to which many rules apply.
        let premises = [
            Wff::implies(p(), q()),
            Wff::implies(q(), r()),
            Wff::or(p(), r()),
            Wff::and(p().negate().negate(), Wff::iff(q(), r())),
            Wff::and(p(), q()).negate(),
        ];
        let unreachable = Wff::atom('Z');

        let mut the_context = Context::default();
        let mut deduction = Deduction::new(&premises, &unreachable, 4);
        for premise in order_premises(&premises) {
            deduction.add(premise, Step::Premise, vec![]).unwrap();
        }
        let _ = the_context.search(&mut deduction).unwrap();

        let once_per_derivation = [
            Step::ModusPonens,
            Step::ModusTollens,
            Step::DisjunctiveSyllogism,
            Step::BiconditionalElimination,
            Step::DoubleNegationElimination,
            Step::DeMorgan,
            Step::Transposition,
        ];

        let mut uses: BTreeMap<(Step, usize), usize> = BTreeMap::default();
        for node in deduction.db.iter() {
            if once_per_derivation.contains(&node.step()) {
                *uses.entry((node.step(), node.parents()[0])).or_default() += 1;
            }
        }
        assert!(uses.values().all(|count| *count == 1));
    }

    #[test]
    fn justification() {
        let line = DerivationLine {
            formula: q(),
            step: Step::ModusPonens,
            parents: vec![1, 2],
        };
        assert_eq!(line.justification(), "MP 1, 2");
        assert_eq!(line.to_string(), "Q    MP 1, 2");
    }
}
