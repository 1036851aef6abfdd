//! Propositional rules of the search.
//!
//! Each rule is given the index and formula of some derivation, and returns without change if the rule does not apply.

use crate::{
    misc::log::targets::{self},
    procedures::deduction::Deduction,
    structures::{step::Step, wff::Wff},
    types::err::{self},
};

impl Deduction {
    pub(super) fn applied(&self, index: usize, step: Step) -> Result<bool, err::ErrorKind> {
        Ok(self.db.get(index)?.applied().has(step))
    }

    pub(super) fn mark(&mut self, index: usize, step: Step) -> Result<bool, err::ErrorKind> {
        Ok(self.db.mark(index, step)?)
    }

    /// The index of a derivation contrary to `wff`, i.e. the negation of `wff`, or the wff negated by `wff`.
    fn find_contrary(&self, wff: &Wff) -> Option<usize> {
        self.db.position(&wff.negate()).or_else(|| match wff {
            Wff::Not(inner) => self.db.position(inner),
            _ => None,
        })
    }

    /// Canonical forms of the wffs contrary to `wff`, i.e. the negation of `wff`, or the wff negated by `wff`.
    fn contrary_forms(wff: &Wff) -> Vec<String> {
        let mut forms = wff.negate().canonical_forms();
        if let Wff::Not(inner) = wff {
            forms.extend(inner.canonical_forms());
        }
        forms
    }

    /// The first implication whose cached antecedent and consequent forms satisfy `f`, with the index of the implication.
    fn find_implication(&self, f: impl Fn(&str, &str) -> bool) -> Option<(usize, Wff, Wff)> {
        self.db.iter().enumerate().find_map(|(index, node)| {
            let (antecedent_form, consequent_form) = node.implication_forms()?;
            if !f(antecedent_form, consequent_form) {
                return None;
            }
            match node.wff() {
                Wff::Implies(antecedent, consequent) => {
                    Some((index, antecedent.as_ref().clone(), consequent.as_ref().clone()))
                }
                _ => None,
            }
        })
    }

    pub(super) fn conjunction_elimination(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        let Wff::And(p, q) = wff else {
            return Ok(());
        };

        if self.mark(index, Step::ConjunctionElimination)? {
            self.add(p.as_ref().clone(), Step::ConjunctionElimination, vec![index])?;
            self.add(q.as_ref().clone(), Step::ConjunctionElimination, vec![index])?;
        }
        Ok(())
    }

    pub(super) fn double_negation_elimination(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        let Some(Wff::Not(p)) = wff.negated() else {
            return Ok(());
        };

        if self.mark(index, Step::DoubleNegationElimination)? {
            self.add(p.as_ref().clone(), Step::DoubleNegationElimination, vec![index])?;
        }
        Ok(())
    }

    pub(super) fn biconditional_elimination(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        let Wff::Iff(p, q) = wff else {
            return Ok(());
        };

        if self.mark(index, Step::BiconditionalElimination)? {
            let p = p.as_ref().clone();
            let q = q.as_ref().clone();
            let both = Wff::and(Wff::implies(p.clone(), q.clone()), Wff::implies(q, p));
            self.add(both, Step::BiconditionalElimination, vec![index])?;
        }
        Ok(())
    }

    pub(super) fn modus_ponens(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        let Wff::Implies(p, q) = wff else {
            return Ok(());
        };
        if self.applied(index, Step::ModusPonens)? {
            return Ok(());
        }

        if let Some(antecedent) = self.db.position(p) {
            self.mark(index, Step::ModusPonens)?;
            self.add(q.as_ref().clone(), Step::ModusPonens, vec![index, antecedent])?;
        }
        Ok(())
    }

    pub(super) fn modus_tollens(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        let Wff::Implies(p, q) = wff else {
            return Ok(());
        };
        if self.applied(index, Step::ModusTollens)? {
            return Ok(());
        }

        if let Some(denial) = self.find_contrary(q) {
            self.mark(index, Step::ModusTollens)?;
            self.add(p.negate(), Step::ModusTollens, vec![index, denial])?;
        }
        Ok(())
    }

    pub(super) fn disjunctive_syllogism(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        let Wff::Or(p, q) = wff else {
            return Ok(());
        };
        if self.applied(index, Step::DisjunctiveSyllogism)? {
            return Ok(());
        }

        let (remaining, denial) = match (self.find_contrary(p), self.find_contrary(q)) {
            (Some(denial), None) => (q, denial),
            (None, Some(denial)) => (p, denial),
            _ => return Ok(()),
        };

        self.mark(index, Step::DisjunctiveSyllogism)?;
        self.add(remaining.as_ref().clone(), Step::DisjunctiveSyllogism, vec![index, denial])?;
        Ok(())
    }

    /// From A → B and B → C derive A → C, so long as one of the implications has not been used by the rule.
    pub(super) fn hypothetical_syllogism(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        let Wff::Implies(a, b) = wff else {
            return Ok(());
        };

        let b_forms = b.canonical_forms();
        let partners = self
            .db
            .iter()
            .enumerate()
            .filter(|(other, node)| {
                *other != index
                    && node
                        .implication_forms()
                        .is_some_and(|(antecedent, _)| b_forms.iter().any(|form| form == antecedent))
            })
            .filter_map(|(other, node)| match node.wff() {
                Wff::Implies(_, c) => Some((other, c.as_ref().clone())),
                _ => None,
            })
            .collect::<Vec<_>>();

        for (other, c) in partners {
            if self.is_finished() {
                break;
            }
            if self.applied(index, Step::HypotheticalSyllogism)?
                && self.applied(other, Step::HypotheticalSyllogism)?
            {
                continue;
            }

            self.mark(index, Step::HypotheticalSyllogism)?;
            self.mark(other, Step::HypotheticalSyllogism)?;
            let chained = Wff::implies(a.as_ref().clone(), c);
            self.add(chained, Step::HypotheticalSyllogism, vec![index, other])?;
        }
        Ok(())
    }

    /// From P ∨ Q, P → R, and Q → S derive both R ∨ S and S ∨ R.
    pub(super) fn constructive_dilemma(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        let Wff::Or(p, q) = wff else {
            return Ok(());
        };
        if self.applied(index, Step::ConstructiveDilemma)? {
            return Ok(());
        }

        let p_forms = p.canonical_forms();
        let q_forms = q.canonical_forms();
        let from_p = self.find_implication(|antecedent, _| p_forms.iter().any(|form| form == antecedent));
        let from_q = self.find_implication(|antecedent, _| q_forms.iter().any(|form| form == antecedent));

        if let (Some((j, _, r)), Some((k, _, s))) = (from_p, from_q) {
            self.mark(index, Step::ConstructiveDilemma)?;
            let parents = vec![index, j, k];
            self.add(Wff::or(r.clone(), s.clone()), Step::ConstructiveDilemma, parents.clone())?;
            self.add(Wff::or(s, r), Step::ConstructiveDilemma, parents)?;
        }
        Ok(())
    }

    /// From ¬R ∨ ¬S, P → R, and Q → S derive both ¬P ∨ ¬Q and ¬Q ∨ ¬P.
    pub(super) fn destructive_dilemma(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        let Wff::Or(not_r, not_s) = wff else {
            return Ok(());
        };
        if self.applied(index, Step::DestructiveDilemma)? {
            return Ok(());
        }

        let r_forms = Self::contrary_forms(not_r);
        let s_forms = Self::contrary_forms(not_s);
        let to_r = self.find_implication(|_, consequent| r_forms.iter().any(|form| form == consequent));
        let to_s = self.find_implication(|_, consequent| s_forms.iter().any(|form| form == consequent));

        if let (Some((j, p, _)), Some((k, q, _))) = (to_r, to_s) {
            self.mark(index, Step::DestructiveDilemma)?;
            let parents = vec![index, j, k];
            self.add(Wff::or(p.negate(), q.negate()), Step::DestructiveDilemma, parents.clone())?;
            self.add(Wff::or(q.negate(), p.negate()), Step::DestructiveDilemma, parents)?;
        }
        Ok(())
    }

    pub(super) fn de_morgan(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        let dual = match wff {
            Wff::Not(inner) => match inner.as_ref() {
                Wff::And(p, q) => Wff::or(p.negate(), q.negate()),
                Wff::Or(p, q) => Wff::and(p.negate(), q.negate()),
                Wff::Implies(p, q) => Wff::and(p.as_ref().clone(), q.negate()),
                Wff::Iff(p, q) => Wff::or(
                    Wff::and(p.as_ref().clone(), q.negate()),
                    Wff::and(p.negate(), q.as_ref().clone()),
                ),
                _ => return Ok(()),
            },

            Wff::Or(p, q) => match (p.negated(), q.negated()) {
                (Some(p), Some(q)) => Wff::and(p.clone(), q.clone()).negate(),
                _ => return Ok(()),
            },

            Wff::And(p, q) => match (p.negated(), q.negated()) {
                (Some(p), Some(q)) => Wff::or(p.clone(), q.clone()).negate(),
                _ => return Ok(()),
            },

            _ => return Ok(()),
        };

        if wff.structurally_equals(self.conclusion()) {
            return Ok(());
        }

        if self.mark(index, Step::DeMorgan)? {
            self.add(dual, Step::DeMorgan, vec![index])?;
        }
        Ok(())
    }

    pub(super) fn transposition(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        let Wff::Implies(p, q) = wff else {
            return Ok(());
        };
        if wff.structurally_equals(self.conclusion()) {
            return Ok(());
        }

        if self.mark(index, Step::Transposition)? {
            self.add(Wff::implies(q.negate(), p.negate()), Step::Transposition, vec![index])?;
        }
        Ok(())
    }

    /// Exchanges P → Q with ¬P ∨ Q, though only when the exchanged wff is a goal.
    pub(super) fn material_implication(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        let dual = match wff {
            Wff::Implies(p, q) => Wff::or(p.negate(), q.as_ref().clone()),
            Wff::Or(p, q) => match p.negated() {
                Some(p) => Wff::implies(p.clone(), q.as_ref().clone()),
                None => Wff::implies(p.negate(), q.as_ref().clone()),
            },
            _ => return Ok(()),
        };

        if wff.structurally_equals(self.conclusion())
            || self.applied(index, Step::MaterialImplication)?
            || !self.is_goal(&dual)
        {
            return Ok(());
        }

        log::trace!(target: targets::DEDUCTION, "Goal {dual} by material implication");
        self.mark(index, Step::MaterialImplication)?;
        self.add(dual, Step::MaterialImplication, vec![index])?;
        Ok(())
    }

    /// Derives ¬¬P from P, though only when ¬¬P, or some further double negation of P within the negation limit, is a goal.
    pub(super) fn double_negation_introduction(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        if self.applied(index, Step::DoubleNegationIntroduction)? {
            return Ok(());
        }

        if self.double_negation_reaches_goal(wff, self.negation_limit) {
            self.mark(index, Step::DoubleNegationIntroduction)?;
            self.add(wff.negate().negate(), Step::DoubleNegationIntroduction, vec![index])?;
        }
        Ok(())
    }

    fn double_negation_reaches_goal(&self, wff: &Wff, remaining: usize) -> bool {
        if remaining < 2 {
            return false;
        }
        let doubled = wff.negate().negate();
        self.is_goal(&doubled) || self.double_negation_reaches_goal(&doubled, remaining - 2)
    }
}
