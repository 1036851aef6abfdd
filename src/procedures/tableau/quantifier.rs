/*!
Rules for quantifiers and identities.

- An existential is instantiated once, with a constant fresh to every open branch below it.
- A universal is instantiated with every constant available on a branch, and `a` when no constant is available.
- An identity `a = b` substitutes one side for the other in each closable wff on a branch.

A vacuous quantifier, whose variable does not occur in its body, is replaced by its body without introducing a constant.

Universals and identities are repeatable.
If something was added by one, it is queued again, and otherwise it is held as dormant until an existential introduces a constant or some other repeatable node adds to the tableau.
*/

use std::collections::BTreeSet;

use crate::{
    db::tableau::{Side, TableauKey},
    misc::log::targets::{self},
    procedures::tableau::{Dispatched, Expander},
    structures::{
        constant::{fresh_constant, CONSTANT_MIN},
        wff::{TermKind, Wff},
    },
    types::err::{self},
};

impl Expander<'_> {
    pub(super) fn existential(
        &mut self,
        key: TableauKey,
        open_leaves: &[TableauKey],
    ) -> Result<Dispatched, err::TableauError> {
        let wff = self.tableau.get(key)?.shared_wff();
        if let Some(body) = vacuous_body(&wff) {
            return self.stack_all(key, open_leaves, &[body]);
        }

        let mut unavailable = BTreeSet::default();
        for leaf in open_leaves {
            unavailable.extend(self.tableau.get(*leaf)?.constants().iter().copied());
        }

        let Ok(constant) = fresh_constant(&unavailable) else {
            return Ok(Dispatched::ConstantsExhausted);
        };

        let instance = wff
            .instantiate(constant)
            .ok_or(err::TableauError::UnexpectedKind)?;
        log::trace!(target: targets::SUBSTITUTION, "{wff} instantiated to {instance}");

        let mut added = 0;
        for leaf in open_leaves {
            if self.tableau.branch_contains(*leaf, &instance) {
                continue;
            }
            let child = self.insert(*leaf, instance.clone(), key, Side::Center)?;
            self.tableau.get_mut(child)?.constants.insert(constant);
            added += 1;
        }

        if added > 0 && self.requeue_repeatable {
            self.worklist.wake(self.tableau)?;
        }

        Ok(Dispatched::Added(added))
    }

    pub(super) fn universal(
        &mut self,
        key: TableauKey,
        open_leaves: &[TableauKey],
    ) -> Result<Dispatched, err::TableauError> {
        let wff = self.tableau.get(key)?.shared_wff();
        if !wff.is_universal() {
            return Err(err::TableauError::UnexpectedKind);
        }
        if let Some(body) = vacuous_body(&wff) {
            return self.stack_all(key, open_leaves, &[body]);
        }

        let mut added = 0;
        for leaf in open_leaves {
            let leaf_node = self.tableau.get_mut(*leaf)?;
            if leaf_node.constants.is_empty() {
                leaf_node.constants.insert(CONSTANT_MIN);
            }
            let constants = leaf_node.constants.clone();

            let mut tip = *leaf;
            for constant in constants {
                let instance = wff
                    .instantiate(constant)
                    .ok_or(err::TableauError::UnexpectedKind)?;

                let (new_tip, count) = self.stack(tip, &[instance], key)?;
                if count > 0 {
                    log::trace!(target: targets::SUBSTITUTION, "{wff} instantiated with {constant}");
                }
                tip = new_tip;
                added += count;

                if self.tableau.get(tip)?.is_closed() {
                    break;
                }
            }
        }

        self.settle_repeatable(key, added)?;
        Ok(Dispatched::Added(added))
    }

    pub(super) fn identity(
        &mut self,
        key: TableauKey,
        open_leaves: &[TableauKey],
    ) -> Result<Dispatched, err::TableauError> {
        let wff = self.tableau.get(key)?.shared_wff();
        let Wff::Identity(left, right) = wff.as_ref() else {
            return Err(err::TableauError::UnexpectedKind);
        };
        let (Some(a), Some(b)) = (left.symbol(), right.symbol()) else {
            return Err(err::TableauError::UnexpectedKind);
        };

        if a == b {
            return Ok(Dispatched::Added(0));
        }

        let mut added = 0;
        for leaf in open_leaves {
            let closable = self
                .tableau
                .branch(*leaf)
                .filter(|(ancestor, node)| *ancestor != key && node.wff().is_closable())
                .map(|(_, node)| node.shared_wff())
                .collect::<Vec<_>>();

            let mut tip = *leaf;
            for ancestor in closable {
                let (target, replacement) = if ancestor.mentions(a) {
                    (a, b)
                } else if ancestor.mentions(b) {
                    (b, a)
                } else {
                    continue;
                };

                let substituted = ancestor.substitute(target, replacement, TermKind::Constant);
                if substituted.is_trivial_identity() || self.tableau.branch_contains(tip, &substituted) {
                    continue;
                }

                log::trace!(target: targets::SUBSTITUTION, "{ancestor} to {substituted} by {wff}");
                tip = self.insert(tip, substituted, key, Side::Center)?;
                added += 1;

                self.tableau
                    .get_mut(key)?
                    .substitutions
                    .entry(target)
                    .or_default()
                    .insert(replacement);

                if self.tableau.get(tip)?.is_closed() {
                    break;
                }
            }
        }

        self.settle_repeatable(key, added)?;
        Ok(Dispatched::Added(added))
    }

    /// Queues a repeatable node again if it added something, and otherwise holds the node as dormant.
    fn settle_repeatable(&mut self, key: TableauKey, added: usize) -> Result<(), err::TableauError> {
        if !self.requeue_repeatable {
            return Ok(());
        }

        match added {
            0 => self.worklist.dormant.push(key),
            _ => {
                self.worklist.wake(self.tableau)?;
                self.worklist.requeue(self.tableau, key)?;
            }
        }
        Ok(())
    }
}

/// The body of a vacuous quantifier.
fn vacuous_body(wff: &Wff) -> Option<Wff> {
    match wff.is_vacuous() {
        true => wff.quantified().map(|(_, body)| body.clone()),
        false => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        context::Context,
        reports::{Diagnostic, Report},
        structures::wff::Wff,
    };

    fn p(term: Wff) -> Wff {
        Wff::predicate('P', vec![term]).unwrap()
    }

    fn px() -> Wff {
        p(Wff::variable('x'))
    }

    #[test]
    fn universal_seeds_a() {
        let universal = Wff::universal("x", px()).unwrap();
        let mut the_context = Context::default();
        let tableau = the_context.build_tableau(&universal).unwrap();

        assert_eq!(the_context.report(), Report::Open);
        assert!(tableau
            .walk()
            .iter()
            .any(|step| step.wff == &p(Wff::constant('a'))));
    }

    #[test]
    fn universal_and_existential_counterexample() {
        // (∀x)Px ∧ (∃x)¬Px
        let wff = Wff::and(
            Wff::universal("x", px()).unwrap(),
            Wff::existential("x", px().negate()).unwrap(),
        );
        let mut the_context = Context::default();
        let tableau = the_context.build_tableau(&wff).unwrap();
        assert!(tableau.has_all_closed());
    }

    #[test]
    fn existential_uses_fresh_constant() {
        // Pa ∧ (∃x)¬Px is satisfiable, as the witness need not be a.
        let wff = Wff::and(
            p(Wff::constant('a')),
            Wff::existential("x", px().negate()).unwrap(),
        );
        let mut the_context = Context::default();
        let tableau = the_context.build_tableau(&wff).unwrap();

        assert!(!tableau.has_all_closed());
        assert!(tableau
            .walk()
            .iter()
            .any(|step| step.wff == &p(Wff::constant('b')).negate()));
    }

    #[test]
    fn identity_substitutes() {
        // Pa ∧ a = b ∧ ¬Pb
        let a_b = Wff::identity(Wff::constant('a'), Wff::constant('b')).unwrap();
        let wff = Wff::and(
            p(Wff::constant('a')),
            Wff::and(a_b, p(Wff::constant('b')).negate()),
        );
        let mut the_context = Context::default();
        let tableau = the_context.build_tableau(&wff).unwrap();
        assert!(tableau.has_all_closed());
        assert!(tableau.walk().iter().any(|step| step.repeatable));
    }

    #[test]
    fn vacuous_quantifiers_take_no_constant() {
        // (∃x)Q ∧ (∀x)¬Q
        let q = Wff::atom('Q');
        let wff = Wff::and(
            Wff::existential("x", q.clone()).unwrap(),
            Wff::universal("x", q.negate()).unwrap(),
        );
        let mut the_context = Context::default();
        let tableau = the_context.build_tableau(&wff).unwrap();

        assert!(tableau.has_all_closed());
        assert!(tableau.walk().iter().all(|step| {
            tableau
                .get(step.key)
                .is_ok_and(|node| node.constants().is_empty())
        }));
    }

    #[test]
    fn unbounded_universal_exhausts_constants() {
        // (∀x)(∃y)Rxy
        let rxy = Wff::predicate('R', vec![Wff::variable('x'), Wff::variable('y')]).unwrap();
        let wff = Wff::universal("x", Wff::existential("y", rxy).unwrap()).unwrap();

        let mut the_context = Context::default();
        let tableau = the_context.build_tableau(&wff).unwrap();

        assert_eq!(the_context.report(), Report::Unknown);
        assert!(!tableau.has_all_closed());
        assert_eq!(the_context.diagnostics(), &[Diagnostic::ConstantsExhausted]);
    }

    #[test]
    fn dispatch_ceiling() {
        let rxy = Wff::predicate('R', vec![Wff::variable('x'), Wff::variable('y')]).unwrap();
        let wff = Wff::universal("x", Wff::existential("y", rxy).unwrap()).unwrap();

        let mut config = Config::default();
        config.tableau_limit.set(5).unwrap();
        let mut the_context = Context::from_config(config);
        let _ = the_context.build_tableau(&wff).unwrap();

        assert_eq!(the_context.report(), Report::Unknown);
        assert_eq!(
            the_context.diagnostics(),
            &[Diagnostic::TableauTimeout { dispatches: 5 }]
        );
    }
}
