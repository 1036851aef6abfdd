/*!
Expansion of a tableau (truth tree).

A tableau decides the satisfiability of a wff by decomposing it into the literals which would need to be true on each case the wff allows.
Each case is a branch of the tableau, and a branch is closed once it contains a contradiction.
If every branch is closed the wff is unsatisfiable, and otherwise (on a complete expansion) the wff is satisfiable.

# Overview

Every node added to a tableau is placed on a worklist, ordered by the [precedence](crate::db::tableau::precedence) of the formula of the node (and then by order of creation).
The expansion loop pops the lowest node from the worklist and dispatches on the kind of the formula:

| Formula   | Result                                                 |
|-----------|--------------------------------------------------------|
| ¬(P ↔ Q)  | branch on (P, ¬Q) and (¬P, Q)                          |
| ¬(P → Q)  | stack P then ¬Q                                        |
| ¬(P ⊕ Q)  | branch on (P, Q) and (¬P, ¬Q)                          |
| ¬P        | stack the [flip](crate::structures::wff::Wff::flip) of P, unless P is a literal |
| (∃x)P     | stack an instance of P with a fresh constant           |
| (∀x)P     | stack an instance of P for each constant on the branch |
| a = b     | stack substituted copies of literals on the branch     |
| P ∧ Q     | stack P then Q                                         |
| P ∨ Q     | branch on P and Q                                      |
| P → Q     | branch on ¬P and Q                                     |
| P ↔ Q     | branch on (P, Q) and (¬P, ¬Q)                          |
| P ⊕ Q     | branch on (P, ¬Q) and (¬P, Q)                          |

Results are added below each open leaf below the node dispatched, and a node with no open leaf below it is skipped.
A formula is never stacked onto a branch which already contains it, and so a rule applied twice to the same branch adds nothing the second time.

Universals and identities may apply many times, as new constants (or literals) appear on a branch.
So, after adding to a tableau a universal or identity is placed back on the worklist, and when nothing is added it is held until something else changes the tableau.

```none
          +-----------------+
  +------>| pop the worklist |-----> complete, if the worklist is empty or every leaf is closed
  |       +-----------------+
  |               |
  |               +------------> timeout, if the dispatch limit is reached
  |               ⌄
  |         +----------+
  +---------| dispatch |--------> constants exhausted, if a fresh constant is needed and none remain
            +----------+
```

# Example

```rust
# use wff_prover::context::Context;
# use wff_prover::reports::Report;
# use wff_prover::structures::wff::Wff;
let mut the_context = Context::default();

let p = Wff::atom('P');
let excluded_middle = Wff::or(p.clone(), p.negate());

let tableau = the_context.build_tableau(&excluded_middle).unwrap();
assert!(!tableau.has_all_closed());
assert_eq!(the_context.report(), Report::Open);
```
*/

mod closure;
mod quantifier;
mod rules;

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    context::Context,
    db::tableau::{Expansion, Precedence, Tableau, TableauKey},
    misc::log::targets::{self},
    reports::{Diagnostic, Report},
    structures::wff::Wff,
    types::err::{self},
};

/// The result of dispatching a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Dispatched {
    /// Some count of nodes were added.
    Added(usize),

    /// A fresh constant was needed, though none were available.
    ConstantsExhausted,
}

/// Nodes waiting to be dispatched.
#[derive(Default)]
pub(crate) struct Worklist {
    queue: BinaryHeap<Reverse<(Precedence, usize, TableauKey)>>,

    /// Repeatable nodes which added nothing when last dispatched.
    dormant: Vec<TableauKey>,
}

impl Worklist {
    fn pop(&mut self) -> Option<TableauKey> {
        self.queue.pop().map(|Reverse((_, _, key))| key)
    }

    /// Queues a node, using the identifier of the node to order nodes of equal precedence.
    fn push(&mut self, tableau: &Tableau, key: TableauKey) -> Result<(), err::TableauError> {
        let node = tableau.get(key)?;
        self.queue
            .push(Reverse((node.precedence(), node.id(), key)));
        Ok(())
    }

    /// Queues a node after every other node of equal precedence.
    fn requeue(&mut self, tableau: &mut Tableau, key: TableauKey) -> Result<(), err::TableauError> {
        let precedence = tableau.get(key)?.precedence();
        let id = tableau.fresh_id();
        self.queue.push(Reverse((precedence, id, key)));
        Ok(())
    }

    fn wake(&mut self, tableau: &mut Tableau) -> Result<(), err::TableauError> {
        for key in std::mem::take(&mut self.dormant) {
            log::trace!(target: targets::TABLEAU, "Waking {key:?}");
            self.requeue(tableau, key)?;
        }
        Ok(())
    }
}

/// A tableau during expansion, together with its worklist.
pub(crate) struct Expander<'t> {
    pub tableau: &'t mut Tableau,
    pub worklist: Worklist,
    requeue_repeatable: bool,
}

impl<'t> Expander<'t> {
    fn new(tableau: &'t mut Tableau, requeue_repeatable: bool) -> Self {
        Expander {
            tableau,
            worklist: Worklist::default(),
            requeue_repeatable,
        }
    }

    /// Queues every node without children and checks the closure of every leaf.
    fn seed(&mut self) -> Result<(), err::TableauError> {
        let leaves = self.tableau.leaves_below(self.tableau.root());
        for leaf in leaves {
            self.check_closure(leaf)?;
            self.worklist.push(self.tableau, leaf)?;
        }
        Ok(())
    }

    /// Applies the rule for the formula of the node to each open leaf below the node.
    fn dispatch(&mut self, key: TableauKey) -> Result<Dispatched, err::TableauError> {
        let open_leaves = self.tableau.open_leaves_below(key);
        if open_leaves.is_empty() {
            return Ok(Dispatched::Added(0));
        }

        let wff = self.tableau.get(key)?.shared_wff();
        log::trace!(target: targets::TABLEAU, "Dispatch {wff} over {} leaves", open_leaves.len());

        let dispatched = match wff.as_ref() {
            Wff::Not(inner) => match inner.as_ref() {
                Wff::Iff(p, q) => {
                    let left = [p.as_ref().clone(), q.negate()];
                    let right = [p.negate(), q.as_ref().clone()];
                    self.branch_all(key, &open_leaves, &left, &right)?
                }

                Wff::Implies(p, q) => {
                    let stack = [p.as_ref().clone(), q.negate()];
                    self.stack_all(key, &open_leaves, &stack)?
                }

                Wff::Xor(p, q) => {
                    let left = [p.as_ref().clone(), q.as_ref().clone()];
                    let right = [p.negate(), q.negate()];
                    self.branch_all(key, &open_leaves, &left, &right)?
                }

                Wff::Atom(_) | Wff::Predicate(..) | Wff::Identity(..) | Wff::False => Dispatched::Added(0),

                _ => self.stack_all(key, &open_leaves, &[inner.flip()])?,
            },

            Wff::And(p, q) => {
                let stack = [p.as_ref().clone(), q.as_ref().clone()];
                self.stack_all(key, &open_leaves, &stack)?
            }

            Wff::Or(p, q) => {
                let left = [p.as_ref().clone()];
                let right = [q.as_ref().clone()];
                self.branch_all(key, &open_leaves, &left, &right)?
            }

            Wff::Implies(p, q) => {
                let left = [p.negate()];
                let right = [q.as_ref().clone()];
                self.branch_all(key, &open_leaves, &left, &right)?
            }

            Wff::Iff(p, q) => {
                let left = [p.as_ref().clone(), q.as_ref().clone()];
                let right = [p.negate(), q.negate()];
                self.branch_all(key, &open_leaves, &left, &right)?
            }

            Wff::Xor(p, q) => {
                let left = [p.as_ref().clone(), q.negate()];
                let right = [p.negate(), q.as_ref().clone()];
                self.branch_all(key, &open_leaves, &left, &right)?
            }

            Wff::Existential(..) => self.existential(key, &open_leaves)?,

            Wff::Universal(..) => self.universal(key, &open_leaves)?,

            Wff::Identity(..) => self.identity(key, &open_leaves)?,

            Wff::Root(inner) => self.stack_all(key, &open_leaves, &[inner.as_ref().clone()])?,

            Wff::Atom(_) | Wff::Predicate(..) | Wff::False => Dispatched::Added(0),

            Wff::Variable(_) | Wff::Constant(_) => return Err(err::TableauError::UnexpectedKind),
        };

        Ok(dispatched)
    }
}

impl Context {
    /// Builds and expands a tableau with the given wff at the root.
    ///
    /// The context is [reset](Context::reset) before the tableau is built.
    pub fn build_tableau(&mut self, wff: &Wff) -> Result<Tableau, err::ErrorKind> {
        self.reset();
        let mut tableau = Tableau::from_root(wff.clone());
        self.expand(&mut tableau)?;
        Ok(tableau)
    }

    /// Expands a tableau until every branch is closed, no rule applies, or some limit is reached.
    ///
    /// Any leaf of the tableau is treated as unexpanded, so a tableau built from some root may be expanded directly.
    /// Counters are added to, and so a call to [reset](Context::reset) may be needed.
    pub fn expand(&mut self, tableau: &mut Tableau) -> Result<Report, err::ErrorKind> {
        let root = tableau.root();
        let limit = self.config.tableau_limit.value;
        let mut expander = Expander::new(tableau, self.config.requeue_universals.value);
        expander.seed()?;

        let status = 'expansion: loop {
            if expander.tableau.all_closed_below(root) {
                break 'expansion Expansion::Complete;
            }

            let Some(key) = expander.worklist.pop() else {
                break 'expansion Expansion::Complete;
            };

            if self.counters.dispatches >= limit {
                self.note(Diagnostic::TableauTimeout {
                    dispatches: self.counters.dispatches,
                });
                break 'expansion Expansion::Timeout;
            }
            self.counters.dispatches += 1;

            match expander.dispatch(key)? {
                Dispatched::Added(0) => {}

                Dispatched::Added(count) => {
                    log::trace!(target: targets::TABLEAU, "Added {count} nodes");
                }

                Dispatched::ConstantsExhausted => {
                    self.note(Diagnostic::ConstantsExhausted);
                    break 'expansion Expansion::ConstantsExhausted;
                }
            }
        };

        tableau.status = status;
        self.counters.tableau_nodes = tableau.len();

        let report = tableau.verdict();
        log::info!(target: targets::TABLEAU, "Expansion finished: {report} after {} dispatches", self.counters.dispatches);

        self.set_report(report);
        Ok(report)
    }
}

impl Tableau {
    /// The verdict on the root formula, given the status of the expansion.
    pub fn verdict(&self) -> Report {
        match (self.status, self.has_all_closed()) {
            (_, true) => Report::Closed,
            (Expansion::Complete, false) => Report::Open,
            (_, false) => Report::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, db::tableau::Shape};

    fn expanded(wff: &Wff) -> (Context, Tableau) {
        let mut the_context = Context::from_config(Config::default());
        let tableau = the_context.build_tableau(wff).unwrap();
        (the_context, tableau)
    }

    #[test]
    fn contradiction_stacks() {
        let p = Wff::atom('P');
        let (the_context, tableau) = expanded(&Wff::and(p.clone(), p.negate()));

        let walk = tableau.walk();
        assert_eq!(walk.len(), 3);
        assert_eq!(walk[0].shape, Shape::Stack);
        assert_eq!(walk[1].wff, &p);
        assert_eq!(walk[2].wff, &p.negate());
        assert!(tableau.has_all_closed());
        assert_eq!(the_context.report(), Report::Closed);
    }

    #[test]
    fn excluded_middle_branches() {
        let p = Wff::atom('P');
        let (the_context, tableau) = expanded(&Wff::or(p.clone(), p.negate()));

        let walk = tableau.walk();
        assert_eq!(walk[0].shape, Shape::Branch);
        assert_eq!(walk.len(), 3);
        assert!(walk.iter().skip(1).all(|step| !step.closed));
        assert!(!tableau.has_some_closed());
        assert_eq!(the_context.report(), Report::Open);
    }

    #[test]
    fn negated_biconditional() {
        let p = Wff::atom('P');
        let q = Wff::atom('Q');
        let wff = Wff::and(
            Wff::iff(p.clone(), q.clone()).negate(),
            Wff::and(p.clone(), q.clone()),
        );
        let (_, tableau) = expanded(&wff);
        assert!(tableau.has_all_closed());
    }

    #[test]
    fn exclusive_or() {
        let p = Wff::atom('P');
        let xor_self = Wff::xor(p.clone(), p.clone());
        let (_, tableau) = expanded(&xor_self);
        assert!(tableau.has_all_closed());

        let (_, tableau) = expanded(&xor_self.negate());
        assert!(!tableau.has_all_closed());
    }

    #[test]
    fn falsum_closes() {
        let (_, tableau) = expanded(&Wff::and(Wff::atom('P'), Wff::False));
        assert!(tableau.has_all_closed());

        let (_, tableau) = expanded(&Wff::False.negate());
        assert!(!tableau.has_all_closed());
    }

    #[test]
    fn terms_are_not_formulas() {
        let mut the_context = Context::default();
        let wff = Wff::and(Wff::atom('P'), Wff::constant('a'));
        assert_eq!(
            the_context.build_tableau(&wff).err(),
            Some(err::ErrorKind::Tableau(err::TableauError::UnexpectedKind))
        );
    }
}
