//! Closing the branches of a tableau.
//!
//! A branch is closed when it contains:
//! - Some closable wff and its negation, where identities are compared commutatively.
//! - Falsum.
//! - The negation of a trivial identity, e.g. ¬(a = a).
//!
//! Closure is checked on a leaf each time a leaf is added, and only leaves are marked closed.

use std::collections::BTreeSet;

use crate::{
    db::tableau::{Tableau, TableauKey},
    misc::log::targets::{self},
    procedures::tableau::Expander,
    structures::wff::Wff,
    types::err::{self},
};

impl Tableau {
    /// True if the branch ending at `leaf` contains a contradiction.
    pub fn branch_is_contradictory(&self, leaf: TableauKey) -> bool {
        let mut affirmed = BTreeSet::default();
        let mut denied = BTreeSet::default();

        for (_, node) in self.branch(leaf) {
            let wff = node.wff();
            if wff.is_false() {
                return true;
            }
            if !wff.is_closable() {
                continue;
            }

            match wff {
                Wff::Not(inner) => {
                    if inner.is_trivial_identity() {
                        return true;
                    }
                    denied.insert(inner.canonical());
                    if let Some(commuted) = inner.commuted() {
                        denied.insert(commuted.canonical());
                    }
                }
                _ => {
                    affirmed.insert(wff.canonical());
                }
            }
        }

        !affirmed.is_disjoint(&denied)
    }
}

impl Expander<'_> {
    /// Closes `leaf` if the branch of `leaf` contains a contradiction, and returns whether the leaf is closed.
    pub(super) fn check_closure(&mut self, leaf: TableauKey) -> Result<bool, err::TableauError> {
        if self.tableau.get(leaf)?.is_closed() {
            return Ok(true);
        }

        match self.tableau.branch_is_contradictory(leaf) {
            true => {
                log::trace!(target: targets::CLOSURE, "Closed at {}", self.tableau.get(leaf)?.wff());
                self.tableau.close(leaf)?;
                Ok(true)
            }
            false => Ok(false),
        }
    }
}
