//! Adding nodes below the leaves of a tableau, by stacking or by branching.

use std::rc::Rc;

use crate::{
    db::tableau::{Side, TableauKey},
    misc::log::targets::{self},
    procedures::tableau::{Dispatched, Expander},
    structures::wff::Wff,
    types::err::{self},
};

impl Expander<'_> {
    /// Adds a child to `parent`, queues the child, and checks whether the branch of the child is closed.
    pub(super) fn insert(
        &mut self,
        parent: TableauKey,
        wff: Wff,
        derived_from: TableauKey,
        side: Side,
    ) -> Result<TableauKey, err::TableauError> {
        log::trace!(target: targets::TABLEAU, "{side:?} {wff}");
        let key = self
            .tableau
            .add_child(parent, Rc::new(wff), Some(derived_from), side)?;
        self.worklist.push(self.tableau, key)?;
        self.check_closure(key)?;
        Ok(key)
    }

    /// Extends the branch of `leaf` with each wff in turn, skipping any already on the branch, and stopping if the branch closes.
    ///
    /// Returns the new leaf, together with a count of nodes added.
    pub(super) fn stack(
        &mut self,
        leaf: TableauKey,
        wffs: &[Wff],
        derived_from: TableauKey,
    ) -> Result<(TableauKey, usize), err::TableauError> {
        let mut tip = leaf;
        let mut added = 0;

        for wff in wffs {
            if self.tableau.get(tip)?.is_closed() {
                break;
            }
            if self.tableau.branch_contains(tip, wff) {
                continue;
            }
            tip = self.insert(tip, wff.clone(), derived_from, Side::Center)?;
            added += 1;
        }

        Ok((tip, added))
    }

    /// Stacks `wffs` below each of the given leaves.
    pub(super) fn stack_all(
        &mut self,
        derived_from: TableauKey,
        leaves: &[TableauKey],
        wffs: &[Wff],
    ) -> Result<Dispatched, err::TableauError> {
        let mut added = 0;
        for leaf in leaves {
            added += self.stack(*leaf, wffs, derived_from)?.1;
        }
        Ok(Dispatched::Added(added))
    }

    /// Splits each of the given leaves, with `left` stacked on one side and `right` on the other.
    ///
    /// The first wff of each side is always added, as a branch requires two children.
    pub(super) fn branch_all(
        &mut self,
        derived_from: TableauKey,
        leaves: &[TableauKey],
        left: &[Wff],
        right: &[Wff],
    ) -> Result<Dispatched, err::TableauError> {
        let mut added = 0;

        for leaf in leaves {
            for (side, wffs) in [(Side::Left, left), (Side::Right, right)] {
                let Some((first, rest)) = wffs.split_first() else {
                    return Err(err::TableauError::UnexpectedKind);
                };

                let child = self.insert(*leaf, first.clone(), derived_from, side)?;
                added += 1 + self.stack(child, rest, derived_from)?.1;
            }
        }

        Ok(Dispatched::Added(added))
    }
}
