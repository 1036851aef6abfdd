//! Extraction of a proof from a finished search.
//!
//! Only the derivations the conclusion depends on are kept, in the order they were derived.
//! Each kept derivation is marked active, and its parents are renumbered as line numbers of the proof, counting from 1.
//!
//! If the conclusion was found among the premises, the proof closes with a [Conclusion](Step::Conclusion) line citing the premise.

use std::collections::BTreeMap;

use crate::{
    misc::log::targets::{self},
    procedures::deduction::{Deduction, DerivationLine},
    structures::step::Step,
    types::err::{self},
};

impl Deduction {
    pub(super) fn finalize(&mut self, found: usize) -> Result<Vec<DerivationLine>, err::ErrorKind> {
        let found = match self.db.get(found)?.step() {
            Step::Premise => {
                let conclusion = self.conclusion().clone();
                self.db.insert(conclusion, Step::Conclusion, vec![found])?
            }
            _ => found,
        };

        let ancestors = self.db.ancestors_of(found);

        let line_numbers = ancestors
            .iter()
            .enumerate()
            .map(|(line, index)| (*index, line + 1))
            .collect::<BTreeMap<_, _>>();

        let mut proof = Vec::with_capacity(ancestors.len());
        for index in ancestors {
            let node = self.db.get_mut(index)?;

            let mut indices = Vec::with_capacity(node.parents().len());
            for parent in node.parents() {
                match line_numbers.get(parent) {
                    Some(line) => indices.push(*line),
                    None => return Err(err::DeductionError::MissingNode.into()),
                }
            }
            indices.sort_unstable();

            node.active = true;
            node.indices = indices.clone();

            proof.push(DerivationLine {
                formula: node.wff().clone(),
                step: node.step(),
                parents: indices,
            });
        }

        log::info!(target: targets::FINALIZE, "{} of {} derivations used", proof.len(), self.db.len());
        for (number, line) in proof.iter().enumerate() {
            log::trace!(target: targets::FINALIZE, "{}. {line}", number + 1);
        }

        Ok(proof)
    }
}
