//! Rules for quantifiers.
//!
//! - Existential elimination instantiates an existential once, with a constant not otherwise known to the search.
//! - Universal elimination instantiates a universal with each known constant, and with `a` if no constant is known.
//!   As constants become known, a universal is instantiated again.
//! - Existential introduction derives an existential conclusion from any instance of its body.
//! - Universal introduction derives a universal conclusion from an instance of its body, for a constant introduced without reference to any premise, the conclusion, or an existential.
//! - A vacuous quantifier is eliminated to its body, without reference to any constant.

use crate::{
    misc::log::targets::{self},
    procedures::deduction::Deduction,
    structures::{
        constant::{fresh_constant, CONSTANT_MAX, CONSTANT_MIN},
        step::Step,
        wff::Wff,
    },
    types::err::{self},
};

impl Deduction {
    pub(super) fn existential_elimination(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        if !wff.is_existential() || self.applied(index, Step::ExistentialElimination)? {
            return Ok(());
        }

        if let Some((_, body)) = wff.quantified().filter(|_| wff.is_vacuous()) {
            self.mark(index, Step::ExistentialElimination)?;
            self.add(body.clone(), Step::ExistentialElimination, vec![index])?;
            return Ok(());
        }

        let Ok(constant) = fresh_constant(&self.known) else {
            log::warn!(target: targets::SUBSTITUTION, "No constant for {wff}");
            self.exhausted = true;
            return Ok(());
        };

        let instance = wff.instantiate(constant).ok_or(err::WffError::UnexpectedKind)?;
        log::trace!(target: targets::SUBSTITUTION, "{wff} instantiated with {constant}");

        self.mark(index, Step::ExistentialElimination)?;
        self.known.insert(constant);
        self.add(instance, Step::ExistentialElimination, vec![index])?;
        Ok(())
    }

    pub(super) fn universal_elimination(&mut self, index: usize, wff: &Wff) -> Result<(), err::ErrorKind> {
        if !wff.is_universal() {
            return Ok(());
        }

        if let Some((_, body)) = wff.quantified().filter(|_| wff.is_vacuous()) {
            if self.mark(index, Step::UniversalElimination)? {
                self.add(body.clone(), Step::UniversalElimination, vec![index])?;
            }
            return Ok(());
        }

        if self.known.is_empty() {
            log::trace!(target: targets::SUBSTITUTION, "Seeding {CONSTANT_MIN}");
            self.known.insert(CONSTANT_MIN);
            self.arbitrary.insert(CONSTANT_MIN);
        }

        let fresh = self
            .known
            .difference(self.db.get(index)?.instantiated())
            .copied()
            .collect::<Vec<_>>();

        if fresh.is_empty() {
            return Ok(());
        }
        self.mark(index, Step::UniversalElimination)?;

        for constant in fresh {
            let instance = wff.instantiate(constant).ok_or(err::WffError::UnexpectedKind)?;
            log::trace!(target: targets::SUBSTITUTION, "{wff} instantiated with {constant}");

            self.db.get_mut(index)?.instantiated.insert(constant);
            self.add(instance, Step::UniversalElimination, vec![index])?;
        }
        Ok(())
    }

    pub(super) fn existential_introduction(&mut self) -> Result<(), err::ErrorKind> {
        let conclusion = self.conclusion().clone();

        for constant in CONSTANT_MIN..=CONSTANT_MAX {
            let instance = conclusion
                .instantiate(constant)
                .ok_or(err::WffError::UnexpectedKind)?;

            if let Some(witness) = self.db.position(&instance) {
                self.add(conclusion, Step::ExistentialIntroduction, vec![witness])?;
                break;
            }
        }
        Ok(())
    }

    pub(super) fn universal_introduction(&mut self) -> Result<(), err::ErrorKind> {
        let conclusion = self.conclusion().clone();

        for constant in self.arbitrary.clone() {
            let instance = conclusion
                .instantiate(constant)
                .ok_or(err::WffError::UnexpectedKind)?;

            if let Some(instance) = self.db.position(&instance) {
                self.add(conclusion, Step::UniversalIntroduction, vec![instance])?;
                break;
            }
        }
        Ok(())
    }
}
