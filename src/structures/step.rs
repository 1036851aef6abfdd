/*!
Tags for the steps of a derivation.

Each step has a short code (used when listing the justification of a line), a long name, and a TeX command.
*/

use serde::Serialize;

/// The rule (or other source) by which a line of a derivation is justified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Step {
    Premise,
    AssumptionForRAA,
    Conclusion,

    ModusPonens,
    ModusTollens,
    HypotheticalSyllogism,
    DisjunctiveSyllogism,

    ConjunctionElimination,
    ConjunctionIntroduction,
    DisjunctionIntroduction,

    DeMorgan,
    MaterialImplication,
    BiconditionalElimination,
    BiconditionalIntroduction,
    Transposition,

    ConstructiveDilemma,
    DestructiveDilemma,

    DoubleNegationIntroduction,
    DoubleNegationElimination,

    ExistentialIntroduction,
    ExistentialElimination,
    UniversalIntroduction,
    UniversalElimination,

    ContradictionIntroduction,
    ContradictionElimination,
}

impl Step {
    /// The short code of the step.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Premise => "Ass.",
            Self::AssumptionForRAA => "Ass. for RAA",
            Self::Conclusion => "C",
            Self::ModusPonens => "MP",
            Self::ModusTollens => "MT",
            Self::HypotheticalSyllogism => "HS",
            Self::DisjunctiveSyllogism => "DS",
            Self::ConjunctionElimination => "&E",
            Self::ConjunctionIntroduction => "&I",
            Self::DisjunctionIntroduction => "∨I",
            Self::DeMorgan => "DeM",
            Self::MaterialImplication => "MI",
            Self::BiconditionalElimination => "↔E",
            Self::BiconditionalIntroduction => "↔I",
            Self::Transposition => "TP",
            Self::ConstructiveDilemma => "CD",
            Self::DestructiveDilemma => "DD",
            Self::DoubleNegationIntroduction => "DNI",
            Self::DoubleNegationElimination => "DNE",
            Self::ExistentialIntroduction => "∃I",
            Self::ExistentialElimination => "∃E",
            Self::UniversalIntroduction => "UI",
            Self::UniversalElimination => "UE",
            Self::ContradictionIntroduction => "⊥I",
            Self::ContradictionElimination => "⊥E",
        }
    }

    /// The long name of the step.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Premise => "Assumption",
            Self::AssumptionForRAA => "Assumption for Reductio Ad Absurdum",
            Self::Conclusion => "Conclusion",
            Self::ModusPonens => "Modus Ponens",
            Self::ModusTollens => "Modus Tollens",
            Self::HypotheticalSyllogism => "Hypothetical Syllogism",
            Self::DisjunctiveSyllogism => "Disjunctive Syllogism",
            Self::ConjunctionElimination => "Conjunction Elimination",
            Self::ConjunctionIntroduction => "Conjunction Introduction",
            Self::DisjunctionIntroduction => "Disjunction Introduction",
            Self::DeMorgan => "De Morgan",
            Self::MaterialImplication => "Material Implication",
            Self::BiconditionalElimination => "Biconditional Elimination",
            Self::BiconditionalIntroduction => "Biconditional Introduction",
            Self::Transposition => "Transposition",
            Self::ConstructiveDilemma => "Constructive Dilemma",
            Self::DestructiveDilemma => "Destructive Dilemma",
            Self::DoubleNegationIntroduction => "Double Negation Introduction",
            Self::DoubleNegationElimination => "Double Negation Elimination",
            Self::ExistentialIntroduction => "Existential Introduction",
            Self::ExistentialElimination => "Existential Elimination",
            Self::UniversalIntroduction => "Universal Introduction",
            Self::UniversalElimination => "Universal Elimination",
            Self::ContradictionIntroduction => "Contradiction",
            Self::ContradictionElimination => "Contradiction Elimination",
        }
    }

    /// The TeX command for the step.
    pub fn tex(&self) -> &'static str {
        match self {
            Self::ConjunctionElimination => "{$\\varland$}E",
            Self::ConjunctionIntroduction => "{$\\varland$}I",
            Self::DisjunctionIntroduction => "{$\\lor$}I",
            Self::BiconditionalElimination => "{$\\varliff$}E",
            Self::BiconditionalIntroduction => "{$\\varliff$}I",
            Self::ExistentialIntroduction => "{$\\exists$}I",
            Self::ExistentialElimination => "{$\\exists$}E",
            Self::ContradictionIntroduction => "{$\\bot$}I",
            Self::ContradictionElimination => "{$\\bot$}E",
            Self::Transposition => "Trans.",
            Self::Conclusion => "",
            _ => self.code(),
        }
    }

    /// True for the steps which introduce a line without justification.
    pub fn is_assumption(&self) -> bool {
        matches!(self, Self::Premise | Self::AssumptionForRAA)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
