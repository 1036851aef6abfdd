//! Pure transformations of a wff: negation, pushing a negation inwards, and substitution of terms.
//!
//! Each transformation allocates a fresh tree and leaves the input untouched.

use std::collections::BTreeSet;

use super::Wff;

/// Whether a substituted symbol is inserted as a constant or as a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermKind {
    Constant,
    Variable,
}

impl Wff {
    /// The wff wrapped in a single negation.
    pub fn negate(&self) -> Wff {
        Wff::not(self.clone())
    }

    /// A wff equivalent to the negation of `self`, with the negation pushed one level inwards.
    ///
    /// - ¬(P ∧ Q) is P' ∨ Q', where P' is the negation of P, etc.
    /// - ¬(P ∨ Q) is P' ∧ Q'.
    /// - ¬(P → Q) is P ∧ Q'.
    /// - ¬(P ↔ Q) is (P ∧ Q') ∨ (P' ∧ Q).
    /// - ¬(P ⊕ Q) is P ↔ Q.
    /// - ¬¬P is P.
    /// - ¬(∀x)P is (∃x)P' and ¬(∃x)P is (∀x)P'.
    ///
    /// Otherwise, the wff is simply [negated](Wff::negate).
    pub fn flip(&self) -> Wff {
        match self {
            Wff::And(p, q) => Wff::or(p.negate(), q.negate()),
            Wff::Or(p, q) => Wff::and(p.negate(), q.negate()),
            Wff::Implies(p, q) => Wff::and(p.as_ref().clone(), q.negate()),
            Wff::Iff(p, q) => Wff::or(
                Wff::and(p.as_ref().clone(), q.negate()),
                Wff::and(p.negate(), q.as_ref().clone()),
            ),
            Wff::Xor(p, q) => Wff::iff(p.as_ref().clone(), q.as_ref().clone()),
            Wff::Not(p) => p.as_ref().clone(),
            Wff::Universal(variable, body) => Wff::Existential(*variable, Box::new(body.negate())),
            Wff::Existential(variable, body) => Wff::Universal(*variable, Box::new(body.negate())),
            Wff::Root(wff) => wff.flip(),
            _ => self.negate(),
        }
    }

    /// True if the wff is an atom, predicate, or identity, or the (single) negation of one of these.
    ///
    /// Only closable wffs are checked for contradictions when closing the branch of a tableau.
    pub fn is_closable(&self) -> bool {
        match self {
            Wff::Atom(_) | Wff::Predicate(..) | Wff::Identity(..) => true,
            Wff::Not(inner) => matches!(
                inner.as_ref(),
                Wff::Atom(_) | Wff::Predicate(..) | Wff::Identity(..)
            ),
            _ => false,
        }
    }

    /// A copy of the wff with every term whose symbol is `target` replaced by `replacement`, as a term of the given kind.
    pub fn substitute(&self, target: char, replacement: char, kind: TermKind) -> Wff {
        match self {
            Wff::Variable(symbol) | Wff::Constant(symbol) if *symbol == target => match kind {
                TermKind::Constant => Wff::Constant(replacement),
                TermKind::Variable => Wff::Variable(replacement),
            },

            Wff::Atom(_) | Wff::Variable(_) | Wff::Constant(_) | Wff::False => self.clone(),

            Wff::Predicate(letter, parameters) => Wff::Predicate(
                *letter,
                parameters
                    .iter()
                    .map(|parameter| parameter.substitute(target, replacement, kind))
                    .collect(),
            ),

            Wff::Not(p) => Wff::not(p.substitute(target, replacement, kind)),
            Wff::Root(p) => Wff::root(p.substitute(target, replacement, kind)),

            Wff::And(p, q) => Wff::and(
                p.substitute(target, replacement, kind),
                q.substitute(target, replacement, kind),
            ),
            Wff::Or(p, q) => Wff::or(
                p.substitute(target, replacement, kind),
                q.substitute(target, replacement, kind),
            ),
            Wff::Implies(p, q) => Wff::implies(
                p.substitute(target, replacement, kind),
                q.substitute(target, replacement, kind),
            ),
            Wff::Iff(p, q) => Wff::iff(
                p.substitute(target, replacement, kind),
                q.substitute(target, replacement, kind),
            ),
            Wff::Xor(p, q) => Wff::xor(
                p.substitute(target, replacement, kind),
                q.substitute(target, replacement, kind),
            ),
            Wff::Identity(p, q) => Wff::Identity(
                Box::new(p.substitute(target, replacement, kind)),
                Box::new(q.substitute(target, replacement, kind)),
            ),

            Wff::Universal(variable, body) => Wff::Universal(
                *variable,
                Box::new(body.substitute(target, replacement, kind)),
            ),
            Wff::Existential(variable, body) => Wff::Existential(
                *variable,
                Box::new(body.substitute(target, replacement, kind)),
            ),
        }
    }

    /// The body of a quantifier, with the bound variable replaced by `constant`.
    pub fn instantiate(&self, constant: char) -> Option<Wff> {
        self.quantified()
            .map(|(variable, body)| body.substitute(variable, constant, TermKind::Constant))
    }

    /// The symbols of every constant in the wff.
    pub fn constants(&self) -> BTreeSet<char> {
        let mut constants = BTreeSet::default();
        self.constants_helper(&mut constants);
        constants
    }

    fn constants_helper(&self, constants: &mut BTreeSet<char>) {
        match self {
            Wff::Constant(symbol) => {
                constants.insert(*symbol);
            }
            _ => {
                for child in self.children() {
                    child.constants_helper(constants);
                }
            }
        }
    }

    /// True if some term of the wff has the given symbol.
    pub fn mentions(&self, symbol: char) -> bool {
        match self {
            Wff::Variable(s) | Wff::Constant(s) => *s == symbol,
            _ => self.children().iter().any(|child| child.mentions(symbol)),
        }
    }

    /// True if the wff is a quantifier whose variable does not occur in its body.
    pub fn is_vacuous(&self) -> bool {
        self.quantified()
            .is_some_and(|(variable, body)| !body.mentions(variable))
    }

    /// True if the wff is an identity between some term and itself, e.g. `a = a`.
    pub fn is_trivial_identity(&self) -> bool {
        match self {
            Wff::Identity(left, right) => left.symbol() == right.symbol(),
            _ => false,
        }
    }

    /// The longest run of consecutive negations anywhere in the wff, e.g. 3 for `P ∧ ¬¬¬Q`.
    pub fn negation_depth(&self) -> usize {
        match self {
            Wff::Not(inner) => {
                let mut run = 1;
                let mut below = inner.as_ref();
                while let Wff::Not(next) = below {
                    run += 1;
                    below = next;
                }
                run.max(below.negation_depth())
            }
            _ => self
                .children()
                .iter()
                .map(|child| child.negation_depth())
                .max()
                .unwrap_or(0),
        }
    }

    /// True if the wff is a binary connective whose operands are structurally equal, e.g. `A ∧ A` or `A → A`.
    pub fn is_redundant(&self) -> bool {
        self.operands()
            .is_some_and(|(left, right)| left.structurally_equals(right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(term: Wff) -> Wff {
        Wff::predicate('P', vec![term]).unwrap()
    }

    #[test]
    fn flip_de_morgan() {
        let p = Wff::atom('P');
        let q = Wff::atom('Q');

        let flipped = Wff::and(p.clone(), q.clone()).flip();
        assert_eq!(flipped, Wff::or(p.negate(), q.negate()));

        let flipped = Wff::implies(p.clone(), q.clone()).flip();
        assert_eq!(flipped, Wff::and(p.clone(), q.negate()));

        assert_eq!(p.negate().flip(), p);
        assert_eq!(p.flip(), p.negate());
    }

    #[test]
    fn flip_quantifier() {
        let universal = Wff::universal("x", px(Wff::variable('x'))).unwrap();
        let expected = Wff::existential("x", px(Wff::variable('x')).negate()).unwrap();
        assert_eq!(universal.flip(), expected);
    }

    #[test]
    fn flip_does_not_mutate() {
        let wff = Wff::or(Wff::atom('P'), Wff::atom('Q'));
        let copy = wff.clone();
        let _ = wff.flip();
        assert_eq!(wff, copy);
    }

    #[test]
    fn closable() {
        let p = Wff::atom('P');
        assert!(p.is_closable());
        assert!(p.negate().is_closable());
        assert!(!p.negate().negate().is_closable());
        assert!(!Wff::and(p.clone(), p.clone()).is_closable());

        let identity = Wff::identity(Wff::constant('a'), Wff::constant('b')).unwrap();
        assert!(identity.negate().is_closable());
    }

    #[test]
    fn substitution_copies() {
        let universal = Wff::universal("x", px(Wff::variable('x'))).unwrap();
        let instance = universal.instantiate('a').unwrap();

        assert_eq!(instance, px(Wff::constant('a')));
        assert!(universal.mentions('x'));
        assert_eq!(instance.constants(), BTreeSet::from(['a']));
    }

    #[test]
    fn substitution_of_constants() {
        let identity = Wff::identity(Wff::constant('a'), Wff::constant('b')).unwrap();
        let substituted = identity.substitute('a', 'b', TermKind::Constant);
        assert!(substituted.is_trivial_identity());
    }

    #[test]
    fn vacuous() {
        let vacuous = Wff::universal("x", Wff::atom('P')).unwrap();
        assert!(vacuous.is_vacuous());
        let bound = Wff::universal("x", px(Wff::variable('x'))).unwrap();
        assert!(!bound.is_vacuous());
    }

    #[test]
    fn negation_runs() {
        let p = Wff::atom('P');
        let q = Wff::atom('Q');
        assert_eq!(p.negation_depth(), 0);
        assert_eq!(p.negate().negate().negation_depth(), 2);

        let mixed = Wff::and(p.negate(), Wff::implies(q.negate().negate().negate(), p.clone()));
        assert_eq!(mixed.negation_depth(), 3);

        let split = Wff::and(p.clone(), q.negate()).negate().negate();
        assert_eq!(split.negation_depth(), 2);
    }

    #[test]
    fn redundant() {
        let a = Wff::atom('A');
        assert!(Wff::and(a.clone(), a.clone()).is_redundant());
        assert!(Wff::implies(a.clone(), a.clone()).is_redundant());
        assert!(!Wff::implies(a.clone(), a.negate()).is_redundant());
    }
}
