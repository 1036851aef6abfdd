/*!
Well-formed formulas (wffs), as trees.

A [Wff] is a tagged union over the kinds of node which may appear in a formula of propositional or first-order predicate logic.
Each node owns its children, and so cloning a wff is a deep copy.

```rust
# use wff_prover::structures::wff::Wff;
let p = Wff::atom('P');
let q = Wff::atom('Q');

let p_implies_q = Wff::implies(p.clone(), q);
assert!(p_implies_q.is_implication());
assert_eq!(p_implies_q.children().first(), Some(&&p));
assert_eq!(p_implies_q.to_string(), "(P → Q)");
```

# Equality

Derived equality ([PartialEq]) compares trees exactly.
The procedures of the library instead compare wffs by [structurally_equals](Wff::structurally_equals), which is defined over a canonical string projection of a wff, and treats identities as commutative.
See [canonical] for details.

# Invariants

- Binary connectives have exactly two children, negations and quantifiers exactly one.
  These are enforced by the shape of the enum.
- The parameters of a predicate, and the sides of an identity, are terms (constants or variables).
  These are enforced by the [predicate](Wff::predicate) and [identity](Wff::identity) constructors.
- The variable bound by a quantifier is a single character.
  This is enforced by the [universal](Wff::universal) and [existential](Wff::existential) constructors.
*/

pub mod canonical;
mod transform;
pub use transform::TermKind;

use serde::Serialize;

use crate::types::err::{self};

/// A well-formed formula.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Wff {
    /// A propositional atom, e.g. `P`.
    Atom(char),

    /// A predicate letter applied to an ordered list of terms, e.g. `Pab`.
    Predicate(char, Vec<Wff>),

    /// A variable, to be bound by some quantifier.
    Variable(char),

    /// A constant, from `a` to `t`.
    Constant(char),

    Not(Box<Wff>),
    And(Box<Wff>, Box<Wff>),
    Or(Box<Wff>, Box<Wff>),
    Implies(Box<Wff>, Box<Wff>),
    Iff(Box<Wff>, Box<Wff>),
    Xor(Box<Wff>, Box<Wff>),

    /// An identity between two terms, e.g. `a = b`.
    Identity(Box<Wff>, Box<Wff>),

    /// A universal quantifier, with the bound variable.
    Universal(char, Box<Wff>),

    /// An existential quantifier, with the bound variable.
    Existential(char, Box<Wff>),

    /// Falsum.
    False,

    /// The root of a tree handed over by a parser, wrapping the formula proper.
    Root(Box<Wff>),
}

/// The kind of a [Wff] node, without its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WffKind {
    Atom,
    Predicate,
    Variable,
    Constant,
    Negation,
    And,
    Or,
    Implication,
    Biconditional,
    ExclusiveOr,
    Identity,
    Universal,
    Existential,
    False,
    Root,
}

impl std::fmt::Display for WffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom => write!(f, "ATOM"),
            Self::Predicate => write!(f, "PREDICATE"),
            Self::Variable => write!(f, "VARIABLE"),
            Self::Constant => write!(f, "CONSTANT"),
            Self::Negation => write!(f, "NEG"),
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
            Self::Implication => write!(f, "IMP"),
            Self::Biconditional => write!(f, "BICOND"),
            Self::ExclusiveOr => write!(f, "XOR"),
            Self::Identity => write!(f, "IDENTITY"),
            Self::Universal => write!(f, "UNIVERSAL"),
            Self::Existential => write!(f, "EXISTENTIAL"),
            Self::False => write!(f, "FALSE"),
            Self::Root => write!(f, "ROOT"),
        }
    }
}

/// Constructors.
impl Wff {
    pub fn atom(letter: char) -> Self {
        Wff::Atom(letter)
    }

    pub fn constant(symbol: char) -> Self {
        Wff::Constant(symbol)
    }

    pub fn variable(symbol: char) -> Self {
        Wff::Variable(symbol)
    }

    /// A predicate, so long as each parameter is a term.
    pub fn predicate(letter: char, parameters: Vec<Wff>) -> Result<Self, err::WffError> {
        match parameters.iter().all(Wff::is_term) {
            true => Ok(Wff::Predicate(letter, parameters)),
            false => Err(err::WffError::NotATerm),
        }
    }

    /// An identity, so long as both sides are terms.
    pub fn identity(left: Wff, right: Wff) -> Result<Self, err::WffError> {
        match left.is_term() && right.is_term() {
            true => Ok(Wff::Identity(Box::new(left), Box::new(right))),
            false => Err(err::WffError::NotATerm),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(wff: Wff) -> Self {
        Wff::Not(Box::new(wff))
    }

    pub fn and(left: Wff, right: Wff) -> Self {
        Wff::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Wff, right: Wff) -> Self {
        Wff::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Wff, right: Wff) -> Self {
        Wff::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Wff, right: Wff) -> Self {
        Wff::Iff(Box::new(left), Box::new(right))
    }

    pub fn xor(left: Wff, right: Wff) -> Self {
        Wff::Xor(Box::new(left), Box::new(right))
    }

    /// A universal quantifier binding `variable`, which must be a single character.
    pub fn universal(variable: &str, body: Wff) -> Result<Self, err::WffError> {
        let variable = Wff::variable_symbol(variable)?;
        Ok(Wff::Universal(variable, Box::new(body)))
    }

    /// An existential quantifier binding `variable`, which must be a single character.
    pub fn existential(variable: &str, body: Wff) -> Result<Self, err::WffError> {
        let variable = Wff::variable_symbol(variable)?;
        Ok(Wff::Existential(variable, Box::new(body)))
    }

    pub fn root(wff: Wff) -> Self {
        Wff::Root(Box::new(wff))
    }

    fn variable_symbol(variable: &str) -> Result<char, err::WffError> {
        let mut chars = variable.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Ok(symbol),
            _ => Err(err::WffError::VariableSymbol),
        }
    }
}

/// Inspection.
impl Wff {
    pub fn kind(&self) -> WffKind {
        match self {
            Self::Atom(_) => WffKind::Atom,
            Self::Predicate(..) => WffKind::Predicate,
            Self::Variable(_) => WffKind::Variable,
            Self::Constant(_) => WffKind::Constant,
            Self::Not(_) => WffKind::Negation,
            Self::And(..) => WffKind::And,
            Self::Or(..) => WffKind::Or,
            Self::Implies(..) => WffKind::Implication,
            Self::Iff(..) => WffKind::Biconditional,
            Self::Xor(..) => WffKind::ExclusiveOr,
            Self::Identity(..) => WffKind::Identity,
            Self::Universal(..) => WffKind::Universal,
            Self::Existential(..) => WffKind::Existential,
            Self::False => WffKind::False,
            Self::Root(_) => WffKind::Root,
        }
    }

    /// The children of the node, in order.
    pub fn children(&self) -> Vec<&Wff> {
        match self {
            Self::Atom(_) | Self::Variable(_) | Self::Constant(_) | Self::False => Vec::default(),

            Self::Predicate(_, parameters) => parameters.iter().collect(),

            Self::Not(wff) | Self::Universal(_, wff) | Self::Existential(_, wff) | Self::Root(wff) => {
                vec![wff]
            }

            Self::And(l, r)
            | Self::Or(l, r)
            | Self::Implies(l, r)
            | Self::Iff(l, r)
            | Self::Xor(l, r)
            | Self::Identity(l, r) => vec![l, r],
        }
    }

    /// The `index`th child of the node, if it exists.
    pub fn child(&self, index: usize) -> Option<&Wff> {
        self.children().get(index).copied()
    }

    /// The two operands of a binary node.
    pub fn operands(&self) -> Option<(&Wff, &Wff)> {
        match self {
            Self::And(l, r)
            | Self::Or(l, r)
            | Self::Implies(l, r)
            | Self::Iff(l, r)
            | Self::Xor(l, r)
            | Self::Identity(l, r) => Some((l, r)),
            _ => None,
        }
    }

    /// The wff negated by a negation.
    pub fn negated(&self) -> Option<&Wff> {
        match self {
            Self::Not(wff) => Some(wff),
            _ => None,
        }
    }

    /// The bound variable and body of a quantifier.
    pub fn quantified(&self) -> Option<(char, &Wff)> {
        match self {
            Self::Universal(variable, body) | Self::Existential(variable, body) => {
                Some((*variable, body))
            }
            _ => None,
        }
    }

    /// The symbol of an atom, predicate, term, or the variable of a quantifier.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Self::Atom(s)
            | Self::Predicate(s, _)
            | Self::Variable(s)
            | Self::Constant(s)
            | Self::Universal(s, _)
            | Self::Existential(s, _) => Some(*s),
            _ => None,
        }
    }

    /// The wff beneath any [Root] wrappers.
    ///
    /// [Root]: Wff::Root
    pub fn unrooted(&self) -> &Wff {
        match self {
            Self::Root(wff) => wff.unrooted(),
            _ => self,
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    pub fn is_predicate(&self) -> bool {
        matches!(self, Self::Predicate(..))
    }

    pub fn is_term(&self) -> bool {
        matches!(self, Self::Variable(_) | Self::Constant(_))
    }

    pub fn is_negation(&self) -> bool {
        matches!(self, Self::Not(_))
    }

    pub fn is_double_negation(&self) -> bool {
        matches!(self, Self::Not(inner) if inner.is_negation())
    }

    pub fn is_and(&self) -> bool {
        matches!(self, Self::And(..))
    }

    pub fn is_or(&self) -> bool {
        matches!(self, Self::Or(..))
    }

    pub fn is_implication(&self) -> bool {
        matches!(self, Self::Implies(..))
    }

    pub fn is_biconditional(&self) -> bool {
        matches!(self, Self::Iff(..))
    }

    pub fn is_exclusive_or(&self) -> bool {
        matches!(self, Self::Xor(..))
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity(..))
    }

    pub fn is_universal(&self) -> bool {
        matches!(self, Self::Universal(..))
    }

    pub fn is_existential(&self) -> bool {
        matches!(self, Self::Existential(..))
    }

    pub fn is_quantifier(&self) -> bool {
        self.is_universal() || self.is_existential()
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Self::False)
    }

    /// True if the node is a binary connective, including identity.
    pub fn is_binary(&self) -> bool {
        self.operands().is_some()
    }

    /// True if the node is a negation of a node of the given kind.
    pub fn is_negation_of(&self, kind: WffKind) -> bool {
        self.negated().is_some_and(|inner| inner.kind() == kind)
    }

    /// True if no node of the wff is a predicate, quantifier, or identity.
    pub fn is_propositional(&self) -> bool {
        match self {
            Self::Predicate(..) | Self::Identity(..) | Self::Universal(..) | Self::Existential(..) => false,
            _ => self.children().iter().all(|child| child.is_propositional()),
        }
    }

    /// A count of all nodes in the wff.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(|child| child.size()).sum::<usize>()
    }

    /// The nested syntax tree of the wff, one node per line, with children indented by two spaces.
    pub fn syntax_tree(&self) -> String {
        let mut tree = String::default();
        self.syntax_tree_helper(0, &mut tree);
        tree
    }

    fn syntax_tree_helper(&self, indent: usize, tree: &mut String) {
        tree.push_str(&" ".repeat(indent));
        tree.push_str(&self.kind().to_string());
        if let Some(symbol) = self.symbol() {
            tree.push_str(&format!(": {symbol}"));
        }

        let children = self.children();
        if !children.is_empty() {
            tree.push_str(" (\n");
            for (index, child) in children.iter().enumerate() {
                if index > 0 {
                    tree.push_str(",\n");
                }
                child.syntax_tree_helper(indent + 2, tree);
            }
            tree.push(')');
        }
    }
}

impl std::fmt::Display for Wff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(s) | Self::Variable(s) | Self::Constant(s) => write!(f, "{s}"),

            Self::Predicate(letter, parameters) => {
                write!(f, "{letter}")?;
                for parameter in parameters {
                    write!(f, "{parameter}")?;
                }
                Ok(())
            }

            Self::Not(wff) => write!(f, "¬{wff}"),
            Self::And(l, r) => write!(f, "({l} ∧ {r})"),
            Self::Or(l, r) => write!(f, "({l} ∨ {r})"),
            Self::Implies(l, r) => write!(f, "({l} → {r})"),
            Self::Iff(l, r) => write!(f, "({l} ↔ {r})"),
            Self::Xor(l, r) => write!(f, "({l} ⊕ {r})"),
            Self::Identity(l, r) => write!(f, "{l} = {r}"),

            Self::Universal(variable, body) => write!(f, "(∀{variable}){body}"),
            Self::Existential(variable, body) => write!(f, "(∃{variable}){body}"),

            Self::False => write!(f, "⊥"),
            Self::Root(wff) => write!(f, "{wff}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantifier_variable_is_one_character() {
        let px = Wff::predicate('P', vec![Wff::variable('x')]).unwrap();
        assert!(Wff::universal("x", px.clone()).is_ok());
        assert_eq!(
            Wff::universal("xy", px.clone()),
            Err(err::WffError::VariableSymbol)
        );
        assert_eq!(Wff::existential("", px), Err(err::WffError::VariableSymbol));
    }

    #[test]
    fn predicate_parameters_are_terms() {
        assert_eq!(
            Wff::predicate('P', vec![Wff::atom('Q')]),
            Err(err::WffError::NotATerm)
        );
        assert_eq!(
            Wff::identity(Wff::constant('a'), Wff::atom('Q')),
            Err(err::WffError::NotATerm)
        );
    }

    #[test]
    fn display() {
        let pa = Wff::predicate('P', vec![Wff::constant('a'), Wff::variable('x')]).unwrap();
        let exists = Wff::existential("x", Wff::not(pa)).unwrap();
        assert_eq!(exists.to_string(), "(∃x)¬Pax");

        let identity = Wff::identity(Wff::constant('a'), Wff::constant('b')).unwrap();
        assert_eq!(Wff::not(identity).to_string(), "¬a = b");
    }

    #[test]
    fn syntax_tree() {
        let wff = Wff::and(Wff::atom('P'), Wff::not(Wff::atom('Q')));
        let expected = "AND (\n  ATOM: P,\n  NEG (\n    ATOM: Q))";
        assert_eq!(wff.syntax_tree(), expected);
    }

    #[test]
    fn kinds() {
        let wff = Wff::not(Wff::not(Wff::atom('P')));
        assert!(wff.is_double_negation());
        assert!(wff.is_negation_of(WffKind::Negation));
        assert_eq!(wff.size(), 3);
        assert!(wff.is_propositional());

        let rooted = Wff::root(Wff::atom('P'));
        assert_eq!(rooted.unrooted(), &Wff::atom('P'));
    }
}
