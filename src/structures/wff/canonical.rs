/*!
The canonical string projection of a wff, and structural equality.

Connectives may be spelt in a variety of ways, e.g. a negation as any of `~`, `¬`, `!`, `not`.
The canonical projection collapses each spelling of a connective to a single token, collapses both parentheses to `#`, and strips whitespace.

| Connective    | Spellings                                   | Token |
|---------------|---------------------------------------------|-------|
| negation      | `~ ¬ ! not NOT`                             | `~`   |
| conjunction   | `& ∧ ^ ⋅ and AND`                           | `&`   |
| disjunction   | `∨ \| \|\| + or OR`                         | `∨`   |
| implication   | `→ ⇒ ⊃ > -> implies IMPLIES`                | `→`   |
| biconditional | `↔ ⇔ ≡ <> <-> iff IFF`                      | `↔`   |
| exclusive or  | `⊕ ⊻ ≢ ⩒ ↮ xor XOR`                         | `⊕`   |

The `∀` of a universal quantifier is optional, and so is dropped.

Two wffs are structurally equal if their canonical projections are equal, or if both are identities (or the negation of identities) whose projections are equal once the sides of one identity are swapped.

```rust
# use wff_prover::structures::wff::{canonical::canonical_form, Wff};
assert_eq!(canonical_form("(A and B)"), canonical_form("( A ∧ B )"));

let a_b = Wff::identity(Wff::constant('a'), Wff::constant('b')).unwrap();
let b_a = Wff::identity(Wff::constant('b'), Wff::constant('a')).unwrap();
assert!(a_b.structurally_equals(&b_a));
assert!(Wff::not(a_b).structurally_equals(&Wff::not(b_a)));
```
*/

use super::Wff;

/// Spellings of connectives, longest first so that e.g. `<->` is not read as `<` followed by `->`.
const SPELLINGS: &[(&str, &str)] = &[
    ("implies", "→"),
    ("IMPLIES", "→"),
    ("<->", "↔"),
    ("not", "~"),
    ("NOT", "~"),
    ("and", "&"),
    ("AND", "&"),
    ("iff", "↔"),
    ("IFF", "↔"),
    ("xor", "⊕"),
    ("XOR", "⊕"),
    ("||", "∨"),
    ("->", "→"),
    ("<>", "↔"),
    ("or", "∨"),
    ("OR", "∨"),
    ("~", "~"),
    ("¬", "~"),
    ("!", "~"),
    ("&", "&"),
    ("∧", "&"),
    ("^", "&"),
    ("⋅", "&"),
    ("∨", "∨"),
    ("|", "∨"),
    ("+", "∨"),
    ("→", "→"),
    ("⇒", "→"),
    ("⊃", "→"),
    (">", "→"),
    ("↔", "↔"),
    ("⇔", "↔"),
    ("≡", "↔"),
    ("⊕", "⊕"),
    ("⊻", "⊕"),
    ("≢", "⊕"),
    ("⩒", "⊕"),
    ("↮", "⊕"),
    ("(", "#"),
    (")", "#"),
    ("∀", ""),
];

/// The canonical projection of some text.
pub fn canonical_form(text: &str) -> String {
    let mut canonical = String::with_capacity(text.len());
    let mut rest = text;

    'scan: while let Some(next) = rest.chars().next() {
        if next.is_whitespace() {
            rest = &rest[next.len_utf8()..];
            continue 'scan;
        }

        for (spelling, token) in SPELLINGS {
            if rest.starts_with(spelling) && stands_alone(text, rest, spelling) {
                canonical.push_str(token);
                rest = &rest[spelling.len()..];
                continue 'scan;
            }
        }

        canonical.push(next);
        rest = &rest[next.len_utf8()..];
    }

    canonical
}

/// Spellings made of letters only count when not part of some longer word, e.g. the constants of `Pand` are not a conjunction.
fn stands_alone(text: &str, rest: &str, spelling: &str) -> bool {
    if !spelling.chars().all(char::is_alphabetic) {
        return true;
    }

    let offset = text.len() - rest.len();
    let before = text[..offset].chars().next_back();
    let after = rest[spelling.len()..].chars().next();

    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

impl Wff {
    /// The canonical projection of the wff.
    pub fn canonical(&self) -> String {
        canonical_form(&self.to_string())
    }

    /// The identity with sides swapped, for an identity or the negation of an identity.
    pub fn commuted(&self) -> Option<Wff> {
        match self {
            Wff::Identity(left, right) => Some(Wff::Identity(right.clone(), left.clone())),
            Wff::Not(inner) => match inner.as_ref() {
                Wff::Identity(left, right) => {
                    Some(Wff::not(Wff::Identity(right.clone(), left.clone())))
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// The canonical projection, followed by the projection of the [commuted](Wff::commuted) wff, if any.
    ///
    /// Some wff is structurally equal to `self` exactly when the projection of the wff is one of these.
    pub fn canonical_forms(&self) -> Vec<String> {
        let mut forms = vec![self.canonical()];
        if let Some(commuted) = self.commuted() {
            forms.push(commuted.canonical());
        }
        forms
    }

    /// Equality of canonical projections, with identities compared commutatively.
    ///
    /// This, rather than [PartialEq], is the equality used throughout the procedures of the library.
    pub fn structurally_equals(&self, other: &Wff) -> bool {
        let other_canonical = other.canonical();
        if self.canonical() == other_canonical {
            return true;
        }

        self.commuted()
            .is_some_and(|commuted| commuted.canonical() == other_canonical)
    }
}
