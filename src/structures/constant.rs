/*!
Constants, and the allocation of fresh constants.

Constants are drawn from the twenty symbols `a` to `t`.
This is a hard ceiling: when all twenty are in use no fresh constant can be allocated, and the caller must handle the [error](crate::types::err::ConstantError::Exhausted).

```rust
# use std::collections::BTreeSet;
# use wff_prover::structures::constant::fresh_constant;
let unavailable = BTreeSet::from(['a', 'b', 'd']);
assert_eq!(fresh_constant(&unavailable), Ok('c'));
```
*/

use std::collections::BTreeSet;

use crate::types::err::{self};

/// A constant symbol.
pub type Constant = char;

/// The first constant.
pub const CONSTANT_MIN: Constant = 'a';

/// The last constant.
pub const CONSTANT_MAX: Constant = 't';

/// True if `symbol` is within the range of constants.
pub fn is_constant_symbol(symbol: char) -> bool {
    (CONSTANT_MIN..=CONSTANT_MAX).contains(&symbol)
}

/// The first constant not in `unavailable`.
pub fn fresh_constant(unavailable: &BTreeSet<Constant>) -> Result<Constant, err::ConstantError> {
    (CONSTANT_MIN..=CONSTANT_MAX)
        .find(|constant| !unavailable.contains(constant))
        .ok_or(err::ConstantError::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_is_a() {
        assert_eq!(fresh_constant(&BTreeSet::default()), Ok('a'));
    }

    #[test]
    fn exhausted() {
        let all = (CONSTANT_MIN..=CONSTANT_MAX).collect::<BTreeSet<_>>();
        assert_eq!(all.len(), 20);
        assert_eq!(fresh_constant(&all), Err(err::ConstantError::Exhausted));

        let mut all_but_last = all.clone();
        all_but_last.remove(&'t');
        assert_eq!(fresh_constant(&all_but_last), Ok('t'));
    }

    #[test]
    fn range() {
        assert!(is_constant_symbol('a'));
        assert!(is_constant_symbol('t'));
        assert!(!is_constant_symbol('x'));
    }
}
