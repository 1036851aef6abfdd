/*!
The store of derivations made during a natural deduction search.

Derivations are held in a vector, in order of insertion, and are referred to by index.
Alongside the vector, a [petgraph] graph records the justification of each derivation, with an edge from each derivation to each of its parents.
The node index of a derivation in the graph is always the index of the derivation in the vector.

The store only grows during a search.
Pruning happens after a search, by marking derivations reachable from the conclusion as active.

```rust
# use wff_prover::db::derivation::DerivationDB;
# use wff_prover::structures::{step::Step, wff::Wff};
let mut db = DerivationDB::default();
let p = db.insert(Wff::atom('P'), Step::Premise, vec![]).unwrap();
let q = db.insert(Wff::atom('Q'), Step::Premise, vec![]).unwrap();
let p_and_q = db.insert(Wff::and(Wff::atom('P'), Wff::atom('Q')), Step::ConjunctionIntroduction, vec![p, q]).unwrap();

assert_eq!(db.ancestors_of(p_and_q), vec![p, q, p_and_q]);
assert_eq!(db.position(&Wff::atom('Q')), Some(q));
```
*/

use std::collections::BTreeSet;

use petgraph::{
    graph::{Graph, NodeIndex},
    visit,
};

use crate::{
    structures::{constant::Constant, step::Step, wff::Wff},
    types::err::{self},
};

/// A record of the rules applied to a derivation, one bit per [Step].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Applied(u32);

impl Applied {
    fn bit(step: Step) -> u32 {
        1 << (step as u32)
    }

    /// Marks `step` as applied, returning true if the step was not already marked.
    pub fn mark(&mut self, step: Step) -> bool {
        let fresh = !self.has(step);
        self.0 |= Self::bit(step);
        fresh
    }

    pub fn has(&self, step: Step) -> bool {
        self.0 & Self::bit(step) != 0
    }

    /// A count of the steps marked.
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

/// A derivation.
#[derive(Clone, Debug)]
pub struct DerivationNode {
    wff: Wff,
    step: Step,
    parents: Vec<usize>,
    canonical: String,
    commuted: Option<String>,

    /// Projections of the antecedent and consequent, for an implication.
    implication: Option<(String, String)>,

    pub(crate) active: bool,
    pub(crate) applied: Applied,
    pub(crate) indices: Vec<usize>,
    pub(crate) instantiated: BTreeSet<Constant>,
}

impl DerivationNode {
    pub fn wff(&self) -> &Wff {
        &self.wff
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Indices of the derivations which justify this derivation, in the order given by the rule.
    pub fn parents(&self) -> &[usize] {
        &self.parents
    }

    /// True if the derivation is part of the finished proof.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn applied(&self) -> Applied {
        self.applied
    }

    /// Line numbers of the parents of an active derivation, once a proof is finished.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Constants a universal derivation has been instantiated with.
    pub fn instantiated(&self) -> &BTreeSet<Constant> {
        &self.instantiated
    }

    /// The canonical projections of the antecedent and consequent, if the derivation is an implication.
    pub fn implication_forms(&self) -> Option<(&str, &str)> {
        self.implication
            .as_ref()
            .map(|(antecedent, consequent)| (antecedent.as_str(), consequent.as_str()))
    }

    fn matches(&self, canonical: &str) -> bool {
        self.canonical == canonical || self.commuted.as_deref() == Some(canonical)
    }
}

/// The derivations of a search, and the graph of justifications between them.
#[derive(Default)]
pub struct DerivationDB {
    nodes: Vec<DerivationNode>,
    graph: Graph<usize, Step>,
}

impl DerivationDB {
    /// Stores a derivation, returning its index.
    pub fn insert(
        &mut self,
        wff: Wff,
        step: Step,
        parents: Vec<usize>,
    ) -> Result<usize, err::DeductionError> {
        if parents.iter().any(|parent| *parent >= self.nodes.len()) {
            return Err(err::DeductionError::MissingNode);
        }

        let index = self.nodes.len();
        let node_index = self.graph.add_node(index);
        for parent in &parents {
            self.graph.add_edge(node_index, NodeIndex::new(*parent), step);
        }

        let canonical = wff.canonical();
        let commuted = wff.commuted().map(|commuted| commuted.canonical());
        let implication = match &wff {
            Wff::Implies(antecedent, consequent) => Some((antecedent.canonical(), consequent.canonical())),
            _ => None,
        };

        self.nodes.push(DerivationNode {
            wff,
            step,
            parents,
            canonical,
            commuted,
            implication,
            active: false,
            applied: Applied::default(),
            indices: Vec::default(),
            instantiated: BTreeSet::default(),
        });

        Ok(index)
    }

    pub fn get(&self, index: usize) -> Result<&DerivationNode, err::DeductionError> {
        self.nodes.get(index).ok_or(err::DeductionError::MissingNode)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut DerivationNode, err::DeductionError> {
        self.nodes
            .get_mut(index)
            .ok_or(err::DeductionError::MissingNode)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DerivationNode> {
        self.nodes.iter()
    }

    /// The index of the first derivation structurally equal to `wff`.
    pub fn position(&self, wff: &Wff) -> Option<usize> {
        let canonical = wff.canonical();
        self.nodes.iter().position(|node| node.matches(&canonical))
    }

    /// Marks `step` as applied to the derivation at `index`, returning true if the step was not already marked.
    pub fn mark(&mut self, index: usize, step: Step) -> Result<bool, err::DeductionError> {
        Ok(self.get_mut(index)?.applied.mark(step))
    }

    /// Indices of every derivation reachable from `index` by parent links, including `index`, in ascending order.
    pub fn ancestors_of(&self, index: usize) -> Vec<usize> {
        let mut ancestors = BTreeSet::default();
        if index < self.nodes.len() {
            visit::depth_first_search(&self.graph, Some(NodeIndex::new(index)), |event| {
                if let visit::DfsEvent::Discover(node_index, _) = event {
                    if let Some(weight) = self.graph.node_weight(node_index) {
                        ancestors.insert(*weight);
                    }
                }
            });
        }
        ancestors.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applied_marks_once() {
        let mut applied = Applied::default();
        assert!(applied.mark(Step::ModusPonens));
        assert!(!applied.mark(Step::ModusPonens));
        assert!(applied.has(Step::ModusPonens));
        assert!(!applied.has(Step::ModusTollens));
        assert!(applied.mark(Step::ContradictionElimination));
        assert_eq!(applied.count(), 2);
    }

    #[test]
    fn implication_forms_are_cached() {
        let mut db = DerivationDB::default();
        let p_q = Wff::implies(Wff::atom('P'), Wff::atom('Q').negate());
        let index = db.insert(p_q, Step::Premise, vec![]).unwrap();
        let conjunction = db.insert(Wff::and(Wff::atom('P'), Wff::atom('Q')), Step::Premise, vec![]).unwrap();

        assert_eq!(db.get(index).unwrap().implication_forms(), Some(("P", "~Q")));
        assert_eq!(db.get(conjunction).unwrap().implication_forms(), None);
    }

    #[test]
    fn missing_parent() {
        let mut db = DerivationDB::default();
        assert_eq!(
            db.insert(Wff::atom('P'), Step::DoubleNegationElimination, vec![0]),
            Err(err::DeductionError::MissingNode)
        );
    }

    #[test]
    fn position_commutes_identity() {
        let mut db = DerivationDB::default();
        let a_b = Wff::identity(Wff::constant('a'), Wff::constant('b')).unwrap();
        let b_a = Wff::identity(Wff::constant('b'), Wff::constant('a')).unwrap();
        db.insert(a_b, Step::Premise, vec![]).unwrap();
        assert_eq!(db.position(&b_a), Some(0));
    }

    #[test]
    fn unreachable_derivations_are_not_ancestors() {
        let mut db = DerivationDB::default();
        let p = db.insert(Wff::atom('P'), Step::Premise, vec![]).unwrap();
        let _q = db.insert(Wff::atom('Q'), Step::Premise, vec![]).unwrap();
        let p_p = db
            .insert(Wff::atom('P').negate().negate(), Step::DoubleNegationIntroduction, vec![p])
            .unwrap();
        assert_eq!(db.ancestors_of(p_p), vec![p, p_p]);
    }
}
