/*!
The arena of a tableau.

Nodes of a tableau are stored in a [SlotMap], and refer to one another by [TableauKey].
Parent links (and links to the node from which a node was derived) are keys, and so never own anything.

Each node has at most two children:
- A *center* child extends a branch without splitting it.
  The center child occupies the left slot, and no right child may be added alongside.
- A *left* and *right* child split the branch in two.

A node is a leaf when it has no children, and only leaves are ever [closed](TableauNode::is_closed).

```rust
# use std::rc::Rc;
# use wff_prover::db::tableau::{Side, Tableau};
# use wff_prover::structures::wff::Wff;
# use wff_prover::types::err::TableauError;
let mut tableau = Tableau::from_root(Wff::or(Wff::atom('P'), Wff::atom('Q')));
let root = tableau.root();

let left = tableau.add_child(root, Rc::new(Wff::atom('P')), Some(root), Side::Left).unwrap();
let right = tableau.add_child(root, Rc::new(Wff::atom('Q')), Some(root), Side::Right).unwrap();

assert_eq!(tableau.leaves_below(root), vec![left, right]);
assert_eq!(
    tableau.add_child(root, Rc::new(Wff::atom('R')), None, Side::Center),
    Err(TableauError::CenterAfterRight)
);
```
*/

use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    rc::Rc,
};

use slotmap::SlotMap;

use crate::{
    structures::{constant::Constant, wff::Wff},
    types::err::{self},
};

slotmap::new_key_type! {
    /// A key to a node of a tableau.
    pub struct TableauKey;
}

/// The order in which nodes are dispatched, lowest first.
pub type Precedence = u8;

/// The precedence of a wff.
///
/// Rules which do not branch (or which discover constants) have lower precedence than rules which branch.
/// Universals are dispatched last, so all constants on a branch are known before any universal is instantiated.
pub fn precedence(wff: &Wff) -> Precedence {
    match wff {
        Wff::Atom(_) => 0,
        Wff::Existential(..) => 1,
        Wff::Not(inner) => match inner.as_ref() {
            Wff::Not(_) => 3,
            Wff::Or(..) | Wff::Implies(..) => 7,
            Wff::And(..) => 9,
            _ => 4,
        },
        Wff::And(..) => 6,
        Wff::Or(..) => 8,
        Wff::Implies(..) => 10,
        Wff::Iff(..) => 11,
        Wff::Universal(..) => 13,
        _ => 12,
    }
}

/// Which slot of a parent a child is added to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Center,
}

/// The shape of a node, given its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Leaf,
    Stack,
    Branch,
}

/// How the expansion of a tableau ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// The tableau has not (yet) been expanded.
    Pending,

    /// No rule applies to any open branch.
    Complete,

    /// The dispatch ceiling was reached.
    Timeout,

    /// A fresh constant was required, but none was available.
    ConstantsExhausted,
}

/// A node of a tableau.
#[derive(Clone, Debug)]
pub struct TableauNode {
    wff: Rc<Wff>,
    id: usize,
    parent: Option<TableauKey>,
    derived_from: Option<TableauKey>,
    left: Option<TableauKey>,
    right: Option<TableauKey>,
    precedence: Precedence,
    closed: bool,
    pub(crate) constants: BTreeSet<Constant>,
    pub(crate) substitutions: BTreeMap<Constant, BTreeSet<Constant>>,
}

impl TableauNode {
    fn new(
        wff: Rc<Wff>,
        id: usize,
        parent: Option<TableauKey>,
        derived_from: Option<TableauKey>,
        constants: BTreeSet<Constant>,
    ) -> Self {
        let precedence = precedence(&wff);
        TableauNode {
            wff,
            id,
            parent,
            derived_from,
            left: None,
            right: None,
            precedence,
            closed: false,
            constants,
            substitutions: BTreeMap::default(),
        }
    }

    pub fn wff(&self) -> &Wff {
        &self.wff
    }

    pub(crate) fn shared_wff(&self) -> Rc<Wff> {
        self.wff.clone()
    }

    /// The identifier of the node, unique within its tableau and increasing with order of creation.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn parent(&self) -> Option<TableauKey> {
        self.parent
    }

    /// The node whose rule application produced this node, if any.
    pub fn derived_from(&self) -> Option<TableauKey> {
        self.derived_from
    }

    pub fn left(&self) -> Option<TableauKey> {
        self.left
    }

    pub fn right(&self) -> Option<TableauKey> {
        self.right
    }

    /// The center child, which is the left child of a node without a right child.
    pub fn center(&self) -> Option<TableauKey> {
        match self.right {
            None => self.left,
            Some(_) => None,
        }
    }

    pub fn children(&self) -> impl Iterator<Item = TableauKey> {
        self.left.into_iter().chain(self.right)
    }

    pub fn shape(&self) -> Shape {
        match (self.left, self.right) {
            (None, None) => Shape::Leaf,
            (_, Some(_)) => Shape::Branch,
            (Some(_), None) => Shape::Stack,
        }
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// True if the rule for the node may apply more than once.
    pub fn is_repeatable(&self) -> bool {
        self.wff.is_universal() || self.wff.is_identity()
    }

    /// The constants available on the branch of the node.
    pub fn constants(&self) -> &BTreeSet<Constant> {
        &self.constants
    }

    /// Substitutions made by the node, if an identity, from each symbol replaced to the symbols replacing it.
    pub fn substitutions(&self) -> &BTreeMap<Constant, BTreeSet<Constant>> {
        &self.substitutions
    }
}

/// Both (all) and some closure of a tableau.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableauResult {
    pub all_closed: bool,
    pub some_closed: bool,
}

/// A node of a tableau, as visited by a [walk](Tableau::walk).
#[derive(Clone, Debug)]
pub struct TableauStep<'t> {
    pub key: TableauKey,
    pub depth: usize,
    pub wff: &'t Wff,
    pub shape: Shape,
    pub closed: bool,
    pub repeatable: bool,
    pub derived_from: Option<usize>,
}

/// A tableau, with nodes held in an arena.
pub struct Tableau {
    nodes: SlotMap<TableauKey, TableauNode>,
    root: TableauKey,
    identifiers: usize,
    pub(crate) status: Expansion,
}

impl Tableau {
    /// A tableau with a single node for the given wff, with any root wrapper removed.
    ///
    /// The root node is given every constant of the wff.
    pub fn from_root(wff: Wff) -> Self {
        let wff = wff.unrooted().clone();
        let constants = wff.constants();

        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(TableauNode::new(Rc::new(wff), 0, None, None, constants));

        Tableau {
            nodes,
            root,
            identifiers: 1,
            status: Expansion::Pending,
        }
    }

    pub fn root(&self) -> TableauKey {
        self.root
    }

    pub fn status(&self) -> Expansion {
        self.status
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, key: TableauKey) -> Result<&TableauNode, err::TableauError> {
        self.nodes.get(key).ok_or(err::TableauError::MissingNode)
    }

    pub(crate) fn get_mut(&mut self, key: TableauKey) -> Result<&mut TableauNode, err::TableauError> {
        self.nodes.get_mut(key).ok_or(err::TableauError::MissingNode)
    }

    /// A fresh identifier, for ordering nodes of equal precedence.
    pub(crate) fn fresh_id(&mut self) -> usize {
        let id = self.identifiers;
        self.identifiers += 1;
        id
    }

    /// Adds a child to `parent`, inheriting the constants of the parent.
    pub fn add_child(
        &mut self,
        parent: TableauKey,
        wff: Rc<Wff>,
        derived_from: Option<TableauKey>,
        side: Side,
    ) -> Result<TableauKey, err::TableauError> {
        let parent_node = self.get(parent)?;
        match side {
            Side::Center if parent_node.right.is_some() => {
                return Err(err::TableauError::CenterAfterRight)
            }
            Side::Left | Side::Center if parent_node.left.is_some() => {
                return Err(err::TableauError::ChildOccupied)
            }
            Side::Right if parent_node.right.is_some() => {
                return Err(err::TableauError::ChildOccupied)
            }
            _ => {}
        }

        let constants = parent_node.constants.clone();
        let id = self.fresh_id();
        let child = TableauNode::new(wff, id, Some(parent), derived_from, constants);
        let key = self.nodes.insert(child);

        let parent_node = self.get_mut(parent)?;
        match side {
            Side::Left | Side::Center => parent_node.left = Some(key),
            Side::Right => parent_node.right = Some(key),
        }

        Ok(key)
    }

    /// The leaves below `key`, from left to right, including `key` if a leaf.
    pub fn leaves_below(&self, key: TableauKey) -> Vec<TableauKey> {
        let mut leaves = Vec::default();
        let mut stack = vec![key];

        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };
            match node.is_leaf() {
                true => leaves.push(key),
                false => {
                    stack.extend(node.right);
                    stack.extend(node.left);
                }
            }
        }

        leaves
    }

    /// The leaves below `key` which are not closed.
    pub fn open_leaves_below(&self, key: TableauKey) -> Vec<TableauKey> {
        self.leaves_below(key)
            .into_iter()
            .filter(|leaf| self.nodes.get(*leaf).is_some_and(|node| !node.closed))
            .collect()
    }

    /// The nodes from `key` up to the root, inclusive of both.
    pub fn branch(&self, key: TableauKey) -> impl Iterator<Item = (TableauKey, &TableauNode)> {
        let mut next = Some(key);
        std::iter::from_fn(move || {
            let key = next?;
            let node = self.nodes.get(key)?;
            next = node.parent;
            Some((key, node))
        })
    }

    /// True if some node on the branch ending at `leaf` (inclusive) is structurally equal to `wff`.
    pub fn branch_contains(&self, leaf: TableauKey, wff: &Wff) -> bool {
        self.branch(leaf)
            .any(|(_, node)| node.wff.structurally_equals(wff))
    }

    pub(crate) fn close(&mut self, leaf: TableauKey) -> Result<(), err::TableauError> {
        self.get_mut(leaf)?.closed = true;
        Ok(())
    }

    /// True if every leaf below `key` is closed.
    pub fn all_closed_below(&self, key: TableauKey) -> bool {
        self.leaves_below(key)
            .iter()
            .all(|leaf| self.nodes.get(*leaf).is_some_and(|node| node.closed))
    }

    /// True if every leaf of the tableau is closed, found by a level-order traversal.
    pub fn has_all_closed(&self) -> bool {
        self.level_order_leaves().all(|node| node.closed)
    }

    /// True if some leaf of the tableau is closed, found by a level-order traversal.
    pub fn has_some_closed(&self) -> bool {
        self.level_order_leaves().any(|node| node.closed)
    }

    pub fn result(&self) -> TableauResult {
        TableauResult {
            all_closed: self.has_all_closed(),
            some_closed: self.has_some_closed(),
        }
    }

    fn level_order_leaves(&self) -> impl Iterator<Item = &TableauNode> {
        let mut queue = VecDeque::from([self.root]);
        std::iter::from_fn(move || {
            while let Some(key) = queue.pop_front() {
                let node = self.nodes.get(key)?;
                if node.is_leaf() {
                    return Some(node);
                }
                queue.extend(node.children());
            }
            None
        })
    }

    /// A pre-order walk over the tableau, with left children before right children.
    pub fn walk(&self) -> Vec<TableauStep<'_>> {
        let mut steps = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(self.root, 0)];

        while let Some((key, depth)) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };

            let closed = match node.is_leaf() {
                true => node.closed,
                false => self.all_closed_below(key),
            };

            let derived_from = node
                .derived_from
                .and_then(|from| self.nodes.get(from))
                .map(|from| from.id);

            steps.push(TableauStep {
                key,
                depth,
                wff: &node.wff,
                shape: node.shape(),
                closed,
                repeatable: node.is_repeatable(),
                derived_from,
            });

            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
        }

        steps
    }
}
