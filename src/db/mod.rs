//! Databases for holding the nodes made by the procedures.
//!
//! - The nodes of a [tableau](tableau::Tableau) are held in a slotmap arena, keyed by [TableauKey](tableau::TableauKey).
//! - [Derivations](derivation::DerivationNode) are held in a vector, with justifications mirrored in a graph.
//!
//! In both cases links between nodes are keys or indices, and never references, so a database owns every node it holds.

pub mod derivation;
pub mod tableau;
