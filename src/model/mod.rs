//! Core data structures for parsed molecules.
//!
//! - [`atom`] – Atom with element symbol, implicit-hydrogen count and coordinates.
//! - [`types`] – Bond-order classes and the folding of raw file codes.
//! - [`molecule`] – Named molecules made of atoms and undirected bonds.
//!
//! These types are plain data: readers in [`crate::io`] produce them and the
//! [`crate::descriptor`] pipeline consumes them without mutating them.

pub mod atom;
pub mod molecule;
pub mod types;
