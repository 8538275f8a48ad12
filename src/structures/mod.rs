//! Abstract elements of propagation and their representation.
//!
//! - [Variables](atom), things to which a boolean value may be assigned.
//! - [Literals](literal), variables paired with a polarity.
//! - [Clauses](clause), disjunctions of literals, together with a pair of watched literals.
//! - [Valuations](valuation), (partial) functions from variables to truth values.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
