/*!
Procedures, each a method of a [context](crate::context::Context).

- [add_clause] stores a clause and sets up its watches, or records a unit clause as a forced literal.
- [assign] forces a literal, as a decision procedure would.
- [bcp] propagates the literals of the trail to a fixpoint, or to a conflict.
- [rebase] takes a snapshot of the formula, reduced by the current valuation.

A driver for search would call [add_clause] for each clause of the formula, and then alternate between [assign] and [unit_propagate](crate::context::Context::unit_propagate).
*/

pub mod add_clause;
pub mod assign;
pub mod bcp;
pub mod rebase;
