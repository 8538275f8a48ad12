//! Boolean constraint propagation over clauses, using two watched literals.
//!
//! The library is the propagation core of a satisfiability solver.
//! Given a collection of clauses over a fixed collection of variables, a [context](crate::context::Context) keeps a partial valuation and extends it with every literal the clauses force, until either nothing more is forced or some clause is found to conflict with the valuation.
//!
//! Everything around propagation is left to the caller:
//! - Choosing which variable to decide next, and with which value.
//! - Undoing assignments after a conflict.
//! - Learning clauses, restarting, reading formulas, and reporting results.
//!
//! The context exposes just enough for a driver to be layered on top: [add_clause](crate::context::Context::add_clause) for a loader, [assign](crate::context::Context::assign) and [unit_propagate](crate::context::Context::unit_propagate) for a search procedure, and [rebase](crate::context::Context::rebase) and [value_of](crate::context::Context::value_of) for an exporter.
//!
//! # Orientation
//!
//! Internally a context is a handful of databases:
//! - The clauses of the formula are stored in a [clause database](crate::db::clause), and are accessed through [keys](crate::db::ClauseKey).
//! - For each literal, the keys of clauses watching the literal are stored in the [watch lists](crate::db::watches).
//! - The literals forced so far are kept, in order, on the [trail](crate::db::trail), which doubles as the queue of literals to propagate.
//! - The current value of each variable is kept in a [valuation](crate::structures::valuation).
//!
//! The propagation loop itself is found in [procedures::bcp](crate::procedures::bcp).
//!
//! # Example
//!
//! ```rust
//! # use bcp_engine::context::Context;
//! # use bcp_engine::structures::literal::{neg, pos};
//! # use bcp_engine::structures::valuation::TruthValue;
//! let mut ctx = Context::new(3).unwrap();
//!
//! assert_eq!(ctx.add_clause(vec![pos(0)]), Ok(true));
//! assert_eq!(ctx.add_clause(vec![neg(0), pos(1)]), Ok(true));
//! assert_eq!(ctx.add_clause(vec![neg(1), pos(2)]), Ok(true));
//!
//! assert_eq!(ctx.unit_propagate(), Ok(true));
//! assert_eq!(ctx.value_of(2), Ok(TruthValue::True));
//! ```
//!
//! # Outcomes and errors
//!
//! An empty clause, a falsified unit clause, or a conflict found during propagation are not errors.
//! These are reported as `Ok(false)`, and the context makes no attempt to recover.
//!
//! Errors are reserved for misuse, such as a literal over a variable the context does not know.
//! See [types::err].
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, using the targets listed in [misc::log].
//! No logger is installed by the library.
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), each step of propagation can be seen with `RUST_LOG=propagation=trace …`.

#![allow(clippy::single_match)]

pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
