//! Error types used in the library.
//!
//! - Errors mark misuse of the library, or some corruption of its internal structures.
//! - An unsatisfiable clause or a conflict found during propagation is *not* an error, and is instead reported as `Ok(false)` by the relevant method.
//!   The single exception is [BCPError::Conflict], which is used internally to control the flow of propagation.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{
    db::ClauseKey,
    structures::{atom::Variable, literal::Literal},
};

/// The general error, wrapping the specific errors of each part of the library.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    BCP(BCPError),
    Build(BuildError),
    Clause(ClauseError),
    ClauseDB(ClauseDBError),
    Config(ConfigError),
    Valuation(ValuationError),
    Watch(WatchError),
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and ends a round of propagation.
    Conflict(ClauseKey),

    /// A clause found in the watch list of some literal does not watch the literal.
    /// This is unexpected.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

// Ignore the reason for failing to access a clause or watch list during propagation
impl From<ClauseDBError> for BCPError {
    fn from(_: ClauseDBError) -> Self {
        BCPError::CorruptWatch
    }
}

impl From<WatchError> for BCPError {
    fn from(_: WatchError) -> Self {
        BCPError::CorruptWatch
    }
}

impl From<ValuationError> for BCPError {
    fn from(_: ValuationError) -> Self {
        BCPError::CorruptWatch
    }
}

/// Noted errors when building a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// More variables were requested than can be encoded as literals.
    VariableLimit,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors when interacting with the watches of a single clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseError {
    /// The literal does not occur in the clause.
    MissingLiteral,
}

impl From<ClauseError> for ErrorKind {
    fn from(e: ClauseError) -> Self {
        ErrorKind::Clause(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// No clause is stored with the given key.
    Missing,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when setting configuration options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value is outside the bounds of the option.
    OutOfBounds,
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors in the valuation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValuationError {
    /// The variable is not part of the valuation.
    UnknownVariable(Variable),
}

impl From<ValuationError> for ErrorKind {
    fn from(e: ValuationError) -> Self {
        ErrorKind::Valuation(e)
    }
}

/// Errors in the watch lists.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WatchError {
    /// No watch list exists for the literal.
    UnknownLiteral(Literal),
}

impl From<WatchError> for ErrorKind {
    fn from(e: WatchError) -> Self {
        ErrorKind::Watch(e)
    }
}
