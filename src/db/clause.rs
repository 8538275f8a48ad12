/*!
A database of clauses.

Clauses are stored in an arena, and are accessed through [keys](ClauseKey).
Watch lists hold keys rather than clauses, so a clause watched by two literals is stored once and mutated in one place.

Only clauses of two or more literals are stored.
An empty clause is never stored, and a unit clause is instead recorded as an assignment on the [trail](crate::db::trail).
*/

use slotmap::SlotMap;

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::clause::Clause,
    types::err::{self},
};

/// The clauses of a context.
#[derive(Default)]
pub struct ClauseDB {
    clauses: SlotMap<ClauseKey, Clause>,
}

impl ClauseDB {
    /// A clause database with space for `capacity` clauses.
    pub fn with_capacity(capacity: usize) -> Self {
        ClauseDB {
            clauses: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Stores `clause`, returning the key to the clause.
    pub fn store(&mut self, clause: Clause) -> ClauseKey {
        log::debug!(target: targets::CLAUSE_DB, "Storing {clause}.");
        self.clauses.insert(clause)
    }

    /// The clause stored with `key`.
    pub fn get(&self, key: &ClauseKey) -> Result<&Clause, err::ClauseDBError> {
        match self.clauses.get(*key) {
            Some(clause) => Ok(clause),
            None => {
                log::error!(target: targets::CLAUSE_DB, "Missing clause {key:?}.");
                Err(err::ClauseDBError::Missing)
            }
        }
    }

    /// The clause stored with `key`, mutably.
    pub fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut Clause, err::ClauseDBError> {
        match self.clauses.get_mut(*key) {
            Some(clause) => Ok(clause),
            None => {
                log::error!(target: targets::CLAUSE_DB, "Missing clause {key:?}.");
                Err(err::ClauseDBError::Missing)
            }
        }
    }

    /// An iterator through all stored clauses, together with their keys, in the order stored.
    pub fn iter(&self) -> impl Iterator<Item = (ClauseKey, &Clause)> {
        self.clauses.iter()
    }

    /// An iterator through all stored clauses, in the order stored.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.values()
    }

    /// A count of stored clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
