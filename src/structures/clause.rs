//! A clause together with a pair of watched literals.
//!
//! A clause is an ordered sequence of literals, interpreted as their disjunction.
//! Once a clause is built the order of the literals is fixed, and the only mutable part of a clause is which positions are watched.
//!
//! # Watches
//!
//! Two watches are kept, [Watch::A] and [Watch::B], each as an (optional) index into the sequence of literals.
//! - A fresh clause watches the literal at index 0 with watch A, and the literal at index 1 with watch B.
//! - If the clause is too short for a watch, the watch is `None`.
//!
//! Whenever a stored clause is not satisfied, the watched literals are distinct and have no value, unless the clause has just become unit (and the remaining literal is awaiting propagation) or conflicts with the valuation.
//! Upholding this is the job of [BCP](crate::procedures::bcp), and a clause alone does not check the valuation.
//!
//! ```rust
//! # use bcp_engine::structures::clause::{Clause, Watch};
//! # use bcp_engine::structures::literal::{neg, pos};
//! let mut clause = Clause::new(vec![pos(0), neg(1), pos(2)]);
//!
//! assert_eq!(clause.rank_of(neg(1)), Some(Watch::B));
//! assert!(clause.set_watcher(pos(2), Watch::B).is_ok());
//! assert_eq!(clause.watcher(Watch::B), Some(pos(2)));
//! assert_eq!(clause.rank_of(neg(1)), None);
//! ```

use std::ops::Deref;

use crate::{structures::literal::Literal, types::err};

/// One of the two watches of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Watch {
    /// The first watch, initially on the literal at index 0.
    A,

    /// The second watch, initially on the literal at index 1.
    B,
}

impl Watch {
    /// The other watch.
    pub const fn other(&self) -> Watch {
        match self {
            Watch::A => Watch::B,
            Watch::B => Watch::A,
        }
    }

    /// The rank of the watch, as `0` for watch A and `1` for watch B.
    pub const fn rank(&self) -> usize {
        match self {
            Watch::A => 0,
            Watch::B => 1,
        }
    }
}

/// A clause with two watches.
#[derive(Clone, Debug)]
pub struct Clause {
    /// The literals of the clause, in a fixed order.
    literals: Vec<Literal>,

    /// The index of the literal watched by watch A.
    watch_a: Option<usize>,

    /// The index of the literal watched by watch B.
    watch_b: Option<usize>,
}

impl Clause {
    /// A clause of the given literals, with watches on the first two literals (where those exist).
    pub fn new(literals: Vec<Literal>) -> Self {
        let watch_a = if !literals.is_empty() { Some(0) } else { None };
        let watch_b = if literals.len() > 1 { Some(1) } else { None };

        Clause {
            literals,
            watch_a,
            watch_b,
        }
    }

    /// The literals of the clause.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Which watch is on `literal`, if any.
    ///
    /// If both watches are on (distinct occurrences of) the literal, watch A is returned.
    pub fn rank_of(&self, literal: Literal) -> Option<Watch> {
        if self.watcher(Watch::A) == Some(literal) {
            Some(Watch::A)
        } else if self.watcher(Watch::B) == Some(literal) {
            Some(Watch::B)
        } else {
            None
        }
    }

    /// The index of the literal on `watch`, if any.
    pub fn index_of(&self, watch: Watch) -> Option<usize> {
        match watch {
            Watch::A => self.watch_a,
            Watch::B => self.watch_b,
        }
    }

    /// The literal on `watch`, if any.
    pub fn watcher(&self, watch: Watch) -> Option<Literal> {
        self.index_of(watch)
            .and_then(|index| self.literals.get(index))
            .copied()
    }

    /// Moves `watch` to the first occurrence of `literal`, returning the index of the occurrence.
    ///
    /// If the literal does not occur in the clause an error is returned and the watches are unchanged.
    pub fn set_watcher(&mut self, literal: Literal, watch: Watch) -> Result<usize, err::ClauseError> {
        match self.literals.iter().position(|l| *l == literal) {
            Some(index) => {
                self.set_watch_index(watch, index);
                Ok(index)
            }
            None => Err(err::ClauseError::MissingLiteral),
        }
    }

    /// Moves `watch` to `index`.
    ///
    /// # Soundness
    /// No check is made that `index` is within the clause.
    pub(crate) fn set_watch_index(&mut self, watch: Watch, index: usize) {
        match watch {
            Watch::A => self.watch_a = Some(index),
            Watch::B => self.watch_b = Some(index),
        }
    }

    /// True if the clauses contain the same literals, ignoring order and repetition.
    pub fn same_literals(&self, other: &Clause) -> bool {
        canonical_literals(&self.literals) == canonical_literals(&other.literals)
    }

    /// A string of the literals in the clause, for logs.
    pub fn as_string(&self) -> String {
        let mut the_string = String::from("(");
        for literal in &self.literals {
            the_string.push_str(format!(" {literal}").as_str());
        }
        the_string += " )";
        the_string
    }
}

/// The literals, sorted and without repetition.
fn canonical_literals(literals: &[Literal]) -> Vec<Literal> {
    let mut canonical = literals.to_vec();
    canonical.sort_unstable();
    canonical.dedup();
    canonical
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        Clause::new(literals)
    }
}

impl Deref for Clause {
    type Target = [Literal];

    fn deref(&self) -> &Self::Target {
        &self.literals
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
