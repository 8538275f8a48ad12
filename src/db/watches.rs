/*!
A record of which clauses are watching each literal.

# Theory

A clause only needs attention during [propagation](crate::procedures::bcp) when all but (at most) one of its literals are falsified.
This motivates the use of two watches per clause:
- So long as both watched literals are not falsified, the clause neither conflicts with the valuation nor forces any literal, and can be ignored.
- When a watched literal is falsified, the clause is inspected and either the watch moves to some other literal which is not falsified, or the clause now forces its other watched literal, or the clause conflicts with the valuation.

So, the watch lists of a literal record the clauses to inspect when that literal is falsified.

# Implementation

There is one list per literal, indexed by the [encoding](crate::structures::literal) of the literal, and so `2n` lists for a context on `n` variables.
Each list holds [keys](ClauseKey) of clauses, and a key appears in at most two lists at any time: the lists of the two literals the clause is watching.

A key is never added twice to the same list.
This can only matter for a clause which contains some literal more than once.

# Traversal

During propagation, the list of a falsified literal is traversed while clauses are removed from it.
To allow the clause database and other watch lists to be mutated during the traversal, the list is [taken](Watches::take) from the structure and [restored](Watches::restore) once the traversal is complete.
*/

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::{self},
};

/// The watch lists of each literal.
#[derive(Default)]
pub struct Watches {
    lists: Vec<Vec<ClauseKey>>,
}

impl Watches {
    /// Empty watch lists for each literal of `variable_count` variables.
    pub fn new(variable_count: u32, capacity: usize) -> Self {
        let literal_count = 2 * variable_count as usize;
        let mut lists = Vec::with_capacity(literal_count);
        for _ in 0..literal_count {
            lists.push(Vec::with_capacity(capacity));
        }
        Watches { lists }
    }

    /// A count of the watch lists, i.e. the number of literals.
    pub fn literal_count(&self) -> usize {
        self.lists.len()
    }

    /// The keys of clauses watching `literal`.
    pub fn watchers(&self, literal: Literal) -> Result<&[ClauseKey], err::WatchError> {
        match self.lists.get(literal.index()) {
            Some(list) => Ok(list),
            None => Err(err::WatchError::UnknownLiteral(literal)),
        }
    }

    /// True if the clause of `key` is watching `literal`.
    pub fn is_watching(&self, literal: Literal, key: &ClauseKey) -> bool {
        match self.lists.get(literal.index()) {
            Some(list) => list.contains(key),
            None => false,
        }
    }

    /// Notes the clause of `key` is watching `literal`.
    ///
    /// Returns false if the clause was already watching the literal, in which case nothing happens.
    pub fn watch(&mut self, literal: Literal, key: ClauseKey) -> Result<bool, err::WatchError> {
        let list = self.list_mut(literal)?;
        if list.contains(&key) {
            log::trace!(target: targets::WATCHES, "{key:?} already watches {literal}.");
            return Ok(false);
        }
        list.push(key);
        Ok(true)
    }

    /// Takes the watch list of `literal`, leaving an empty list until the list is [restored](Watches::restore).
    pub(crate) fn take(&mut self, literal: Literal) -> Result<Vec<ClauseKey>, err::WatchError> {
        Ok(std::mem::take(self.list_mut(literal)?))
    }

    /// Restores a list taken by [take](Watches::take).
    ///
    /// Any keys added to the list of `literal` since the list was taken are kept, after the keys of the restored list.
    pub(crate) fn restore(
        &mut self,
        literal: Literal,
        list: Vec<ClauseKey>,
    ) -> Result<(), err::WatchError> {
        let current = self.list_mut(literal)?;
        let added = std::mem::replace(current, list);
        for key in added {
            if !current.contains(&key) {
                current.push(key);
            }
        }
        Ok(())
    }

    fn list_mut(&mut self, literal: Literal) -> Result<&mut Vec<ClauseKey>, err::WatchError> {
        match self.lists.get_mut(literal.index()) {
            Some(list) => Ok(list),
            None => Err(err::WatchError::UnknownLiteral(literal)),
        }
    }
}
