/*!
Boolean constraint propagation.

See [Context::unit_propagate] for a round of propagation, and [Context::bcp] for the propagation of a single literal.

# Overview

A round of propagation takes literals from the [trail](crate::db::trail) in the order they were added.
A round resumes from the first literal not propagated by an earlier round, unless some clause has been stored since the last round, in which case the round starts from the first literal on the trail.
For each literal, every clause watching the negation of the literal is inspected:
- If the *other* watched literal of the clause is satisfied, the clause is satisfied and nothing happens.
- Otherwise, the clause is searched, circularly from the position after the falsified watch, for some literal which is not falsified and is not the other watched literal.
  + If such a literal is found, the watch moves to it.
  + If not, and the other watched literal is falsified, the clause conflicts with the valuation and the round ends.
  + If not, and the other watched literal has no value, the clause forces the other watched literal, which is assigned and appended to the trail.

The round ends successfully once every literal on the trail has been propagated.
As forced literals are appended to the trail, the conflict reported by a round is the first found in trail order.

# Complications

While the watchers of a literal are inspected, watches may move away from the literal, and so the list of watchers is mutated during the traversal.
- The list is [taken](crate::db::watches::Watches::take) from the watch lists for the duration of the traversal, so the clause database and other watch lists may be mutated freely.
- The traversal uses an index, and a clause whose watch moves is removed by swapping in the last key of the list. The index is not advanced after a removal, so the swapped key is inspected next.
- If a clause repeats a literal, both watches may be on the falsified literal.
  After one watch moves, the clause is left in the list and inspected again, now for the other watch.
- A watch never moves to the literal whose list is taken, as that literal is falsified.
  Still, any key added to the list during the traversal is kept when the list is restored, and is not inspected in the current traversal.

# Example

```rust
# use bcp_engine::context::Context;
# use bcp_engine::structures::literal::{neg, pos};
# use bcp_engine::structures::valuation::TruthValue;
let mut ctx = Context::new(3).unwrap();

assert_eq!(ctx.add_clause(vec![neg(0), pos(1), pos(2)]), Ok(true));
assert_eq!(ctx.assign(pos(0)), Ok(true));
assert_eq!(ctx.unit_propagate(), Ok(true));
assert_eq!(ctx.value_of(1), Ok(TruthValue::Undefined));

assert_eq!(ctx.assign(neg(2)), Ok(true));
assert_eq!(ctx.unit_propagate(), Ok(true));
assert_eq!(ctx.value_of(1), Ok(TruthValue::True));
```
*/

use crate::{
    context::{Conflict, Context, ContextState},
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{clause::Watch, literal::Literal, valuation::LiteralStatus},
    types::err::{self},
};

impl Context {
    /// Propagates each literal on the trail, in order, until every literal is propagated or a conflict is found.
    ///
    /// Returns true if a fixpoint is reached, and false if some literal on the trail is falsified or some clause conflicts with the valuation.
    /// On false, the context notes the conflict and no attempt is made to recover.
    ///
    /// An error is returned only on some corruption of the watch lists.
    pub fn unit_propagate(&mut self) -> Result<bool, err::ErrorKind> {
        log::info!(target: targets::PROPAGATION, "Propagating a trail of {} literals.", self.trail.len());

        if self.clause_added {
            self.trail.q_head = 0;
            self.clause_added = false;
        }
        while let Some(literal) = self.trail.next_to_propagate() {
            match self.valuation.status_of(literal)? {
                LiteralStatus::Satisfied => {}

                LiteralStatus::Unassigned => self.valuation.set(literal)?,

                LiteralStatus::Falsified => {
                    log::trace!(target: targets::PROPAGATION, "{literal} on the trail is falsified.");
                    self.note_conflict(Conflict::Unit(literal));
                    return Ok(false);
                }
            }

            match self.bcp(literal) {
                Ok(()) => {
                    self.counters.propagations += 1;
                    self.trail.q_head += 1;
                }

                Err(err::BCPError::Conflict(key)) => {
                    self.note_conflict(Conflict::Clause(key));
                    return Ok(false);
                }

                Err(e) => {
                    log::error!(target: targets::PROPAGATION, "Propagation of {literal} failed: {e:?}.");
                    return Err(e.into());
                }
            }
        }

        log::info!(target: targets::PROPAGATION, "Fixpoint with a trail of {} literals.", self.trail.len());
        if self.state == ContextState::Input {
            self.state = ContextState::Propagated;
        }
        Ok(true)
    }

    /// Inspects each clause watching the negation of `literal`, on the assumption that `literal` is satisfied.
    ///
    /// For details, see [procedures::bcp](crate::procedures::bcp).
    pub fn bcp(&mut self, literal: Literal) -> Result<(), err::BCPError> {
        let falsified = literal.negate();

        let mut watchers = self.watches.take(falsified)?;
        let result = self.inspect_watchers(falsified, &mut watchers);
        self.watches.restore(falsified, watchers)?;

        result
    }

    fn inspect_watchers(
        &mut self,
        falsified: Literal,
        watchers: &mut Vec<ClauseKey>,
    ) -> Result<(), err::BCPError> {
        let mut index = 0;

        'watch_loop: while index < watchers.len() {
            let key = watchers[index];
            self.counters.inspections += 1;

            let clause = self.clause_db.get_mut(&key)?;

            let Some(watch) = clause.rank_of(falsified) else {
                log::error!(target: targets::PROPAGATION, "{key:?} in the watch list of {falsified} does not watch {falsified}.");
                return Err(err::BCPError::CorruptWatch);
            };
            let (Some(start), Some(other)) = (clause.index_of(watch), clause.watcher(watch.other())) else {
                return Err(err::BCPError::CorruptWatch);
            };

            if self.valuation.satisfied(other)? {
                index += 1;
                continue 'watch_loop;
            }

            let length = clause.len();
            let mut position = start;
            let replacement = loop {
                position += 1;
                if position == length {
                    position = 0;
                }
                if position == start {
                    break None;
                }
                let candidate = clause[position];
                if candidate != other && !self.valuation.falsified(candidate)? {
                    break Some(position);
                }
            };

            match replacement {
                Some(position) => {
                    clause.set_watch_index(watch, position);
                    let watched = clause[position];
                    log::trace!(target: targets::PROPAGATION, "{key:?} moved watch from {falsified} to {watched}.");

                    // With both watches on the falsified literal the clause stays in the list, and is inspected again for the other watch.
                    if other != falsified {
                        watchers.swap_remove(index);
                    }
                    self.watches.watch(watched, key)?;
                    self.counters.watch_moves += 1;
                }

                None => {
                    if self.valuation.falsified(other)? {
                        log::trace!(target: targets::PROPAGATION, "{key:?} conflicts with the valuation.");
                        return Err(err::BCPError::Conflict(key));
                    }

                    log::trace!(target: targets::PROPAGATION, "{key:?} forces {other}.");
                    self.record_assignment(other)?;
                    self.counters.derivations += 1;
                    index += 1;
                }
            }
        }

        Ok(())
    }
}
