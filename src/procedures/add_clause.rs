/*!
Adding a clause to a context.

How a clause is added depends on its length:
- An empty clause can never be satisfied, and is rejected.
- A unit clause forces its literal, and is recorded as an [assignment](crate::procedures::assign) rather than stored.
  If the literal is already falsified the clause is rejected.
- Any longer clause is stored in the [clause database](crate::db::clause), and watches the literals at its first two positions.

A rejected clause is reported by returning false, and the context notes the conflict.
The clause is not examined against the current valuation when added, this is left to the next round of [propagation](crate::procedures::bcp).
After a clause is stored, the next round propagates the whole trail again, so the clause is examined against every forced literal.

```rust
# use bcp_engine::context::Context;
# use bcp_engine::structures::literal::{neg, pos};
let mut ctx = Context::new(2).unwrap();

assert_eq!(ctx.add_clause(vec![pos(0), neg(1)]), Ok(true));
assert_eq!(ctx.add_clause(vec![pos(1)]), Ok(true));
assert_eq!(ctx.add_clause(vec![neg(1)]), Ok(false));
assert_eq!(ctx.add_clause(vec![]), Ok(false));

assert!(ctx.add_clause(vec![pos(2)]).is_err());
```

# Unit clauses

The valuation is updated as soon as a unit clause is added, and so of a pair of contradictory unit clauses the second is rejected.
*/

use crate::{
    context::{Conflict, Context},
    misc::log::targets::{self},
    structures::{
        clause::{Clause, Watch},
        literal::Literal,
    },
    types::err::{self},
};

impl Context {
    /// Adds a clause of the given literals to the context.
    ///
    /// Returns false if the clause is empty, or is a unit clause whose literal is falsified, and true otherwise.
    ///
    /// An error is returned if some literal is over a variable which is not part of the context, in which case the context is unchanged.
    pub fn add_clause(
        &mut self,
        literals: impl IntoIterator<Item = Literal>,
    ) -> Result<bool, err::ErrorKind> {
        let literals = literals.into_iter().collect::<Vec<_>>();

        for literal in &literals {
            self.valuation.check_variable(literal.var())?;
        }

        match literals.as_slice() {
            [] => {
                log::info!(target: targets::CLAUSE_DB, "Empty clause.");
                self.note_conflict(Conflict::EmptyClause);
                Ok(false)
            }

            [literal] => {
                log::debug!(target: targets::CLAUSE_DB, "Unit clause {literal}.");
                self.assign(*literal)
            }

            _ => {
                let clause = Clause::new(literals);
                let watched = [clause.watcher(Watch::A), clause.watcher(Watch::B)];

                let key = self.clause_db.store(clause);
                for literal in watched.into_iter().flatten() {
                    self.watches.watch(literal, key)?;
                }

                self.clause_added = true;
                self.note_input();
                Ok(true)
            }
        }
    }
}
