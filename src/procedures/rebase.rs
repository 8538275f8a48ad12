/*!
A snapshot of the formula of a context, reduced by the current valuation.

The snapshot is built as follows:
- Each stored clause with some satisfied literal is omitted, as it follows from the valuation.
- Each other stored clause is reduced to those literals whose variables have no value.
  And, if the context is configured to [deduplicate](crate::config::Config::deduplicate_rebase), the reduced clause is omitted when some earlier reduced clause has the [same literals](crate::structures::clause::Clause::same_literals).
- A unit clause is appended for each literal on the trail, in trail order.

The context itself is unchanged, and the snapshot may be used to seed some other context, e.g. one built by an external search layer after a round of propagation.

```rust
# use bcp_engine::context::Context;
# use bcp_engine::structures::literal::{neg, pos};
let mut ctx = Context::new(3).unwrap();

assert_eq!(ctx.add_clause(vec![pos(0), pos(1), pos(2)]), Ok(true));
assert_eq!(ctx.add_clause(vec![neg(0), pos(1)]), Ok(true));
assert_eq!(ctx.assign(neg(2)), Ok(true));

let snapshot = ctx.rebase().unwrap();
assert_eq!(snapshot.len(), 3);
assert_eq!(snapshot[0].literals(), &[pos(0), pos(1)]);
assert_eq!(snapshot[2].literals(), &[neg(2)]);
```

If the valuation falsifies every literal of some clause, the reduced clause is empty.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{clause::Clause, valuation::LiteralStatus},
    types::err::{self},
};

impl Context {
    /// A snapshot of the formula of the context, reduced by the current valuation.
    ///
    /// For details, see [procedures::rebase](crate::procedures::rebase).
    pub fn rebase(&self) -> Result<Vec<Clause>, err::ErrorKind> {
        let mut reduced_clauses: Vec<Clause> = Vec::with_capacity(self.clause_db.len());

        'clause_loop: for clause in self.clause_db.clauses() {
            let mut literals = Vec::with_capacity(clause.len());

            for literal in clause.iter() {
                match self.valuation.status_of(*literal)? {
                    LiteralStatus::Satisfied => continue 'clause_loop,
                    LiteralStatus::Falsified => {}
                    LiteralStatus::Unassigned => literals.push(*literal),
                }
            }

            let reduced = Clause::new(literals);
            if self.config.deduplicate_rebase.value
                && reduced_clauses
                    .iter()
                    .any(|existing| existing.same_literals(&reduced))
            {
                log::trace!(target: targets::REBASE, "Skipping duplicate {reduced}.");
                continue 'clause_loop;
            }
            reduced_clauses.push(reduced);
        }

        for literal in &self.trail.literals {
            reduced_clauses.push(Clause::new(vec![*literal]));
        }

        log::info!(target: targets::REBASE, "Rebase of {} clauses to {} clauses.", self.clause_db.len(), reduced_clauses.len());
        Ok(reduced_clauses)
    }
}
