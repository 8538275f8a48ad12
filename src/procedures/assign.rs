/*!
Forcing a literal to be true.

An assignment both updates the valuation and appends the literal to the trail, so the literal will be examined by the next round of [propagation](crate::procedures::bcp).

```rust
# use bcp_engine::context::Context;
# use bcp_engine::structures::literal::{neg, pos};
let mut ctx = Context::new(1).unwrap();

assert_eq!(ctx.assign(pos(0)), Ok(true));
assert_eq!(ctx.assign(pos(0)), Ok(true));
assert_eq!(ctx.trail().len(), 1);

assert_eq!(ctx.assign(neg(0)), Ok(false));
```
*/

use crate::{
    context::{Conflict, Context},
    misc::log::targets::{self},
    structures::{literal::Literal, valuation::LiteralStatus},
    types::err::{self},
};

impl Context {
    /// Forces `literal` to be true.
    ///
    /// - If `literal` is falsified, nothing changes and false is returned.
    /// - If `literal` is already satisfied, nothing changes and true is returned.
    /// - Otherwise, the variable of `literal` is valued to satisfy `literal`, `literal` is appended to the trail, and true is returned.
    ///
    /// An error is returned only if the variable of `literal` is not part of the context.
    pub fn assign(&mut self, literal: Literal) -> Result<bool, err::ErrorKind> {
        match self.valuation.status_of(literal)? {
            LiteralStatus::Falsified => {
                log::debug!(target: targets::VALUATION, "Assignment of falsified {literal}.");
                self.note_conflict(Conflict::Unit(literal));
                Ok(false)
            }

            LiteralStatus::Satisfied => Ok(true),

            LiteralStatus::Unassigned => {
                self.record_assignment(literal)?;
                self.note_input();
                Ok(true)
            }
        }
    }

    /// Values the variable of `literal` and appends `literal` to the trail.
    ///
    /// # Soundness
    /// No check is made on whether the variable already has a value.
    pub(crate) fn record_assignment(&mut self, literal: Literal) -> Result<(), err::ValuationError> {
        self.valuation.set(literal)?;
        self.trail.store_literal(literal);
        Ok(())
    }
}
