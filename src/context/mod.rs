/*!
The context, within which clauses are stored and propagation happens.

A context is built for a fixed number of variables, and holds:
- The [clause database](crate::db::clause) and the [watch lists](crate::db::watches) of each literal.
- The [valuation](crate::structures::valuation) and the [trail](crate::db::trail) of forced literals.
- A [state](ContextState), noting whether the last round of propagation reached a fixpoint, or whether some conflict has been found.

Methods to mutate a context are found in the [procedures](crate::procedures).

# Example

```rust
# use bcp_engine::context::{Conflict, Context};
# use bcp_engine::structures::literal::{neg, pos};
let mut ctx = Context::new(2).unwrap();

assert_eq!(ctx.add_clause(vec![pos(0)]), Ok(true));
assert_eq!(ctx.add_clause(vec![neg(0), pos(1)]), Ok(true));
assert_eq!(ctx.add_clause(vec![neg(0), neg(1)]), Ok(true));

assert_eq!(ctx.unit_propagate(), Ok(false));
assert!(matches!(ctx.conflict(), Some(Conflict::Clause(_))));
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{clause::ClauseDB, trail::Trail, watches::Watches, ClauseKey},
    misc::log::targets::{self},
    structures::{
        atom::{Variable, VARIABLE_MAX},
        clause::Clause,
        literal::Literal,
        valuation::{TruthValue, Valuation},
    },
    types::err::{self},
};

/// The source of some conflict noted by a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conflict {
    /// An empty clause was added.
    EmptyClause,

    /// A literal was forced, by a unit clause or an assignment, while falsified.
    Unit(Literal),

    /// The stored clause conflicts with the valuation.
    Clause(ClauseKey),
}

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// Clauses or assignments have been added since the last fixpoint, if any.
    Input,

    /// The last round of propagation reached a fixpoint, and nothing has been added since.
    Propagated,

    /// Some conflict has been found.
    ///
    /// This state is never left, as nothing in the library undoes an assignment.
    Unsatisfiable(Conflict),
}

/// A context, within which propagation happens.
pub struct Context {
    /// The configuration of the context.
    pub(crate) config: Config,

    /// Counters related to the context.
    pub(crate) counters: Counters,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub(crate) clause_db: ClauseDB,

    /// Watch lists for each literal.
    /// See [db::watches](crate::db::watches) for details.
    pub(crate) watches: Watches,

    /// The current value of each variable.
    pub(crate) valuation: Valuation,

    /// The literals forced so far, doubling as the propagation queue.
    pub(crate) trail: Trail,

    /// The state of the context.
    pub(crate) state: ContextState,

    /// Whether some clause has been stored since the last round of propagation.
    /// If so, the next round starts from the first literal on the trail.
    pub(crate) clause_added: bool,
}

impl Context {
    /// A context on `variable_count` variables, with the default configuration.
    pub fn new(variable_count: u32) -> Result<Self, err::ErrorKind> {
        Context::from_config(Config::default(), variable_count)
    }

    /// A context on `variable_count` variables, with each variable undefined, no clauses, and an empty trail.
    pub fn from_config(config: Config, variable_count: u32) -> Result<Self, err::ErrorKind> {
        if variable_count > 0 && variable_count - 1 > VARIABLE_MAX {
            log::error!(target: targets::CONTEXT, "{variable_count} variables exceeds the limit of literal encodings.");
            return Err(err::BuildError::VariableLimit.into());
        }

        let clause_db = ClauseDB::with_capacity(config.clause_db.capacity.value);
        let watches = Watches::new(variable_count, config.watch_capacity.value);

        Ok(Context {
            config,
            counters: Counters::default(),
            clause_db,
            watches,
            valuation: Valuation::new(variable_count),
            trail: Trail::with_capacity(variable_count as usize),
            state: ContextState::Input,
            clause_added: false,
        })
    }

    /// The configuration of the context.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Counters related to the context.
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// The clause database of the context.
    pub fn clause_db(&self) -> &ClauseDB {
        &self.clause_db
    }

    /// The watch lists of the context.
    pub fn watches(&self) -> &Watches {
        &self.watches
    }

    /// The valuation of the context.
    pub fn valuation(&self) -> &Valuation {
        &self.valuation
    }

    /// The state of the context.
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// A count of the variables of the context.
    pub fn variable_count(&self) -> usize {
        self.valuation.variable_count()
    }

    /// The literals forced so far, in the order forced.
    pub fn trail(&self) -> &[Literal] {
        &self.trail.literals
    }

    /// The clause stored with `key`.
    pub fn clause(&self, key: &ClauseKey) -> Result<&Clause, err::ErrorKind> {
        Ok(self.clause_db.get(key)?)
    }

    /// The conflict which made the context unsatisfiable, if any.
    pub fn conflict(&self) -> Option<Conflict> {
        match self.state {
            ContextState::Unsatisfiable(conflict) => Some(conflict),
            ContextState::Input | ContextState::Propagated => None,
        }
    }

    /// The current value of `variable`.
    pub fn value_of(&self, variable: Variable) -> Result<TruthValue, err::ErrorKind> {
        Ok(self.valuation.value_of(variable)?)
    }

    /// True if `literal` is satisfied on the current valuation.
    pub fn satisfied(&self, literal: Literal) -> Result<bool, err::ErrorKind> {
        Ok(self.valuation.satisfied(literal)?)
    }

    /// True if `literal` is falsified on the current valuation.
    pub fn falsified(&self, literal: Literal) -> Result<bool, err::ErrorKind> {
        Ok(self.valuation.falsified(literal)?)
    }

    /// Notes a conflict, moving the context to an unsatisfiable state if it is not already.
    pub(crate) fn note_conflict(&mut self, conflict: Conflict) {
        self.counters.conflicts += 1;
        match self.state {
            ContextState::Unsatisfiable(_) => {
                log::debug!(target: targets::PROPAGATION, "Further conflict {conflict:?}.");
            }
            ContextState::Input | ContextState::Propagated => {
                log::info!(target: targets::PROPAGATION, "Conflict {conflict:?}.");
                self.state = ContextState::Unsatisfiable(conflict);
            }
        }
    }

    /// Notes some input has been made, so any fixpoint no longer holds.
    pub(crate) fn note_input(&mut self) {
        if self.state == ContextState::Propagated {
            self.state = ContextState::Input;
        }
    }
}
