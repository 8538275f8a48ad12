/*!
Databases for holding information relevant to propagation.

- The [clause database](clause), storing each clause of two or more literals.
- The [watch lists](watches), recording which clauses watch each literal.
- The [trail](trail), recording the literals forced so far, in order.

Clauses are only ever stored once, in the clause database.
Elsewhere, a clause is referred to by its [ClauseKey].
*/

pub mod clause;
pub mod trail;
pub mod watches;

slotmap::new_key_type! {
    /// A key to access a clause stored in the [clause database](clause::ClauseDB).
    ///
    /// Keys are stable for the life of the database, as clauses are never removed.
    pub struct ClauseKey;
}
