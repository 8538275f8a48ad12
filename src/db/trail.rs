/*!
The literals forced so far, in the order forced.

The trail serves two purposes:
- A record of every literal forced by a unit clause, an assignment, or propagation.
- The queue of literals to propagate, with `q_head` indexing the next literal to examine.

Literals are only ever appended, as no procedure in the library undoes an assignment.
A procedure which does undo assignments would truncate the trail to some earlier length and clear the value of each removed literal.
*/

use crate::structures::literal::Literal;

#[derive(Default)]
pub struct Trail {
    /// The forced literals, in order.
    pub literals: Vec<Literal>,

    /// The index of the next literal to propagate.
    pub q_head: usize,
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Trail {
            literals: Vec::with_capacity(capacity),
            q_head: 0,
        }
    }

    /// Appends `literal` to the trail.
    pub fn store_literal(&mut self, literal: Literal) {
        self.literals.push(literal);
    }

    /// The literal to propagate next, if any.
    pub fn next_to_propagate(&self) -> Option<Literal> {
        self.literals.get(self.q_head).copied()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}
