/*!
(The internal representation of) a variable, aka. an 'atom'.

Each variable is a u32 *v* such that either:
- *v* is 0, or:
- *v - 1* is a variable.

That is, the variables of a context are [0..*n*) for some *n* fixed when the context is created.

This representation allows variables to be used as the indices of a structure, e.g. `valuation[v]`.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// A variable, aka. an 'atom'.
pub type Variable = u32;

/// The maximum instance of a variable.
///
/// Each variable has two literals, encoded as `2v` and `2v + 1`, and each encoding must fit within a [Variable].
pub const VARIABLE_MAX: Variable = (Variable::MAX - 1) / 2;
