//! Literals are variables paired with a (boolean) polarity.
//!
//! A literal is encoded as a single non-negative integer:
//! - The positive literal of variable *v* is 2*v* + 1.
//! - The negative literal of variable *v* is 2*v*.
//!
//! So, the variable of a literal is the encoding divided by two, and negation flips the low bit.
//! This packing allows a literal to index directly into a flat table with one entry per literal, such as the [watch lists](crate::db::watches).
//!
//! ```rust
//! # use bcp_engine::structures::literal::{negate, neg, pos, sign, var, Literal};
//! let literal = pos(79);
//!
//! assert!(literal.polarity());
//! assert_eq!(var(literal), 79);
//! assert_eq!(sign(literal), 1);
//!
//! assert_eq!(negate(literal), neg(79));
//! assert_eq!(sign(!literal), -1);
//! assert_eq!(negate(negate(literal)), literal);
//! ```
//!
//! Literals are ordered by encoding.
//! The order is used only to canonicalise collections of literals, and has no further meaning.

use crate::structures::atom::{Variable, VARIABLE_MAX};

/// A variable paired with a polarity, packed into a single integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(u32);

impl Literal {
    /// A fresh literal, specified by pairing a variable with a boolean.
    ///
    /// # Soundness
    /// `variable` must be at most [VARIABLE_MAX], as otherwise the encoding overflows.
    /// This is checked in debug builds only.
    pub const fn new(variable: Variable, polarity: bool) -> Self {
        debug_assert!(variable <= VARIABLE_MAX);
        match polarity {
            true => Literal(2 * variable + 1),
            false => Literal(2 * variable),
        }
    }

    /// The literal with the given encoding.
    pub const fn from_code(code: u32) -> Self {
        Literal(code)
    }

    /// The encoding of the literal.
    pub const fn code(&self) -> u32 {
        self.0
    }

    /// The encoding of the literal, as an index.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The variable of the literal.
    pub const fn var(&self) -> Variable {
        self.0 / 2
    }

    /// The polarity of the literal.
    pub const fn polarity(&self) -> bool {
        self.0 & 1 == 1
    }

    /// The polarity of the literal, as `1` or `-1`.
    pub const fn sign(&self) -> i8 {
        match self.polarity() {
            true => 1,
            false => -1,
        }
    }

    /// The negation of the literal.
    pub const fn negate(&self) -> Self {
        Literal(self.0 ^ 1)
    }
}

/// The positive literal of `variable`.
///
/// `variable` must be at most [VARIABLE_MAX], see [Literal::new].
pub const fn pos(variable: Variable) -> Literal {
    Literal::new(variable, true)
}

/// The negative literal of `variable`.
///
/// `variable` must be at most [VARIABLE_MAX], see [Literal::new].
pub const fn neg(variable: Variable) -> Literal {
    Literal::new(variable, false)
}

/// The variable of `literal`.
pub const fn var(literal: Literal) -> Variable {
    literal.var()
}

/// The negation of `literal`.
pub const fn negate(literal: Literal) -> Literal {
    literal.negate()
}

/// The polarity of `literal`, as `1` or `-1`.
pub const fn sign(literal: Literal) -> i8 {
    literal.sign()
}

impl std::ops::Not for Literal {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity() {
            true => write!(f, "+{}", self.var()),
            false => write!(f, "-{}", self.var()),
        }
    }
}
