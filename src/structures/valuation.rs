/*!
A total function from variables to truth values.

Each variable is mapped to one of [TruthValue::True], [TruthValue::False], or [TruthValue::Undefined], and every variable is initially undefined.
If no variable is undefined the valuation is 'full', otherwise the valuation is 'partial'.

The valuation is a vector indexed by variables, so the value of variable *v* is the *v*th element.

```rust
# use bcp_engine::structures::literal::{neg, pos};
# use bcp_engine::structures::valuation::{TruthValue, Valuation};
let mut valuation = Valuation::new(3);
assert!(valuation.set(neg(1)).is_ok());

assert_eq!(valuation.value_of(1), Ok(TruthValue::False));
assert_eq!(valuation.satisfied(neg(1)), Ok(true));
assert_eq!(valuation.falsified(pos(1)), Ok(true));

assert_eq!(valuation.satisfied(pos(2)), Ok(false));
assert_eq!(valuation.falsified(pos(2)), Ok(false));

assert!(valuation.value_of(3).is_err());
```

Within a context the valuation is only extended, by [assign](crate::context::Context::assign) and propagation.
*/

use crate::{
    misc::log::targets::{self},
    structures::{atom::Variable, literal::Literal},
    types::err,
};

/// The value of a variable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TruthValue {
    /// The variable has no value.
    #[default]
    Undefined,

    True,

    False,
}

impl TruthValue {
    /// The value which satisfies a literal of the given polarity.
    pub const fn from_polarity(polarity: bool) -> Self {
        match polarity {
            true => TruthValue::True,
            false => TruthValue::False,
        }
    }

    /// The value as an optional boolean.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            TruthValue::Undefined => None,
            TruthValue::True => Some(true),
            TruthValue::False => Some(false),
        }
    }
}

/// The status of a literal on a valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralStatus {
    /// The value of the variable matches the polarity of the literal.
    Satisfied,

    /// The value of the variable does not match the polarity of the literal.
    Falsified,

    /// The variable of the literal has no value.
    Unassigned,
}

/// A truth value for each variable of a context.
#[derive(Clone, Debug, Default)]
pub struct Valuation {
    values: Vec<TruthValue>,
}

impl Valuation {
    /// A valuation on `variable_count` variables, each undefined.
    pub fn new(variable_count: u32) -> Self {
        Valuation {
            values: vec![TruthValue::Undefined; variable_count as usize],
        }
    }

    /// A count of the variables of the valuation.
    pub fn variable_count(&self) -> usize {
        self.values.len()
    }

    /// Ok if `variable` is part of the valuation, and an error otherwise.
    pub fn check_variable(&self, variable: Variable) -> Result<(), err::ValuationError> {
        match (variable as usize) < self.values.len() {
            true => Ok(()),
            false => {
                log::error!(target: targets::VALUATION, "Variable {variable} is not part of the valuation.");
                Err(err::ValuationError::UnknownVariable(variable))
            }
        }
    }

    /// The value of `variable`.
    pub fn value_of(&self, variable: Variable) -> Result<TruthValue, err::ValuationError> {
        match self.values.get(variable as usize) {
            Some(value) => Ok(*value),
            None => Err(err::ValuationError::UnknownVariable(variable)),
        }
    }

    /// The status of `literal`.
    pub fn status_of(&self, literal: Literal) -> Result<LiteralStatus, err::ValuationError> {
        let status = match self.value_of(literal.var())?.as_bool() {
            None => LiteralStatus::Unassigned,
            Some(value) if value == literal.polarity() => LiteralStatus::Satisfied,
            Some(_) => LiteralStatus::Falsified,
        };
        Ok(status)
    }

    /// True if the value of the variable of `literal` matches the polarity of `literal`.
    pub fn satisfied(&self, literal: Literal) -> Result<bool, err::ValuationError> {
        Ok(self.status_of(literal)? == LiteralStatus::Satisfied)
    }

    /// True if the value of the variable of `literal` conflicts with the polarity of `literal`.
    pub fn falsified(&self, literal: Literal) -> Result<bool, err::ValuationError> {
        Ok(self.status_of(literal)? == LiteralStatus::Falsified)
    }

    /// Values the variable of `literal` so that `literal` is satisfied.
    ///
    /// Any previous value of the variable is overwritten.
    pub fn set(&mut self, literal: Literal) -> Result<(), err::ValuationError> {
        match self.values.get_mut(literal.var() as usize) {
            Some(value) => {
                *value = TruthValue::from_polarity(literal.polarity());
                log::debug!(target: targets::VALUATION, "Set {literal}.");
                Ok(())
            }
            None => Err(err::ValuationError::UnknownVariable(literal.var())),
        }
    }

    /// An iterator over the values of variables, in variable order.
    pub fn values(&self) -> impl Iterator<Item = TruthValue> + '_ {
        self.values.iter().copied()
    }
}
