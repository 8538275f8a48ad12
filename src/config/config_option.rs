use crate::{
    misc::log::targets::{self},
    types::err::{self},
};

/// A configuration option, bounded by some minimum and maximum.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within bounds.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        if value < self.min || value > self.max {
            log::error!(target: targets::CONFIG, "Value out of bounds for option {}.", self.name);
            return Err(err::ConfigError::OutOfBounds);
        }
        self.value = value;
        Ok(())
    }
}
