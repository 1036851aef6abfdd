use serde::Serialize;

use crate::types::err::{self};

/// A configurable value, together with its name and the bounds it must sit within.
#[derive(Clone, Debug, Serialize)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if within bounds.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        if value < self.min || self.max < value {
            log::error!("Value for {} out of bounds", self.name);
            return Err(err::ConfigError::OutOfBounds);
        }
        self.value = value;
        Ok(())
    }
}
