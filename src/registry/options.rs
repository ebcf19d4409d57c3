use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_INITIAL_CAPACITY: usize = 16;
pub const MAX_INITIAL_CAPACITY: usize = 1 << 16;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryOptions {
    pub initial_capacity: usize,
    pub debug: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            debug: false,
        }
    }
}

impl RegistryOptions {
    pub fn builder() -> RegistryOptionsBuilder {
        RegistryOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RegistryOptionsError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(RegistryOptionsError::InitialCapacityTooLarge {
                provided: self.initial_capacity,
                max: MAX_INITIAL_CAPACITY,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RegistryOptionsBuilder {
    options: RegistryOptions,
}

impl RegistryOptionsBuilder {
    pub fn initial_capacity(mut self, value: usize) -> Self {
        self.options.initial_capacity = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RegistryOptions, RegistryOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryOptionsError {
    #[error("initial_capacity {provided} exceeds the supported maximum of {max}")]
    InitialCapacityTooLarge { provided: usize, max: usize },
}
