//! Engine configuration and builder.

use crate::output::{stdio_output, SharedOutput};
use crate::Engine;

/// Initial table capacities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Variable slots reserved by `init` before the first growth.
    pub variable_capacity: usize,
    /// Function slots reserved by `init` before the first growth.
    pub function_capacity: usize,
}

impl EngineConfig {
    pub const DEFAULT_VARIABLE_CAPACITY: usize = 64;
    pub const DEFAULT_FUNCTION_CAPACITY: usize = 32;
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            variable_capacity: Self::DEFAULT_VARIABLE_CAPACITY,
            function_capacity: Self::DEFAULT_FUNCTION_CAPACITY,
        }
    }
}

/// Builder for [`Engine`] instances.
///
/// Defaults: [`EngineConfig::default`] capacities and process stdio output.
/// The built engine is `Uninitialized`; call [`Engine::init`] before use.
#[derive(Default)]
pub struct EngineBuilder {
    config: EngineConfig,
    output: Option<SharedOutput>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn variable_capacity(mut self, capacity: usize) -> Self {
        self.config.variable_capacity = capacity;
        self
    }

    #[must_use]
    pub fn function_capacity(mut self, capacity: usize) -> Self {
        self.config.function_capacity = capacity;
        self
    }

    /// Set where script output goes. Default is process stdio.
    #[must_use]
    pub fn output(mut self, output: SharedOutput) -> Self {
        self.output = Some(output);
        self
    }

    pub fn build(self) -> Engine {
        Engine::from_parts(self.config, self.output.unwrap_or_else(stdio_output))
    }
}
