//! The execution engine.
//!
//! # States
//!
//! ```text
//!                 init                 execute (for its duration)
//! Uninitialized ───────▶ Initialized ◀──────────────────────────▶ Running
//!       ▲                    │
//!       │ cleanup            │ allocation failure
//!       └──────────────── Error
//! ```
//!
//! `init` past `Uninitialized` is a no-op, except from `Error`, which only
//! `cleanup` leaves. `cleanup` from `Uninitialized` is a no-op.
//!
//! The engine owns its environment and function registry; several engines
//! can coexist and each tears down deterministically.

mod statements;

use std::fmt;
use std::path::Path;

use phw_value::{format_float, Value};

use crate::builtins::register_builtins;
use crate::config::{EngineBuilder, EngineConfig};
use crate::environment::Environment;
use crate::output::{emit, SharedOutput, StreamId};
use crate::registry::{Arity, BuiltinFn, FunctionRegistry};
use crate::{CallError, EngineError, EngineResult};

/// Lifecycle state of an [`Engine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineState {
    Uninitialized,
    Initialized,
    Running,
    Error,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineState::Uninitialized => "uninitialized",
            EngineState::Initialized => "initialized",
            EngineState::Running => "running",
            EngineState::Error => "error",
        };
        f.write_str(name)
    }
}

/// Tables that exist between `init` and `cleanup`.
struct Runtime {
    env: Environment,
    functions: FunctionRegistry,
}

impl Runtime {
    fn new(config: &EngineConfig) -> EngineResult<Self> {
        let env = Environment::with_capacity(config.variable_capacity)?;
        let mut functions = FunctionRegistry::with_capacity(config.function_capacity)?;
        register_builtins(&mut functions)?;
        Ok(Runtime { env, functions })
    }
}

/// An interpreter instance.
pub struct Engine {
    state: EngineState,
    config: EngineConfig,
    output: SharedOutput,
    runtime: Option<Runtime>,
}

impl Engine {
    /// Uninitialized engine with default configuration and stdio output.
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub(crate) fn from_parts(config: EngineConfig, output: SharedOutput) -> Self {
        Engine {
            state: EngineState::Uninitialized,
            config,
            output,
            runtime: None,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The output sink this engine writes to.
    pub fn output_handler(&self) -> &SharedOutput {
        &self.output
    }

    fn require(&self, expected: EngineState) -> EngineResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(EngineError::WrongState {
                expected,
                found: self.state,
            })
        }
    }

    /// Record allocation failure as the `Error` state.
    fn track<T>(&mut self, result: EngineResult<T>) -> EngineResult<T> {
        if matches!(result, Err(EngineError::OutOfMemory)) {
            tracing::warn!("allocation failed; engine entering error state");
            self.state = EngineState::Error;
        }
        result
    }

    fn runtime(&self) -> Option<&Runtime> {
        match self.state {
            EngineState::Uninitialized => None,
            _ => self.runtime.as_ref(),
        }
    }

    fn runtime_mut(&mut self) -> EngineResult<&mut Runtime> {
        let found = self.state;
        match (found, self.runtime.as_mut()) {
            (EngineState::Uninitialized, _) | (_, None) => Err(EngineError::WrongState {
                expected: EngineState::Initialized,
                found,
            }),
            (_, Some(runtime)) => Ok(runtime),
        }
    }
}

// Lifecycle

impl Engine {
    /// Allocate the environment and registry and register the builtins.
    #[tracing::instrument(level = "debug", skip(self), fields(state = %self.state))]
    pub fn init(&mut self) -> EngineResult<()> {
        match self.state {
            EngineState::Uninitialized => {}
            EngineState::Error => {
                return Err(EngineError::WrongState {
                    expected: EngineState::Uninitialized,
                    found: EngineState::Error,
                })
            }
            EngineState::Initialized | EngineState::Running => return Ok(()),
        }

        let runtime = Runtime::new(&self.config);
        let runtime = self.track(runtime)?;
        tracing::debug!(
            functions = runtime.functions.len(),
            variable_capacity = self.config.variable_capacity,
            "engine initialized"
        );
        self.runtime = Some(runtime);
        self.state = EngineState::Initialized;
        Ok(())
    }

    /// Release every variable and registration and return to
    /// `Uninitialized`.
    #[tracing::instrument(level = "debug", skip(self), fields(state = %self.state))]
    pub fn cleanup(&mut self) {
        if self.state == EngineState::Uninitialized {
            return;
        }
        if let Some(runtime) = self.runtime.take() {
            tracing::debug!(variables = runtime.env.len(), "releasing engine tables");
        }
        self.state = EngineState::Uninitialized;
    }
}

// Execution

impl Engine {
    /// Run `source` through the statement scan.
    ///
    /// Output is written as it is recognized and is not retracted if a
    /// later part of the source is ignored.
    pub fn execute(&mut self, source: &str) -> EngineResult<()> {
        self.execute_bytes(source.as_bytes())
    }

    /// [`execute`](Engine::execute) over raw bytes.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn execute_bytes(&mut self, source: &[u8]) -> EngineResult<()> {
        self.require(EngineState::Initialized)?;
        self.state = EngineState::Running;

        let output = &*self.output;
        statements::scan(source, |text| emit(output, StreamId::Stdout, text));

        self.state = EngineState::Initialized;
        Ok(())
    }

    /// Read `path` and execute its contents.
    ///
    /// A read failure writes a message to standard error and returns
    /// [`EngineError::Io`].
    pub fn execute_file(&mut self, path: impl AsRef<Path>) -> EngineResult<()> {
        let path = path.as_ref();
        self.require(EngineState::Initialized)?;

        let source = match std::fs::read(path) {
            Ok(source) => source,
            Err(e) => {
                self.error(&format!("Failed to open file {}\n", path.display()));
                return Err(EngineError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
            }
        };
        self.execute_bytes(&source)
    }
}

// Variables and functions

impl Engine {
    /// Bind a global (current-scope) variable, taking ownership of `value`.
    pub fn set_variable(&mut self, name: &str, value: Value) -> EngineResult<()> {
        let result = self.runtime_mut().and_then(|rt| rt.env.set(name, value));
        self.track(result)
    }

    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.runtime()?.env.get(name)
    }

    pub fn unset_variable(&mut self, name: &str) -> bool {
        self.runtime_mut().is_ok_and(|rt| rt.env.unset(name))
    }

    pub fn isset(&self, name: &str) -> bool {
        self.get_variable(name).is_some()
    }

    /// True if `name` is unset or falsy. An uninitialized engine has no
    /// variables, so every name is empty.
    pub fn empty(&self, name: &str) -> bool {
        self.runtime().map_or(true, |rt| rt.env.empty(name))
    }

    pub fn environment(&self) -> Option<&Environment> {
        self.runtime().map(|rt| &rt.env)
    }

    /// Mutable access, e.g. to push a function scope.
    pub fn environment_mut(&mut self) -> Option<&mut Environment> {
        self.runtime_mut().ok().map(|rt| &mut rt.env)
    }

    pub fn functions(&self) -> Option<&FunctionRegistry> {
        self.runtime().map(|rt| &rt.functions)
    }

    /// Register an additional builtin. Duplicates are accepted; the first
    /// registration of a name stays the one that is called.
    pub fn register_function(
        &mut self,
        name: &str,
        callback: BuiltinFn,
        arity: Arity,
    ) -> EngineResult<()> {
        let result = self
            .runtime_mut()
            .and_then(|rt| rt.functions.register(name, callback, arity));
        self.track(result)
    }

    /// Call a builtin. Unknown names, rejected argument counts and an
    /// uninitialized engine all yield `None`.
    pub fn call_function(&self, name: &str, args: &[Value]) -> Option<Value> {
        self.runtime()?.functions.call(&self.output, name, args)
    }

    pub fn call_function_checked(&self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        let Some(runtime) = self.runtime() else {
            return Err(CallError::Engine(EngineError::WrongState {
                expected: EngineState::Initialized,
                found: self.state,
            }));
        };
        runtime.functions.call_checked(&self.output, name, args)
    }
}

// Output helpers

impl Engine {
    /// Write raw bytes to standard output.
    pub fn output(&self, bytes: &[u8]) {
        emit(&self.output, StreamId::Stdout, bytes);
    }

    pub fn output_int(&self, n: i64) {
        self.output(n.to_string().as_bytes());
    }

    /// Write `f` with 6 significant digits.
    pub fn output_float(&self, f: f64) {
        self.output(format_float(f).as_bytes());
    }

    /// `1` for true, nothing for false.
    pub fn output_bool(&self, b: bool) {
        if b {
            self.output(b"1");
        }
    }

    /// Write `message` to standard error.
    pub fn error(&self, message: &str) {
        emit(&self.output, StreamId::Stderr, message.as_bytes());
    }

    pub fn warning(&self, message: &str) {
        self.error(message);
    }

    pub fn notice(&self, message: &str) {
        self.error(message);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.cleanup();
    }
}
