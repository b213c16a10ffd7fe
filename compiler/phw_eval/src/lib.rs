//! Phw Eval - execution engine for embedded script source.
//!
//! # Architecture
//!
//! - [`Engine`]: state machine owning one [`Environment`] and one
//!   [`FunctionRegistry`], driving source through the statement scan
//! - [`Environment`]: named bindings on a scope stack
//! - [`FunctionRegistry`]: builtins with arity bounds
//! - [`OutputHandler`]: the `write(stream, bytes)` sink every script byte
//!   goes through
//! - [`syntax_check`]: textual bracket-balance check, independent of any
//!   engine
//!
//! Values come from `phw_value` and are re-exported here.

mod builtins;
mod config;
mod engine;
mod environment;
mod errors;
mod output;
mod registry;
mod syntax;

pub use phw_value::{Value, ValueData, ValueKind};

pub use builtins::{echo, print, register_builtins, strlen};
pub use config::{EngineBuilder, EngineConfig};
pub use engine::{Engine, EngineState};
pub use environment::{Environment, Scope};
pub use errors::{CallError, EngineError, EngineResult};
pub use output::{
    buffer_output, silent_output, stdio_output, BufferOutput, OutputHandler, SharedOutput,
    StdioOutput, StreamId,
};
pub use registry::{Arity, BuiltinFn, CallContext, FunctionRegistry};
pub use syntax::{syntax_check, syntax_check_file};
