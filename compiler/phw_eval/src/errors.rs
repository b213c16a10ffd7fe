//! Error types for the execution engine.
//!
//! Only precondition and resource failures are errors. Lookup misses are
//! `Option`s, and malformed source text is never reported.

use thiserror::Error;

use crate::EngineState;

/// Failure of an engine operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The engine was not in the state the operation requires.
    #[error("engine is {found:?}, expected {expected:?}")]
    WrongState {
        expected: EngineState,
        found: EngineState,
    },

    /// A table could not grow.
    #[error("out of memory")]
    OutOfMemory,

    /// A variable or function name was empty.
    #[error("invalid name")]
    InvalidName,

    /// A source file could not be read.
    #[error("could not open input file: {path}: {message}")]
    Io { path: String, message: String },
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Why a checked call produced no value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("call to undefined function {0}()")]
    UnknownFunction(String),

    #[error("{name}() called with {given} argument(s)")]
    ArityMismatch { name: String, given: usize },

    /// The engine could not take calls.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
