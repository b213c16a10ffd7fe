//! Function registry: name to native callback plus arity bounds.
//!
//! Duplicate registrations are accepted; lookup always finds the first one.
//! [`FunctionRegistry::call`] folds "unknown function" and "wrong argument
//! count" into `None`; [`FunctionRegistry::call_checked`] keeps them apart.

use rustc_hash::FxHashMap;

use phw_value::{render_into, Value};

use crate::output::{emit, OutputHandler, StreamId};
use crate::{CallError, EngineError, EngineResult};

/// Accepted argument counts of a builtin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    /// `None` means unbounded.
    pub max: Option<usize>,
}

impl Arity {
    pub const fn exactly(n: usize) -> Self {
        Arity {
            min: n,
            max: Some(n),
        }
    }

    pub const fn at_least(min: usize) -> Self {
        Arity { min, max: None }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Arity {
            min,
            max: Some(max),
        }
    }

    /// Convert signed host bounds: a negative `max` is unbounded, a negative
    /// `min` is treated as zero.
    pub fn from_bounds(min: i32, max: i32) -> Self {
        Arity {
            min: usize::try_from(min).unwrap_or(0),
            max: usize::try_from(max).ok(),
        }
    }

    #[inline]
    pub fn accepts(self, argc: usize) -> bool {
        argc >= self.min && self.max.map_or(true, |max| argc <= max)
    }
}

/// What a builtin can reach while it runs.
pub struct CallContext<'a> {
    output: &'a OutputHandler,
}

impl<'a> CallContext<'a> {
    pub fn new(output: &'a OutputHandler) -> Self {
        CallContext { output }
    }

    /// Write raw bytes to standard output.
    pub fn write(&mut self, bytes: &[u8]) {
        emit(self.output, StreamId::Stdout, bytes);
    }

    /// Write the echo rendering of `value` to standard output.
    pub fn echo(&mut self, value: &Value) {
        let mut buf = Vec::new();
        render_into(value, &mut buf);
        self.write(&buf);
    }
}

/// Native callback. Arguments are borrowed; the returned value is owned by
/// the caller.
pub type BuiltinFn = fn(&mut CallContext<'_>, &[Value]) -> Value;

struct FunctionEntry {
    name: String,
    callback: BuiltinFn,
    arity: Arity,
}

/// Registered builtins.
pub struct FunctionRegistry {
    entries: Vec<FunctionEntry>,
    /// Name to slot of its first registration.
    first: FxHashMap<String, usize>,
}

impl FunctionRegistry {
    pub fn with_capacity(capacity: usize) -> EngineResult<Self> {
        let mut entries = Vec::new();
        entries
            .try_reserve(capacity)
            .map_err(|_| EngineError::OutOfMemory)?;
        let mut first = FxHashMap::default();
        first
            .try_reserve(capacity)
            .map_err(|_| EngineError::OutOfMemory)?;
        Ok(FunctionRegistry { entries, first })
    }

    /// Append a builtin.
    pub fn register(&mut self, name: &str, callback: BuiltinFn, arity: Arity) -> EngineResult<()> {
        if name.is_empty() {
            return Err(EngineError::InvalidName);
        }
        self.entries
            .try_reserve(1)
            .map_err(|_| EngineError::OutOfMemory)?;
        self.first
            .try_reserve(1)
            .map_err(|_| EngineError::OutOfMemory)?;

        let slot = self.entries.len();
        if self.first.contains_key(name) {
            tracing::debug!(name, "duplicate registration shadowed by earlier entry");
        } else {
            self.first.insert(name.to_owned(), slot);
        }
        self.entries.push(FunctionEntry {
            name: name.to_owned(),
            callback,
            arity,
        });
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<&FunctionEntry> {
        self.first.get(name).map(|&slot| &self.entries[slot])
    }

    /// Call `name`, distinguishing why no value was produced.
    pub fn call_checked(
        &self,
        output: &OutputHandler,
        name: &str,
        args: &[Value],
    ) -> Result<Value, CallError> {
        let Some(entry) = self.lookup(name) else {
            return Err(CallError::UnknownFunction(name.to_owned()));
        };
        if !entry.arity.accepts(args.len()) {
            return Err(CallError::ArityMismatch {
                name: entry.name.clone(),
                given: args.len(),
            });
        }
        let mut ctx = CallContext::new(output);
        Ok((entry.callback)(&mut ctx, args))
    }

    /// Call `name`. Unknown names and rejected argument counts both yield
    /// `None`.
    #[tracing::instrument(level = "trace", skip(self, output, args), fields(argc = args.len()))]
    pub fn call(&self, output: &OutputHandler, name: &str, args: &[Value]) -> Option<Value> {
        match self.call_checked(output, name, args) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::trace!(%error, "call produced no value");
                None
            }
        }
    }

    /// Arity of the first registration of `name`.
    pub fn arity(&self, name: &str) -> Option<Arity> {
        self.lookup(name).map(|e| e.arity)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.first.contains_key(name)
    }

    /// Number of registrations, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
