//! Variable environment.
//!
//! Uses a scope stack; the global table sits at the bottom and is never
//! popped. Every operation acts on the table at the top.
//!
//! # Table layout
//!
//! Each table keeps its entries in a `Vec` in insertion order and an
//! `FxHashMap` from name to slot. Overwriting a name replaces the value in
//! place. Unsetting a name moves the last entry into the freed slot, so
//! order is preserved only for tables that never saw an unset.

use rustc_hash::FxHashMap;

use phw_value::Value;

use crate::{EngineError, EngineResult};

/// Kind of a variable table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    Local,
    Function,
}

#[derive(Debug)]
struct Entry {
    name: String,
    value: Value,
}

/// A single table of bindings.
#[derive(Debug)]
struct ScopeTable {
    scope: Scope,
    entries: Vec<Entry>,
    slots: FxHashMap<String, usize>,
}

impl ScopeTable {
    fn with_capacity(scope: Scope, capacity: usize) -> EngineResult<Self> {
        let mut entries = Vec::new();
        entries
            .try_reserve(capacity)
            .map_err(|_| EngineError::OutOfMemory)?;
        let mut slots = FxHashMap::default();
        slots
            .try_reserve(capacity)
            .map_err(|_| EngineError::OutOfMemory)?;
        Ok(ScopeTable {
            scope,
            entries,
            slots,
        })
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.slots.get(name).map(|&slot| &self.entries[slot].value)
    }

    fn set(&mut self, name: &str, value: Value) -> EngineResult<()> {
        if let Some(&slot) = self.slots.get(name) {
            // The previous occupant is released here.
            self.entries[slot].value = value;
            return Ok(());
        }

        // Amortized reservation doubles the capacity when full.
        self.entries
            .try_reserve(1)
            .map_err(|_| EngineError::OutOfMemory)?;
        self.slots
            .try_reserve(1)
            .map_err(|_| EngineError::OutOfMemory)?;

        self.slots.insert(name.to_owned(), self.entries.len());
        self.entries.push(Entry {
            name: name.to_owned(),
            value,
        });
        Ok(())
    }

    fn unset(&mut self, name: &str) -> bool {
        let Some(slot) = self.slots.remove(name) else {
            return false;
        };
        self.entries.swap_remove(slot);
        if let Some(moved) = self.entries.get(slot) {
            self.slots.insert(moved.name.clone(), slot);
        }
        true
    }
}

/// Named bindings visible to a running script.
#[derive(Debug)]
pub struct Environment {
    /// Stack of tables, current at the top. Never empty.
    tables: Vec<ScopeTable>,
    capacity: usize,
}

impl Environment {
    /// Create an environment whose global table holds `capacity` entries
    /// before it first grows.
    pub fn with_capacity(capacity: usize) -> EngineResult<Self> {
        Ok(Environment {
            tables: vec![ScopeTable::with_capacity(Scope::Global, capacity)?],
            capacity,
        })
    }

    #[inline]
    fn current(&self) -> &ScopeTable {
        let top = self.tables.len() - 1;
        &self.tables[top]
    }

    #[inline]
    fn current_mut(&mut self) -> &mut ScopeTable {
        let top = self.tables.len() - 1;
        &mut self.tables[top]
    }

    /// Bind `name` to `value`, taking ownership of it.
    ///
    /// An existing binding is overwritten and its old value released. The
    /// table grows only when `name` is new.
    pub fn set(&mut self, name: &str, value: Value) -> EngineResult<()> {
        if name.is_empty() {
            return Err(EngineError::InvalidName);
        }
        self.current_mut().set(name, value)
    }

    /// Look up `name`. The returned view is not an ownership unit; use
    /// [`Value::add_ref`] to retain it.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.current().get(name)
    }

    /// Remove `name`, releasing its value. Returns whether it was bound.
    pub fn unset(&mut self, name: &str) -> bool {
        self.current_mut().unset(name)
    }

    pub fn isset(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// True if `name` is unbound or bound to a falsy value.
    pub fn empty(&self, name: &str) -> bool {
        self.get(name).map_or(true, Value::is_falsy)
    }

    /// Number of bindings in the current table.
    pub fn len(&self) -> usize {
        self.current().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current().entries.is_empty()
    }

    /// Names in the current table, in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.current().entries.iter().map(|e| e.name.as_str())
    }

    pub fn current_scope(&self) -> Scope {
        self.current().scope
    }

    /// Number of tables on the stack (1 when only the global table exists).
    pub fn depth(&self) -> usize {
        self.tables.len()
    }

    /// Push a fresh, empty table.
    pub fn push_scope(&mut self, scope: Scope) -> EngineResult<()> {
        self.tables
            .try_reserve(1)
            .map_err(|_| EngineError::OutOfMemory)?;
        let table = ScopeTable::with_capacity(scope, self.capacity)?;
        self.tables.push(table);
        Ok(())
    }

    /// Pop the current table, releasing its values.
    ///
    /// Returns `false` and does nothing when only the global table is left.
    pub fn pop_scope(&mut self) -> bool {
        if self.tables.len() > 1 {
            self.tables.pop();
            true
        } else {
            false
        }
    }
}
