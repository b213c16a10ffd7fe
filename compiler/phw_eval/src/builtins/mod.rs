//! Builtin catalogue registered by every engine.

use phw_value::Value;

use crate::registry::{Arity, CallContext, FunctionRegistry};
use crate::EngineResult;

/// Write each argument with no separator. Returns `Null`.
pub fn echo(ctx: &mut CallContext<'_>, args: &[Value]) -> Value {
    for arg in args {
        ctx.echo(arg);
    }
    Value::null()
}

/// Write the first argument. Returns `Int(1)`.
pub fn print(ctx: &mut CallContext<'_>, args: &[Value]) -> Value {
    if let Some(arg) = args.first() {
        ctx.echo(arg);
    }
    Value::int(1)
}

/// Byte length of a string argument; `0` when absent or not a string.
pub fn strlen(_ctx: &mut CallContext<'_>, args: &[Value]) -> Value {
    let len = args.first().and_then(Value::as_bytes).map_or(0, <[u8]>::len);
    Value::int(i64::try_from(len).unwrap_or(i64::MAX))
}

/// Register `echo`, `print` and `strlen`.
///
/// `strlen` accepts zero arguments so that a bare call reaches its
/// zero-length answer instead of failing the arity check.
pub fn register_builtins(registry: &mut FunctionRegistry) -> EngineResult<()> {
    registry.register("echo", echo, Arity::at_least(1))?;
    registry.register("print", print, Arity::exactly(1))?;
    registry.register("strlen", strlen, Arity::between(0, 1))?;
    Ok(())
}
