//! Per-parse execution context.
//!
//! One context travels down each candidate branch of the dispatch. The
//! bindings map is a persistent `im` map, so cloning a context for a
//! sibling branch is O(1) and mutations in the clone can never leak back
//! into the parent — that isolation is the dispatcher's only transaction
//! mechanism.

use std::sync::Arc;

use gale_foundation::{Error, Result, Sender, Value};

use crate::argument::ArgumentSpec;
use crate::node::CommandExecutor;

/// One parsed argument: the slot it filled and the value it produced.
#[derive(Clone)]
pub struct ParsedBinding {
    argument: Arc<ArgumentSpec>,
    value: Value,
}

impl ParsedBinding {
    /// Creates a binding of `value` to `argument`.
    #[must_use]
    pub fn new(argument: Arc<ArgumentSpec>, value: Value) -> Self {
        Self { argument, value }
    }

    /// The argument slot this binding filled.
    #[must_use]
    pub fn argument(&self) -> &Arc<ArgumentSpec> {
        &self.argument
    }

    /// The bound value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Mutable per-parse state: sender, bindings, and the resolved executor.
///
/// Owned exclusively by one branch of one `parse` call. The sender is
/// shared (the engine never mutates it); everything else clones
/// independently.
#[derive(Clone)]
pub struct ExecutionContext {
    sender: Arc<dyn Sender>,
    input: Arc<str>,
    bindings: im::HashMap<String, ParsedBinding>,
    executor: Option<CommandExecutor>,
}

impl ExecutionContext {
    /// Creates a fresh context for one parse of `input` by `sender`.
    pub fn new(sender: Arc<dyn Sender>, input: impl Into<Arc<str>>) -> Self {
        Self {
            sender,
            input: input.into(),
            bindings: im::HashMap::new(),
            executor: None,
        }
    }

    /// The sender this parse runs for.
    #[must_use]
    pub fn sender(&self) -> &Arc<dyn Sender> {
        &self.sender
    }

    /// The full input line.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Stores a binding under its argument's name.
    ///
    /// Names are unique among siblings on one path, so a later binding for
    /// the same name can only come from re-parsing the same slot.
    pub fn bind(&mut self, binding: ParsedBinding) {
        self.bindings
            .insert(binding.argument().name().to_string(), binding);
    }

    /// Looks up a binding by argument name.
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<&ParsedBinding> {
        self.bindings.get(name)
    }

    /// Looks up a bound value by argument name.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name).map(ParsedBinding::value)
    }

    /// Iterates over all bindings, in no particular order.
    pub fn bindings(&self) -> impl Iterator<Item = &ParsedBinding> {
        self.bindings.values()
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no arguments have been bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The string value of argument `name`.
    ///
    /// # Errors
    ///
    /// Missing or mistyped bindings are host misuse: the handler asked for
    /// an argument its command never declared. That is an internal error.
    pub fn get_str(&self, name: &str) -> Result<&str> {
        self.typed(name, Value::as_str, "string")
    }

    /// The integer value of argument `name`.
    ///
    /// # Errors
    ///
    /// Internal error when missing or not an int.
    pub fn get_int(&self, name: &str) -> Result<i64> {
        self.typed(name, Value::as_int, "int")
    }

    /// The float value of argument `name` (ints widen).
    ///
    /// # Errors
    ///
    /// Internal error when missing or not numeric.
    pub fn get_float(&self, name: &str) -> Result<f64> {
        self.typed(name, Value::as_float, "float")
    }

    /// The boolean value of argument `name`.
    ///
    /// # Errors
    ///
    /// Internal error when missing or not a bool.
    pub fn get_bool(&self, name: &str) -> Result<bool> {
        self.typed(name, Value::as_bool, "bool")
    }

    fn typed<'a, T>(
        &'a self,
        name: &str,
        extract: impl Fn(&'a Value) -> Option<T>,
        expected: &str,
    ) -> Result<T> {
        let value = self
            .value(name)
            .ok_or_else(|| Error::internal(format!("no argument named '{name}'")))?;
        extract(value).ok_or_else(|| {
            Error::internal(format!(
                "argument '{name}' is {}, not {expected}",
                value.type_name()
            ))
        })
    }

    /// The executor resolved so far on this path.
    #[must_use]
    pub fn executor(&self) -> Option<&CommandExecutor> {
        self.executor.as_ref()
    }

    /// Replaces the resolved executor.
    pub fn set_executor(&mut self, executor: CommandExecutor) {
        self.executor = Some(executor);
    }
}
