//! Built-in type adapters for the common argument types.

use gale_foundation::{Cursor, Error, Result, Value};

use crate::adapter::ArgumentAdapter;
use crate::argument::ArgumentSpec;
use crate::context::ExecutionContext;
use crate::registry::RegistrationContext;

/// Reads a single space-delimited word.
pub struct WordAdapter;

impl ArgumentAdapter for WordAdapter {
    fn type_tag(&self) -> &str {
        "word"
    }

    fn parse(
        &self,
        cursor: &mut Cursor,
        _ctx: &ExecutionContext,
        _spec: &ArgumentSpec,
    ) -> Result<Value> {
        Ok(Value::from(cursor.read_word()))
    }
}

/// Reads a quoted string, or a bare word when no quote opens one.
pub struct StringAdapter;

impl ArgumentAdapter for StringAdapter {
    fn type_tag(&self) -> &str {
        "string"
    }

    fn parse(
        &self,
        cursor: &mut Cursor,
        _ctx: &ExecutionContext,
        _spec: &ArgumentSpec,
    ) -> Result<Value> {
        Ok(Value::from(cursor.read_quoted_or_word()))
    }
}

/// Reads everything to the end of the input.
pub struct TextAdapter;

impl ArgumentAdapter for TextAdapter {
    fn type_tag(&self) -> &str {
        "text"
    }

    fn init(&self, spec: &mut ArgumentSpec, _ctx: &mut RegistrationContext) {
        // Nothing can follow; no separator applies.
        spec.set_needs_space_after(false);
    }

    fn parse(
        &self,
        cursor: &mut Cursor,
        _ctx: &ExecutionContext,
        _spec: &ArgumentSpec,
    ) -> Result<Value> {
        Ok(Value::from(cursor.read_rest()))
    }
}

/// Reads a signed integer.
pub struct IntAdapter;

impl ArgumentAdapter for IntAdapter {
    fn type_tag(&self) -> &str {
        "int"
    }

    fn parse(
        &self,
        cursor: &mut Cursor,
        _ctx: &ExecutionContext,
        _spec: &ArgumentSpec,
    ) -> Result<Value> {
        Ok(Value::Int(cursor.read_integer()?))
    }
}

/// Reads a floating-point number.
pub struct FloatAdapter;

impl ArgumentAdapter for FloatAdapter {
    fn type_tag(&self) -> &str {
        "float"
    }

    fn parse(
        &self,
        cursor: &mut Cursor,
        _ctx: &ExecutionContext,
        _spec: &ArgumentSpec,
    ) -> Result<Value> {
        Ok(Value::Float(cursor.read_number()?))
    }
}

/// Reads `true` or `false`, defaulting to `false` when absent.
pub struct BoolAdapter;

impl ArgumentAdapter for BoolAdapter {
    fn type_tag(&self) -> &str {
        "bool"
    }

    fn parse(
        &self,
        cursor: &mut Cursor,
        _ctx: &ExecutionContext,
        _spec: &ArgumentSpec,
    ) -> Result<Value> {
        let word = cursor.read_word();
        if word.eq_ignore_ascii_case("true") {
            Ok(Value::Bool(true))
        } else if word.eq_ignore_ascii_case("false") {
            Ok(Value::Bool(false))
        } else {
            Err(Error::custom(format!("expected true or false, found '{word}'")))
        }
    }

    fn default_value(&self, _ctx: &ExecutionContext, _spec: &ArgumentSpec) -> Value {
        Value::Bool(false)
    }

    fn suggest(&self, _prefix: &str, _ctx: &ExecutionContext, _spec: &ArgumentSpec) -> Vec<String> {
        vec!["true".to_owned(), "false".to_owned()]
    }
}

/// Reads one of a fixed set of words, declared per instance.
pub struct EnumAdapter {
    tag: String,
    variants: Vec<String>,
}

impl EnumAdapter {
    /// An adapter for `tag` accepting exactly `variants`.
    pub fn new<I, S>(tag: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tag: tag.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }
}

impl ArgumentAdapter for EnumAdapter {
    fn type_tag(&self) -> &str {
        &self.tag
    }

    fn parse(
        &self,
        cursor: &mut Cursor,
        _ctx: &ExecutionContext,
        _spec: &ArgumentSpec,
    ) -> Result<Value> {
        let word = cursor.read_word();
        if let Some(variant) = self.variants.iter().find(|v| v.eq_ignore_ascii_case(&word)) {
            Ok(Value::from(variant.as_str()))
        } else {
            Err(Error::custom(format!(
                "'{word}' is not one of: {}",
                self.variants.join(", ")
            )))
        }
    }

    fn suggest(&self, prefix: &str, _ctx: &ExecutionContext, _spec: &ArgumentSpec) -> Vec<String> {
        self.variants
            .iter()
            .filter(|v| v.starts_with(prefix))
            .cloned()
            .collect()
    }
}
