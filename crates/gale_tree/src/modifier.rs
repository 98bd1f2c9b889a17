//! The behavior-adapter strategy: declarative argument constraints.
//!
//! Where a type adapter decides how an argument reads, a modifier decides
//! what values it accepts. Constraints are declared on the builder as
//! [`ConstraintTag`]s and resolved to [`ArgumentModifier`] strategies at
//! registration through the same pairwise priority pass as type adapters.

use std::sync::Arc;

use gale_foundation::{Error, Result, Value};

use crate::argument::ArgumentSpec;
use crate::context::ExecutionContext;
use crate::priority::Relation;
use crate::registry::RegistrationContext;

/// A declarative constraint attached to an argument at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintTag {
    key: String,
    params: Vec<Value>,
}

impl ConstraintTag {
    /// Creates a tag with the given key and parameters.
    pub fn new(key: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            key: key.into(),
            params,
        }
    }

    /// A numeric range constraint, inclusive on both ends.
    #[must_use]
    pub fn range(min: f64, max: f64) -> Self {
        Self::new("range", vec![Value::Float(min), Value::Float(max)])
    }

    /// A string whitelist constraint.
    pub fn one_of<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            "one_of",
            options.into_iter().map(|s| Value::from(s.into())).collect(),
        )
    }

    /// The key a modifier strategy matches on.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// All parameters.
    #[must_use]
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// The parameter at `index`, if present.
    #[must_use]
    pub fn param(&self, index: usize) -> Option<&Value> {
        self.params.get(index)
    }
}

/// A pluggable strategy validating or adjusting argument values.
pub trait ArgumentModifier: Send + Sync {
    /// The constraint key this modifier handles.
    fn key(&self) -> &str;

    /// Whether this modifier can handle `tag`. Defaults to an exact key
    /// match.
    fn applies(&self, tag: &ConstraintTag) -> bool {
        tag.key() == self.key()
    }

    /// Called once when the modifier is bound to an argument.
    fn init(&self, _tag: &ConstraintTag, _spec: &mut ArgumentSpec, _ctx: &mut RegistrationContext) {
    }

    /// Validates a parsed (or defaulted) value.
    ///
    /// # Errors
    ///
    /// A validation error; the dispatcher folds it into the branch's parse
    /// failure.
    fn validate(
        &self,
        tag: &ConstraintTag,
        value: &Value,
        spec: &ArgumentSpec,
        ctx: &ExecutionContext,
    ) -> Result<()>;

    /// This modifier's ordering relation against a competitor.
    fn priority_on(&self, _other: &dyn ArgumentModifier) -> Relation {
        Relation::Default
    }
}

/// A constraint tag paired with the modifier resolved for it.
#[derive(Clone)]
pub struct BoundConstraint {
    tag: ConstraintTag,
    modifier: Arc<dyn ArgumentModifier>,
}

impl BoundConstraint {
    /// Binds `modifier` to `tag`.
    #[must_use]
    pub fn new(tag: ConstraintTag, modifier: Arc<dyn ArgumentModifier>) -> Self {
        Self { tag, modifier }
    }

    /// The declared tag.
    #[must_use]
    pub fn tag(&self) -> &ConstraintTag {
        &self.tag
    }

    /// The resolved modifier.
    #[must_use]
    pub fn modifier(&self) -> &Arc<dyn ArgumentModifier> {
        &self.modifier
    }
}

/// Enforces inclusive numeric bounds. Non-numeric values pass untouched.
pub struct RangeModifier;

impl ArgumentModifier for RangeModifier {
    fn key(&self) -> &str {
        "range"
    }

    fn validate(
        &self,
        tag: &ConstraintTag,
        value: &Value,
        spec: &ArgumentSpec,
        _ctx: &ExecutionContext,
    ) -> Result<()> {
        let Some(x) = value.as_float() else {
            return Ok(());
        };
        let min = tag.param(0).and_then(Value::as_float).unwrap_or(f64::NEG_INFINITY);
        let max = tag.param(1).and_then(Value::as_float).unwrap_or(f64::INFINITY);
        if x < min {
            return Err(Error::validation(format!(
                "{} must be at least {min}",
                spec.name()
            )));
        }
        if x > max {
            return Err(Error::validation(format!(
                "{} must be at most {max}",
                spec.name()
            )));
        }
        Ok(())
    }
}

/// Restricts string values to a whitelist. Non-string values pass untouched.
pub struct OneOfModifier;

impl ArgumentModifier for OneOfModifier {
    fn key(&self) -> &str {
        "one_of"
    }

    fn validate(
        &self,
        tag: &ConstraintTag,
        value: &Value,
        spec: &ArgumentSpec,
        _ctx: &ExecutionContext,
    ) -> Result<()> {
        let Some(s) = value.as_str() else {
            return Ok(());
        };
        if tag.params().iter().any(|p| p.as_str() == Some(s)) {
            return Ok(());
        }
        let options: Vec<&str> = tag.params().iter().filter_map(Value::as_str).collect();
        Err(Error::validation(format!(
            "{} must be one of: {}",
            spec.name(),
            options.join(", ")
        )))
    }
}
