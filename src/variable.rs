use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};

use crate::curve::Curve;
use crate::error::{FuzzyError, Result};
use crate::interval::Interval;
use crate::shapes::Shape;
use crate::value::Value;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// A variable's name and universe of discourse. Two domains are the same
/// domain exactly when they come from the same registered variable.
#[derive(Clone, Debug)]
pub struct Domain {
    key: VariableKey,
    name: Arc<str>,
    min: f64,
    max: f64,
}

impl Domain {
    pub fn key(&self) -> VariableKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn universe(&self) -> Interval {
        Interval::closed(self.min, self.max)
    }

    /// The first x of `curve` outside the universe, if any.
    pub(crate) fn first_outside(&self, curve: &Curve, tolerance: f64) -> Option<f64> {
        curve
            .points()
            .iter()
            .map(|p| p.x)
            .find(|&x| x < self.min - tolerance || x > self.max + tolerance)
    }
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Domain {}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.universe())
    }
}

/// A handle to a registered variable.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Variable(pub(crate) VariableKey);

impl Variable {
    pub fn key(&self) -> VariableKey {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct Variables(pub(crate) SlotMap<VariableKey, Domain>);

impl Variables {
    pub fn new() -> Self {
        Self(SlotMap::with_key())
    }

    /// Registers a variable over the closed universe `universe_range`.
    pub fn add(&mut self, name: &str, universe_range: RangeInclusive<f64>) -> Result<Variable> {
        let min = *universe_range.start();
        let max = *universe_range.end();

        if let Some(bound) = [min, max].into_iter().find(|b| !b.is_finite()) {
            return Err(FuzzyError::InvalidParameter {
                name: "universe bound",
                value: bound,
            });
        }
        if max < min {
            return Err(FuzzyError::Ordering { previous: min, x: max });
        }

        let name: Arc<str> = name.into();
        let key = self.0.insert_with_key(|key| Domain { key, name, min, max });

        tracing::debug!(variable = %self.0[key], "variable registered");

        Ok(Variable(key))
    }

    pub fn get(&self, var: Variable) -> Option<&Domain> {
        self.0.get(var.0)
    }

    pub fn domain(&self, var: Variable) -> Result<&Domain> {
        self.get(var).ok_or(FuzzyError::UnknownVariable)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Binds `curve` to a variable, rejecting curves that leave its universe.
    pub fn bind(&self, var: Variable, curve: Curve) -> Result<Value> {
        Value::bind(self.domain(var)?.clone(), curve)
    }

    pub fn bind_shape(&self, var: Variable, shape: Shape) -> Result<Value> {
        self.bind(var, shape.generate()?)
    }

    /// A crisp reading: full membership at `x` only.
    pub fn crisp(&self, var: Variable, x: f64) -> Result<Value> {
        self.bind(var, Curve::singleton(x)?)
    }

    /// A constant membership across the whole universe.
    pub fn constant(&self, var: Variable, y: f64) -> Result<Value> {
        let domain = self.domain(var)?;

        Value::bind(domain.clone(), Curve::constant(domain.min, y)?)
    }
}
