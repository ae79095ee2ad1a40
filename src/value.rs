use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config;
use crate::curve::{CutKind, Curve, MaxPolicy, Side};
use crate::error::{FuzzyError, Result};
use crate::interval::Interval;
use crate::modifiers::Modifier;
use crate::ops::DefuzzificationOp;
use crate::variable::{Domain, VariableKey};

/// A curve bound to a variable, together with the linguistic expression that
/// produced it, if one is known.
#[derive(Clone, Debug)]
pub struct Value {
    domain: Domain,
    curve: Curve,
    expr: Option<String>,
}

impl Value {
    /// Binds `curve` to `domain`. Every vertex must lie inside the universe.
    pub fn bind(domain: Domain, curve: Curve) -> Result<Self> {
        if let Some(x) = domain.first_outside(&curve, config::tolerance()) {
            return Err(FuzzyError::DomainViolation {
                variable: domain.name().to_owned(),
                x,
                min: domain.min(),
                max: domain.max(),
            });
        }

        Ok(Value {
            domain,
            curve,
            expr: None,
        })
    }

    /// Names the value, e.g. `"tall"`.
    pub fn with_expr(mut self, expr: impl Into<String>) -> Self {
        self.expr = Some(expr.into());
        self
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn variable(&self) -> VariableKey {
        self.domain.key()
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn expr(&self) -> Option<&str> {
        self.expr.as_deref()
    }

    pub fn membership(&self, x: f64) -> f64 {
        self.curve.membership(x)
    }

    pub fn height(&self) -> f64 {
        self.curve.height()
    }

    /// Fails unless both values describe the same variable.
    pub fn ensure_compatible(&self, other: &Value) -> Result<()> {
        if self.domain != other.domain {
            return Err(FuzzyError::IncompatibleValues {
                left: self.domain.name().to_owned(),
                right: other.domain.name().to_owned(),
            });
        }

        Ok(())
    }

    /// A value over the same variable. Operations that never widen the x-range
    /// of their inputs use this, so a violation here is a bug.
    fn derived(&self, curve: Curve, expr: Option<String>) -> Value {
        debug_assert!(
            self.domain.first_outside(&curve, config::tolerance()).is_none(),
            "derived curve left the universe of `{}`",
            self.domain.name()
        );

        Value {
            domain: self.domain.clone(),
            curve,
            expr,
        }
    }

    /// The same value with its curve transformed by `f`.
    pub(crate) fn map_curve(&self, f: impl FnOnce(&Curve) -> Curve) -> Value {
        self.derived(f(&self.curve), self.expr.clone())
    }

    /// Combines two values of one variable curve by curve, traced as a
    /// disjunction.
    pub(crate) fn zip_curve(
        &self,
        other: &Value,
        word: &str,
        f: impl FnOnce(&Curve, &Curve) -> Curve,
    ) -> Result<Value> {
        self.ensure_compatible(other)?;

        Ok(self.derived(f(&self.curve, &other.curve), self.joined(other, word)))
    }

    fn joined(&self, other: &Value, word: &str) -> Option<String> {
        match (&self.expr, &other.expr) {
            (Some(a), Some(b)) => Some(format!("{a} {word} {b}")),
            _ => None,
        }
    }

    pub fn union(&self, other: &Value) -> Result<Value> {
        self.ensure_compatible(other)?;

        Ok(self.derived(self.curve.union(&other.curve), self.joined(other, "or")))
    }

    pub fn intersection(&self, other: &Value) -> Result<Value> {
        self.ensure_compatible(other)?;

        Ok(self.derived(self.curve.intersection(&other.curve), self.joined(other, "and")))
    }

    pub fn complement(&self) -> Value {
        self.derived(
            self.curve.complement_from(self.domain.min()),
            self.expr.as_ref().map(|e| format!("not {e}")),
        )
    }

    /// Applies a hedge, extending the expression: `tall` becomes `very tall`.
    pub fn modify(&self, modifier: Modifier) -> Result<Value> {
        let curve = match modifier {
            Modifier::Not => self.curve.complement_from(self.domain.min()),
            _ => modifier.apply(&self.curve)?,
        };

        Ok(self.derived(curve, self.expr.as_ref().map(|e| format!("{modifier} {e}"))))
    }

    /// The area under the membership across the whole universe.
    pub fn area(&self) -> f64 {
        self.curve.area(self.domain.min(), self.domain.max()).unwrap_or(0.)
    }

    /// The cut's hull, with unbounded ends closed at the universe bounds.
    pub fn alpha_cut(&self, alpha: f64, kind: CutKind) -> Option<Interval> {
        self.alpha_cuts(alpha, kind).into_iter().reduce(|a, b| a.hull(&b))
    }

    pub fn alpha_cuts(&self, alpha: f64, kind: CutKind) -> Vec<Interval> {
        let (min, max) = (self.domain.min(), self.domain.max());

        self.curve
            .alpha_cuts(alpha, kind)
            .into_iter()
            .filter(|i| i.high >= min && i.low <= max)
            .map(|i| i.clamp_to(min, max))
            .collect()
    }

    /// Like [`Curve::x_for_membership`], but a match along a constant line
    /// resolves to the universe bound on the requested side.
    pub fn x_for_membership(&self, y: f64, side: Side) -> Result<f64> {
        let x = self.curve.x_for_membership(y, side)?;

        Ok(x.clamp(self.domain.min(), self.domain.max()))
    }

    pub fn moment_defuzzify(&self) -> Result<f64> {
        self.curve
            .moment_within(self.domain.min(), self.domain.max(), config::tolerance())
    }

    pub fn maximum_defuzzify(&self, policy: MaxPolicy) -> Result<f64> {
        self.curve
            .maximum_within(self.domain.min(), self.domain.max(), policy, config::tolerance())
    }

    pub fn bisector_defuzzify(&self) -> Result<f64> {
        self.curve
            .bisector_within(self.domain.min(), self.domain.max(), config::tolerance())
    }

    pub fn defuzzify(&self, op: DefuzzificationOp) -> Result<f64> {
        match op {
            DefuzzificationOp::Cog => self.moment_defuzzify(),
            DefuzzificationOp::Boa => self.bisector_defuzzify(),
            DefuzzificationOp::Mom => self.maximum_defuzzify(MaxPolicy::Mean),
            DefuzzificationOp::Som => self.maximum_defuzzify(MaxPolicy::First),
            DefuzzificationOp::Lom => self.maximum_defuzzify(MaxPolicy::Last),
        }
    }
}

/// Values are equal when they describe the same variable with the same curve.
/// The expression is only a label.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain && self.curve == other.curve
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.domain.key().hash(state);
        self.curve.hash(state);
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expr {
            Some(expr) => write!(f, "{} is {expr}", self.domain.name())?,
            None => f.write_str(self.domain.name())?,
        }

        write!(f, ": {}", self.curve)
    }
}
