use num::Float;

use crate::curve::{Curve, PointwiseOp};

/// Reduces the match values of a rule's antecedents to one firing strength.
pub trait Combine {
    fn combine(&self, values: &[f64]) -> f64;
}

/// Default gamma of the compensatory and.
pub const COMPENSATORY_GAMMA: f64 = 0.562;

/// And operator method for combining the match values of the antecedents
/// in a fuzzy rule premise. Every method returns zero for no values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AndOp {
    #[default]
    Min,
    Prod,
    BoundedProd,
    DrasticProd,
    /// `prod(v)^(1 - gamma) * (1 - prod(1 - v))^gamma`
    CompensatoryAnd { gamma: f64 },
}

impl AndOp {
    /// A compensatory and with `gamma` clamped to `[0, 1]`.
    pub fn compensatory_and(gamma: f64) -> Self {
        Self::CompensatoryAnd {
            gamma: clamp_gamma(gamma),
        }
    }

    pub fn call<F: Float>(self, values: impl IntoIterator<Item = F>) -> F {
        let values = values.into_iter();

        match self {
            Self::Min => values.reduce(F::min).unwrap_or_else(F::zero),
            Self::Prod => values.reduce(|u, v| u * v).unwrap_or_else(F::zero),
            Self::BoundedProd => values
                .reduce(|u, v| F::max(F::zero(), u + v - F::one()))
                .unwrap_or_else(F::zero),
            Self::DrasticProd => values
                .reduce(|u, v| {
                    if v == F::one() {
                        u
                    } else if u == F::one() {
                        v
                    } else {
                        F::zero()
                    }
                })
                .unwrap_or_else(F::zero),
            Self::CompensatoryAnd { gamma } => {
                let values: Vec<F> = values.collect();

                if values.is_empty() {
                    return F::zero();
                }

                let gamma = F::from(clamp_gamma(gamma)).unwrap_or_else(F::zero);
                let product = values.iter().copied().reduce(|u, v| u * v).unwrap_or_else(F::zero);
                let co_product = values
                    .iter()
                    .map(|&v| F::one() - v)
                    .reduce(|u, v| u * v)
                    .unwrap_or_else(F::zero);

                product.powf(F::one() - gamma) * (F::one() - co_product).powf(gamma)
            },
        }
    }
}

fn clamp_gamma(gamma: f64) -> f64 {
    if gamma.is_nan() {
        COMPENSATORY_GAMMA
    } else {
        gamma.clamp(0., 1.)
    }
}

impl Combine for AndOp {
    fn combine(&self, values: &[f64]) -> f64 {
        self.call(values.iter().copied())
    }
}

/// Implication operator method for applying a firing strength to a conclusion.
/// Each one is piecewise linear in the conclusion's membership, so the result
/// is exact.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ImplicationOp {
    /// Clips the conclusion at the firing strength (Mamdani)
    #[default]
    Min,
    /// Scales the conclusion by the firing strength (Larsen)
    Prod,
    /// `min(1, 1 - s + y)`
    Lukasiewicz,
    /// `max(min(s, y), 1 - s)`
    Zadeh,
    /// `max(1 - s, y)`
    KleeneDienes,
}

impl ImplicationOp {
    pub fn apply(self, strength: f64, conclusion: &Curve, tolerance: f64) -> Curve {
        let s = strength.clamp(0., 1.);

        match self {
            Self::Min => conclusion.map_levels(&[s], |y| y.min(s), tolerance),
            Self::Prod => conclusion.map_levels(&[], |y| y * s, tolerance),
            Self::Lukasiewicz => conclusion.map_levels(&[s], |y| (1. - s + y).min(1.), tolerance),
            Self::Zadeh => conclusion.map_levels(&[s, 1. - s], |y| y.min(s).max(1. - s), tolerance),
            Self::KleeneDienes => conclusion.map_levels(&[1. - s], |y| y.max(1. - s), tolerance),
        }
    }
}

/// Method for aggregating the consequences of the fuzzy rules
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ProductionLink {
    #[default]
    Max,
    Min,
    BoundedSum,
    BoundedProd,
}

impl ProductionLink {
    pub fn call(self, u: &Curve, v: &Curve, tolerance: f64) -> Curve {
        let op = match self {
            Self::Max => PointwiseOp::Max,
            Self::Min => PointwiseOp::Min,
            Self::BoundedSum => PointwiseOp::BoundedSum,
            Self::BoundedProd => PointwiseOp::BoundedProd,
        };

        u.combine(v, op, tolerance)
    }

    /// The word joining two composed expressions.
    pub(crate) fn connective(self) -> &'static str {
        match self {
            Self::Max | Self::BoundedSum => "or",
            Self::Min | Self::BoundedProd => "and",
        }
    }
}

/// Method for defuzzifcating the resulting membership function.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DefuzzificationOp {
    /// Center of Gravity
    #[default]
    Cog,
    /// Bisector of Area
    Boa,
    /// Mean of the values for which the membership function is maximum
    Mom,
    /// Largest value for which the membership function is maximum
    Lom,
    /// Smallest value for which the membership function is maximum
    Som,
}
