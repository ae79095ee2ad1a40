//! Set similarity and the match metrics rules use to compare an antecedent
//! with its input.

use crate::error::Result;
use crate::value::Value;

/// A symmetric similarity between two values of the same variable: one for
/// identical values, zero when they share nothing.
pub trait Similarity {
    fn similarity(&self, a: &Value, b: &Value) -> Result<f64>;
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SimilarityOp {
    /// `area(a and b) / area(a or b)` over the universe
    #[default]
    AreaRatio,
    /// `height(a and b) / height(a or b)`: the highest alpha at which both
    /// cuts still overlap, relative to the highest alpha either reaches
    PossibilityRatio,
}

impl Similarity for SimilarityOp {
    fn similarity(&self, a: &Value, b: &Value) -> Result<f64> {
        a.ensure_compatible(b)?;

        if a == b {
            return Ok(1.);
        }

        let union = a.union(b)?;
        let intersection = a.intersection(b)?;
        let (shared, total) = match self {
            Self::AreaRatio => (intersection.area(), union.area()),
            Self::PossibilityRatio => (intersection.height(), union.height()),
        };

        if total <= 0. {
            return Ok(0.);
        }

        Ok((shared / total).clamp(0., 1.))
    }
}

/// How a rule measures the degree to which an input satisfies an antecedent.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MatchOp {
    /// The height of the intersection
    #[default]
    Possibility,
    /// [`SimilarityOp::AreaRatio`]
    AreaSimilarity,
}

impl MatchOp {
    pub fn degree(self, antecedent: &Value, input: &Value) -> Result<f64> {
        match self {
            Self::Possibility => Ok(antecedent.intersection(input)?.height()),
            Self::AreaSimilarity => SimilarityOp::AreaRatio.similarity(antecedent, input),
        }
    }
}
