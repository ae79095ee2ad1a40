//! Fuzzy sets over piecewise-linear membership curves, and a rule engine
//! driven by them.
//!
//! ```
//! use fuzzy_sets::{CutKind, Interval, Shape, Variables};
//!
//! let mut vars = Variables::new();
//! let temp = vars.add("temperature", 0. ..=40.)?;
//! let warm = vars.bind_shape(temp, Shape::Triangle(15., 25., 35.))?.with_expr("warm");
//!
//! assert_eq!(warm.alpha_cut(0.5, CutKind::Weak), Some(Interval::closed(20., 30.)));
//! # Ok::<(), fuzzy_sets::FuzzyError>(())
//! ```

mod config;
mod curve;
mod error;
mod inference;
mod inputs;
mod interval;
mod linspace;
mod math;
mod modifiers;
mod ops;
mod outputs;
mod rules;
mod shapes;
mod similarity;
mod terms;
mod value;
mod variable;

pub use config::{precision, set_precision, set_tolerance, tolerance, Config, FUZZY_TOLERANCE};
pub use curve::{Curve, CutKind, MaxPolicy, Point, Side};
pub use error::{FuzzyError, Result};
pub use inference::Inference;
pub use inputs::Inputs;
pub use interval::Interval;
pub use modifiers::Modifier;
pub use ops::{AndOp, Combine, DefuzzificationOp, ImplicationOp, ProductionLink, COMPENSATORY_GAMMA};
pub use outputs::Outputs;
pub use rules::{Firing, Rule, Rules};
pub use shapes::Shape;
pub use similarity::{MatchOp, Similarity, SimilarityOp};
pub use terms::{Key, Terms};
pub use value::Value;
pub use variable::{Domain, Variable, VariableKey, Variables};
