use std::fmt::Debug;

pub use fixed_map::Key;
use fixed_map::Map as FixedMap;

use crate::curve::Curve;
use crate::error::{FuzzyError, Result};
use crate::shapes::Shape;
use crate::value::Value;
use crate::variable::{Variable, Variables};

/// The named linguistic terms of one variable, keyed by a user enum:
///
/// ```
/// use fuzzy_sets::{Key, Shape, Terms, Variables};
///
/// #[derive(Clone, Copy, Debug, Key)]
/// enum Height {
///     Short,
///     Tall,
/// }
///
/// let mut vars = Variables::new();
/// let height = vars.add("height", 100. ..=250.)?;
/// let mut terms = Terms::new(height);
///
/// terms.insert(&vars, Height::Tall, Shape::S(170., 190.))?;
///
/// assert_eq!(terms.get(Height::Tall).and_then(|v| v.expr()), Some("tall"));
/// # Ok::<(), fuzzy_sets::FuzzyError>(())
/// ```
pub struct Terms<K: Key> {
    variable: Variable,
    terms: FixedMap<K, Value>,
}

impl<K: Key + Debug> Terms<K> {
    pub fn new(variable: Variable) -> Self {
        Self {
            variable,
            terms: FixedMap::new(),
        }
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn insert(&mut self, vars: &Variables, term: K, shape: Shape) -> Result<()> {
        self.insert_curve(vars, term, shape.generate()?)
    }

    pub fn insert_curve(&mut self, vars: &Variables, term: K, curve: Curve) -> Result<()> {
        let value = vars.bind(self.variable, curve)?.with_expr(term_name(&term));

        self.terms.insert(term, value);

        Ok(())
    }

    pub fn get(&self, term: K) -> Option<&Value> {
        self.terms.get(term)
    }

    /// Like [`Terms::get`], but reports a missing term as a missing input.
    pub fn value(&self, term: K) -> Result<&Value> {
        self.get(term).ok_or_else(|| FuzzyError::MissingInput {
            variable: term_name(&term),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &Value)> {
        self.terms.iter()
    }
}

fn term_name<K: Debug>(term: &K) -> String {
    format!("{term:?}").to_lowercase()
}
