use std::collections::HashMap;

use crate::config::Config;
use crate::error::{FuzzyError, Result};
use crate::inputs::Inputs;
use crate::ops::{Combine, DefuzzificationOp, ProductionLink};
use crate::outputs::Outputs;
use crate::rules::Rules;
use crate::value::Value;
use crate::variable::VariableKey;

/// Fires every rule of a rule set and aggregates their conclusions per
/// output variable.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inference {
    prod_link: ProductionLink,
    defuzz_op: DefuzzificationOp,
}

impl Inference {
    pub fn new(prod_link: ProductionLink, defuzz_op: DefuzzificationOp) -> Self {
        Self { prod_link, defuzz_op }
    }

    pub fn eval<C: Combine>(&self, rules: &Rules<C>, inputs: &Inputs) -> Result<Outputs> {
        let tolerance = Config::global().tolerance;
        let mut composed: HashMap<VariableKey, Value> = HashMap::new();
        let mut strengths = Vec::with_capacity(rules.len());

        for rule in rules.iter() {
            let facts = rule
                .antecedents()
                .iter()
                .map(|antecedent| {
                    inputs
                        .get(antecedent.variable())
                        .cloned()
                        .ok_or_else(|| FuzzyError::MissingInput {
                            variable: antecedent.domain().name().to_owned(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            let firing = rule.execute(&facts)?;

            strengths.push(firing.strength);

            for conclusion in firing.conclusions {
                let key = conclusion.variable();
                let value = match composed.remove(&key) {
                    Some(previous) => {
                        previous.zip_curve(&conclusion, self.prod_link.connective(), |u, v| {
                            self.prod_link.call(u, v, tolerance)
                        })?
                    },
                    None => conclusion,
                };

                composed.insert(key, value);
            }
        }

        let mut crisp = HashMap::with_capacity(composed.len());

        for (key, value) in &composed {
            match value.defuzzify(self.defuzz_op) {
                Ok(x) => {
                    crisp.insert(*key, x);
                },
                Err(FuzzyError::InvalidDefuzzify { height, .. }) => {
                    tracing::debug!(variable = value.domain().name(), height, "nothing inferred");
                },
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(rules = rules.len(), outputs = composed.len(), "rule set evaluated");

        Ok(Outputs::new(composed, crisp, strengths))
    }
}
