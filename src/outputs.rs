use std::collections::HashMap;

use crate::value::Value;
use crate::variable::{Variable, VariableKey};

#[derive(Debug)]
pub struct Outputs {
    inferred_memberships: HashMap<VariableKey, Value>,
    defuzzificated_inferred_memberships: HashMap<VariableKey, f64>,
    strengths: Vec<f64>,
}

impl Outputs {
    pub(crate) fn new(
        inferred_memberships: HashMap<VariableKey, Value>,
        defuzzificated_inferred_memberships: HashMap<VariableKey, f64>,
        strengths: Vec<f64>,
    ) -> Self {
        Self {
            inferred_memberships,
            defuzzificated_inferred_memberships,
            strengths,
        }
    }

    /// The composed conclusion for a variable, if any rule concludes it.
    pub fn get_inferred_value(&self, var: Variable) -> Option<&Value> {
        self.inferred_memberships.get(&var.key())
    }

    /// The defuzzified conclusion for a variable. Absent when no rule with a
    /// non-zero strength concludes it.
    pub fn get_inferred_membership(&self, var: Variable) -> Option<f64> {
        self.defuzzificated_inferred_memberships.get(&var.key()).copied()
    }

    /// Firing strength of every rule, in rule order.
    pub fn strengths(&self) -> &[f64] {
        &self.strengths
    }
}
