use std::collections::HashMap;

use crate::error::Result;
use crate::value::Value;
use crate::variable::{Variable, VariableKey, Variables};

/// Facts for one evaluation of a rule set, at most one per variable.
#[derive(Debug, Default)]
pub struct Inputs(pub(crate) HashMap<VariableKey, Value>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    /// Adds a fuzzy fact, replacing any earlier fact about the same variable.
    pub fn add(&mut self, value: Value) {
        self.0.insert(value.variable(), value);
    }

    pub fn add_crisp(&mut self, vars: &Variables, var: Variable, x: f64) -> Result<()> {
        self.add(vars.crisp(var, x)?);

        Ok(())
    }

    pub fn get(&self, var: VariableKey) -> Option<&Value> {
        self.0.get(&var)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[test]
fn test_later_fact_replaces_earlier() {
    let mut vars = Variables::new();
    let speed = vars.add("speed", 0. ..=100.).unwrap();
    let mut inputs = Inputs::new();

    inputs.add_crisp(&vars, speed, 30.).unwrap();
    inputs.add_crisp(&vars, speed, 40.).unwrap();

    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs.get(speed.key()).map(|v| v.membership(40.)), Some(1.));
    assert!(inputs.add_crisp(&vars, speed, 140.).is_err());
}
