use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{FuzzyError, Result};
use crate::ops::{AndOp, Combine, ImplicationOp};
use crate::similarity::MatchOp;
use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq)]
struct FiringCache {
    signature: u64,
    strength: f64,
}

/// The outcome of firing one rule.
#[derive(Clone, Debug, PartialEq)]
pub struct Firing {
    pub strength: f64,
    /// The rule's conclusions with the implication applied, in rule order.
    pub conclusions: Vec<Value>,
}

/// A rule `if a1 and a2 ... then c1, c2 ...`.
///
/// Firing matches every input against its antecedent, combines the match
/// values into a strength and applies that strength to each conclusion. The
/// strength is cached against a structural hash of the antecedents, inputs
/// and conclusions, so firing again with equal values skips the match and
/// combine stages.
pub struct Rule<C = AndOp> {
    antecedents: Vec<Value>,
    conclusions: Vec<Value>,
    combine: C,
    match_op: MatchOp,
    implication: ImplicationOp,
    cache: Mutex<Option<FiringCache>>,
}

impl Rule<AndOp> {
    pub fn new(antecedents: Vec<Value>, conclusions: Vec<Value>) -> Self {
        Rule {
            antecedents,
            conclusions,
            combine: AndOp::default(),
            match_op: MatchOp::default(),
            implication: ImplicationOp::default(),
            cache: Mutex::new(None),
        }
    }
}

impl<C: Combine> Rule<C> {
    pub fn with_combine<D: Combine>(self, combine: D) -> Rule<D> {
        Rule {
            antecedents: self.antecedents,
            conclusions: self.conclusions,
            combine,
            match_op: self.match_op,
            implication: self.implication,
            cache: Mutex::new(None),
        }
    }

    pub fn with_match_op(mut self, match_op: MatchOp) -> Self {
        self.set_match_op(match_op);
        self
    }

    pub fn with_implication(mut self, implication: ImplicationOp) -> Self {
        self.set_implication(implication);
        self
    }

    pub fn antecedents(&self) -> &[Value] {
        &self.antecedents
    }

    pub fn conclusions(&self) -> &[Value] {
        &self.conclusions
    }

    pub fn combine_op(&self) -> &C {
        &self.combine
    }

    pub fn match_op(&self) -> MatchOp {
        self.match_op
    }

    pub fn implication(&self) -> ImplicationOp {
        self.implication
    }

    pub fn set_combine(&mut self, combine: C) {
        self.combine = combine;
        self.invalidate();
    }

    pub fn set_match_op(&mut self, match_op: MatchOp) {
        self.match_op = match_op;
        self.invalidate();
    }

    pub fn set_implication(&mut self, implication: ImplicationOp) {
        self.implication = implication;
        self.invalidate();
    }

    /// Drops the cached firing strength.
    pub fn invalidate(&self) {
        if self.cache.lock().take().is_some() {
            tracing::trace!("firing cache invalidated");
        }
    }

    /// The strength of the last firing, while it is still cached.
    pub fn cached_strength(&self) -> Option<f64> {
        self.cache.lock().map(|cache| cache.strength)
    }

    /// Fires the rule with one input per antecedent, in antecedent order.
    ///
    /// Inputs are validated before anything else happens; a rejected firing
    /// leaves the cache as it was.
    pub fn execute(&self, inputs: &[Value]) -> Result<Firing> {
        self.validate(inputs)?;

        let tolerance = Config::global().tolerance;
        let signature = self.signature(inputs);
        let strength = {
            let mut cache = self.cache.lock();
            let cached = *cache;

            match cached {
                Some(cached) if cached.signature == signature => {
                    tracing::trace!(signature, strength = cached.strength, "firing cache hit");
                    cached.strength
                },
                _ => {
                    let degrees = self
                        .antecedents
                        .iter()
                        .zip(inputs)
                        .map(|(antecedent, input)| self.match_op.degree(antecedent, input))
                        .collect::<Result<Vec<_>>>()?;
                    let strength = self.combine.combine(&degrees).clamp(0., 1.);

                    tracing::debug!(signature, ?degrees, strength, "rule fired");
                    *cache = Some(FiringCache { signature, strength });

                    strength
                },
            }
        };

        let conclusions = self
            .conclusions
            .iter()
            .map(|conclusion| conclusion.map_curve(|curve| self.implication.apply(strength, curve, tolerance)))
            .collect();

        Ok(Firing { strength, conclusions })
    }

    fn validate(&self, inputs: &[Value]) -> Result<()> {
        if inputs.len() != self.antecedents.len() {
            return Err(FuzzyError::InputCount {
                expected: self.antecedents.len(),
                found: inputs.len(),
            });
        }

        for (position, (antecedent, input)) in self.antecedents.iter().zip(inputs).enumerate() {
            if antecedent.domain() != input.domain() {
                return Err(FuzzyError::InputVariable {
                    position,
                    expected: antecedent.domain().name().to_owned(),
                    found: input.domain().name().to_owned(),
                });
            }
        }

        Ok(())
    }

    fn signature(&self, inputs: &[Value]) -> u64 {
        let mut hasher = DefaultHasher::new();

        self.match_op.hash(&mut hasher);
        self.antecedents.hash(&mut hasher);
        inputs.hash(&mut hasher);
        self.conclusions.hash(&mut hasher);

        hasher.finish()
    }
}

pub struct Rules<C = AndOp>(pub(crate) Vec<Rule<C>>);

impl<C> Default for Rules<C> {
    fn default() -> Self {
        Rules(Vec::new())
    }
}

impl<C: Combine> Rules<C> {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, rule: Rule<C>) {
        self.0.push(rule);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule<C>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::shapes::Shape;
    use crate::variable::{Variable, Variables};

    struct Counting(Arc<AtomicUsize>);

    impl Combine for Counting {
        fn combine(&self, values: &[f64]) -> f64 {
            self.0.fetch_add(1, Ordering::SeqCst);
            AndOp::Min.combine(values)
        }
    }

    struct Fixture {
        vars: Variables,
        service: Variable,
        food: Variable,
        tip: Variable,
    }

    fn fixture() -> Fixture {
        let mut vars = Variables::new();
        let service = vars.add("service", 0. ..=10.).unwrap();
        let food = vars.add("food", 0. ..=10.).unwrap();
        let tip = vars.add("tip", 0. ..=30.).unwrap();

        Fixture {
            vars,
            service,
            food,
            tip,
        }
    }

    fn generous_rule(f: &Fixture) -> Rule {
        Rule::new(
            vec![
                f.vars.bind_shape(f.service, Shape::Triangle(5., 10., 10.)).unwrap(),
                f.vars.bind_shape(f.food, Shape::Triangle(5., 10., 10.)).unwrap(),
            ],
            vec![f.vars.bind_shape(f.tip, Shape::Triangle(15., 25., 30.)).unwrap().with_expr("generous")],
        )
    }

    fn readings(f: &Fixture, service: f64, food: f64) -> Vec<Value> {
        vec![f.vars.crisp(f.service, service).unwrap(), f.vars.crisp(f.food, food).unwrap()]
    }

    #[test]
    fn test_execute_clips_conclusions() {
        let f = fixture();
        let rule = generous_rule(&f);
        let firing = rule.execute(&readings(&f, 8., 9.)).unwrap();

        assert!((firing.strength - 0.6).abs() < 1e-12);
        assert_eq!(firing.conclusions.len(), 1);

        let tip = &firing.conclusions[0];

        assert_eq!(tip.expr(), Some("generous"));
        assert!((tip.height() - 0.6).abs() < 1e-12);
        assert!((tip.membership(25.) - 0.6).abs() < 1e-12);
        assert!((tip.membership(17.) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_prod_implication_and_area_match() {
        let f = fixture();
        let rule = generous_rule(&f).with_implication(ImplicationOp::Prod);
        let firing = rule.execute(&readings(&f, 7.5, 10.)).unwrap();

        assert!((firing.strength - 0.5).abs() < 1e-12);
        assert!((firing.conclusions[0].membership(25.) - 0.5).abs() < 1e-12);

        let rule = rule.with_match_op(MatchOp::AreaSimilarity);
        let same = f.vars.bind_shape(f.service, Shape::Triangle(5., 10., 10.)).unwrap();
        let food = f.vars.bind_shape(f.food, Shape::Triangle(5., 10., 10.)).unwrap();

        assert_eq!(rule.execute(&[same, food]).unwrap().strength, 1.);
    }

    #[test]
    fn test_repeated_firing_reuses_strength() {
        let f = fixture();
        let calls = Arc::new(AtomicUsize::new(0));
        let rule = generous_rule(&f).with_combine(Counting(calls.clone()));

        let first = rule.execute(&readings(&f, 8., 9.)).unwrap();
        // Equal by value, built separately
        let second = rule.execute(&readings(&f, 8., 9.)).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first.strength.to_bits(), second.strength.to_bits());

        let bits = |firing: &Firing| -> Vec<(u64, u64)> {
            firing.conclusions[0]
                .curve()
                .points()
                .iter()
                .map(|p| (p.x.to_bits(), p.y.to_bits()))
                .collect()
        };

        assert_eq!(bits(&first), bits(&second));

        rule.execute(&readings(&f, 9., 9.)).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_setters_invalidate_cache() {
        let f = fixture();
        let calls = Arc::new(AtomicUsize::new(0));
        let mut rule = generous_rule(&f).with_combine(Counting(calls.clone()));

        rule.execute(&readings(&f, 8., 9.)).unwrap();
        assert!(rule.cached_strength().is_some());

        rule.set_implication(ImplicationOp::Prod);
        assert_eq!(rule.cached_strength(), None);

        rule.execute(&readings(&f, 8., 9.)).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_rejected_inputs_leave_cache_untouched() {
        let f = fixture();
        let rule = generous_rule(&f);

        rule.execute(&readings(&f, 8., 9.)).unwrap();

        let cached = rule.cached_strength();

        assert_eq!(
            rule.execute(&readings(&f, 8., 9.)[..1]).unwrap_err(),
            FuzzyError::InputCount { expected: 2, found: 1 }
        );

        let swapped = vec![f.vars.crisp(f.food, 9.).unwrap(), f.vars.crisp(f.service, 8.).unwrap()];

        assert_eq!(
            rule.execute(&swapped).unwrap_err(),
            FuzzyError::InputVariable {
                position: 0,
                expected: "service".into(),
                found: "food".into(),
            }
        );
        assert_eq!(rule.cached_strength(), cached);
    }

    #[test]
    fn test_rules_container() {
        let f = fixture();
        let mut rules = Rules::with_capacity(1);

        assert!(rules.is_empty());
        rules.add(generous_rule(&f));
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.iter().next().map(|r| r.antecedents().len()), Some(2));
    }
}
