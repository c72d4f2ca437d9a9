use std::collections::HashMap;

use tracing::trace;

use crate::{ast::Generator, value::Value};

/// Variable name to already-typed scalar, read-only during evaluation.
pub type Substitutions = HashMap<String, Value>;

impl Generator {
    /// Evaluate this generator against `substitutions`.
    ///
    /// The tree is only borrowed; unbound variables evaluate to `null`.
    pub fn generate(&self, substitutions: &Substitutions) -> Value {
        match self {
            Generator::Value(value) => value.clone(),
            Generator::Var(name) => match substitutions.get(name) {
                Some(value) => value.clone(),
                None => {
                    trace!(name = %name, "unbound variable");
                    Value::Null
                }
            },
            Generator::Obj(obj) => Value::Object(
                obj.fields()
                    .map(|(field, generator)| (field.clone(), generator.generate(substitutions)))
                    .collect(),
            ),
            Generator::Arr(arr) => Value::Array(
                arr.elements()
                    .iter()
                    .map(|element| element.generate(substitutions))
                    .collect(),
            ),
        }
    }
}

/// Evaluates generator forests against a fixed set of substitutions.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    substitutions: Substitutions,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator::default()
    }

    pub fn with_substitutions(substitutions: Substitutions) -> Self {
        Evaluator { substitutions }
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.substitutions.insert(name.into(), value);
        self
    }

    pub fn substitutions(&self) -> &Substitutions {
        &self.substitutions
    }

    pub fn eval(&self, generator: &Generator) -> Value {
        generator.generate(&self.substitutions)
    }

    /// One value per forest element, in order.
    pub fn eval_forest(&self, forest: &[Generator]) -> Vec<Value> {
        forest.iter().map(|generator| self.eval(generator)).collect()
    }
}
