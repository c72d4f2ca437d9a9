//! Compile, evaluate and encode generator expressions

use tracing::debug;

use super::CliError;
use crate::{Evaluator, Value, compile_generators, compile_substitution_value, output};

/// Options for a generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Generator expressions, joined with single spaces before compiling
    pub expressions: Vec<String>,
    /// Raw `NAME=VALUE` substitution arguments, in command-line order
    pub substitutions: Vec<String>,
    /// Tab-indent the output
    pub pretty: bool,
}

/// Split a `NAME=VALUE` argument at its first `=` and compile the value.
///
/// `VALUE` follows the substitution grammar: a literal is a string, a
/// `:`-prefixed raw literal a typed scalar.
pub fn parse_substitution(arg: &str) -> Result<(String, Value), CliError> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => {
            let value = compile_substitution_value(value)?;
            Ok((name.to_string(), value))
        }
        _ => Err(CliError::InvalidSubstitution(arg.to_string())),
    }
}

/// Build an evaluator from substitution arguments; the last one per name wins.
pub fn build_evaluator(args: &[String]) -> Result<Evaluator, CliError> {
    let mut evaluator = Evaluator::new();
    for arg in args {
        let (name, value) = parse_substitution(arg)?;
        debug!(name = %name, kind = value.type_name(), "substitution");
        evaluator.bind(name, value);
    }
    Ok(evaluator)
}

/// Run the whole pipeline, returning one JSON document per generated value.
pub fn execute_generate(options: &GenerateOptions) -> Result<Vec<String>, CliError> {
    if options.expressions.is_empty() {
        return Err(CliError::NoInput);
    }

    let evaluator = build_evaluator(&options.substitutions)?;
    let input = options.expressions.join(" ");
    let forest = compile_generators(&input)?;

    evaluator
        .eval_forest(&forest)
        .iter()
        .map(|value| {
            let json = if options.pretty {
                output::to_json_pretty(value)
            } else {
                output::to_json(value)
            };
            json.map_err(CliError::Json)
        })
        .collect()
}
