pub mod ast;
pub mod cli;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{Arr, Generator, Obj, Token, TokenKind};
pub use evaluator::{Evaluator, Substitutions};
pub use lexer::{LexError, Lexer};
pub use output::{to_json, to_json_pretty};
pub use parser::{CompileError, Parser, compile_generators, compile_substitution_value};
pub use value::{RawLiteralError, Value};
