pub mod ast;
pub mod parser;

#[cfg(test)]
pub mod parser_tests;
pub use {crate::parser::*, ast::*};
