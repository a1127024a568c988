pub mod ast;
pub mod check;
pub mod fmt;
pub mod run_common;
pub mod source_loader;
pub mod tokens;

#[cfg(test)]
mod source_loader_tests;
