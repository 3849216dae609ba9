//! Whole-file reference parser.
//!
//! Reads the entire file into one owned buffer and parses it line by line
//! with the same tokenizer and record builder as the streaming engine, so
//! the two strategies are field-for-field interchangeable. Peak memory is
//! the full file; it exists as a correctness oracle and performance
//! baseline, not as the default.

pub mod parser;

#[cfg(test)]
pub mod tests;

pub use parser::EagerParser;
