//! Declaration grammar building blocks.
//!
//! There is no tokenizer: grammar rules walk a [`Cursor`] over the rewritten
//! source and either match or leave the declaration alone.

pub mod balanced;
pub mod cursor;
pub mod variable;

pub use cursor::Cursor;
pub use variable::parse_variable;
