//! Brainf**k to Python translator.
//!
//! ```
//! let python = bf2py::translate("+++.").unwrap();
//! assert!(python.contains("_memory[_pointer] += 1"));
//! ```

extern crate thiserror;

pub mod codegen;
pub mod error;
pub mod lexer;
pub mod translator;

pub use codegen::{python::PYTHON, TemplateTable};
pub use error::Bf2PyError;
pub use translator::{translate, SyntaxError, Translation, Translator};
