mod codegen;
mod error;
mod mappings;

pub use codegen::*;
pub use error::*;
pub use mappings::*;
