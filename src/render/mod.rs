pub mod engine;
pub mod vars;

pub use engine::{collect_tokens, render};
pub use vars::{VariableMapping, DEFAULT_PORT, VOCABULARY};
