pub mod tool_export;

pub use tool_export::*;
