//! Rendering helpers shared by the commands.

pub mod diagnostic;
pub mod json;
pub mod table;

pub use diagnostic::ExpressionDiagnostic;
pub use json::ReplyJson;
