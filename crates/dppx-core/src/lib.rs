// dppx stylesheet modules
pub mod prelude;
pub mod stylesheet;

// Re-exports
pub use stylesheet::breakpoint::{Breakpoint, BreakpointError, BreakpointSet, STANDARD_BREAKPOINTS};
pub use stylesheet::emit::{EmitError, Emitter, render_stylesheet};
pub use stylesheet::rule::{MediaRule, RuleKind};
