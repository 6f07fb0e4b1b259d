//! Convenient imports for consumers of dppx-core
//!
//! Pull in everything commonly needed in one line:
//! ```rust
//! use dppx_core::prelude::*;
//! ```

// Breakpoint model
pub use crate::stylesheet::breakpoint::{Breakpoint, BreakpointError, BreakpointSet, STANDARD_BREAKPOINTS};

// Rule rendering
pub use crate::stylesheet::number::CssNumber;
pub use crate::stylesheet::rule::{MediaRule, RuleKind};

// Output
pub use crate::stylesheet::emit::{EmitError, Emitter, render_stylesheet};

// Constants
pub use crate::stylesheet::consts::CANVAS_WRAPPER_SELECTOR;
