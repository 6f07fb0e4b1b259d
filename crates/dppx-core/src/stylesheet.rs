pub mod breakpoint;
pub mod consts;
pub mod emit;
pub mod number;
pub mod rule;

#[cfg(test)]
mod rule_test;
