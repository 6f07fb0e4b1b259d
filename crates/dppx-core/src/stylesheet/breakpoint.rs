use crate::stylesheet::consts::{FIRST_BREAKPOINT, INJECTED_BREAKPOINTS, LAST_BREAKPOINT, RATIO_SCALE};
use crate::stylesheet::rule::RuleKind;
use log::debug;
use once_cell::sync::Lazy;
use std::ops::RangeInclusive;
use thiserror::Error;

/// The 3..=50 breakpoints plus the injected 6.66, in ascending order.
pub static STANDARD_BREAKPOINTS: Lazy<BreakpointSet> = Lazy::new(BreakpointSet::standard);

#[derive(Debug, Error, PartialEq)]
pub enum BreakpointError {
    #[error("Breakpoint value must be finite and non-negative, got {0}")]
    InvalidValue(f64),
}

/// A device pixel ratio scaled by [`RATIO_SCALE`], so `15` means `1.5dppx`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Breakpoint(f64);

impl Breakpoint {
    pub fn new(value: f64) -> Result<Breakpoint, BreakpointError> {
        if !value.is_finite() || value < 0.0 {
            return Err(BreakpointError::InvalidValue(value));
        }
        Ok(Breakpoint(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn ratio(&self) -> f64 {
        self.0 / RATIO_SCALE
    }

    pub fn is_integral(&self) -> bool {
        self.0.fract() == 0.0
    }

    pub fn kind(&self) -> RuleKind {
        if self.0 == 0.0 {
            RuleKind::Identity
        } else if self.0 < RATIO_SCALE {
            RuleKind::BelowUnity
        } else {
            RuleKind::UnityAndAbove
        }
    }
}

impl From<u32> for Breakpoint {
    fn from(value: u32) -> Self {
        Breakpoint(value as f64)
    }
}

/// Sorted, immutable list of breakpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakpointSet {
    breakpoints: Vec<Breakpoint>,
}

impl BreakpointSet {
    /// Every integer in `range`, followed by `extra`, then sorted ascending.
    ///
    /// The sort is stable, so a value that appears twice is kept twice.
    pub fn build(range: RangeInclusive<u32>, extra: &[f64]) -> Result<BreakpointSet, BreakpointError> {
        let mut breakpoints: Vec<Breakpoint> = range.map(Breakpoint::from).collect();
        for &value in extra {
            breakpoints.push(Breakpoint::new(value)?);
        }
        Ok(Self::sorted(breakpoints, extra.len()))
    }

    pub fn standard() -> BreakpointSet {
        // INJECTED_BREAKPOINTS are known-good, no need to validate
        let breakpoints = (FIRST_BREAKPOINT..=LAST_BREAKPOINT)
            .map(Breakpoint::from)
            .chain(INJECTED_BREAKPOINTS.iter().map(|&value| Breakpoint(value)))
            .collect();
        Self::sorted(breakpoints, INJECTED_BREAKPOINTS.len())
    }

    fn sorted(mut breakpoints: Vec<Breakpoint>, injected: usize) -> BreakpointSet {
        breakpoints.sort_by(|a, b| a.0.total_cmp(&b.0));
        debug!("Built {} breakpoints ({} injected)", breakpoints.len(), injected);
        BreakpointSet { breakpoints }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Breakpoint> {
        self.breakpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    pub fn as_slice(&self) -> &[Breakpoint] {
        &self.breakpoints
    }
}

impl<'a> IntoIterator for &'a BreakpointSet {
    type Item = &'a Breakpoint;
    type IntoIter = std::slice::Iter<'a, Breakpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.breakpoints.iter()
    }
}
