use crate::stylesheet::breakpoint::Breakpoint;
use crate::stylesheet::consts::{BELOW_UNITY_THRESHOLD_OFFSET, CANVAS_WRAPPER_SELECTOR};
use crate::stylesheet::number::CssNumber;
use std::fmt;

/// Which set of declarations a breakpoint gets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RuleKind {
    /// Value 0. No scaling, no offset.
    Identity,
    /// Ratios under 1.0. The canvas is only shifted vertically.
    BelowUnity,
    /// Ratios of 1.0 and up. The canvas is shifted on both axes.
    UnityAndAbove,
}

/// One `@media (min-resolution: ..)` block for the canvas wrapper.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MediaRule {
    kind: RuleKind,
    ratio: f64,
}

impl MediaRule {
    pub fn for_breakpoint(breakpoint: &Breakpoint) -> MediaRule {
        MediaRule {
            kind: breakpoint.kind(),
            ratio: breakpoint.ratio(),
        }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// The `min-resolution` feature value, including the `dppx` unit.
    pub fn min_resolution(&self) -> String {
        match self.kind {
            RuleKind::Identity => "1dppx".to_string(),
            RuleKind::BelowUnity => {
                format!("{}dppx", CssNumber(self.ratio - BELOW_UNITY_THRESHOLD_OFFSET))
            }
            RuleKind::UnityAndAbove => format!("{}dppx", CssNumber(self.ratio)),
        }
    }

    pub fn scale(&self) -> String {
        match self.kind {
            RuleKind::Identity => "1".to_string(),
            _ => format!("calc(1 / {})", CssNumber(self.ratio)),
        }
    }

    pub fn left(&self) -> String {
        match self.kind {
            RuleKind::Identity | RuleKind::BelowUnity => "0".to_string(),
            RuleKind::UnityAndAbove => self.centering_offset("vw"),
        }
    }

    pub fn top(&self) -> String {
        match self.kind {
            RuleKind::Identity => "0".to_string(),
            _ => self.centering_offset("vh"),
        }
    }

    // Pulls the scaled wrapper back so its centre stays on the viewport centre.
    fn centering_offset(&self, unit: &str) -> String {
        let ratio = CssNumber(self.ratio);
        format!("calc((1 - (1 / {ratio})) / 2 * -100{unit})")
    }
}

impl fmt::Display for MediaRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "
      @media (min-resolution: {min_resolution}) {{
        {selector} {{
          scale: {scale};
          left: {left};
          top: {top};
        }}
      }}",
            min_resolution = self.min_resolution(),
            selector = CANVAS_WRAPPER_SELECTOR,
            scale = self.scale(),
            left = self.left(),
            top = self.top(),
        )
    }
}
