/// Breakpoint values are pixel ratios multiplied by this factor.
pub const RATIO_SCALE: f64 = 10.0;

pub const FIRST_BREAKPOINT: u32 = 3;
pub const LAST_BREAKPOINT: u32 = 50;

// 0.666dppx, reported by browsers at 67% zoom on 1x displays
pub const INJECTED_BREAKPOINTS: &[f64] = &[6.66];

/// Below-unity rules trigger slightly under their exact ratio so the
/// resolution match isn't decided by float rounding.
pub const BELOW_UNITY_THRESHOLD_OFFSET: f64 = 0.01;

pub const CANVAS_WRAPPER_SELECTOR: &str = "#canvas_wrapper";
