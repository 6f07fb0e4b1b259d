use std::fmt;

/// A number as it appears in a declaration value.
///
/// Uses the shortest decimal that round-trips, and keeps a trailing `.0` on
/// integral values (`1.0dppx`, `calc(1 / 5.0)`), which is what `f64`'s
/// `Debug` output gives us.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CssNumber(pub f64);

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::CssNumber;

    #[test]
    fn test_integral_values_keep_fraction() {
        assert_eq!(CssNumber(1.0).to_string(), "1.0");
        assert_eq!(CssNumber(5.0).to_string(), "5.0");
    }

    #[test]
    fn test_shortest_round_trip() {
        assert_eq!(CssNumber(3.0 / 10.0).to_string(), "0.3");
        assert_eq!(CssNumber(3.0 / 10.0 - 0.01).to_string(), "0.29");
        assert_eq!(CssNumber(6.66 / 10.0).to_string(), "0.666");
        assert_eq!(CssNumber(6.66 / 10.0 - 0.01).to_string(), "0.656");
        assert_eq!(CssNumber(47.0 / 10.0).to_string(), "4.7");
    }
}
