#[cfg(test)]
mod test {
    use crate::stylesheet::breakpoint::Breakpoint;
    use crate::stylesheet::rule::{MediaRule, RuleKind};

    fn rule(value: f64) -> MediaRule {
        MediaRule::for_breakpoint(&Breakpoint::new(value).unwrap())
    }

    #[test]
    fn test_lowest_breakpoint_uses_offset_threshold() {
        let rule = rule(3.0);
        assert_eq!(rule.kind(), RuleKind::BelowUnity);
        assert_eq!(rule.min_resolution(), "0.29dppx");
        assert_eq!(rule.scale(), "calc(1 / 0.3)");
        assert_eq!(rule.left(), "0");
        assert_eq!(rule.top(), "calc((1 - (1 / 0.3)) / 2 * -100vh)");
    }

    #[test]
    fn test_injected_breakpoint_is_below_unity() {
        let rule = rule(6.66);
        assert_eq!(rule.kind(), RuleKind::BelowUnity);
        assert_eq!(rule.min_resolution(), "0.656dppx");
        assert_eq!(rule.scale(), "calc(1 / 0.666)");
        assert_eq!(rule.left(), "0");
    }

    #[test]
    fn test_unity_breakpoint_centres_both_axes() {
        let rule = rule(10.0);
        assert_eq!(rule.kind(), RuleKind::UnityAndAbove);
        assert_eq!(rule.min_resolution(), "1.0dppx");
        assert_eq!(rule.scale(), "calc(1 / 1.0)");
        assert_eq!(rule.left(), "calc((1 - (1 / 1.0)) / 2 * -100vw)");
        assert_eq!(rule.top(), "calc((1 - (1 / 1.0)) / 2 * -100vh)");
    }

    #[test]
    fn test_highest_breakpoint() {
        let rule = rule(50.0);
        assert_eq!(rule.min_resolution(), "5.0dppx");
        assert_eq!(rule.scale(), "calc(1 / 5.0)");
    }

    #[test]
    fn test_identity_rule() {
        let rule = rule(0.0);
        assert_eq!(rule.kind(), RuleKind::Identity);
        let expected = "
      @media (min-resolution: 1dppx) {
        #canvas_wrapper {
          scale: 1;
          left: 0;
          top: 0;
        }
      }";
        assert_eq!(rule.to_string(), expected);
    }

    #[test]
    fn test_display_layout() {
        let expected = "
      @media (min-resolution: 1.5dppx) {
        #canvas_wrapper {
          scale: calc(1 / 1.5);
          left: calc((1 - (1 / 1.5)) / 2 * -100vw);
          top: calc((1 - (1 / 1.5)) / 2 * -100vh);
        }
      }";
        assert_eq!(rule(15.0).to_string(), expected);
    }
}
