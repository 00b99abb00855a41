//! Tests for [`TypeAnnotationPattern`].

use insta::assert_snapshot;
use rstest::rstest;

use crate::TypeAnnotationPattern;

#[test]
fn flexible_pattern_text() {
    assert_snapshot!(
        TypeAnnotationPattern::source(false),
        @r"(\w)(?:\s+:\s*|:(?:\s{0}|\s{2,}))([\[|\(]*\S)"
    );
}

#[test]
fn strict_pattern_text() {
    assert_snapshot!(
        TypeAnnotationPattern::source(true),
        @r"(\w)(?:\s+:\s*|:(?:\s{0}))([\[|\(]*\S)"
    );
}

#[rstest]
#[case(false)]
#[case(true)]
fn compiled_pattern_keeps_mode_and_text(#[case] strict: bool) {
    let pattern = TypeAnnotationPattern::compile(strict).expect("pattern compiles");
    assert_eq!(pattern.strict_right_spacing(), strict);
    assert_eq!(pattern.as_str(), TypeAnnotationPattern::source(strict));
}

#[rstest]
#[case::no_space("let x:Int", false, &["x:I"])]
#[case::two_spaces("let x:  Int", false, &["x:  I"])]
#[case::three_spaces("let x:   Int", false, &["x:   I"])]
#[case::one_space("let x: Int", false, &[])]
#[case::space_before("let x :Int", false, &["x :I"])]
#[case::spaces_around("let x : Int", false, &["x : I"])]
#[case::bracketed("let x:[String]", false, &["x:[S"])]
#[case::nested("let x:  ((Int, Int))", false, &["x:  ((I"])]
#[case::ternary("a ? b:c", false, &["b:c"])]
#[case::strict_no_space("let x:Int", true, &["x:I"])]
#[case::strict_two_spaces("let x:  Int", true, &[])]
#[case::strict_one_space("let x: Int", true, &[])]
#[case::strict_space_before("let x :  Int", true, &["x :  I"])]
fn matches_only_abnormal_spacing(
    #[case] text: &str,
    #[case] strict: bool,
    #[case] expected: &[&str],
) {
    let pattern = TypeAnnotationPattern::compile(strict).expect("pattern compiles");
    let found: Vec<_> = pattern.find_iter(text).map(|m| m.as_str()).collect();
    assert_eq!(found, expected);
}
