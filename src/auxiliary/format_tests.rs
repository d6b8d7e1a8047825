use crate::auxiliary::format::write_turn_fraction;

#[test]
fn test_format_write_turn_fraction_glyphs() {
    assert_eq!(write_turn_fraction(0.0), "0");
    assert_eq!(write_turn_fraction(0.25), "¼");
    assert_eq!(write_turn_fraction(0.5), "½");
    assert_eq!(write_turn_fraction(0.75), "¾");
}

#[test]
fn test_format_write_turn_fraction_decimals() {
    assert_eq!(write_turn_fraction(0.1), "0.1");
    assert_eq!(write_turn_fraction(0.223434325454), "0.223434325454");
    // Quarter multiples beyond a single turn are not special.
    assert_eq!(write_turn_fraction(1.25), "1.25");
    assert_eq!(write_turn_fraction(1.0), "1");
}

#[test]
fn test_format_write_turn_fraction_negative() {
    assert_eq!(write_turn_fraction(-0.25), "-¼");
    assert_eq!(write_turn_fraction(-0.1), "-0.1");
}
