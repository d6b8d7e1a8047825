use approx::assert_relative_eq;
use num_complex::Complex;

use crate::trig;

#[test]
fn test_trig_sin_cos_exact_quarter_turns() {
    assert_eq!(trig::sin(0.0), 0.0);
    assert_eq!(trig::sin(0.25), 1.0);
    assert_eq!(trig::sin(0.5), 0.0);
    assert_eq!(trig::sin(0.75), -1.0);
    assert_eq!(trig::sin(1.0), 0.0);
    assert_eq!(trig::sin(-0.25), -1.0);
    assert_eq!(trig::sin(100.5), 0.0);
    assert_eq!(trig::sin(3.25), 1.0);

    assert_eq!(trig::cos(0.0), 1.0);
    assert_eq!(trig::cos(0.25), 0.0);
    assert_eq!(trig::cos(0.5), -1.0);
    assert_eq!(trig::cos(0.75), 0.0);
    assert_eq!(trig::cos(-0.5), -1.0);
    assert_eq!(trig::cos(2.0), 1.0);
}

#[test]
fn test_trig_sin_cos_general_angles() {
    assert_relative_eq!(trig::sin(0.125), 0.5f64.sqrt(), max_relative = 1e-14);
    assert_relative_eq!(trig::cos(0.125), 0.5f64.sqrt(), max_relative = 1e-14);
    assert_relative_eq!(trig::sin(1.0 / 12.0), 0.5, max_relative = 1e-14);
    assert_relative_eq!(trig::cos(1.0 / 6.0), 0.5, max_relative = 1e-14);
    // Negative angles reduce into [0, 1) before evaluation.
    assert_relative_eq!(trig::sin(-0.125), -trig::sin(0.125), max_relative = 1e-12);
}

#[test]
fn test_trig_atan2_acos_in_turns() {
    assert_eq!(trig::atan2(0.0, 1.0), 0.0);
    assert_eq!(trig::atan2(1.0, 0.0), 0.25);
    assert_eq!(trig::atan2(0.0, -1.0), 0.5);
    assert_eq!(trig::atan2(-1.0, 0.0), -0.25);

    assert_eq!(trig::acos(1.0), 0.0);
    assert_eq!(trig::acos(0.0), 0.25);
    assert_eq!(trig::acos(-1.0), 0.5);
}

#[test]
fn test_trig_expi_exact_quarter_turns() {
    assert_eq!(trig::expi(0.0), Complex::new(1.0, 0.0));
    assert_eq!(trig::expi(0.25), Complex::new(0.0, 1.0));
    assert_eq!(trig::expi(0.5), Complex::new(-1.0, 0.0));
    assert_eq!(trig::expi(0.75), Complex::new(0.0, -1.0));
    assert_eq!(trig::expi(-0.25), Complex::new(0.0, -1.0));
}

#[test]
fn test_trig_sinc_limit_and_values() {
    assert_eq!(trig::sinc(0.0), trig::TAU);
    // Continuity across the filled-in singularity.
    assert_relative_eq!(trig::sinc(1e-9), trig::TAU, max_relative = 1e-9);
    assert_relative_eq!(trig::sinc(-1e-9), trig::TAU, max_relative = 1e-9);
    assert_eq!(trig::sinc(0.25), 4.0);
    assert_eq!(trig::sinc(0.5), 0.0);
}

#[test]
fn test_trig_sin_scale_ratio() {
    // Degenerate angle: plain linear weights.
    assert_eq!(trig::sin_scale_ratio(0.0, 0.3), 0.3);
    assert_eq!(trig::sin_scale_ratio(0.0, 1.0), 1.0);
    // A quarter-turn separation halved gives 1/sqrt(2) on both sides.
    assert_eq!(trig::sin_scale_ratio(0.25, 0.5), trig::sin(0.125));
    // Endpoint weights.
    assert_eq!(trig::sin_scale_ratio(0.2, 1.0), 1.0);
    assert_eq!(trig::sin_scale_ratio(0.2, 0.0), 0.0);
}

#[test]
fn test_trig_smooth_near_quarter_turn() {
    assert_eq!(trig::smooth_near_quarter_turn(0.0), 0.0);
    assert_eq!(trig::smooth_near_quarter_turn(0.25), 0.25);
    assert_eq!(
        trig::smooth_near_quarter_turn(0.223434325454),
        0.223434325454
    );
    assert_eq!(trig::smooth_near_quarter_turn(0.250000000001), 0.25);
    assert_eq!(trig::smooth_near_quarter_turn(0.249999999999), 0.25);
    assert_eq!(trig::smooth_near_quarter_turn(1.962615573354719e-8), 0.0);
    assert_eq!(trig::smooth_near_quarter_turn(1.962615573354719e-17), 0.0);
    assert_eq!(trig::smooth_near_quarter_turn(-0.7499999999995), -0.75);
    assert_eq!(trig::smooth_near_quarter_turn(1.0000000000002), 1.0);
}
