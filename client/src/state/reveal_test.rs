use super::*;

#[test]
fn reveal_starts_hidden() {
    let reveal = Reveal::new(AMOUNT_WIDE);
    assert!(!reveal.revealed);
    assert_eq!(reveal.class("reveal"), "reveal is-hidden");
}

#[test]
fn observe_reveals_once_threshold_reached() {
    let mut reveal = Reveal::new(AMOUNT_WIDE);
    assert!(!reveal.observe(0.1));
    assert!(reveal.observe(0.2));
    assert!(reveal.revealed);
    assert_eq!(reveal.class("reveal"), "reveal is-visible");
}

#[test]
fn observe_never_hides_again() {
    let mut reveal = Reveal::new(AMOUNT_TALL);
    assert!(reveal.observe(0.5));
    assert!(!reveal.observe(0.0));
    assert!(!reveal.observe(1.0));
    assert!(reveal.revealed);
}

#[test]
fn zero_ratio_never_reveals_even_with_zero_amount() {
    let mut reveal = Reveal::new(0.0);
    assert!(!reveal.observe(0.0));
    assert!(reveal.observe(0.01));
}

#[test]
fn amount_is_clamped_to_unit_interval() {
    assert_eq!(Reveal::new(3.0).amount, 1.0);
    assert_eq!(Reveal::new(-1.0).amount, 0.0);
}
