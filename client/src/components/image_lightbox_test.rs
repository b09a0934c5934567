use super::*;

#[test]
fn step_wraps_forward_and_backward() {
    assert_eq!(step(0, 3, 1), 1);
    assert_eq!(step(2, 3, 1), 0);
    assert_eq!(step(0, 3, -1), 2);
}

#[test]
fn step_on_empty_gallery_stays_at_zero() {
    assert_eq!(step(4, 0, 1), 0);
}
