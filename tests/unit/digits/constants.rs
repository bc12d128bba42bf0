use super::*;

#[test]
fn pi_prefix_matches_reference() {
    let d = Constant::Pi.digits(30);
    let s: String = d.iter().map(|d| char::from(b'0' + d)).collect();
    assert_eq!(s, "314159265358979323846264338327");
}

#[test]
fn pi_handles_run_of_nines() {
    // The Feynman point: six nines starting at decimal place 762.
    let d = Constant::Pi.digits(770);
    assert_eq!(&d[762..768], &[9, 9, 9, 9, 9, 9]);
    assert_eq!(d.len(), 770);
}

#[test]
fn e_prefix_matches_reference() {
    let d = Constant::E.digits(30);
    let s: String = d.iter().map(|d| char::from(b'0' + d)).collect();
    assert_eq!(s, "271828182845904523536028747135");
}

#[test]
fn zero_count_is_empty_and_names_roundtrip() {
    assert!(Constant::Pi.digits(0).is_empty());
    assert!(Constant::E.digits(0).is_empty());
    for c in [Constant::Pi, Constant::E] {
        assert_eq!(Constant::from_name(c.name()), Some(c));
    }
    assert_eq!(Constant::from_name(" PI "), Some(Constant::Pi));
    assert_eq!(Constant::from_name("tau"), None);
}
