const EXPECTED: &str = "\
jahid
[jahid, hossan, roni]
hossan
[jahid, hossan, roni, salim]
[jahid, roni, salim]
[samin, roni, salim]
3
";

#[test]
fn prints_friend_list_walkthrough() {
    let mut out = Vec::new();
    lista::run(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
}

#[test]
fn runs_without_logger() {
    assert!(!lista::log::is_initialized());
    let mut out = Vec::new();
    lista::run(&mut out).unwrap();
    assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), 7);
}
