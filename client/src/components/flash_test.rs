use super::*;

#[test]
fn error_takes_precedence_over_notice() {
    let flash = Flash::from_query(Some("bad".to_owned()), Some("good".to_owned()));
    assert_eq!(flash, Some(Flash::Error("bad".to_owned())));
}

#[test]
fn notice_shown_when_no_error() {
    let flash = Flash::from_query(None, Some("Admin registered successfully!".to_owned()));
    assert_eq!(flash.as_ref().map(Flash::text), Some("Admin registered successfully!"));
    assert_eq!(flash.as_ref().map(Flash::style), Some("color: green"));
}

#[test]
fn blank_values_are_ignored() {
    assert_eq!(Flash::from_query(Some("  ".to_owned()), None), None);
    assert_eq!(
        Flash::from_query(Some(String::new()), Some("ok".to_owned())),
        Some(Flash::Notice("ok".to_owned()))
    );
}

#[test]
fn error_is_red() {
    let flash = Flash::Error("Invalid username or password!".to_owned());
    assert_eq!(flash.style(), "color: red");
    assert_eq!(flash.class(), "flash flash--error");
}
