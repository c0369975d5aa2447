use seller_core::{
    check_email, check_required_fields, is_required_fields_present, is_valid_email, LeadField,
    ValidationError,
};

#[test]
fn well_formed_emails_pass() {
    for email in ["ann@acme.io", "first.last+tag@sub.example.co", "a@b.c"] {
        assert!(is_valid_email(email), "{email}");
        check_email(email).unwrap();
    }
}

#[test]
fn malformed_emails_fail_with_reason() {
    for email in ["", "ann", "ann@", "@acme.io", "ann@acme", "a b@acme.io", "ann@acme .io"] {
        assert!(!is_valid_email(email), "{email}");
        let err = check_email(email).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail(email.to_string()));
        assert!(err.to_string().contains("valid email"));
    }
}

#[test]
fn required_fields_are_trimmed_before_checking() {
    assert!(is_required_fields_present("Ann", "Acme", "ann@acme.io"));
    assert!(!is_required_fields_present("Ann", " ", "ann@acme.io"));

    let err = check_required_fields("Ann", "\t", "ann@acme.io").unwrap_err();
    assert_eq!(err, ValidationError::MissingField(LeadField::Company));
    assert_eq!(err.to_string(), "company is required");
}

#[test]
fn required_check_does_not_judge_email_shape() {
    check_required_fields("Ann", "Acme", "not-an-email").unwrap();
}
