use gvm_errors::{ErrorKind, GvmError};

#[test]
fn message_is_the_whole_text() {
    let err = GvmError::invalid_argument().message("foo bar").build();
    assert_eq!(err.to_string(), "foo bar");
}

#[test]
fn message_takes_precedence() {
    let err =
        GvmError::invalid_argument().message("foo bar").argument("foo").function("bar").build();

    assert_eq!(err.argument(), Some("foo"));
    assert_eq!(err.function(), Some("bar"));
    assert_eq!(err.to_string(), "foo bar");
}

#[test]
fn argument_only() {
    let err = GvmError::invalid_argument().argument("foo").build();

    assert_eq!(err.argument(), Some("foo"));
    assert_eq!(err.function(), None);
    assert_eq!(err.to_string(), "Invalid argument foo");
}

#[test]
fn function_only() {
    let err = GvmError::invalid_argument().function("foo").build();

    assert_eq!(err.function(), Some("foo"));
    assert_eq!(err.argument(), None);
    assert_eq!(err.to_string(), "Invalid argument for foo");
}

#[test]
fn argument_and_function() {
    let err = GvmError::invalid_argument().argument("foo").function("bar").build();

    assert_eq!(err.argument(), Some("foo"));
    assert_eq!(err.function(), Some("bar"));
    assert_eq!(err.to_string(), "Invalid argument foo for bar");
}

#[test]
fn message_with_argument_only() {
    let err = GvmError::invalid_argument().message("foo bar").argument("foo").build();
    assert_eq!(err.to_string(), "foo bar");
}

#[test]
fn nothing_set_still_renders() {
    let err = GvmError::invalid_argument().build();

    assert_eq!(err.message(), None);
    assert_eq!(err.to_string(), "Invalid argument");
}

#[test]
fn struct_literal_matches_builder() {
    let literal = GvmError::InvalidArgument {
        message: None,
        argument: Some("foo".into()),
        function: Some("bar".into()),
    };
    let built = GvmError::invalid_argument().argument("foo").function("bar").build();

    assert_eq!(literal, built);
    assert_eq!(literal.to_string(), built.to_string());
}

#[test]
fn is_gvm_error() {
    let result: gvm_errors::Result<()> =
        Err(GvmError::invalid_argument().message("foo bar").build());

    match result {
        Err(err) if err.is_a(ErrorKind::Gvm) => assert_eq!(err.kind(), ErrorKind::InvalidArgument),
        other => panic!("expected a gvm error, got {other:?}"),
    }
}
