use super::*;

// =============================================================
// decode_current_user
// =============================================================

#[test]
fn decode_success_unwraps_envelope() {
    let body = r#"{"data":{"id":"u1","kakao_id":42,"nickname":"Alex"}}"#;
    let profile = decode_current_user(true, 200, body).unwrap();
    assert_eq!(profile.id, "u1");
    assert_eq!(profile.external_id, 42);
    assert_eq!(profile.display_label(), "Alex");
}

#[test]
fn decode_unauthorized_is_status_error() {
    let err = decode_current_user(false, 401, r#"{"error":"unauthorized"}"#).unwrap_err();
    match err {
        TransportError::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "unauthorized");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn decode_failure_status_ignores_unparseable_body() {
    let err = decode_current_user(false, 502, "<html>bad gateway</html>").unwrap_err();
    assert!(matches!(err, TransportError::Status { status: 502, .. }));
}

#[test]
fn decode_failure_status_wins_over_valid_data() {
    let body = r#"{"data":{"id":"u1","kakao_id":42}}"#;
    assert!(decode_current_user(false, 404, body).is_err());
}

#[test]
fn decode_malformed_success_body_is_decode_error() {
    let err = decode_current_user(true, 200, "not json").unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}

#[test]
fn decode_success_without_envelope_is_decode_error() {
    let err = decode_current_user(true, 200, r#"{"id":"u1","kakao_id":42}"#).unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}

// =============================================================
// Error collapsing
// =============================================================

#[test]
fn every_transport_error_collapses_to_not_authenticated() {
    let errors = [
        TransportError::Network("offline".to_owned()),
        TransportError::Status { status: 500, message: "boom".to_owned() },
        TransportError::Decode("eof".to_owned()),
    ];
    for err in errors {
        assert_eq!(NotAuthenticated::from(err), NotAuthenticated);
    }
}

#[test]
fn transport_error_messages_name_the_cause() {
    let err = TransportError::Status { status: 401, message: "unauthorized".to_owned() };
    assert_eq!(err.to_string(), "unexpected status 401: unauthorized");
    assert_eq!(NotAuthenticated.to_string(), "not authenticated");
}

// =============================================================
// Native stub
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_transport_without_browser_reports_no_session() {
    let transport = HttpSessionTransport::new(ApiConfig::default());
    let result = futures::executor::block_on(transport.fetch_current_user());
    assert_eq!(result, Err(NotAuthenticated));
    futures::executor::block_on(transport.invalidate_session());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_transport_with_custom_base_still_stubs_without_browser() {
    let config = ApiConfig::with_base("http://api");
    assert_eq!(config.me_url(), "http://api/api/v1/auth/me");
    let transport = HttpSessionTransport::new(config);
    assert_eq!(futures::executor::block_on(transport.fetch_current_user()), Err(NotAuthenticated));
}
