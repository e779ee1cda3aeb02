use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_profile() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        external_id: 42,
        email: Some("alex@example.com".to_owned()),
        display_name: Some("Alex".to_owned()),
        avatar_url: Some("https://cdn.example.com/a.png".to_owned()),
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn user_profile_accepts_provider_field_names() {
    let json = r#"{
        "id": "u1",
        "kakao_id": 42,
        "email": "alex@example.com",
        "nickname": "Alex",
        "profile_image": "https://cdn.example.com/a.png",
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-02T00:00:00Z"
    }"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.id, "u1");
    assert_eq!(profile.external_id, 42);
    assert_eq!(profile.display_name.as_deref(), Some("Alex"));
    assert_eq!(profile.avatar_url.as_deref(), Some("https://cdn.example.com/a.png"));
    assert_eq!(profile.created_at.as_deref(), Some("2025-01-01T00:00:00Z"));
}

#[test]
fn user_profile_accepts_neutral_field_names() {
    let json = r#"{"id":"u1","external_id":7,"display_name":"Sam","avatar_url":"x"}"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.external_id, 7);
    assert_eq!(profile.display_name.as_deref(), Some("Sam"));
    assert_eq!(profile.avatar_url.as_deref(), Some("x"));
}

#[test]
fn user_profile_optional_fields_default_to_none() {
    let profile: UserProfile = serde_json::from_str(r#"{"id":"u1","kakao_id":1}"#).unwrap();
    assert!(profile.email.is_none());
    assert!(profile.display_name.is_none());
    assert!(profile.avatar_url.is_none());
    assert!(profile.created_at.is_none());
    assert!(profile.updated_at.is_none());
}

#[test]
fn user_profile_requires_id_and_external_id() {
    assert!(serde_json::from_str::<UserProfile>(r#"{"kakao_id":1}"#).is_err());
    assert!(serde_json::from_str::<UserProfile>(r#"{"id":"u1"}"#).is_err());
}

#[test]
fn envelope_unwraps_data() {
    let body: ApiEnvelope<UserProfile> =
        serde_json::from_str(r#"{"data":{"id":"u1","external_id":42,"nickname":"Alex"}}"#).unwrap();
    assert_eq!(body.data.display_label(), "Alex");
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.error.is_none());
    let body: ApiErrorBody = serde_json::from_str(r#"{"error":"unauthorized"}"#).unwrap();
    assert_eq!(body.error.as_deref(), Some("unauthorized"));
}

// =============================================================
// Display label
// =============================================================

#[test]
fn display_label_prefers_display_name() {
    assert_eq!(make_profile().display_label(), "Alex");
}

#[test]
fn display_label_falls_back_to_email() {
    let profile = UserProfile { display_name: None, ..make_profile() };
    assert_eq!(profile.display_label(), "alex@example.com");
}

#[test]
fn display_label_skips_empty_name() {
    let profile = UserProfile { display_name: Some(String::new()), ..make_profile() };
    assert_eq!(profile.display_label(), "alex@example.com");
}

#[test]
fn display_label_falls_back_to_generic_label() {
    let profile = UserProfile { display_name: None, email: None, ..make_profile() };
    assert_eq!(profile.display_label(), FALLBACK_USER_LABEL);
}

#[test]
fn avatar_ignores_blank_url() {
    let profile = UserProfile { avatar_url: Some("  ".to_owned()), ..make_profile() };
    assert!(profile.avatar().is_none());
    assert_eq!(make_profile().avatar(), Some("https://cdn.example.com/a.png"));
}
