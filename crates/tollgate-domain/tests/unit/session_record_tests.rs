//! Tests for the stored session format

use tollgate_domain::{AccessRole, AuthUser, Error, SessionRecord};

fn identity() -> AuthUser {
    AuthUser::new("c8h2kq", "johndoe", "john@doe.com", AccessRole::Admin)
}

#[test]
fn test_session_record_wire_format() {
    let record = SessionRecord::new(identity());
    let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "User": {
                "ID": "c8h2kq",
                "DisplayName": "johndoe",
                "Email": "john@doe.com",
                "Role": 2
            }
        })
    );
}

#[test]
fn test_session_record_decodes_stored_value() {
    let raw = r#"{"User":{"ID":"abc","DisplayName":"Jane","Email":"jane@x.io","Role":3}}"#;
    let record = SessionRecord::from_json(raw).unwrap();
    assert_eq!(
        record.into_user(),
        AuthUser::new("abc", "Jane", "jane@x.io", AccessRole::User)
    );
}

#[test]
fn test_session_record_rejects_unknown_role() {
    let raw = r#"{"User":{"ID":"abc","DisplayName":"Jane","Email":"jane@x.io","Role":9}}"#;
    let err = SessionRecord::from_json(raw).unwrap_err();
    assert!(matches!(err, Error::SessionCorrupt { .. }));
}

#[test]
fn test_session_record_rejects_garbage() {
    let err = SessionRecord::from_json("not json at all").unwrap_err();
    assert!(matches!(err, Error::SessionCorrupt { .. }));
}
