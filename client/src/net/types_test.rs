use super::*;

#[test]
fn session_user_decodes_full_profile() {
    let user: SessionUser = serde_json::from_value(serde_json::json!({
        "name": "Ada Lovelace",
        "nickname": "ada",
        "email": "ada@example.com",
        "picture": "https://cdn.example.com/ada.png",
        "sub": "github|42",
        "email_verified": true
    }))
    .unwrap();
    assert_eq!(user.name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(user.nickname.as_deref(), Some("ada"));
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    assert_eq!(user.picture.as_deref(), Some("https://cdn.example.com/ada.png"));
}

#[test]
fn session_user_tolerates_missing_fields() {
    let user: SessionUser = serde_json::from_str(r#"{"email":"ada@example.com"}"#).unwrap();
    assert_eq!(user.name, None);
    assert_eq!(user.picture, None);
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
}

#[test]
fn session_user_accepts_null_fields() {
    let user: SessionUser = serde_json::from_str(r#"{"name":null,"picture":null}"#).unwrap();
    assert_eq!(user, SessionUser::default());
}
