use docent::domain::ApiKey;

#[test]
fn given_padded_key_when_created_then_whitespace_is_trimmed() {
    let key = ApiKey::new("  AIzaSyExample  ");
    assert_eq!(key.expose(), "AIzaSyExample");
}

#[test]
fn given_whitespace_only_key_when_created_then_is_blank() {
    assert!(ApiKey::new("   ").is_blank());
    assert!(!ApiKey::new("k").is_blank());
}

#[test]
fn given_api_key_when_formatted_then_secret_is_not_revealed() {
    let key = ApiKey::new("sk-super-secret");

    assert_eq!(format!("{}", key), "[REDACTED]");
    assert!(!format!("{:?}", key).contains("sk-super-secret"));
}
