pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn error_body_omits_missing_code() {
        let body = types::ErrorBody::new("boom", None);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"message": "boom"}));

        let body = types::ErrorBody::new("gone", Some("SnowparkNotFound".into()));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "SnowparkNotFound");
    }
}
