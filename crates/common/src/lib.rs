//! Shared helpers for the resource API binaries and server crate.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn health_serializes_rfc3339_time() {
        let h = types::Health::ok();
        let v = serde_json::to_value(&h).unwrap();
        assert_eq!(v["status"], "ok");
        let time = v["time"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());
    }
}
