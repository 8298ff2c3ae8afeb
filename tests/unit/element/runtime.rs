//! Tests for per-instance runtime payloads

#[cfg(test)]
mod tests {
    use gridstash::element::RuntimeData;
    use gridstash::io::snapshot::{ElementRecord, GridSnapshot};
    use gridstash::math::Cell;

    #[test]
    fn test_accessors() {
        assert!(RuntimeData::default().is_empty());
        assert_eq!(RuntimeData::Stack { count: 3 }.stack_count(), Some(3));
        assert_eq!(RuntimeData::Empty.stack_count(), None);
        assert!(
            RuntimeData::Durability { current: 1, max: 2 }
                .contents()
                .is_none()
        );
    }

    // Tests the tagged JSON layout of payloads
    // Verified by removing the serde tag attribute
    #[test]
    fn test_json_is_tagged_by_kind() {
        let json = serde_json::to_string(&RuntimeData::Stack { count: 3 }).expect("encodes");
        assert_eq!(json, r#"{"kind":"stack","count":3}"#);

        let parsed: RuntimeData =
            serde_json::from_str(r#"{"kind":"durability","current":4,"max":9}"#).expect("decodes");
        assert_eq!(parsed, RuntimeData::Durability { current: 4, max: 9 });

        assert!(serde_json::from_str::<RuntimeData>(r#"{"kind":"mystery"}"#).is_err());
    }

    // Tests that containers carry a nested snapshot through JSON
    #[test]
    fn test_container_nests_snapshot() {
        let inner = GridSnapshot::new(vec![ElementRecord {
            profile_reference: "coin".to_string(),
            runtime_data: RuntimeData::Stack { count: 2 },
            anchor: Cell::new(1, 0),
            rotated: false,
        }]);
        let bag = RuntimeData::Container {
            contents: inner.clone(),
        };

        let json = serde_json::to_string(&bag).expect("encodes");
        let parsed: RuntimeData = serde_json::from_str(&json).expect("decodes");

        assert_eq!(parsed.contents(), Some(&inner));
    }
}
