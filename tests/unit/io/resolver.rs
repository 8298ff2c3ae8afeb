//! Tests for custom profile resolvers

#[cfg(test)]
mod tests {
    use gridstash::element::{BasicProfile, ProfileRef, RuntimeData};
    use gridstash::io::error::{GridError, Result};
    use gridstash::io::resolver::ProfileResolver;
    use gridstash::io::snapshot::{ElementRecord, GridSnapshot, restore};
    use gridstash::math::Cell;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    // Resolver that records every request
    struct RecordingResolver {
        profiles: HashMap<String, ProfileRef>,
        requests: RefCell<Vec<String>>,
    }

    impl RecordingResolver {
        fn new(ids: &[&str]) -> Self {
            Self {
                profiles: ids
                    .iter()
                    .map(|id| ((*id).to_string(), BasicProfile::shared(1, 1)))
                    .collect(),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl ProfileResolver for RecordingResolver {
        #[allow(clippy::future_not_send)]
        async fn resolve(&self, reference: &str) -> Result<ProfileRef> {
            self.requests.borrow_mut().push(reference.to_string());
            tokio::task::yield_now().await;
            self.profiles
                .get(reference)
                .map(Rc::clone)
                .ok_or_else(|| GridError::UnknownProfile {
                    reference: reference.to_string(),
                })
        }
    }

    fn record(reference: &str, x: i32) -> ElementRecord {
        ElementRecord {
            profile_reference: reference.to_string(),
            runtime_data: RuntimeData::Empty,
            anchor: Cell::new(x, 0),
            rotated: false,
        }
    }

    #[tokio::test]
    async fn test_resolver_answers_known_references() {
        let resolver = RecordingResolver::new(&["a"]);

        assert!(resolver.resolve("a").await.is_ok());
        assert!(matches!(
            resolver.resolve("b").await,
            Err(GridError::UnknownProfile { .. })
        ));
    }

    // Tests that requests are made in snapshot order and stop at the first miss
    // Verified by resolving every record before inserting any
    #[tokio::test]
    async fn test_restore_requests_sequentially_until_failure() {
        let resolver = RecordingResolver::new(&["a", "b"]);
        let snapshot = GridSnapshot::new(vec![
            record("a", 0),
            record("b", 1),
            record("missing", 2),
            record("a", 3),
        ]);

        let partial = restore(&snapshot, &resolver).await.expect_err("third record fails");

        assert_eq!(*resolver.requests.borrow(), vec!["a", "b", "missing"]);
        assert_eq!(partial.grid.element_count(), 2);
    }
}
