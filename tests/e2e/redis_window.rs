//! Sliding window semantics of the redis store against a live server

#[cfg(test)]
mod tests {
    use crate::skip_without_env;
    use std::sync::Arc;
    use tubesage::config::RateLimitConfig;
    use tubesage::core::RateLimiter;
    use tubesage::core::rate_limiter::{RedisWindowStore, WindowStore};
    use uuid::Uuid;

    const T0: i64 = 1_700_000_000_000;
    const WINDOW_MS: u64 = 60_000;

    /// Store with a prefix no other test run shares
    async fn store() -> RedisWindowStore {
        let url = std::env::var("REDIS_URL").unwrap();
        let prefix = format!("tubesage-test:{}", Uuid::new_v4());
        RedisWindowStore::connect(&url, &prefix).await.unwrap()
    }

    #[tokio::test]
    #[ignore]
    async fn test_limit_then_reject() {
        skip_without_env!("REDIS_URL");
        let store = store().await;

        for i in 0..10 {
            let outcome = store
                .check_and_record("client", T0 + i, WINDOW_MS, 10)
                .await
                .unwrap();
            assert!(outcome.allowed, "Request {} should be allowed", i);
            assert_eq!(outcome.count, i as u32 + 1);
            assert_eq!(outcome.oldest_ms, Some(T0));
        }

        let outcome = store
            .check_and_record("client", T0 + 30_000, WINDOW_MS, 10)
            .await
            .unwrap();
        assert!(!outcome.allowed);
        assert_eq!(outcome.count, 10);
        assert_eq!(outcome.oldest_ms, Some(T0));
    }

    #[tokio::test]
    #[ignore]
    async fn test_rejection_does_not_record() {
        skip_without_env!("REDIS_URL");
        let store = store().await;

        assert!(store.check_and_record("client", T0, WINDOW_MS, 2).await.unwrap().allowed);
        assert!(store.check_and_record("client", T0 + 10, WINDOW_MS, 2).await.unwrap().allowed);
        assert!(!store.check_and_record("client", T0 + 20, WINDOW_MS, 2).await.unwrap().allowed);

        // Only T0 has left the window; a recorded rejection would fill it again
        let outcome = store
            .check_and_record("client", T0 + WINDOW_MS as i64 + 5, WINDOW_MS, 2)
            .await
            .unwrap();
        assert!(outcome.allowed);
        assert_eq!(outcome.count, 2);
        assert_eq!(outcome.oldest_ms, Some(T0 + 10));
    }

    #[tokio::test]
    #[ignore]
    async fn test_timestamp_on_window_boundary_is_purged() {
        skip_without_env!("REDIS_URL");
        let store = store().await;

        assert!(store.check_and_record("client", T0, WINDOW_MS, 1).await.unwrap().allowed);
        assert!(
            !store
                .check_and_record("client", T0 + 59_999, WINDOW_MS, 1)
                .await
                .unwrap()
                .allowed
        );

        let outcome = store
            .check_and_record("client", T0 + 60_000, WINDOW_MS, 1)
            .await
            .unwrap();
        assert!(outcome.allowed);
        assert_eq!(outcome.count, 1);
        assert_eq!(outcome.oldest_ms, Some(T0 + 60_000));
    }

    #[tokio::test]
    #[ignore]
    async fn test_same_millisecond_requests_all_counted() {
        skip_without_env!("REDIS_URL");
        let store = store().await;

        for i in 0..5 {
            let outcome = store.check_and_record("client", T0, WINDOW_MS, 10).await.unwrap();
            assert_eq!(outcome.count, i + 1);
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_keys_are_independent() {
        skip_without_env!("REDIS_URL");
        let store = store().await;

        store.check_and_record("key1", T0, WINDOW_MS, 1).await.unwrap();
        assert!(!store.check_and_record("key1", T0 + 1, WINDOW_MS, 1).await.unwrap().allowed);
        assert!(store.check_and_record("key2", T0 + 1, WINDOW_MS, 1).await.unwrap().allowed);
    }

    #[tokio::test]
    #[ignore]
    async fn test_concurrent_requests_never_exceed_limit() {
        skip_without_env!("REDIS_URL");
        let limiter = Arc::new(RateLimiter::with_store(
            RateLimitConfig {
                window_ms: WINDOW_MS,
                max_requests: 10,
                ..Default::default()
            },
            Arc::new(store().await),
        ));
        assert_eq!(limiter.backend_name(), "redis");

        let mut handles = Vec::new();
        for _ in 0..50 {
            let limiter = limiter.clone();
            handles.push(tokio::spawn(async move {
                limiter.check_and_record_at("shared", T0).await.allowed
            }));
        }

        let mut allowed = 0;
        for handle in handles {
            if handle.await.unwrap() {
                allowed += 1;
            }
        }
        assert_eq!(allowed, 10);
    }
}
