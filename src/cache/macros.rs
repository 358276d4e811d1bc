/// A macro to simplify caching logic using Redis.
///
/// This macro checks if a value is present in the cache.
/// If found, it returns the cached value.
/// If not found, it executes the provided block to compute the value,
/// stores it in the cache, and then returns the computed value.
///
/// A cache that cannot be read (Redis down, connection refused) is treated
/// as a miss: the failure is logged and the block runs anyway, so the API
/// keeps answering without Redis.
///
/// # Arguments
/// * `$cache`: The cache instance to use for retrieval and storage. The cache must have
///   `get_from_cache` and `set_in_background` methods.
/// * `$key`: The key to use for caching the value.
/// * `$ttl`: The time-to-live (TTL) for the cached value in seconds.
/// * `$block`: The block of code to execute if the value is not found in cache.
///
/// # Example
/// ```rust,no_run
/// # use watchtime_api::cached;
/// # use watchtime_api::cache::{create_redis_client, Cache, CacheKey};
/// # use watchtime_api::error::AppResult;
/// # fn compute_expensive_value() -> AppResult<String> { Ok("expensive".to_string()) }
/// # async fn example() -> AppResult<String> {
/// # let client = create_redis_client("redis://localhost:6379").expect("valid redis url");
/// # let (cache, _writer) = Cache::new(client).await;
/// # let cache_key = CacheKey::Video("dQw4w9WgXcQ".to_string());
/// # let ttl = 600;
/// let cached_value = cached!(cache, cache_key, ttl, async move {
///    // Compute the value if not in cache
///   compute_expensive_value()
/// });
/// # cached_value
/// # }
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        // Attempt to get the value from cache, degrading errors to a miss
        let cached = match $cache.get_from_cache(&$key).await {
            Ok(hit) => hit,
            Err(e) => {
                tracing::warn!(error = %e, key = %$key, "Cache read failed, falling back to source");
                None
            }
        };

        if let Some(value) = cached {
            Ok(value)
        } else {
            // If not in cache, execute the block to compute the value
            let value = $block.await?;
            // Store the computed value in cache
            $cache.set_in_background(&$key, &value, $ttl);
            Ok(value)
        }
    }};
}
