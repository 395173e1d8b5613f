//! Query client configuration
//!
//! Default options handed to the external query client that owns server
//! state. Only the policy is modelled here: retry counts, exponential
//! retry delays, freshness windows, and refetch triggers. Durations are
//! expressed in milliseconds on the wire.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Query configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryConfigError {
    /// Base retry delay exceeds the delay cap
    #[error("retry base delay {base_ms}ms exceeds maximum delay {max_ms}ms")]
    InvalidRetryDelay {
        /// Base delay in milliseconds
        base_ms: u64,
        /// Delay cap in milliseconds
        max_ms: u64,
    },

    /// Data would be collected before it goes stale
    #[error("gc time {gc_ms}ms is shorter than stale time {stale_ms}ms")]
    GcBeforeStale {
        /// Stale time in milliseconds
        stale_ms: u64,
        /// GC time in milliseconds
        gc_ms: u64,
    },
}

/// Result type for configuration checks
pub type Result<T> = std::result::Result<T, QueryConfigError>;

/// Whole milliseconds, saturating at `u64::MAX`
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

mod duration_ms {
    use super::millis;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(millis(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

// =============================================================================
// Retry Policy
// =============================================================================

fn default_retry() -> u32 {
    3
}

fn default_base_delay() -> Duration {
    Duration::from_millis(1000)
}

fn default_max_delay() -> Duration {
    Duration::from_millis(30_000)
}

/// Retry count plus capped exponential backoff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    /// Retries after the first failure
    #[serde(default = "default_retry")]
    pub retry: u32,

    /// Delay before the first retry
    #[serde(default = "default_base_delay", with = "duration_ms", rename = "retryBaseDelay")]
    pub base_delay: Duration,

    /// Upper bound on any retry delay
    #[serde(default = "default_max_delay", with = "duration_ms", rename = "retryMaxDelay")]
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retry: default_retry(),
            base_delay: default_base_delay(),
            max_delay: default_max_delay(),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt_index` (0-based):
    /// `min(base * 2^attempt_index, max)`
    pub fn retry_delay(&self, attempt_index: u32) -> Duration {
        let base = millis(self.base_delay);
        let max = millis(self.max_delay);
        let factor = 1u64.checked_shl(attempt_index).unwrap_or(u64::MAX);
        Duration::from_millis(base.saturating_mul(factor).min(max))
    }

    /// Whether another attempt follows `failure_count` failures
    pub fn should_retry(&self, failure_count: u32) -> bool {
        failure_count <= self.retry && failure_count > 0
    }

    /// Total attempts including the first
    pub fn max_attempts(&self) -> u32 {
        self.retry.saturating_add(1)
    }

    /// Check the delay bounds
    pub fn validate(&self) -> Result<()> {
        if self.base_delay > self.max_delay {
            return Err(QueryConfigError::InvalidRetryDelay {
                base_ms: millis(self.base_delay),
                max_ms: millis(self.max_delay),
            });
        }
        Ok(())
    }
}

// =============================================================================
// Defaults
// =============================================================================

fn default_stale_time() -> Duration {
    Duration::from_secs(5 * 60)
}

fn default_gc_time() -> Duration {
    Duration::from_secs(10 * 60)
}

fn default_true() -> bool {
    true
}

/// Default options for queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDefaults {
    /// Time data stays fresh
    #[serde(default = "default_stale_time", with = "duration_ms")]
    pub stale_time: Duration,

    /// Time unused data stays in memory
    #[serde(default = "default_gc_time", with = "duration_ms")]
    pub gc_time: Duration,

    /// Retry policy
    #[serde(flatten)]
    pub retry: RetryPolicy,

    /// Refetch when the window regains focus
    #[serde(default)]
    pub refetch_on_window_focus: bool,

    /// Refetch when a consumer mounts
    #[serde(default = "default_true")]
    pub refetch_on_mount: bool,

    /// Refetch after the network reconnects
    #[serde(default = "default_true")]
    pub refetch_on_reconnect: bool,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            stale_time: default_stale_time(),
            gc_time: default_gc_time(),
            retry: RetryPolicy::default(),
            refetch_on_window_focus: false,
            refetch_on_mount: true,
            refetch_on_reconnect: true,
        }
    }
}

impl QueryDefaults {
    /// Whether data fetched `age` ago is stale
    pub fn is_stale(&self, age: Duration) -> bool {
        age >= self.stale_time
    }

    /// Whether unused data idle for `idle` is collectable
    pub fn is_collectable(&self, idle: Duration) -> bool {
        idle >= self.gc_time
    }
}

/// Default options for mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MutationDefaults {
    /// Retry policy
    #[serde(flatten)]
    pub retry: RetryPolicy,
}

/// Query client default options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QueryClientConfig {
    /// Query defaults
    #[serde(default)]
    pub queries: QueryDefaults,

    /// Mutation defaults
    #[serde(default)]
    pub mutations: MutationDefaults,
}

impl QueryClientConfig {
    /// Check internal consistency
    pub fn validate(&self) -> Result<()> {
        self.queries.retry.validate()?;
        self.mutations.retry.validate()?;
        if self.queries.gc_time < self.queries.stale_time {
            return Err(QueryConfigError::GcBeforeStale {
                stale_ms: millis(self.queries.stale_time),
                gc_ms: millis(self.queries.gc_time),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let config = QueryClientConfig::default();
        assert_eq!(config.queries.stale_time, Duration::from_secs(300));
        assert_eq!(config.queries.gc_time, Duration::from_secs(600));
        assert_eq!(config.queries.retry.retry, 3);
        assert!(!config.queries.refetch_on_window_focus);
        assert!(config.queries.refetch_on_mount);
        assert!(config.queries.refetch_on_reconnect);
        assert_eq!(config.mutations.retry.retry, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_retry_delay_backoff() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.retry_delay(0), Duration::from_millis(1000));
        assert_eq!(policy.retry_delay(1), Duration::from_millis(2000));
        assert_eq!(policy.retry_delay(2), Duration::from_millis(4000));
        assert_eq!(policy.retry_delay(4), Duration::from_millis(16000));
        assert_eq!(policy.retry_delay(5), Duration::from_millis(30000));
        assert_eq!(policy.retry_delay(64), Duration::from_millis(30000));
        assert_eq!(policy.retry_delay(u32::MAX), Duration::from_millis(30000));
    }

    #[test]
    fn test_should_retry() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 4);
        assert!(!policy.should_retry(0));
        assert!(policy.should_retry(1));
        assert!(policy.should_retry(3));
        assert!(!policy.should_retry(4));
    }

    #[test]
    fn test_staleness() {
        let defaults = QueryDefaults::default();
        assert!(!defaults.is_stale(Duration::from_secs(299)));
        assert!(defaults.is_stale(Duration::from_secs(300)));
        assert!(!defaults.is_collectable(Duration::from_secs(599)));
        assert!(defaults.is_collectable(Duration::from_secs(600)));
    }

    #[test]
    fn test_json_roundtrip_uses_milliseconds() {
        let json = serde_json::to_value(QueryClientConfig::default()).unwrap();
        assert_eq!(json["queries"]["staleTime"], 300_000);
        assert_eq!(json["queries"]["gcTime"], 600_000);
        assert_eq!(json["queries"]["retry"], 3);
        assert_eq!(json["queries"]["retryMaxDelay"], 30_000);
        assert_eq!(json["mutations"]["retryBaseDelay"], 1000);
    }

    #[test]
    fn test_partial_json() {
        let config: QueryClientConfig = serde_json::from_str(
            r#"{"queries": {"staleTime": 1000, "gcTime": 2000, "refetchOnWindowFocus": true}}"#,
        )
        .unwrap();
        assert_eq!(config.queries.stale_time, Duration::from_secs(1));
        assert!(config.queries.refetch_on_window_focus);
        assert_eq!(config.queries.retry, RetryPolicy::default());
        assert_eq!(config.mutations, MutationDefaults::default());
    }

    #[test]
    fn test_validate() {
        let mut config = QueryClientConfig::default();
        config.queries.gc_time = Duration::from_secs(1);
        assert_eq!(
            config.validate(),
            Err(QueryConfigError::GcBeforeStale {
                stale_ms: 300_000,
                gc_ms: 1000
            })
        );

        let mut config = QueryClientConfig::default();
        config.mutations.retry.base_delay = Duration::from_secs(60);
        assert!(matches!(
            config.validate(),
            Err(QueryConfigError::InvalidRetryDelay { .. })
        ));
    }

    #[test]
    fn test_validate_saturates_huge_delays() {
        let policy = RetryPolicy {
            base_delay: Duration::MAX,
            ..RetryPolicy::default()
        };
        assert_eq!(
            policy.validate(),
            Err(QueryConfigError::InvalidRetryDelay {
                base_ms: u64::MAX,
                max_ms: 30_000
            })
        );

        let mut config = QueryClientConfig::default();
        config.queries.stale_time = Duration::MAX;
        assert_eq!(
            config.validate(),
            Err(QueryConfigError::GcBeforeStale {
                stale_ms: u64::MAX,
                gc_ms: 600_000
            })
        );
    }
}
