//! Alarm, notification and log retention descriptors

use crate::deployment::LogRetention;
use crate::resource::RemovalPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Errors per window that fire any error alarm in the stack
pub const ERROR_ALARM_THRESHOLD: u32 = 5;

/// Shared alarm topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSpec {
    pub topic_name: String,
}

/// Delivery protocol of a topic subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionProtocol {
    Email,
    Https,
}

impl SubscriptionProtocol {
    /// Infer the protocol from the endpoint's shape
    pub fn for_endpoint(endpoint: &str) -> Self {
        if endpoint.starts_with("https://") || endpoint.starts_with("http://") {
            SubscriptionProtocol::Https
        } else {
            SubscriptionProtocol::Email
        }
    }
}

/// Human notification endpoint subscribed to the alarm topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSpec {
    /// Logical id of the topic
    pub topic: String,
    pub protocol: SubscriptionProtocol,
    pub endpoint: String,
}

/// Log group with bounded retention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogGroupSpec {
    pub log_group_name: String,
    pub retention: LogRetention,
    pub removal: RemovalPolicy,
}

/// Aggregation applied to the alarm metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    Sum,
}

/// Alarm comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOperator {
    GreaterThanOrEqualToThreshold,
}

impl ComparisonOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::GreaterThanOrEqualToThreshold => ">=",
        }
    }

    pub fn breaches(&self, value: u64, threshold: u64) -> bool {
        match self {
            ComparisonOperator::GreaterThanOrEqualToThreshold => value >= threshold,
        }
    }
}

/// Threshold directive handed to the alarming service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmThreshold {
    pub statistic: Statistic,
    #[serde(with = "crate::duration_secs")]
    pub period: Duration,
    pub evaluation_periods: u32,
    pub threshold: u32,
    pub comparison: ComparisonOperator,
}

impl AlarmThreshold {
    /// Sum of errors over one minute, one period, `>= 5`
    pub const fn errors() -> Self {
        Self {
            statistic: Statistic::Sum,
            period: Duration::from_secs(60),
            evaluation_periods: 1,
            threshold: ERROR_ALARM_THRESHOLD,
            comparison: ComparisonOperator::GreaterThanOrEqualToThreshold,
        }
    }
}

impl Default for AlarmThreshold {
    fn default() -> Self {
        Self::errors()
    }
}

/// Metric watched by an alarm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum AlarmMetric {
    /// Aggregate 5xx responses of the REST API
    GatewayServerErrors {
        /// Logical id of the API
        api: String,
    },

    /// Invocation errors of a compute unit's live alias
    FunctionErrors {
        /// Logical id of the alias
        alias: String,
    },
}

/// Metric alarm wired to the notification topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmSpec {
    pub alarm_name: Option<String>,
    pub description: String,
    pub metric: AlarmMetric,
    pub threshold: AlarmThreshold,
    pub actions_enabled: bool,
    /// Logical ids of topics notified on breach
    pub actions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_threshold_constants() {
        let threshold = AlarmThreshold::errors();
        assert_eq!(threshold.threshold, 5);
        assert_eq!(threshold.period, Duration::from_secs(60));
        assert_eq!(threshold.evaluation_periods, 1);
        assert_eq!(threshold.comparison.symbol(), ">=");
    }

    #[test]
    fn test_comparator_boundary() {
        let op = ComparisonOperator::GreaterThanOrEqualToThreshold;
        assert!(!op.breaches(4, 5));
        assert!(op.breaches(5, 5));
        assert!(op.breaches(6, 5));
    }

    #[test]
    fn test_subscription_protocol() {
        assert_eq!(
            SubscriptionProtocol::for_endpoint("aws_alarm@classifind.app"),
            SubscriptionProtocol::Email
        );
        assert_eq!(
            SubscriptionProtocol::for_endpoint("https://hooks.example.com/alarm"),
            SubscriptionProtocol::Https
        );
    }
}
