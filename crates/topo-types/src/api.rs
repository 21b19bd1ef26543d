//! REST API, authorizer and routing descriptors

use crate::compute::HttpMethod;
use crate::environment::AuthorizerRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Stage name of the API deployment and of every live alias
pub const LIVE_STAGE: &str = "LIVE";

/// Token authorizer in front of every route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizerSpec {
    pub authorizer_name: String,
    pub handler: AuthorizerRef,
    #[serde(with = "crate::duration_secs")]
    pub results_cache_ttl: Duration,
}

impl AuthorizerSpec {
    pub fn token(handler: AuthorizerRef) -> Self {
        Self {
            authorizer_name: "Auth0Authorizer".to_string(),
            handler,
            results_cache_ttl: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointType {
    Regional,
    Edge,
}

/// Either every value or an explicit list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowList {
    All,
    Only(Vec<String>),
}

/// Preflight policy applied to every resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsPolicy {
    pub allow_methods: AllowList,
    pub allow_origins: AllowList,
    pub allow_headers: Vec<String>,
    #[serde(with = "crate::duration_secs")]
    pub max_age: Duration,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            allow_methods: AllowList::All,
            allow_origins: AllowList::All,
            allow_headers: [
                "Content-Type",
                "X-Amz-Date",
                "Authorization",
                "X-Api-Key",
                "X-Amz-Security-Token",
                "X-Amz-User-Agent",
            ]
            .iter()
            .map(|h| h.to_string())
            .collect(),
            max_age: Duration::from_secs(60),
        }
    }
}

/// Gateway-generated error kinds with a custom body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayResponseType {
    AccessDenied,
    Unauthorized,
}

/// Structured error body returned by the gateway itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub response_type: GatewayResponseType,
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// `application/json` mapping template
    pub template: String,
}

impl GatewayResponse {
    pub fn for_type(response_type: GatewayResponseType) -> Self {
        let (status_code, message) = match response_type {
            GatewayResponseType::AccessDenied => (403, "$context.authorizer.errorMessage"),
            GatewayResponseType::Unauthorized => (401, "Unauthorized"),
        };

        let headers = [
            ("Access-Control-Allow-Origin", "'*'"),
            ("Access-Control-Allow-Headers", "'*'"),
            ("Access-Control-Allow-Methods", "'*'"),
            ("Access-Control-Max-Age", "'86400'"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            response_type,
            status_code,
            headers,
            template: format!(
                r#"{{ "ErrorMessage": "{message}", "ErrorCode": "$context.error.responseType", "Errors": [] }}"#
            ),
        }
    }
}

/// The REST API and its deployment stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestApiSpec {
    pub api_name: String,
    pub endpoint: EndpointType,
    pub stage_name: String,
    pub tracing: bool,
    /// Logical id of the access log group
    pub access_log_group: String,
    pub access_log_format: String,
    /// Logical id of the default authorizer
    pub default_authorizer: String,
    /// Any principal may invoke; authorization happens in the authorizer
    pub public_invoke: bool,
    pub cors: CorsPolicy,
    pub gateway_responses: Vec<GatewayResponse>,
}

impl RestApiSpec {
    /// JSON access-log line, one field per request attribute
    pub fn access_log_format() -> String {
        let fields = [
            r#""requestTime":"$context.requestTime""#,
            r#""requestId":"$context.requestId""#,
            r#""httpMethod":"$context.httpMethod""#,
            r#""path":"$context.path""#,
            r#""resourcePath":"$context.resourcePath""#,
            r#""status":$context.status"#,
            r#""responseLatency":$context.responseLatency"#,
            r#""xrayTraceId":"$context.xrayTraceId""#,
            r#""integrationLatency":"$context.integration.latency""#,
            r#""integrationStatus":"$context.integration.status""#,
            r#""sourceIp":"$context.identity.sourceIp""#,
            r#""userAgent":"$context.identity.userAgent""#,
        ];
        format!("{{{}}}", fields.join(","))
    }
}

/// One node of the API path hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResourceSpec {
    pub path: String,
    pub path_part: String,
    /// Logical id of the parent resource, `None` under the API root
    pub parent: Option<String>,
}

/// Method on an API resource integrated with a compute unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMethodSpec {
    pub method: HttpMethod,
    pub path: String,
    /// Logical id of the API resource
    pub resource: String,
    /// Logical id of the integration target (a live alias)
    pub integration: String,
    /// Logical id of the authorizer
    pub authorizer: String,
}

/// Custom domain base-path mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePathMappingSpec {
    pub domain_name: String,
    pub base_path: String,
    /// Logical id of the API
    pub api: String,
    pub stage: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_response_templates() {
        let denied = GatewayResponse::for_type(GatewayResponseType::AccessDenied);
        assert_eq!(denied.status_code, 403);
        assert!(denied.template.contains("\"ErrorMessage\": \"$context.authorizer.errorMessage\""));
        assert!(denied.template.contains("\"Errors\": []"));

        let unauthorized = GatewayResponse::for_type(GatewayResponseType::Unauthorized);
        assert_eq!(unauthorized.status_code, 401);
        assert!(unauthorized.template.contains("\"ErrorMessage\": \"Unauthorized\""));
        assert_eq!(
            unauthorized.headers.get("Access-Control-Max-Age").map(String::as_str),
            Some("'86400'")
        );
    }

    #[test]
    fn test_default_cors() {
        let cors = CorsPolicy::default();
        assert_eq!(cors.allow_methods, AllowList::All);
        assert_eq!(cors.allow_origins, AllowList::All);
        assert_eq!(cors.max_age, Duration::from_secs(60));
        assert!(cors.allow_headers.iter().any(|h| h == "Authorization"));
    }

    #[test]
    fn test_access_log_format_is_json_object() {
        let format = RestApiSpec::access_log_format();
        assert!(format.starts_with("{\"requestTime\""));
        assert!(format.ends_with("\"$context.identity.userAgent\"}"));
        assert_eq!(format.matches("$context.").count(), 12);
    }

    #[test]
    fn test_token_authorizer_cache() {
        let auth = AuthorizerSpec::token(AuthorizerRef::new("arn:authorizer"));
        assert_eq!(auth.results_cache_ttl, Duration::from_secs(30));
        assert_eq!(auth.authorizer_name, "Auth0Authorizer");
    }
}
