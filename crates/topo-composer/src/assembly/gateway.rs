//! REST API, authorizer, route methods and custom domain mapping

use super::{ids, AssemblyContext};
use std::collections::{BTreeMap, BTreeSet};
use topo_policy::log_retention;
use topo_types::{
    AlarmMetric, AlarmSpec, AlarmThreshold, ApiMethodSpec, ApiPath, ApiResourceSpec,
    AuthorizerSpec, BasePathMappingSpec, CorsPolicy, EndpointType, GatewayResponse,
    GatewayResponseType, LogGroupSpec, RemovalPolicy, ResourceDescriptor, ResourceKind,
    HttpMethod, RestApiSpec, RouteBinding, LIVE_STAGE,
};

/// Base path under which the service is mounted on the custom domain
pub const BASE_PATH: &str = "user";

/// Authorizer, access logs, the API itself and its aggregate 5xx alarm
pub fn gateway_core(ctx: &AssemblyContext<'_>) -> Vec<ResourceDescriptor> {
    let authorizer = ResourceDescriptor::new(
        ids::AUTHORIZER,
        ResourceKind::Authorizer(AuthorizerSpec::token(ctx.descriptor.authorizer.clone())),
    );

    let access_logs = ResourceDescriptor::new(
        ids::ACCESS_LOGS,
        ResourceKind::LogGroup(LogGroupSpec {
            log_group_name: ctx.names.access_log_group.clone(),
            retention: log_retention(&ctx.descriptor.stage),
            removal: RemovalPolicy::Destroy,
        }),
    )
    .named(&ctx.names.access_log_group);

    let api = ResourceDescriptor::new(
        ids::API,
        ResourceKind::RestApi(RestApiSpec {
            api_name: ctx.names.api.clone(),
            endpoint: EndpointType::Regional,
            stage_name: LIVE_STAGE.to_string(),
            tracing: true,
            access_log_group: ids::ACCESS_LOGS.to_string(),
            access_log_format: RestApiSpec::access_log_format(),
            default_authorizer: ids::AUTHORIZER.to_string(),
            public_invoke: true,
            cors: CorsPolicy::default(),
            gateway_responses: vec![
                GatewayResponse::for_type(GatewayResponseType::AccessDenied),
                GatewayResponse::for_type(GatewayResponseType::Unauthorized),
            ],
        }),
    )
    .named(&ctx.names.api)
    .depends_on(ids::AUTHORIZER)
    .depends_on(ids::ACCESS_LOGS);

    let api_errors = ResourceDescriptor::new(
        ids::API_ERRORS,
        ResourceKind::Alarm(AlarmSpec {
            alarm_name: None,
            description: "500 errors >= 5".to_string(),
            metric: AlarmMetric::GatewayServerErrors {
                api: ids::API.to_string(),
            },
            threshold: AlarmThreshold::errors(),
            actions_enabled: true,
            actions: vec![ids::TOPIC.to_string()],
        }),
    )
    .depends_on(ids::API)
    .depends_on(ids::TOPIC);

    vec![authorizer, access_logs, api, api_errors]
}

const RESOURCE_PREFIX: &str = "Resource";
const METHOD_PREFIX: &str = "Method";

/// `ResourceV1UsersUserId` for `/v1/users/{userId}`
///
/// Drops everything but ASCII alphanumerics, so distinct paths may share it.
fn readable_id(path: &ApiPath) -> String {
    path.segments().fold(String::from(RESOURCE_PREFIX), |mut id, segment| {
        let clean: String = segment.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        let mut chars = clean.chars();
        if let Some(first) = chars.next() {
            id.push(first.to_ascii_uppercase());
            id.extend(chars);
        }
        id
    })
}

fn path_digest(path: &ApiPath) -> String {
    let hex = blake3::hash(path.as_str().as_bytes()).to_hex();
    hex[..8].to_ascii_uppercase()
}

/// Logical id of every resource path
///
/// Paths keep their readable id unless another path in the set maps to the
/// same one; every member of such a group gets a suffix derived from its full
/// path. The result does not depend on the order of `paths`.
pub fn resource_ids(paths: &[ApiPath]) -> BTreeMap<ApiPath, String> {
    let mut groups: BTreeMap<String, BTreeSet<&ApiPath>> = BTreeMap::new();
    for path in paths.iter().filter(|p| !p.is_root()) {
        groups.entry(readable_id(path)).or_default().insert(path);
    }

    let mut assigned = BTreeMap::new();
    for (readable, group) in groups {
        let shared = group.len() > 1;
        for path in group {
            let id = if shared {
                format!("{readable}{}", path_digest(path))
            } else {
                readable.clone()
            };
            assigned.insert(path.clone(), id);
        }
    }

    assigned
}

/// `MethodV1UsersPOST` for POST on `ResourceV1Users`, `MethodGET` on the root
pub fn method_id(resource: &str, method: HttpMethod) -> String {
    let stem = resource.strip_prefix(RESOURCE_PREFIX).unwrap_or_default();
    format!("{METHOD_PREFIX}{stem}{method}")
}

/// Path hierarchy followed by one integrated method per binding
pub fn gateway_routes(paths: &[ApiPath], bindings: &[RouteBinding]) -> Vec<ResourceDescriptor> {
    let ids = resource_ids(paths);
    let id_of = |path: &ApiPath| -> String {
        if path.is_root() {
            return ids::API.to_string();
        }
        ids.get(path).cloned().unwrap_or_else(|| readable_id(path))
    };

    let mut resources = Vec::with_capacity(paths.len() + bindings.len());

    for path in paths.iter().filter(|p| !p.is_root()) {
        let parent = path.parent().map(|p| id_of(&p));
        let mut descriptor = ResourceDescriptor::new(
            id_of(path),
            ResourceKind::ApiResource(ApiResourceSpec {
                path: path.to_string(),
                path_part: path.path_part().unwrap_or_default().to_string(),
                parent: parent.clone(),
            }),
        )
        .depends_on(ids::API);
        if let Some(parent) = parent {
            descriptor = descriptor.depends_on(parent);
        }
        resources.push(descriptor);
    }

    for binding in bindings {
        let resource = id_of(&binding.path);
        let alias = ids::unit_alias(&binding.target);
        resources.push(
            ResourceDescriptor::new(
                method_id(&resource, binding.method),
                ResourceKind::ApiMethod(ApiMethodSpec {
                    method: binding.method,
                    path: binding.path.to_string(),
                    resource: resource.clone(),
                    integration: alias.clone(),
                    authorizer: ids::AUTHORIZER.to_string(),
                }),
            )
            .depends_on(resource)
            .depends_on(alias)
            .depends_on(ids::AUTHORIZER),
        );
    }

    resources
}

pub fn base_path_mapping(host: String) -> ResourceDescriptor {
    ResourceDescriptor::new(
        ids::BASE_PATH_MAPPING,
        ResourceKind::BasePathMapping(BasePathMappingSpec {
            domain_name: host,
            base_path: BASE_PATH.to_string(),
            api: ids::API.to_string(),
            stage: LIVE_STAGE.to_string(),
        }),
    )
    .depends_on(ids::API)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &[&str]) -> Vec<ApiPath> {
        raw.iter().map(|p| ApiPath::new(p)).collect()
    }

    #[test]
    fn test_readable_ids() {
        let ids = resource_ids(&paths(&["/v1", "/v1/users", "/v1/users/{userId}"]));
        assert_eq!(ids[&ApiPath::new("/v1")], "ResourceV1");
        assert_eq!(ids[&ApiPath::new("/v1/users")], "ResourceV1Users");
        assert_eq!(ids[&ApiPath::new("/v1/users/{userId}")], "ResourceV1UsersUserId");
    }

    #[test]
    fn test_clashing_paths_get_distinct_ids() {
        let set = paths(&["/v1/users/{userId}", "/v1/users/userId", "/v1/a-b", "/v1/ab"]);
        let ids = resource_ids(&set);

        let distinct: BTreeSet<&String> = ids.values().collect();
        assert_eq!(distinct.len(), set.len());
        for id in ids.values() {
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric()), "{id}");
        }
        assert!(ids[&ApiPath::new("/v1/ab")].starts_with("ResourceV1Ab"));

        let mut reversed = set.clone();
        reversed.reverse();
        assert_eq!(resource_ids(&reversed), ids);
    }

    #[test]
    fn test_ids_never_shadow_stack_resources() {
        let ids = resource_ids(&paths(&["/gateway", "/errors"]));
        assert_eq!(ids[&ApiPath::new("/gateway")], "ResourceGateway");
        assert_ne!(ids[&ApiPath::new("/gateway")], ids::API);
        assert_ne!(ids[&ApiPath::new("/errors")], ids::API_ERRORS);
    }

    #[test]
    fn test_method_ids() {
        assert_eq!(method_id("ResourceV1Users", HttpMethod::Post), "MethodV1UsersPOST");
        assert_eq!(method_id(ids::API, HttpMethod::Get), "MethodGET");
    }
}
