//! Custom domain host resolution

use topo_types::EnvironmentFlags;

pub const DEFAULT_BASE_DOMAIN: &str = "classifind.app";

/// Host for the base-path mapping, `None` outside continuous-delivery stages
///
/// Every pipeline stage, production included, serves from `{stage}-api.{base}`.
pub fn domain_host(stage: &str, flags: EnvironmentFlags, base_domain: &str) -> Option<String> {
    flags
        .is_continuous_delivery_stage()
        .then(|| format!("{stage}-api.{base_domain}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    #[test]
    fn test_hosts_per_stage() {
        assert_eq!(
            domain_host("prod", classify("prod"), DEFAULT_BASE_DOMAIN).as_deref(),
            Some("prod-api.classifind.app")
        );
        assert_eq!(
            domain_host("staging", classify("staging"), DEFAULT_BASE_DOMAIN).as_deref(),
            Some("staging-api.classifind.app")
        );
        assert_eq!(
            domain_host("rd", classify("rd"), "example.org").as_deref(),
            Some("rd-api.example.org")
        );
        assert_eq!(domain_host("local", classify("local"), DEFAULT_BASE_DOMAIN), None);
    }
}
