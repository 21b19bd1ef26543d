//! Compute units of the user service

use topo_types::{ComputeUnitSpec, HttpMethod, TablePermission};

pub const USERS_PATH: &str = "/v1/users";
pub const USER_PATH: &str = "/v1/users/{userId}";

/// The four user operations, in provisioning order
pub fn user_compute_units() -> Vec<ComputeUnitSpec> {
    vec![
        ComputeUnitSpec::new(
            "CreateUser",
            "create-user",
            HttpMethod::Post,
            USERS_PATH,
            TablePermission::Full,
        ),
        ComputeUnitSpec::new(
            "UpdateUser",
            "update-user",
            HttpMethod::Put,
            USER_PATH,
            TablePermission::Full,
        ),
        ComputeUnitSpec::new(
            "DeleteUser",
            "delete-user",
            HttpMethod::Delete,
            USER_PATH,
            TablePermission::Full,
        ),
        ComputeUnitSpec::new(
            "GetUser",
            "get-user",
            HttpMethod::Get,
            USER_PATH,
            TablePermission::ReadOnly,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_reads_are_read_only() {
        for unit in user_compute_units() {
            let expected = if unit.http_method == HttpMethod::Get {
                TablePermission::ReadOnly
            } else {
                TablePermission::Full
            };
            assert_eq!(unit.table_permission, expected, "{}", unit.logical_name);
        }
    }
}
