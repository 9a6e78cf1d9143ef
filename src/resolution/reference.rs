use std::sync::LazyLock;

use regex::Regex;

use crate::types::ServiceReference;

/// Matches a service call of the form `req.<service>.<method>(`.
static SERVICE_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"req\.(\w+)\.(\w+)\(").expect("valid service call regex"));

/// Extracts the backend service reference from a call-site snippet.
///
/// Only the first `req.<service>.<method>(` occurrence counts; later calls in
/// the same snippet are ignored. Identifiers are word characters only, so
/// bracket access (`req['x'].y()`) and optional chaining are not recognized.
/// Returns `None` when the snippet contains no such call — an expected
/// outcome, not an error.
pub fn extract_service_reference(snippet: &str) -> Option<ServiceReference> {
    let caps = SERVICE_CALL.captures(snippet)?;
    Some(ServiceReference {
        service_file_name: caps[1].to_string(),
        method_name: caps[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_both_identifiers() {
        let reference = extract_service_reference("req.foo.bar(id)").unwrap();
        assert_eq!(reference.service_file_name, "foo");
        assert_eq!(reference.method_name, "bar");
    }

    #[test]
    fn test_no_call_pattern() {
        assert!(extract_service_reference("const total = items.length;").is_none());
    }

    #[test]
    fn test_member_access_without_call_is_ignored() {
        assert!(extract_service_reference("const svc = req.userService.getUser;").is_none());
    }
}
