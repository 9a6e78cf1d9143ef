use std::fs;
use std::path::Path;

use smartdoc::resolution::{extract_service_reference, find_method, locate_method};
use smartdoc::types::ServiceReference;
use tempfile::TempDir;

#[test]
fn test_extract_reference_from_call() {
    let snippet = "const user = await req.userService.getUser(id);";
    let reference = extract_service_reference(snippet).expect("should extract reference");
    assert_eq!(
        reference,
        ServiceReference {
            service_file_name: "userService".to_string(),
            method_name: "getUser".to_string(),
        }
    );
}

#[test]
fn test_extract_first_match_wins() {
    let snippet = "req.foo.bar(x);\nreq.baz.qux(y);";
    let reference = extract_service_reference(snippet).unwrap();
    assert_eq!(reference.service_file_name, "foo");
    assert_eq!(reference.method_name, "bar");
}

#[test]
fn test_extract_absent_when_no_pattern() {
    assert!(extract_service_reference("const total = price * quantity;").is_none());
}

#[test]
fn test_extract_rejects_bracket_access() {
    assert!(extract_service_reference("req['userService'].getUser(id)").is_none());
}

#[test]
fn test_find_method_returns_full_span() {
    let source = "async getUser(id) {\n  return id;\n}";
    assert_eq!(find_method(source, "getUser"), Some(source.to_string()));
}

#[test]
fn test_find_method_truncates_at_nested_brace_line() {
    // Brace matching is textual, not balanced: the indented `}` closing the
    // inner block ends the span. This truncation point is load-bearing.
    let source = "async getUser(id) {\n  if (id) {\n  }\n  return id;\n}";
    assert_eq!(
        find_method(source, "getUser"),
        Some("async getUser(id) {\n  if (id) {\n  }".to_string())
    );
}

#[test]
fn test_find_method_skips_brace_with_trailing_code() {
    let source =
        "async retry(op) {\n  try {\n    return op();\n  } catch (e) {\n    throw e;\n  }\n}";
    assert_eq!(
        find_method(source, "retry"),
        Some(
            "async retry(op) {\n  try {\n    return op();\n  } catch (e) {\n    throw e;\n  }"
                .to_string()
        )
    );
}

#[test]
fn test_find_method_requires_async_qualifier() {
    let source = "class UserService {\n  getUser(id) {\n    return id;\n  }\n}";
    assert_eq!(find_method(source, "getUser"), None);
}

#[test]
fn test_find_method_ignores_other_methods() {
    let source = "class UserService {\n  async listUsers() {\n    return [];\n  }\n\n  async getUser(id) {\n    return this.db.find(id);\n  }\n}";
    let span = find_method(source, "getUser").unwrap();
    assert!(span.starts_with("async getUser(id) {"));
    assert!(span.ends_with("  }"));
    assert!(!span.contains("listUsers"));
}

#[test]
fn test_locate_method_reads_from_disk() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("userService.js");
    fs::write(
        &file,
        "class UserService {\n  async getUser(id) {\n    return this.db.find(id);\n  }\n}\n",
    )
    .unwrap();

    let body = locate_method(&file, "getUser").unwrap().unwrap();
    assert_eq!(
        body,
        "async getUser(id) {\n    return this.db.find(id);\n  }"
    );
}

#[test]
fn test_locate_method_absent_is_ok_none() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("userService.js");
    fs::write(&file, "class UserService {}\n").unwrap();

    assert_eq!(locate_method(&file, "getUser").unwrap(), None);
}

#[test]
fn test_locate_method_read_failure_is_fatal() {
    let result = locate_method(Path::new("/no/such/dir/userService.js"), "getUser");
    assert!(result.is_err(), "unreadable file should propagate an error");
}
