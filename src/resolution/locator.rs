use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::errors::{Result, SmartDocError};

/// Reads a service file and extracts the source of `async <method_name>(...)`.
///
/// The file is re-read on every call; nothing is cached. Returns `Ok(None)`
/// when the method is not exposed with the `async` qualifier. A read failure
/// is fatal and propagates — callers that consider a missing file an expected
/// outcome must pre-check existence themselves.
pub fn locate_method(service_file: &Path, method_name: &str) -> Result<Option<String>> {
    let source = fs::read_to_string(service_file).map_err(|e| SmartDocError::File {
        message: format!("failed to read service file: {}", e),
        path: service_file.display().to_string(),
    })?;
    Ok(find_method(&source, method_name))
}

/// Pattern-matches a method span inside already-loaded source text.
///
/// The span starts at the literal `async <method_name>(` and runs, shortest
/// match, through the first following line holding nothing but a closing
/// brace (leading indentation allowed). Braces are NOT balanced: a nested
/// block whose `}` sits alone on its own line ends the span early. Callers
/// rely on that exact truncation point, so it stays.
pub fn find_method(source: &str, method_name: &str) -> Option<String> {
    let pattern = format!(
        r"(?ms)async {}\(.*?^[ \t]*\}}$",
        regex::escape(method_name)
    );
    let re = Regex::new(&pattern).expect("valid method span regex");
    let span = re.find(source).map(|m| m.as_str().to_string());
    if span.is_some() {
        debug!(method = method_name, "located async method");
    }
    span
}
