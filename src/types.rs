use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A call-site reference to a backend service method.
///
/// Exists only when the snippet contained a complete `req.<service>.<method>(`
/// call; both fields are non-empty word-character tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceReference {
    /// Base name of the service file, without directory or extension.
    pub service_file_name: String,
    /// Name of the method invoked on the service.
    pub method_name: String,
}

/// Outcome of resolving a snippet against the services directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResolutionOutcome {
    /// The referenced method was located in the service file.
    Resolved {
        reference: ServiceReference,
        service_file: PathBuf,
        method_body: String,
    },
    /// The snippet contains no recognizable service call.
    ReferenceNotFound,
    /// The referenced service file does not exist on disk.
    ServiceFileMissing {
        reference: ServiceReference,
        expected_path: PathBuf,
    },
    /// The service file exists but does not expose the method as `async`.
    MethodNotExposed {
        reference: ServiceReference,
        service_file: PathBuf,
    },
}

impl ResolutionOutcome {
    /// Returns the located method body, if any.
    pub fn method_body(&self) -> Option<&str> {
        match self {
            ResolutionOutcome::Resolved { method_body, .. } => Some(method_body),
            _ => None,
        }
    }

    /// Returns the extracted reference, if one was recognized.
    pub fn reference(&self) -> Option<&ServiceReference> {
        match self {
            ResolutionOutcome::Resolved { reference, .. }
            | ResolutionOutcome::ServiceFileMissing { reference, .. }
            | ResolutionOutcome::MethodNotExposed { reference, .. } => Some(reference),
            ResolutionOutcome::ReferenceNotFound => None,
        }
    }
}

/// Report produced by a single resolution run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// The snippet exactly as supplied by the host.
    pub snippet: String,
    /// What the resolution pipeline concluded.
    pub outcome: ResolutionOutcome,
    /// One-line human-readable account of the outcome.
    pub summary: String,
    /// Trimmed snippet, plus the method body when one was found.
    pub combined_text: String,
}

/// Result of running resolution and documentation generation end to end.
///
/// `comment` is `None` when the pipeline stopped before the generator ran
/// (no reference in the snippet, or the service file is missing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDoc {
    pub report: ResolutionReport,
    pub comment: Option<String>,
}
