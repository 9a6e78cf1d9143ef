use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{get_config_path, load_config, save_config, SmartDocConfig};
use crate::errors::Result;
use crate::generation::DocGenerator;
use crate::resolution::{extract_service_reference, locate_method};
use crate::types::*;

/// Central orchestrator composing reference extraction, method location, and
/// documentation generation.
pub struct SmartDoc {
    config: SmartDocConfig,
    project_root: PathBuf,
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

impl SmartDoc {
    /// Initializes a new smartdoc project at the given root.
    ///
    /// Writes a default configuration into the `.smartdoc` directory.
    pub fn init(project_root: &Path) -> Result<Self> {
        let config = SmartDocConfig::default();
        save_config(project_root, &config)?;

        Ok(Self {
            config,
            project_root: project_root.to_path_buf(),
        })
    }

    /// Opens a smartdoc project at the given root.
    ///
    /// Loads the configuration from disk, falling back to defaults when none
    /// has been written yet.
    pub fn open(project_root: &Path) -> Result<Self> {
        let config = load_config(project_root)?;
        Ok(Self {
            config,
            project_root: project_root.to_path_buf(),
        })
    }

    /// Returns `true` if a configuration has been written at the given root.
    pub fn is_initialized(project_root: &Path) -> bool {
        get_config_path(project_root).exists()
    }

    /// Returns the directory searched for service files.
    pub fn services_dir(&self) -> PathBuf {
        self.project_root.join(&self.config.services_dir)
    }

    /// Returns a reference to the current configuration.
    pub fn get_config(&self) -> &SmartDocConfig {
        &self.config
    }

    /// Returns the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

// ---------------------------------------------------------------------------
// Resolution and generation
// ---------------------------------------------------------------------------

impl SmartDoc {
    /// Resolves the service method referenced by a call-site snippet.
    ///
    /// Pipeline:
    /// 1. Extract the `req.<service>.<method>(` reference from the snippet
    /// 2. Map the service name to `<services_dir>/<service>.<extension>`
    /// 3. Lift the `async` method body out of that file
    ///
    /// Every outcome short of an unreadable file is reported as `Ok`; the
    /// report always carries a combined text for downstream generation. The
    /// service file is re-read on every call.
    pub fn resolve(&self, snippet: &str) -> Result<ResolutionReport> {
        let Some(reference) = extract_service_reference(snippet) else {
            debug!("no service reference in snippet");
            return Ok(ResolutionReport {
                snippet: snippet.to_string(),
                outcome: ResolutionOutcome::ReferenceNotFound,
                summary: "Service file reference not found in the code snippet.".to_string(),
                combined_text: snippet.trim().to_string(),
            });
        };

        let service_file = self.services_dir().join(format!(
            "{}.{}",
            reference.service_file_name, self.config.service_extension
        ));
        debug!(
            service = %reference.service_file_name,
            method = %reference.method_name,
            file = %service_file.display(),
            "extracted service reference"
        );

        if !service_file.exists() {
            return Ok(ResolutionReport {
                snippet: snippet.to_string(),
                summary: format!("Service file not found: {}", service_file.display()),
                combined_text: snippet.trim().to_string(),
                outcome: ResolutionOutcome::ServiceFileMissing {
                    reference,
                    expected_path: service_file,
                },
            });
        }

        match locate_method(&service_file, &reference.method_name)? {
            Some(method_body) => Ok(ResolutionReport {
                snippet: snippet.to_string(),
                summary: format!(
                    "Found method in {}.{}",
                    reference.service_file_name, self.config.service_extension
                ),
                combined_text: format!("{}\n\n{}", snippet.trim(), method_body),
                outcome: ResolutionOutcome::Resolved {
                    reference,
                    service_file,
                    method_body,
                },
            }),
            None => Ok(ResolutionReport {
                snippet: snippet.to_string(),
                summary: format!(
                    "The method '{}' is NOT exposed in {}.{}",
                    reference.method_name,
                    reference.service_file_name,
                    self.config.service_extension
                ),
                combined_text: snippet.trim().to_string(),
                outcome: ResolutionOutcome::MethodNotExposed {
                    reference,
                    service_file,
                },
            }),
        }
    }

    /// Resolves a snippet and produces a documentation comment from the
    /// combined text using the supplied generator.
    ///
    /// The generator is not invoked when resolution stopped before reaching
    /// the service file (no reference, or the file is missing); the returned
    /// `comment` is `None` in that case. A method that is not exposed still
    /// goes through generation, with the snippet alone as input.
    pub fn generate(
        &self,
        snippet: &str,
        generator: &dyn DocGenerator,
    ) -> Result<GeneratedDoc> {
        let report = self.resolve(snippet)?;

        let comment = match &report.outcome {
            ResolutionOutcome::ReferenceNotFound
            | ResolutionOutcome::ServiceFileMissing { .. } => None,
            ResolutionOutcome::Resolved { .. } | ResolutionOutcome::MethodNotExposed { .. } => {
                info!(generator = generator.name(), "generating documentation comment");
                Some(generator.generate(&report.combined_text)?)
            }
        };

        Ok(GeneratedDoc { report, comment })
    }
}
