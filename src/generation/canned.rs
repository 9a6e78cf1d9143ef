use super::DocGenerator;
use crate::errors::Result;

/// Comment block returned for every input.
const CANNED_DOC: &str = r#"/**
 * POST /rest/addresses
 * @summary Create a new address
 * @tags Addresses
 * @param {Address} request.body - The address to create
 * @return {Address} 200 - Address - application/json
 * @return {object} 400 - Bad request response - application/json
 */"#;

/// Offline generator producing a fixed Swagger comment.
///
/// Stands in for the completions endpoint in demos and tests where no
/// network or API key is available.
#[derive(Debug, Default)]
pub struct CannedGenerator;

impl DocGenerator for CannedGenerator {
    fn name(&self) -> &str {
        "canned"
    }

    fn generate(&self, _route_code: &str) -> Result<String> {
        Ok(CANNED_DOC.to_string())
    }
}
