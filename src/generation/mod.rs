mod canned;
mod openai;

pub use canned::CannedGenerator;
pub use openai::OpenAiGenerator;

use crate::errors::Result;

/// Strategy for turning resolved route code into a documentation comment.
///
/// Implementations receive the combined text (the call-site snippet plus the
/// resolved service method, when one was found) and return the comment to
/// place above the route. Swapping the implementation is how tests avoid a
/// live completions endpoint.
pub trait DocGenerator {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Produces a documentation comment for the given route code.
    fn generate(&self, route_code: &str) -> Result<String>;
}
