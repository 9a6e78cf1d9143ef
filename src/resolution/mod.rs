//! Regex-based service method resolution.
//!
//! Two pure steps: extract a `req.<service>.<method>(` reference from a
//! call-site snippet, then lift the referenced `async` method's source text
//! out of the service file. No syntax tree is ever built; both steps are
//! plain pattern matching over opaque text.

mod locator;
mod reference;

pub use locator::{find_method, locate_method};
pub use reference::extract_service_reference;
