//! Parse-output types shared by the Dockerfile and Compose parsers.

mod document;
mod issue;
mod resolve;

pub use document::DocumentKind;
pub use issue::{Issue, IssueKind, MalformedReason};
pub use resolve::{NodePart, Resolution, Resolve};
