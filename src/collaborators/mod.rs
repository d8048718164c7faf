// src/collaborators/mod.rs
//! External collaborators the engine accepts text from.
//!
//! The engine itself only ever sees plain strings; these interfaces produce
//! those strings from documents or remote services. Each one reports an
//! explicit unavailable/not-configured outcome instead of panicking when its
//! backing capability is missing.

pub mod improver;
pub mod text_extractor;

pub use improver::{HttpResumeImprover, ImproveError, ImproverSettings, ResumeImprover};
pub use text_extractor::{ExtractError, PdfTextExtractor, TextExtractor};
