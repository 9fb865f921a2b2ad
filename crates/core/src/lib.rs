//! hospital-core: Knowledge base types and query resolution
//!
//! This crate holds everything the assistant knows about the hospital and
//! the pure functions that turn a user question into prompt text. It does
//! no networking and no logging; the server crate owns both.

pub mod error;
pub mod knowledge;
pub mod prompt;
pub mod resolver;

pub use error::KnowledgeError;
pub use knowledge::{
    Contact, Department, Facilities, HospitalInfo, HospitalRecord, Scalar, VisitingHours,
};
pub use prompt::{assemble_prompt, hospital_assistant_prompt};
pub use resolver::{NO_MATCH_REPLY, resolve, resolve_lines};
