//! In-process AI search service.
//!
//! The engine crate is a pile of synchronous functions; this crate gives it
//! the worker shape the rest of the stack expects. A dedicated thread owns
//! the search, plain request and response messages cross the boundary, and
//! delivery is last-request-wins: submitting a new search supersedes the one
//! in flight, and answers to superseded searches are never delivered.

pub mod protocol;
pub mod service;

pub use protocol::{SearchRequest, SearchResponse};
pub use service::AiService;
