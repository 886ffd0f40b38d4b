//! Service layer for business logic.
//!
//! Pure functions over the models: branding lookup, logo generation, topic
//! generation and the ordered-list operations behind every board interaction.

pub mod agenda;
pub mod branding;
pub mod logo;
pub mod topics;

// Re-export commonly used types and functions
pub use branding::resolve_branding;
pub use logo::generate_logo_svg;
pub use topics::{generate_topics, IdGenerator, RandomIds, SequentialIds};
