//! Domain model (disposition, reaction, errors).

pub mod disposition;
pub mod errors;
pub mod reaction;

pub use disposition::Disposition;
pub use errors::InvalidDispositionError;
pub use reaction::{PartialReaction, Reaction};
