//! Chemfinder - resolves IUPAC chemical names to SMILES strings and synonym
//! lists via the NCI/CADD Chemical Identifier Resolver web service.

pub mod error;
pub mod resolver;

pub use error::{Error, Result};

pub use resolver::endpoints;
pub use resolver::{FetchError, Lookup, NameResolver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
