//! Error handling for the admin panel
//!
//! Access decisions never fail; these errors belong to the collaborators
//! around them (configuration, session establishment).

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{AdminError, Result};
