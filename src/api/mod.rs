//! External Bindings
//!
//! The GitHub REST call and the browser APIs the page talks to,
//! organized by domain.

mod browser;
mod github;

pub use browser::*;
pub use github::*;
