//! Views for Vault Migration Studio.
//!
//! Views are pure functions from state to elements; all state changes
//! happen in `App::update`.

pub mod form;
pub mod results;

pub use form::view_form;
pub use results::view_results;
