//! Data models for the CMS backend.
//!
//! Field names match the site frontend's JSON exactly; each model maps to one collection.

mod contact;
mod entity;
mod insight;
mod patch;
mod performance;
mod profile;
mod status_check;
mod testimonial;
pub mod timestamp;
pub mod validate;

pub use contact::*;
pub use entity::*;
pub use insight::*;
pub use patch::*;
pub use performance::*;
pub use profile::*;
pub use status_check::*;
pub use testimonial::*;
