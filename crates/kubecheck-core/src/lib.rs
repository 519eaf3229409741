//! Generic contract shared by every kubecheck health check.
//!
//! A [`Check`] is built from a [`CheckConfig`] by a factory held in a
//! [`Registry`], fed the latest [`Resource`] snapshot through
//! [`Check::update`], and evaluated on demand with [`Check::execute`].

mod check;
mod config;
mod error;
mod registry;
mod resource;
mod result;

pub use check::*;
pub use config::*;
pub use error::*;
pub use registry::*;
pub use resource::*;
pub use result::*;
