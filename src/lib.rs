//! Two composition helpers: [`curry`](service::curry::curry), which partially
//! applies arguments to a registered function until its required parameter
//! count is met, and [`apply`](service::pipeline::apply), which threads one
//! value through an ordered chain of stages that may cancel the rest.

pub mod config;
pub mod errors;
pub mod model;
pub mod service;
pub mod util;
