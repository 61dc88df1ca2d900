pub mod curry;
pub mod pipeline;
pub mod registry;
