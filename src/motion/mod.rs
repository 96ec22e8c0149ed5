//! Dynamics, force accumulation, impulse application, integration and
//! impulse-based resolution.

pub mod dynamics;
pub mod forces;
pub mod impulse;
pub mod integration;
pub mod resolution;
pub mod vertical_resolution;

pub use dynamics::Dynamics;
pub use impulse::apply_impulse;
pub use integration::{integrate, integrate_angular, integrate_linear};
pub use resolution::Resolver;
pub use vertical_resolution::VerticalResolver;
