//! The one fallible surface in the crate: the body registry in [`crate::world`].
//!
//! The physics core itself (detection, resolution, integration) never
//! returns `Result` — see `SPEC_FULL.md` SS7 for why that's by design rather
//! than an omission.

use crate::world::EntityId;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum PhysicsError {
    #[error("unknown entity {0:?}")]
    UnknownEntity(EntityId),
    #[error("entity {0:?} is already registered")]
    DuplicateEntity(EntityId),
}
