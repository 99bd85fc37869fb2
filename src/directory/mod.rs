//! Directory engine: member list fetch, visibility filtering, ordering,
//! and page rendering.

pub mod model;
pub mod render;
pub mod roster;
pub mod slack;

pub use model::MemberList;
