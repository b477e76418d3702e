//! Minimal rigid body world for the AR sandbox
//!
//! Axis-aligned boxes only: placed objects are small dynamic cubes,
//! detected surfaces and the out-of-bounds catcher are kinematic slabs.
//! Contacts are filtered by each body's contact-test mask and reported
//! once per newly-formed pair, not on every frame the pair stays in
//! touch.

mod body;
mod collision;
mod contact;
mod world;

pub use body::{BodyId, BodyKind, RigidBody};
pub use contact::ContactEvent;
pub use world::PhysicsWorld;
