pub mod boundary;
pub mod explosion;
pub mod physics;
pub mod surfaces;
