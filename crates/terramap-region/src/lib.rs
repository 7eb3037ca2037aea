//! Polygon regions for tagging map locations with named areas.
//!
//! A [`Region`] is an ordered ring of 2D vertices with an incrementally grown
//! [`BoundingBox`]. Membership can be tested against the box alone
//! ([`Region::point_in_region`]) or against the polygon itself
//! ([`Region::contains_point`]).

mod bounds;
mod error;
mod region;

pub use bounds::BoundingBox;
pub use error::RegionError;
pub use region::Region;
