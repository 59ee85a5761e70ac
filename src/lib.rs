//! Celestial-to-terrestrial frame transformation following the IAU 2000/2006 resolutions.
//!
//! The crate builds the matrix RC2T taking vectors from the Geocentric Celestial
//! Reference System (GCRS) to the International Terrestrial Reference System (ITRS),
//! either through the Celestial Intermediate Origin and the Earth rotation angle or
//! through the true equinox and Greenwich apparent sidereal time.
//!
//! Start with [`orientation::EarthOrientation`] for a configured, ready-to-use pipeline,
//! or use the free functions of [`terrestrial`] and [`intermediate`] directly.
pub mod constants;
pub mod conversion;
pub mod earth_orientation;
pub mod frame_errors;
pub mod intermediate;
pub mod orientation;
pub mod precession;
pub mod rotation;
pub mod series;
pub mod terrestrial;
pub mod time;

pub use earth_orientation::PolarMotion;
pub use frame_errors::FrameError;
pub use intermediate::Model;
pub use orientation::{EarthOrientation, OrientationParams};
pub use terrestrial::Convention;
pub use time::JulianDate;
