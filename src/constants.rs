//! # Constants and type definitions for earthframe
//!
//! This module centralizes the **astronomical constants**, **conversion factors**, and **type
//! aliases** shared by the precession, Earth-rotation and frame-assembly modules.
//!
//! ## Overview
//!
//! - Reference epochs (J2000.0 as Julian Date and as MJD)
//! - Unit conversions (arcseconds ↔ radians)
//! - Core angle and date type aliases used across the crate
//!
//! The values follow the IAU/IERS conventions used by the 2000 and 2006 models.

// -------------------------------------------------------------------------------------------------
// Angles and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Arcseconds in a full circle
pub const TURNAS: f64 = 1_296_000.0;

// -------------------------------------------------------------------------------------------------
// Time
// -------------------------------------------------------------------------------------------------

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of J2000.0 (2000-01-01 12:00:00 TT)
pub const DJ00: f64 = 2_451_545.0;

/// MJD epoch of J2000.0
pub const T2000: f64 = 51544.5;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Days per Julian century
pub const DJC: f64 = 36525.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
