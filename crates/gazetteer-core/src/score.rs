// crates/gazetteer-core/src/score.rs

//! # Relevance Scoring
//!
//! Decides how interesting a place is for a user living at a given
//! [`ReferenceLocation`]. Lower scores are more relevant.
//!
//! The distance is planar and measured in degrees: one unit of
//! latitude counts fully, one unit of longitude counts half. Roughly:
//!
//! | distance | approx. km  | smallest admitted population |
//! |----------|-------------|------------------------------|
//! | 2        | 100–200     | 4 000                        |
//! | 8        | ~1 000      | 64 000                       |
//! | 50       | ~5 000      | 2 500 000                    |

use crate::model::ReferenceLocation;

/// Longitude degrees count half as much as latitude degrees.
pub const LON_WEIGHT: f64 = 0.5;

/// Pseudo-score every country gets; countries are never filtered.
pub const COUNTRY_SCORE: f64 = 0.1;

/// Cities scoring above this are dropped at load time.
pub const ADMISSION_THRESHOLD: f64 = 1.0;

/// Cheap planar distance in degrees between a point and the reference.
#[inline]
pub fn planar_distance(lat: f64, lon: f64, reference: &ReferenceLocation) -> f64 {
    (lat - reference.lat).abs() + (lon - reference.lon).abs() * LON_WEIGHT
}

/// `distance² / (population / 1000)`.
///
/// A place sitting on the reference point scores 0 whatever its population.
/// An unpopulated place anywhere else scores `+∞`.
#[inline]
pub fn score(lat: f64, lon: f64, population: u64, reference: &ReferenceLocation) -> f64 {
    let distance = planar_distance(lat, lon, reference);
    if distance == 0.0 {
        return 0.0;
    }
    (distance * distance) / (population as f64 / 1000.0)
}

#[inline]
pub fn is_admitted(score: f64) -> bool {
    score <= ADMISSION_THRESHOLD
}
