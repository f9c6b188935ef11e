//! Booking conflict policy: decides whether a proposed rental may be created.
//!
//! This is the single definition of the double-booking rule. It is a pure
//! predicate over a snapshot of existing rentals, so it can be unit-tested
//! without a database; the storage adapter mirrors the same rule as an
//! indexed query for the commit-time re-check.

use crate::domain::entities::{Rental, RentalStatus};
use crate::domain::value_objects::{LicensePlate, RentalPeriod};

/// Whether the proposed period collides with an existing booking of the car
///
/// Evaluates to `true` when at least one rental in `existing` satisfies all
/// of:
/// - it belongs to `plate` (the snapshot may be unfiltered; rentals of
///   other cars never conflict),
/// - its status is `Active` (finished and cancelled rentals never block),
/// - its period shares at least one calendar day with `proposed`,
///   boundaries inclusive: a checkout day equal to another rental's pickup
///   day is a conflict, because rentals occupy whole days.
///
/// The predicate is total and side-effect-free; `proposed` is well-formed
/// by construction (`RentalPeriod` enforces start <= end).
pub fn has_conflict(plate: &LicensePlate, proposed: &RentalPeriod, existing: &[Rental]) -> bool {
    existing.iter().any(|rental| {
        rental.license_plate == *plate
            && rental.status == RentalStatus::Active
            && rental.period.overlaps(proposed)
    })
}
