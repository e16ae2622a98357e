use shared::{DomainError, DomainResult};

/// Field-range checks for a member's night-shift ceiling/floor. Pure and
/// storage-free so both create and update paths can call it before
/// touching the database.
pub fn validate_night_shift_bounds(
    min_night_shifts: i32,
    max_night_shifts: i32,
) -> DomainResult<()> {
    if !(1..=6).contains(&max_night_shifts) {
        return Err(DomainError::InvalidInput(format!(
            "max_night_shifts must be between 1 and 6, got {}",
            max_night_shifts
        )));
    }

    if min_night_shifts < 0 || min_night_shifts > max_night_shifts {
        return Err(DomainError::InvalidInput(format!(
            "min_night_shifts ({}) must be between 0 and max_night_shifts ({})",
            min_night_shifts, max_night_shifts
        )));
    }

    Ok(())
}
