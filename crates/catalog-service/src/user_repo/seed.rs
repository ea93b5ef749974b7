//! Fixed user directory loaded at startup.

use crate::error::CatalogError;
use crate::model::User;
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CatalogError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CatalogError::InvalidSeedDate { year, month, day })
}

/// The users served by the directory, in enumeration order.
///
/// # Errors
///
/// Fails only if a seed date is not a real calendar date.
pub fn seed() -> Result<Vec<User>, CatalogError> {
    Ok(vec![
        User::new(
            1,
            "John Doe",
            "john.doe@example.com",
            "Engineering",
            date(2020, 3, 15)?,
            true,
        ),
        User::new(
            2,
            "Jane Smith",
            "jane.smith@example.com",
            "Marketing",
            date(2019, 7, 22)?,
            true,
        ),
        User::new(
            3,
            "Bob Johnson",
            "bob.johnson@example.com",
            "Sales",
            date(2021, 1, 10)?,
            true,
        ),
        User::new(
            4,
            "Alice Williams",
            "alice.williams@example.com",
            "Engineering",
            date(2022, 5, 8)?,
            true,
        ),
        User::new(
            5,
            "Charlie Brown",
            "charlie.brown@example.com",
            "HR",
            date(2018, 11, 3)?,
            false,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_rejects_impossible_days() {
        assert!(matches!(
            date(2021, 2, 30),
            Err(CatalogError::InvalidSeedDate {
                year: 2021,
                month: 2,
                day: 30
            })
        ));
    }

    #[test]
    fn seed_dates_are_valid() {
        let users = seed().unwrap();
        assert_eq!(users.len(), 5);
        assert_eq!(users[0].joined_date.to_string(), "2020-03-15");
    }
}
