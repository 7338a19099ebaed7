use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Get the current UTC offset of `canonical_timezone`, e.g. "Pacific/Auckland".
///
/// Returns `None` if the timezone is not known.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

#[cfg(test)]
mod tests {
    use time::UtcOffset;

    use super::get_local_offset;

    #[test]
    fn utc_has_zero_offset() {
        assert_eq!(get_local_offset("Etc/UTC"), Some(UtcOffset::UTC));
    }

    #[test]
    fn fixed_offset_timezone() {
        // Etc/GMT-10 is ten hours ahead of UTC, the sign is inverted in the tz database.
        assert_eq!(
            get_local_offset("Etc/GMT-10"),
            UtcOffset::from_hms(10, 0, 0).ok()
        );
    }

    #[test]
    fn unknown_timezone_is_none() {
        assert_eq!(get_local_offset("Not/A_Timezone"), None);
        assert_eq!(get_local_offset(""), None);
    }
}
