/// Parse a caller-supplied time budget into minutes.
///
/// The accepted format is `"mm:ss"` (e.g. `"45:30"` for 45 minutes 30
/// seconds); seconds contribute a fractional part. An absent or empty budget
/// means no constraint at all and maps to `f64::INFINITY`, so no time
/// penalty is ever applied.
///
/// A malformed budget (wrong number of `:` parts, non-numeric or negative
/// components) fails soft to `0.0` instead of erroring: a bad time string
/// must never abort the whole matching request. Note the asymmetry: absent
/// is unbounded, malformed is the harshest possible budget. Callers relying
/// on ranking parity with existing deployments depend on both halves.
pub fn parse_time_budget(raw: Option<&str>) -> f64 {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return f64::INFINITY,
    };

    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() != 2 {
        return 0.0;
    }

    match (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
        (Ok(minutes), Ok(seconds)) => f64::from(minutes) + f64::from(seconds) / 60.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(parse_time_budget(Some("45:30")), 45.5);
        assert_eq!(parse_time_budget(Some("20:00")), 20.0);
        assert_eq!(parse_time_budget(Some("0:30")), 0.5);
    }

    #[test]
    fn test_absent_is_unbounded() {
        assert_eq!(parse_time_budget(None), f64::INFINITY);
        assert_eq!(parse_time_budget(Some("")), f64::INFINITY);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_time_budget(Some("garbage")), 0.0);
        assert_eq!(parse_time_budget(Some("4x:30")), 0.0);
        assert_eq!(parse_time_budget(Some("-5:30")), 0.0);
    }

    #[test]
    fn test_missing_separator_is_malformed() {
        assert_eq!(parse_time_budget(Some("10")), 0.0);
    }

    #[test]
    fn test_extra_separator_is_malformed() {
        assert_eq!(parse_time_budget(Some("10:20:30")), 0.0);
    }
}
