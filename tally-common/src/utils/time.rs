use chrono::Utc;

/// Returns the current UNIX timestamp in seconds.
///
/// Used to stamp trades and reservations when they are recorded.
pub fn current_time() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_time_non_zero() {
        assert!(current_time() > 0, "Timestamp should be greater than zero");
    }

    #[test]
    fn test_current_time_monotonic() {
        let t1 = current_time();
        let t2 = current_time();
        assert!(t2 >= t1);
    }
}
