mod tests {
    use approx::assert_relative_eq;

    use crate::time::Time;

    #[test]
    fn test_time_conversions() {
        assert_relative_eq!(Time::from_days(1.0).to_seconds(), 86400.0);
        assert_relative_eq!(Time::from_hours(1.0).to_seconds(), 3600.0);
        assert_relative_eq!(Time::from_minutes(1.0).to_seconds(), 60.0);
        assert_relative_eq!(Time::from_seconds(86400.0).to_days(), 1.0);
    }

    #[test]
    fn test_time_round_trips() {
        let original = 8235.967214572885;

        let days = Time::from_days(original).to_seconds();
        assert_relative_eq!(Time::from_seconds(days).to_days(), original, max_relative = 1e-9);

        let hours = Time::from_hours(original).to_seconds();
        assert_relative_eq!(
            Time::from_seconds(hours).to_hours(),
            original,
            max_relative = 1e-9
        );

        let minutes = Time::from_minutes(original).to_seconds();
        assert_relative_eq!(
            Time::from_seconds(minutes).to_minutes(),
            original,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_time_arithmetic_operations() {
        let long = Time::from_seconds(10.0);
        let short = Time::from_seconds(4.0);

        assert_relative_eq!((long + short).to_seconds(), 14.0);
        assert_relative_eq!((long - short).to_seconds(), 6.0);
        assert_relative_eq!((long * 0.5).to_seconds(), 5.0);
        assert_relative_eq!((long / 4.0).to_seconds(), 2.5);
        assert_relative_eq!(long / short, 2.5);
    }
}
