mod tests {
    use approx::assert_relative_eq;

    use crate::velocity::Velocity;

    #[test]
    fn test_velocity_conversions() {
        let orbital = Velocity::from_km_per_sec(29.78);
        assert_relative_eq!(orbital.to_meters_per_sec(), 29780.0);

        let radial = Velocity::from_meters_per_sec(23500.0);
        assert_relative_eq!(radial.to_km_per_sec(), 23.5);
    }

    #[test]
    fn test_velocity_round_trip() {
        let original = -3.6606298593886395;
        let mps = Velocity::from_km_per_sec(original).to_meters_per_sec();
        let round_trip = Velocity::from_meters_per_sec(mps).to_km_per_sec();
        assert_relative_eq!(round_trip, original, max_relative = 1e-9);
    }

    #[test]
    fn test_velocity_arithmetic_operations() {
        let fast = Velocity::from_meters_per_sec(12.0);
        let slow = Velocity::from_meters_per_sec(4.0);

        assert_relative_eq!((fast + slow).to_meters_per_sec(), 16.0);
        assert_relative_eq!((fast - slow).to_meters_per_sec(), 8.0);
        assert_relative_eq!((fast * 2.0).to_meters_per_sec(), 24.0);
        assert_relative_eq!((fast / 3.0).to_meters_per_sec(), 4.0);
    }
}
