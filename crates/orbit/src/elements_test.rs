mod tests {
    use approx::assert_relative_eq;

    use crate::elements::OrbitalElements;
    use crate::error::OrbitError;

    use units::Time;

    fn elements() -> OrbitalElements {
        OrbitalElements::new(1.2, 3.5, 2e12, 0.57, 0.0).unwrap()
    }

    #[test]
    fn test_semi_major_axis() {
        assert_relative_eq!(
            elements().semi_major_axis(),
            1489361702127.6594,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_period() {
        let period_days = Time::from_seconds(elements().period()).to_days();
        assert_relative_eq!(period_days, 8235.967214572885, max_relative = 1e-12);
    }

    #[test]
    fn test_companion_swaps_masses() {
        let companion = elements().companion();

        assert_relative_eq!(companion.first_mass(), 3.5);
        assert_relative_eq!(companion.second_mass(), 1.2);
        assert_relative_eq!(companion.eccentricity(), 0.57);
        assert_relative_eq!(companion.sum_semi_major_axes(), 2e12);

        // Same relative orbit, so the same period
        assert_relative_eq!(companion.period(), elements().period());

        // The heavier star rides the smaller ellipse
        assert!(companion.semi_major_axis() < elements().semi_major_axis());
    }

    #[test]
    fn test_rejects_eccentricity_out_of_range() {
        for eccentricity in [1.0, 1.5, -0.1, f64::NAN] {
            let result = OrbitalElements::new(1.0, 1.0, 1e12, eccentricity, 0.0);
            assert!(matches!(result, Err(OrbitError::InvalidElements(_))));
        }
    }

    #[test]
    fn test_rejects_nonpositive_masses_and_axis() {
        assert!(OrbitalElements::new(0.0, 1.0, 1e12, 0.5, 0.0).is_err());
        assert!(OrbitalElements::new(1.0, -2.0, 1e12, 0.5, 0.0).is_err());
        assert!(OrbitalElements::new(1.0, 1.0, 0.0, 0.5, 0.0).is_err());
        assert!(OrbitalElements::new(1.0, 1.0, -1e12, 0.5, 0.0).is_err());
    }
}
