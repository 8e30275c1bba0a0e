mod tests {
    use approx::assert_relative_eq;

    use crate::error::BeamingError;
    use crate::passband::Passband;

    use units::constants::LIGHT_SPEED;

    #[test]
    fn test_passband_wavelengths() {
        assert_relative_eq!(Passband::U.wavelength(), 3.6e-7);
        assert_relative_eq!(Passband::B.wavelength(), 4.4e-7);
        assert_relative_eq!(Passband::V.wavelength(), 5.5e-7);
        assert_relative_eq!(Passband::I.wavelength(), 9.0e-7);
    }

    #[test]
    fn test_passband_frequency() {
        assert_relative_eq!(Passband::V.frequency(), LIGHT_SPEED / 5.5e-7);
    }

    #[test]
    fn test_passband_parse_round_trip() {
        for band in [Passband::U, Passband::B, Passband::V, Passband::I] {
            let parsed: Passband = band.to_string().parse().unwrap();
            assert_eq!(parsed, band);
        }
    }

    #[test]
    fn test_unknown_passband_is_rejected() {
        let result = "R".parse::<Passband>();
        assert_eq!(
            result,
            Err(BeamingError::InvalidPassband("R".to_string()))
        );
    }
}
