mod tests {
    use approx::assert_relative_eq;

    use crate::constants::SUN_MASS_KG;
    use crate::mass::Mass;

    #[test]
    fn test_mass_conversions() {
        let one_sun = Mass::from_solar_masses(1.0);
        assert_relative_eq!(one_sun.to_kg(), SUN_MASS_KG);

        let in_kg = Mass::from_kg(SUN_MASS_KG);
        assert_relative_eq!(in_kg.to_solar_masses(), 1.0);
    }

    #[test]
    fn test_mass_round_trip() {
        let original = 3.5;
        let kg_value = Mass::from_solar_masses(original).to_kg();
        let round_trip = Mass::from_kg(kg_value).to_solar_masses();
        assert_relative_eq!(round_trip, original, max_relative = 1e-9);
    }

    #[test]
    fn test_mass_arithmetic_operations() {
        let primary = Mass::from_kg(6.0);
        let secondary = Mass::from_kg(2.0);

        assert_relative_eq!((primary + secondary).to_kg(), 8.0);
        assert_relative_eq!((primary - secondary).to_kg(), 4.0);
        assert_relative_eq!((primary * 2.0).to_kg(), 12.0);
        assert_relative_eq!((primary / 2.0).to_kg(), 3.0);
        assert_relative_eq!(primary / secondary, 3.0);
    }
}
