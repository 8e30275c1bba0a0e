mod tests {
    use approx::assert_relative_eq;

    use crate::elements::OrbitalElements;
    use crate::kepler::OrbitalState;
    use crate::orientation::Orientation;
    use crate::projection::ProjectedState;

    use units::{Length, Velocity};

    fn projected() -> ProjectedState {
        let elements = OrbitalElements::new(1.1, 2.4, 1.3e13, 0.14, 0.0).unwrap();
        let orientation = Orientation::from_degrees(34.5, 51.9, 170.3);
        let state = OrbitalState::at(&elements, 357842.23).unwrap();

        ProjectedState::project(&state, &elements, &orientation)
    }

    #[test]
    fn test_projected_position() {
        let sky = projected();

        let x = Length::from_meters(sky.position.x).to_au();
        let y = Length::from_meters(sky.position.y).to_au();
        assert_relative_eq!(x, 24.227207640295155, epsilon = 1e-7);
        assert_relative_eq!(y, -44.644945462726724, epsilon = 1e-7);
    }

    #[test]
    fn test_radial_velocity() {
        let sky = projected();

        let radial = Velocity::from_meters_per_sec(sky.radial_velocity).to_km_per_sec();
        assert_relative_eq!(radial, -3.6606298593886395, epsilon = 1e-7);
    }

    #[test]
    fn test_face_on_orbit_has_no_radial_velocity() {
        let elements = OrbitalElements::new(1.0, 1.0, 1e12, 0.3, 0.0).unwrap();
        let face_on = Orientation::from_degrees(0.0, 0.0, 45.0);
        let state = OrbitalState::at(&elements, 123456.0).unwrap();

        let sky = ProjectedState::project(&state, &elements, &face_on);
        assert_relative_eq!(sky.radial_velocity, 0.0);
    }

    #[test]
    fn test_face_on_orbit_projects_undistorted() {
        // With i = 0 the cos(i) foreshortening is the identity, so the
        // projected separation equals the in-plane separation.
        let elements = OrbitalElements::new(1.0, 1.0, 1e12, 0.3, 0.0).unwrap();
        let face_on = Orientation::from_degrees(0.0, 0.0, 45.0);
        let state = OrbitalState::at(&elements, 123456.0).unwrap();

        let sky = ProjectedState::project(&state, &elements, &face_on);
        let separation = (sky.position.x.powi(2) + sky.position.y.powi(2)).sqrt();
        assert_relative_eq!(separation, state.distance, max_relative = 1e-12);
    }

    #[test]
    fn test_longitude_periapsis_branch() {
        let prograde = Orientation::from_degrees(30.0, 45.0, 60.0);
        assert_relative_eq!(
            prograde.longitude_periapsis(),
            prograde.longitude_node() + prograde.periastron_argument()
        );

        let retrograde = Orientation::from_degrees(30.0, 135.0, 60.0);
        assert_relative_eq!(
            retrograde.longitude_periapsis(),
            retrograde.longitude_node() - retrograde.periastron_argument()
        );
    }

    #[test]
    fn test_companion_orientation_flips_periastron() {
        let orientation = Orientation::from_degrees(34.5, 51.9, 170.3);
        let companion = orientation.companion();

        assert_relative_eq!(companion.longitude_node(), orientation.longitude_node());
        assert_relative_eq!(companion.inclination(), orientation.inclination());
        assert_relative_eq!(
            companion.periastron_argument(),
            orientation.periastron_argument() + std::f64::consts::PI
        );
    }
}
