//! Property-based tests for generated filtration lines.
//!
//! ## Test Properties
//!
//! 1. **Field consistency**: second field is the first minus one
//! 2. **Arity**: the number of vertex tokens equals the first field
//! 3. **Vertex range**: vertices strictly increase within `1..=n+2`
//! 4. **Count**: line count equals `Σ C(n+2, i)` over the subset sizes
//! 5. **Prefix**: the sphere listing is a prefix of the ball listing

use proptest::prelude::*;
use tda_filtrations::complex::vertex_count;
use tda_filtrations::{expected_simplex_count, write_filtration, ComplexKind};

fn render(n: usize, kind: ComplexKind) -> String {
    let mut buf = Vec::new();
    write_filtration(&mut buf, n, kind).unwrap();
    String::from_utf8(buf).unwrap()
}

fn kind_strategy() -> impl Strategy<Value = ComplexKind> {
    prop_oneof![Just(ComplexKind::Ball), Just(ComplexKind::Sphere)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_lines_are_well_formed(n in 1usize..9, kind in kind_strategy()) {
        let text = render(n, kind);
        let max_vertex = vertex_count(n);

        for line in text.lines() {
            let fields: Vec<usize> = line
                .split(' ')
                .map(|t| t.parse().unwrap())
                .collect();
            prop_assert!(fields.len() >= 3, "short line {:?}", line);

            let (size, dim, vertices) = (fields[0], fields[1], &fields[2..]);
            prop_assert_eq!(dim + 1, size);
            prop_assert_eq!(vertices.len(), size);
            prop_assert!(size <= kind.max_subset_size(n));
            prop_assert!(vertices.windows(2).all(|w| w[0] < w[1]), "not increasing: {:?}", line);
            prop_assert!(vertices.iter().all(|&v| (1..=max_vertex).contains(&v)));
        }
    }

    #[test]
    fn prop_line_count(n in 1usize..11, kind in kind_strategy()) {
        let count = render(n, kind).lines().count() as u128;
        prop_assert_eq!(Some(count), expected_simplex_count(n, kind));
    }

    #[test]
    fn prop_sphere_is_prefix_of_ball(n in 1usize..9) {
        let ball = render(n, ComplexKind::Ball);
        let sphere = render(n, ComplexKind::Sphere);

        prop_assert!(ball.starts_with(&sphere));
        // Only the single top simplex is missing
        let rest: Vec<&str> = ball[sphere.len()..].lines().collect();
        prop_assert_eq!(rest.len(), 1);
    }
}
