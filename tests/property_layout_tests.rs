use dumbbell_chart::api::{PRIMITIVES_PER_POINT, VisualConfig, layout};
use dumbbell_chart::core::{CategoryScale, DataPoint, ValueScale, Viewport};
use dumbbell_chart::render::Primitive;
use dumbbell_chart::wrap_label;
use proptest::prelude::*;

fn distinct_points(values: Vec<(f64, f64)>) -> Vec<DataPoint> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, (a, b))| DataPoint::new(format!("category {index}"), a, b))
        .collect()
}

proptest! {
    #[test]
    fn layout_emits_seven_primitives_per_point(
        values in prop::collection::vec((0.0f64..1_000.0, 0.0f64..1_000.0), 1..40),
        width in 200.0f64..2_000.0,
        height in 120.0f64..1_200.0
    ) {
        let points = distinct_points(values);
        let primitives = layout(&points, Viewport::new(width, height), &VisualConfig::default());
        prop_assert_eq!(primitives.len(), points.len() * PRIMITIVES_PER_POINT);
        for primitive in &primitives {
            prop_assert!(primitive.validate().is_ok());
        }
    }

    #[test]
    fn value_scale_is_monotonic(
        domain_max in 1.0f64..1e6,
        start in 0.0f64..500.0,
        span in 1.0f64..2_000.0,
        v1 in 0.0f64..1.0,
        v2 in 0.0f64..1.0
    ) {
        prop_assume!(v2 - v1 > 1e-6);
        let scale = ValueScale::new(domain_max, start, start + span).expect("valid scale");
        prop_assert!(scale.to_pixel(v1 * domain_max) < scale.to_pixel(v2 * domain_max));
        prop_assert!((scale.to_pixel(0.0) - start).abs() <= 1e-9);
        prop_assert!((scale.to_pixel(domain_max) - (start + span)).abs() <= 1e-6);
    }

    #[test]
    fn category_positions_are_increasing_and_evenly_spaced(
        count in 2usize..60,
        start in 0.0f64..200.0,
        span in 10.0f64..2_000.0
    ) {
        let categories: Vec<String> = (0..count).map(|i| format!("c{i}")).collect();
        let scale = CategoryScale::new(categories.iter().cloned(), start, start + span);
        let positions: Vec<f64> = categories
            .iter()
            .map(|c| scale.position(c).expect("known category"))
            .collect();
        for pair in positions.windows(2) {
            prop_assert!(pair[1] > pair[0]);
            prop_assert!(((pair[1] - pair[0]) - scale.step()).abs() <= 1e-9);
        }
        prop_assert!((positions[0] - start).abs() <= 1e-9);
        prop_assert!((positions[count - 1] - (start + span)).abs() <= 1e-6);
    }

    #[test]
    fn single_category_stays_inside_viewport(
        a in 0.0f64..1_000.0,
        b in 0.0f64..1_000.0,
        width in 200.0f64..2_000.0,
        height in 100.0f64..1_200.0
    ) {
        let primitives = layout(
            &[DataPoint::new("only", a, b)],
            Viewport::new(width, height),
            &VisualConfig::default(),
        );
        for primitive in &primitives {
            if let Primitive::Circle(circle) = primitive {
                prop_assert!(circle.cx >= 0.0 && circle.cx <= width);
                prop_assert!(circle.cy >= 0.0 && circle.cy <= height);
            }
        }
    }

    #[test]
    fn wrapping_preserves_every_word_in_order(
        words in prop::collection::vec("[a-z]{1,12}", 0..20),
        max_width in 10.0f64..300.0
    ) {
        let text = words.join(" ");
        let lines = wrap_label(&text, max_width, |fragment| fragment.len() as f64 * 7.0);
        let rejoined: Vec<&str> = lines.iter().flat_map(|line| line.split(' ')).collect();
        let expected: Vec<&str> = words.iter().map(String::as_str).collect();
        prop_assert_eq!(rejoined, expected);
        for line in &lines {
            let fits = line.len() as f64 * 7.0 <= max_width;
            prop_assert!(fits || !line.contains(' '));
        }
    }
}
