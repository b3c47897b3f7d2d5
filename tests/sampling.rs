// Inverse-CDF lookup semantics and end-to-end draw properties.

use envsample::core::prelude::*;

fn near_equal(a: Float, b: Float, e: Float) -> bool {
    (a - b).abs() < e
}

/// Replays a fixed list of uniforms, for deterministic draw tests.
struct ScriptedSource {
    values: Vec<Float>,
    index: usize,
}

impl ScriptedSource {
    fn new(values: &[Float]) -> Self {
        ScriptedSource {
            values: Vec::from(values),
            index: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn uniform_float(&mut self) -> Float {
        let v = self.values[self.index % self.values.len()];
        self.index += 1;
        return v;
    }
}

#[test]
fn find_interval_basics() {
    let cdf = vec![0.25, 0.5, 0.75, 1.0];

    assert_eq!(find_interval_cdf(&cdf, 0.0), 0);
    assert_eq!(find_interval_cdf(&cdf, 0.1), 0);
    assert_eq!(find_interval_cdf(&cdf, 0.25), 1);
    assert_eq!(find_interval_cdf(&cdf, 0.6), 2);
    assert_eq!(find_interval_cdf(&cdf, 0.75), 3);
    assert_eq!(find_interval_cdf(&cdf, 0.999), 3);

    // Every u in [0, 1) lands on a valid index.
    for i in 0..1000 {
        let u = (i as Float) / 1000.0;
        let idx = find_interval_cdf(&cdf, u);
        assert!(idx < cdf.len());
    }
}

#[test]
fn find_interval_tail_rounding() {
    // A cumulative table whose tail lands short of one from accumulated
    // rounding must still map near-one draws to the last bucket.
    let cdf = vec![0.25, 0.5, 0.75, 0.9999999];
    assert_eq!(find_interval_cdf(&cdf, 0.99999995), 3);
    assert_eq!(find_interval_cdf(&cdf, ONE_MINUS_EPSILON), 3);
}

#[test]
fn find_interval_single_bucket() {
    let cdf = vec![1.0];
    assert_eq!(find_interval_cdf(&cdf, 0.0), 0);
    assert_eq!(find_interval_cdf(&cdf, 0.5), 0);
}

#[test]
fn worked_sample_via_scripted_source() {
    let grid = WeightGrid::new(vec![1.0; 16], 4, 4).unwrap();
    let dist = Distribution2D::new(&grid).unwrap();
    let sampler = ImportanceSampler::new(&dist);

    // Draw order is u_y then u_x.
    let mut source = ScriptedSource::new(&[0.6, 0.9]);
    let p = sampler.sample(&mut source).unwrap();
    assert_eq!(p, Point2i::new(3, 2));
}

#[test]
fn containment_in_sub_rectangle() {
    let width = 16;
    let height = 16;
    let mut weights = vec![0.0; width * height];
    for y in 6..10 {
        for x in 4..8 {
            weights[y * width + x] = 1.0 + ((x * y) % 3) as Float;
        }
    }
    let grid = WeightGrid::new(weights, width, height).unwrap();
    let dist = Distribution2D::new(&grid).unwrap();
    let sampler = ImportanceSampler::new(&dist);

    let mut rng = RNG::new_sequence(7);
    let samples = sampler.generate_samples(1000, &mut rng).unwrap();
    assert_eq!(samples.len(), 1000);
    for p in &samples {
        assert!((4..8).contains(&p.x), "x out of rectangle: {:?}", p);
        assert!((6..10).contains(&p.y), "y out of rectangle: {:?}", p);
    }
}

#[test]
fn seeded_reproducibility() {
    let weights: Vec<Float> = (0..64).map(|i| ((i * 31) % 17) as Float + 0.1).collect();
    let grid = WeightGrid::new(weights, 8, 8).unwrap();
    let dist = Distribution2D::new(&grid).unwrap();
    let sampler = ImportanceSampler::new(&dist);

    let mut a = RNG::new_sequence(42);
    let mut b = RNG::new_sequence(42);
    let sa = sampler.generate_samples(200, &mut a).unwrap();
    let sb = sampler.generate_samples(200, &mut b).unwrap();
    assert_eq!(sa, sb);

    // Restarting on the same tables draws a fresh, valid set.
    let sc = sampler.generate_samples(200, &mut a).unwrap();
    assert_eq!(sc.len(), 200);
    for p in &sc {
        assert!(p.x >= 0 && (p.x as usize) < dist.width());
        assert!(p.y >= 0 && (p.y as usize) < dist.height());
    }
}

#[test]
fn zero_row_never_selected() {
    let width = 4;
    let height = 4;
    let mut weights = vec![1.0; width * height];
    for x in 0..width {
        weights[width + x] = 0.0;
    }
    let grid = WeightGrid::new(weights, width, height).unwrap();
    let dist = Distribution2D::new(&grid).unwrap();
    let sampler = ImportanceSampler::new(&dist);

    let mut rng = RNG::new_sequence(3);
    let samples = sampler.generate_samples(1000, &mut rng).unwrap();
    for p in &samples {
        assert_ne!(p.y, 1, "drew from a zero-probability row");
    }
}

#[test]
fn luminance_weighting() {
    let w = DEFAULT_LUMA_WEIGHTS;
    assert!(near_equal(luminance(&[1.0, 0.5, 0.25], &w), 0.525, 1e-12));
    // Negative channels are clamped before weighting.
    assert!(near_equal(luminance(&[-1.0, 1.0, 0.0], &w), 0.6, 1e-12));

    let pixels = vec![
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
        [2.0, 0.0, 0.0],
        [0.0, 0.0, 4.0],
    ];
    let grid = luminance_grid(&pixels, &Point2i::new(2, 2), &w).unwrap();
    assert!(near_equal(grid.at(0, 0), 0.0, 1e-12));
    assert!(near_equal(grid.at(1, 0), 0.9, 1e-12));
    assert!(near_equal(grid.at(0, 1), 0.4, 1e-12));
    assert!(near_equal(grid.at(1, 1), 0.4, 1e-12));
}

#[test]
fn options_defaults_and_json() {
    let options: SampleOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options.sample_count, 500);
    assert_eq!(options.rng_seed, None);
    assert_eq!(options.channel_weights, [0.2, 0.6, 0.1]);
    assert!(options.validate().is_ok());

    let json = r#"{"sample_count": 64, "rng_seed": 9, "channel_weights": [0.3, 0.5, 0.2]}"#;
    let options: SampleOptions = serde_json::from_str(json).unwrap();
    assert_eq!(options.sample_count, 64);
    assert_eq!(options.rng_seed, Some(9));
    assert_eq!(options.channel_weights, [0.3, 0.5, 0.2]);

    let options: SampleOptions = serde_json::from_str(r#"{"sample_count": 0}"#).unwrap();
    assert_eq!(
        options.validate().unwrap_err().kind,
        SampleErrorKind::InvalidInput
    );
}
