use bandblur::{
    box_blur, box_blur_clamped, box_blur_naive, gaussian_blur, resolve, stack_blur,
    stack_blur_multiplied, stack_blur_table, Algorithm, BlurError, SeparableFilter, MAX_RADIUS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_channel(rng: &mut StdRng, width: usize, height: usize) -> Vec<u8> {
    (0..width * height).map(|_| rng.random::<u8>()).collect()
}

fn every_algorithm() -> Vec<Algorithm> {
    let mut all = vec![Algorithm::WindowedMean];
    for base in SeparableFilter::ALL {
        all.push(Algorithm::Separable(base));
        all.push(Algorithm::Gaussian(base));
    }
    all
}

/// Image with a dark one-pixel frame around a bright interior.
fn framed(width: usize, height: usize) -> Vec<u8> {
    let mut channel = vec![255u8; width * height];
    for y in 0..height {
        for x in 0..width {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                channel[y * width + x] = 0;
            }
        }
    }
    channel
}

fn frame_indices(width: usize, height: usize) -> Vec<usize> {
    (0..width * height)
        .filter(|i| {
            let (x, y) = (i % width, i / width);
            x == 0 || y == 0 || x == width - 1 || y == height - 1
        })
        .collect()
}

#[test]
fn sliding_sum_equals_windowed_mean() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let width = rng.random_range(1..12);
        let height = rng.random_range(1..12);
        let radius = rng.random_range(0..14);
        let channel = random_channel(&mut rng, width, height);

        assert_eq!(
            box_blur(&channel, width, height, radius).unwrap(),
            box_blur_naive(&channel, width, height, radius).unwrap(),
            "{width}x{height} radius {radius}"
        );
    }
}

#[test]
fn radius_zero_is_identity_for_every_algorithm() {
    let mut rng = StdRng::seed_from_u64(1);
    let channel = random_channel(&mut rng, 9, 7);
    for algorithm in every_algorithm() {
        assert_eq!(algorithm.apply(&channel, 9, 7, 0).unwrap(), channel, "{algorithm}");
    }
}

#[test]
fn shape_is_preserved() {
    let mut rng = StdRng::seed_from_u64(2);
    for (width, height) in [(1, 1), (1, 13), (13, 1), (8, 5)] {
        let channel = random_channel(&mut rng, width, height);
        for algorithm in every_algorithm() {
            for radius in [1, 3, 20] {
                let out = algorithm.apply(&channel, width, height, radius).unwrap();
                assert_eq!(out.len(), channel.len(), "{algorithm} {width}x{height}");
            }
        }
    }
}

#[test]
fn input_is_not_modified() {
    let mut rng = StdRng::seed_from_u64(3);
    let channel = random_channel(&mut rng, 10, 10);
    let copy = channel.clone();
    for algorithm in every_algorithm() {
        algorithm.apply(&channel, 10, 10, 4).unwrap();
    }
    assert_eq!(channel, copy);
}

#[test]
fn uniform_channel_stays_uniform() {
    // The fixed-point table is only exact when (radius + 1)² is a power of two
    let table_radii = [1, 7, 15];
    for value in [0u8, 1, 77, 128, 254, 255] {
        let channel = vec![value; 11 * 6];
        for algorithm in every_algorithm() {
            let uses_table = matches!(
                algorithm,
                Algorithm::Separable(SeparableFilter::StackTable)
                    | Algorithm::Gaussian(SeparableFilter::StackTable)
            );
            for radius in [1, 2, 5, 7, 15, 40] {
                if uses_table && !table_radii.contains(&radius) {
                    continue;
                }
                let out = algorithm.apply(&channel, 11, 6, radius).unwrap();
                assert!(
                    out.iter().all(|&v| v == value),
                    "{algorithm} value {value} radius {radius}"
                );
            }
        }
    }
}

#[test]
fn clamped_variants_keep_border_closer_to_its_value() {
    let (width, height) = (7, 7);
    let channel = framed(width, height);
    for radius in 1..=3 {
        let exact_box = box_blur(&channel, width, height, radius).unwrap();
        let clamped_box = box_blur_clamped(&channel, width, height, radius).unwrap();
        let exact_stack = stack_blur(&channel, width, height, radius).unwrap();
        let multiplied_stack = stack_blur_multiplied(&channel, width, height, radius).unwrap();

        for i in frame_indices(width, height) {
            assert!(clamped_box[i] < exact_box[i], "box radius {radius} pixel {i}");
            assert!(
                multiplied_stack[i] < exact_stack[i],
                "stack radius {radius} pixel {i}"
            );
        }
    }
}

#[test]
fn gaussian_lowers_peak_and_widens_spread() {
    let size = 15;
    let mut point = vec![0u8; size * size];
    point[7 * size + 7] = 255;

    for base in SeparableFilter::ALL {
        for radius in [1, 2] {
            let single = base.apply(&point, size, size, radius).unwrap();
            let composed = gaussian_blur(&point, size, size, radius, base).unwrap();

            let peak = |c: &[u8]| *c.iter().max().unwrap();
            let spread = |c: &[u8]| c.iter().filter(|&&v| v > 0).count();
            assert!(peak(&composed) < peak(&single), "{base} radius {radius}");
            assert!(spread(&composed) > spread(&single), "{base} radius {radius}");
        }
    }
}

#[test]
fn large_radius_degrades_gracefully() {
    let mut rng = StdRng::seed_from_u64(4);
    let channel = random_channel(&mut rng, 5, 3);
    let mean = {
        let sum: u64 = channel.iter().map(|&v| v as u64).sum();
        ((2 * sum + 15) / 30) as u8
    };
    // A window larger than the image covers all of it
    assert_eq!(box_blur(&channel, 5, 3, 1000).unwrap(), vec![mean; 15]);
    assert_eq!(box_blur_naive(&channel, 5, 3, 1000).unwrap(), vec![mean; 15]);
    assert_eq!(stack_blur(&channel, 5, 3, 1000).unwrap().len(), 15);
    assert_eq!(stack_blur_multiplied(&channel, 5, 3, 1000).unwrap().len(), 15);
    assert_eq!(box_blur_clamped(&channel, 5, 3, 1000).unwrap().len(), 15);
}

#[test]
fn errors_are_reported_before_work() {
    let channel = [0u8; 10];
    for algorithm in every_algorithm() {
        assert!(
            matches!(
                algorithm.apply(&channel, 3, 3, 1),
                Err(BlurError::DimensionMismatch {
                    len: 10,
                    width: 3,
                    height: 3
                })
            ),
            "{algorithm}"
        );
    }

    assert_eq!(
        stack_blur_table(&channel, 5, 2, 256),
        Err(BlurError::UnsupportedRadius {
            radius: 256,
            max: 255
        })
    );
    assert_eq!(
        resolve("gaussian:stack-table").unwrap().apply(&channel, 5, 2, 300),
        Err(BlurError::UnsupportedRadius {
            radius: 300,
            max: 255
        })
    );
    assert_eq!(
        resolve("motion"),
        Err(BlurError::UnknownAlgorithm("motion".to_string()))
    );
}

#[test]
fn radius_at_every_limit_stays_in_range() {
    let (width, height) = (12, 9);
    let flat = vec![255u8; width * height];
    for algorithm in every_algorithm() {
        let max = match algorithm {
            Algorithm::WindowedMean => usize::MAX,
            Algorithm::Separable(base) | Algorithm::Gaussian(base) => base.max_radius(),
        };
        let out = algorithm.apply(&flat, width, height, max).unwrap();
        assert!(out.iter().all(|&v| v >= 254), "{algorithm} radius {max}");

        if max < usize::MAX {
            assert_eq!(
                algorithm.apply(&flat, width, height, max + 1),
                Err(BlurError::UnsupportedRadius {
                    radius: max + 1,
                    max
                }),
                "{algorithm}"
            );
        }
    }

    let mut rng = StdRng::seed_from_u64(5);
    let channel = random_channel(&mut rng, width, height);
    assert_eq!(
        box_blur(&channel, width, height, usize::MAX).unwrap(),
        box_blur_naive(&channel, width, height, usize::MAX).unwrap()
    );
    // Nearly flat triangular weights land next to the whole-image mean
    let mean = box_blur(&channel, width, height, usize::MAX).unwrap();
    let wide = stack_blur(&channel, width, height, MAX_RADIUS).unwrap();
    for (&a, &b) in wide.iter().zip(&mean) {
        assert!(a.abs_diff(b) <= 1, "{a} vs {b}");
    }
}
