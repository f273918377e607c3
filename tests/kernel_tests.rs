use wavedither::{DitherError, WavefrontConfig, sequential_dither, wavefront_dither};

#[test]
fn threshold_is_strictly_greater_than_128() {
    // Exactly 128 stays black; 129 flips to white.
    assert_eq!(sequential_dither(&[128], 1, 1).unwrap(), vec![0]);
    assert_eq!(sequential_dither(&[129], 1, 1).unwrap(), vec![255]);
}

#[test]
fn all_white_input_dithers_to_all_white() {
    // 255 quantizes to 255 with zero residual error, so nothing diffuses.
    let pixels = vec![255u8; 9];
    assert_eq!(sequential_dither(&pixels, 3, 3).unwrap(), vec![255u8; 9]);
}

#[test]
fn all_black_input_dithers_to_all_black() {
    let pixels = vec![0u8; 9];
    assert_eq!(sequential_dither(&pixels, 3, 3).unwrap(), vec![0u8; 9]);
}

#[test]
fn negative_error_is_floor_divided() {
    // 130 -> white with error -125; the right tap is
    // (-125 * 7).div_euclid(16) = -55 (floor), leaving 183 - 55 = 128,
    // which is not above threshold. Truncating division would carry
    // -54 and flip the second pixel to white.
    assert_eq!(sequential_dither(&[130, 183], 2, 1).unwrap(), vec![255, 0]);
}

#[test]
fn uniform_100_produces_frozen_diagonal_pattern() {
    // Golden output of the reference kernel for a 4x4 grid of value
    // 100: characteristic Floyd-Steinberg diagonal banding.
    #[rustfmt::skip]
    let expected = vec![
          0, 255,   0,   0,
          0,   0, 255,   0,
        255,   0, 255,   0,
          0, 255,   0, 255,
    ];
    let pixels = vec![100u8; 16];
    assert_eq!(sequential_dither(&pixels, 4, 4).unwrap(), expected);
}

#[test]
fn single_column_diffuses_straight_down() {
    // Width 1: only the below tap hits a logical pixel, everything
    // else lands in border cells. 200 -> white with error -55, the
    // below tap carries (-275).div_euclid(16) = -18, so the middle
    // pixel reads 82 and stays black.
    assert_eq!(
        sequential_dither(&[200, 100, 100], 1, 3).unwrap(),
        vec![255, 0, 0]
    );
}

#[test]
fn single_row_diffuses_only_rightward() {
    // Height 1: only the right tap matters. 100 + 43 = 143 flips the
    // second pixel, whose error then darkens the third.
    assert_eq!(
        sequential_dither(&[100, 100, 100], 3, 1).unwrap(),
        vec![0, 255, 0]
    );
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        sequential_dither(&[], 0, 4),
        Err(DitherError::InvalidDimensions { width: 0, height: 4 })
    ));
    assert!(matches!(
        sequential_dither(&[], 4, 0),
        Err(DitherError::InvalidDimensions { width: 4, height: 0 })
    ));
    assert!(matches!(
        wavefront_dither(&[], 0, 0, &WavefrontConfig::default()),
        Err(DitherError::InvalidDimensions { .. })
    ));
}

#[test]
fn pixel_count_mismatch_is_rejected() {
    let pixels = vec![0u8; 5];
    assert!(matches!(
        sequential_dither(&pixels, 2, 2),
        Err(DitherError::PixelCountMismatch {
            expected: 4,
            actual: 5
        })
    ));
}

#[test]
fn zero_workers_or_zero_chunk_are_rejected() {
    let pixels = vec![0u8; 4];
    assert!(matches!(
        wavefront_dither(&pixels, 2, 2, &WavefrontConfig::new(0, 64)),
        Err(DitherError::InvalidConfig {
            threads: 0,
            chunk: 64
        })
    ));
    assert!(matches!(
        wavefront_dither(&pixels, 2, 2, &WavefrontConfig::new(4, 0)),
        Err(DitherError::InvalidConfig {
            threads: 4,
            chunk: 0
        })
    ));
}

#[test]
fn errors_are_displayable() {
    let err = sequential_dither(&[], 0, 0).unwrap_err();
    assert!(err.to_string().contains("0x0"));
}
