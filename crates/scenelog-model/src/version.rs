//! Pure version arithmetic for build and scene versions.
//!
//! Two independent rules live here:
//!
//! - **Build patch stepping** ([`next_build_patch`]): the third component
//!   of a `MAJOR.MINOR.PATCH` string increments by one on every save,
//!   preserving the zero-padded width of the original patch substring.
//!   Major and minor never change; there is no carry.
//! - **Scene version stepping** ([`next_scene_version`]): scene versions
//!   advance in steps of 0.1 and deliberately skip whole numbers, so the
//!   sequence runs `... 1.8, 1.9, 2.1, 2.2 ...`.
//!
//! Scene versions carry exactly one fractional digit. To keep the
//! stepping exact despite `f32` storage, the arithmetic is done in
//! integer tenths and converted back at the boundary.

// ---------------------------------------------------------------------------
// Build version
// ---------------------------------------------------------------------------

/// Returns `true` iff `version` splits into exactly 3 dot-separated
/// substrings and every substring parses as an integer.
pub fn is_valid_build_version(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3 && parts.iter().all(|part| part.parse::<i64>().is_ok())
}

/// Increment the patch component of a `MAJOR.MINOR.PATCH` version string.
///
/// The patch is re-rendered with the zero-padded width of the ORIGINAL
/// patch substring: `"1.0.001"` becomes `"1.0.002"`, `"1.0.009"` becomes
/// `"1.0.010"`, and `"1.0.9"` becomes `"1.0.10"` (the value outgrew the
/// width, so no padding applies).
///
/// A string without exactly 3 numeric dot-separated components is
/// returned unchanged; malformed input is a no-op, not an error.
pub fn next_build_patch(version: &str) -> String {
    if !is_valid_build_version(version) {
        return version.to_owned();
    }

    let parts: Vec<&str> = version.split('.').collect();
    let patch: i64 = match parts[2].parse() {
        Ok(value) => value,
        Err(_) => return version.to_owned(),
    };

    let incremented = (patch + 1).to_string();
    let padded = if parts[2].len() > incremented.len() {
        format!("{:0>width$}", incremented, width = parts[2].len())
    } else {
        incremented
    };

    format!("{}.{}.{}", parts[0], parts[1], padded)
}

// ---------------------------------------------------------------------------
// Scene version
// ---------------------------------------------------------------------------

/// Advance a scene version by 0.1, skipping whole numbers.
///
/// If the plain increment would land on a whole number (e.g. `1.9` +
/// `0.1` = `2.0`), the result jumps past it to `whole + 0.1` instead, so
/// `next_scene_version(1.9)` is `2.1` and `next_scene_version(1.2)` is
/// `1.3`. The result always renders to exactly one fractional digit.
pub fn next_scene_version(current: f32) -> f32 {
    let mut tenths = to_tenths(current) + 1;
    if tenths % 10 == 0 {
        tenths += 1;
    }
    tenths as f32 / 10.0
}

/// Truncate a value to one fractional digit (floor, not round-to-nearest):
/// `1.29` becomes `1.2`.
///
/// A small epsilon is added before flooring so a value that already sits
/// on a tenth is not floored down when its `f32` representation lands a
/// hair below it (`1.9f32 * 10.0` is `18.999...`).
pub fn truncate_tenths(value: f32) -> f32 {
    (value * 10.0 + 1e-4).floor() / 10.0
}

/// Render a scene version with exactly one fractional digit, the format
/// used for changelog labels and display text.
pub fn format_tenths(value: f32) -> String {
    format!("{value:.1}")
}

/// The value in integer tenths. Rounds to absorb `f32` representation
/// error in values that already carry one fractional digit.
fn to_tenths(value: f32) -> i64 {
    (value * 10.0).round() as i64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- 1. Build version validation ----------------------------------------

    #[test]
    fn valid_build_versions() {
        assert!(is_valid_build_version("1.0.001"));
        assert!(is_valid_build_version("0.0.0"));
        assert!(is_valid_build_version("12.34.56"));
    }

    #[test]
    fn invalid_build_versions() {
        assert!(!is_valid_build_version("1.0"));
        assert!(!is_valid_build_version("1.0.0.0"));
        assert!(!is_valid_build_version("1.0.a"));
        assert!(!is_valid_build_version("a.b.c"));
        assert!(!is_valid_build_version(""));
        assert!(!is_valid_build_version("1..0"));
    }

    // -- 2. Patch increment -------------------------------------------------

    #[test]
    fn patch_increments_with_padding_preserved() {
        assert_eq!(next_build_patch("1.0.001"), "1.0.002");
        assert_eq!(next_build_patch("1.0.009"), "1.0.010");
        assert_eq!(next_build_patch("2.5.099"), "2.5.100");
    }

    #[test]
    fn patch_width_is_original_string_width() {
        // Unpadded input stays unpadded even when the value grows digits.
        assert_eq!(next_build_patch("1.0.9"), "1.0.10");
        assert_eq!(next_build_patch("1.0.99"), "1.0.100");
    }

    #[test]
    fn patch_increment_leaves_major_minor_untouched() {
        assert_eq!(next_build_patch("3.7.999"), "3.7.1000");
    }

    #[test]
    fn malformed_version_is_identity() {
        assert_eq!(next_build_patch("1.0"), "1.0");
        assert_eq!(next_build_patch("1.0.a"), "1.0.a");
        assert_eq!(next_build_patch("not a version"), "not a version");
        assert_eq!(next_build_patch(""), "");
    }

    #[test]
    fn double_increment_advances_patch_twice() {
        let once = next_build_patch("1.2.007");
        let twice = next_build_patch(&once);
        assert_eq!(twice, "1.2.009");
    }

    // -- 3. Scene version stepping ------------------------------------------

    #[test]
    fn scene_version_plain_step() {
        assert_eq!(next_scene_version(1.2), 1.3);
        assert_eq!(next_scene_version(1.0), 1.1);
        assert_eq!(next_scene_version(0.1), 0.2);
    }

    #[test]
    fn scene_version_skips_whole_numbers() {
        assert_eq!(next_scene_version(1.9), 2.1);
        assert_eq!(next_scene_version(2.9), 3.1);
        assert_eq!(next_scene_version(0.9), 1.1);
    }

    #[test]
    fn scene_version_formats_to_one_digit() {
        assert_eq!(format_tenths(next_scene_version(1.9)), "2.1");
        assert_eq!(format_tenths(next_scene_version(1.2)), "1.3");
        assert_eq!(format_tenths(1.0), "1.0");
    }

    // -- 4. Truncation ------------------------------------------------------

    #[test]
    fn truncation_drops_finer_precision() {
        assert_eq!(truncate_tenths(1.29), 1.2);
        assert_eq!(truncate_tenths(2.55), 2.5);
        assert_eq!(truncate_tenths(3.0), 3.0);
    }

    #[test]
    fn truncation_is_floor_not_round() {
        // 1.99 truncates down to 1.9, never up to 2.0.
        assert_eq!(truncate_tenths(1.99), 1.9);
    }

    #[test]
    fn truncation_keeps_values_already_on_a_tenth() {
        // 1.9f32 sits just below 1.9; truncation must not drop it to 1.8.
        assert_eq!(truncate_tenths(1.9), 1.9);
        assert_eq!(truncate_tenths(1.3), 1.3);
        assert_eq!(truncate_tenths(0.7), 0.7);
    }
}
