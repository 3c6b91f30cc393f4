//! Musical scales keyed by weather condition
//!
//! Each meteorological condition family plays in its own scale:
//! thunderstorms get the diminished tetrad, rain falls in minor
//! pentatonic, fog hangs in whole tones, a clear sky is plain major.

/// Musical scale definition (pitch-class offsets from the root)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    name: &'static str,
    intervals: &'static [u8],
}

impl Scale {
    /// Diminished tetrad
    pub fn diminished() -> Self {
        Self {
            name: "diminished",
            intervals: &[0, 3, 6, 9],
        }
    }

    /// Minor pentatonic scale (root, m3, P4, P5, m7)
    pub fn minor_pentatonic() -> Self {
        Self {
            name: "minor_pentatonic",
            intervals: &[0, 3, 5, 7, 10],
        }
    }

    /// Whole tone scale
    pub fn whole_tone() -> Self {
        Self {
            name: "whole_tone",
            intervals: &[0, 2, 4, 6, 8, 10],
        }
    }

    /// Major scale
    pub fn major() -> Self {
        Self {
            name: "major",
            intervals: &[0, 2, 4, 5, 7, 9, 11],
        }
    }

    /// Natural minor scale
    pub fn natural_minor() -> Self {
        Self {
            name: "natural_minor",
            intervals: &[0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// Chromatic fragment for extreme conditions
    pub fn chromatic_fragment() -> Self {
        Self {
            name: "chromatic_fragment",
            intervals: &[0, 1, 3, 7, 8, 11],
        }
    }

    /// Select the scale for an OpenWeatherMap condition code.
    ///
    /// The full code is matched first, so 800 (clear sky) resolves to
    /// major before the generic 8xx cloud family gets a say. Codes
    /// without an exact entry fall back to their leading digit, and
    /// anything still unmatched lands on major.
    pub fn for_condition_code(code: u32) -> Self {
        let key = code.to_string();
        Self::lookup(&key)
            .or_else(|| Self::lookup(&key[..1]))
            .unwrap_or_else(Self::major)
    }

    fn lookup(key: &str) -> Option<Self> {
        match key {
            // Thunderstorm (2xx)
            "2" => Some(Self::diminished()),
            // Drizzle (3xx) and rain (5xx)
            "3" | "5" => Some(Self::minor_pentatonic()),
            // Atmosphere: mist, fog, haze (7xx)
            "7" => Some(Self::whole_tone()),
            // Clear sky (800 exactly)
            "800" => Some(Self::major()),
            // Clouds (8xx other than 800)
            "8" => Some(Self::natural_minor()),
            // Extreme / additional (9xx)
            "9" => Some(Self::chromatic_fragment()),
            _ => None,
        }
    }

    /// Get the name of this scale
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the pitch-class offsets
    pub fn intervals(&self) -> &'static [u8] {
        self.intervals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_sky_is_major() {
        let scale = Scale::for_condition_code(800);
        assert_eq!(scale, Scale::major());
        assert_eq!(scale.intervals(), &[0, 2, 4, 5, 7, 9, 11]);
    }

    #[test]
    fn test_clouds_fall_back_to_natural_minor() {
        // 801..804 miss the exact table and resolve via the "8" family
        for code in [801, 802, 803, 804] {
            assert_eq!(Scale::for_condition_code(code), Scale::natural_minor());
        }
    }

    #[test]
    fn test_thunderstorm_via_digit_fallback() {
        assert_eq!(Scale::for_condition_code(201), Scale::diminished());
        assert_eq!(Scale::for_condition_code(232), Scale::diminished());
    }

    #[test]
    fn test_drizzle_and_rain_share_minor_pentatonic() {
        assert_eq!(Scale::for_condition_code(300), Scale::minor_pentatonic());
        assert_eq!(Scale::for_condition_code(503), Scale::minor_pentatonic());
    }

    #[test]
    fn test_atmosphere_is_whole_tone() {
        assert_eq!(Scale::for_condition_code(741), Scale::whole_tone());
    }

    #[test]
    fn test_extreme_code_uses_chromatic_fragment() {
        let scale = Scale::for_condition_code(999);
        assert_eq!(scale, Scale::chromatic_fragment());
        assert_eq!(scale.intervals(), &[0, 1, 3, 7, 8, 11]);
    }

    #[test]
    fn test_unknown_family_defaults_to_major() {
        // Digit "1" is not in the table at all
        assert_eq!(Scale::for_condition_code(111), Scale::major());
        assert_eq!(Scale::for_condition_code(42), Scale::major());
    }

    #[test]
    fn test_single_digit_codes_match_exactly() {
        assert_eq!(Scale::for_condition_code(2), Scale::diminished());
        assert_eq!(Scale::for_condition_code(9), Scale::chromatic_fragment());
    }

    #[test]
    fn test_every_scale_starts_at_zero_and_stays_in_octave() {
        let scales = [
            Scale::diminished(),
            Scale::minor_pentatonic(),
            Scale::whole_tone(),
            Scale::major(),
            Scale::natural_minor(),
            Scale::chromatic_fragment(),
        ];
        for scale in scales {
            let intervals = scale.intervals();
            assert_eq!(intervals[0], 0, "{} must start at the root", scale.name());
            assert!(intervals.len() >= 4 && intervals.len() <= 7);
            assert!(intervals.iter().all(|&i| i < 12));
            assert!(intervals.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
