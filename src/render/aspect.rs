//! Image aspect-ratio snapping.
//!
//! Images render inside a fixed-ratio frame. Once an image's natural
//! dimensions are known, the ratio snaps to the nearest of eight presets;
//! until then a 16:9 default applies. The chosen preset is per-image derived
//! state with no cross-block effect.

/// The fixed presets, as width/height pairs, in tie-break order.
pub const PRESETS: [(u32, u32); 8] = [
    (1, 1),
    (4, 3),
    (3, 2),
    (16, 9),
    (21, 9),
    (3, 4),
    (2, 3),
    (9, 16),
];

/// Snap a natural width/height to the nearest preset.
///
/// Nearest means minimal `|preset − ratio|`; on a tie the earlier preset in
/// [`PRESETS`] wins. Degenerate dimensions fall back to 16:9.
pub fn snap(width: f64, height: f64) -> (u32, u32) {
    if !(width > 0.0) || !(height > 0.0) {
        return (16, 9);
    }
    let ratio = width / height;

    let mut best = PRESETS[0];
    let mut best_diff = f64::INFINITY;
    for preset in PRESETS {
        let diff = (preset.0 as f64 / preset.1 as f64 - ratio).abs();
        if diff < best_diff {
            best = preset;
            best_diff = diff;
        }
    }
    best
}

/// Per-image display ratio state.
///
/// Fresh instances use the 16:9 default; [`ImageAspect::observe`] replaces
/// it once the natural dimensions arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAspect {
    preset: (u32, u32),
}

impl ImageAspect {
    /// Create the pre-load state.
    pub fn new() -> Self {
        Self { preset: (16, 9) }
    }

    /// Record the image's natural dimensions, snapping to a preset.
    pub fn observe(&mut self, width: f64, height: f64) {
        self.preset = snap(width, height);
    }

    /// The active preset as a width/height pair.
    pub fn preset(&self) -> (u32, u32) {
        self.preset
    }

    /// CSS `aspect-ratio` value for the active preset.
    pub fn css(&self) -> String {
        format!("{} / {}", self.preset.0, self.preset.1)
    }
}

impl Default for ImageAspect {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_common_dimensions() {
        assert_eq!(snap(1920.0, 1080.0), (16, 9));
        assert_eq!(snap(1000.0, 1000.0), (1, 1));
        assert_eq!(snap(800.0, 600.0), (4, 3));
        assert_eq!(snap(1080.0, 1920.0), (9, 16));
        assert_eq!(snap(2560.0, 1097.0), (21, 9));
    }

    #[test]
    fn test_snap_tie_prefers_declaration_order() {
        // r = 7/8 = 0.875 sits exactly 0.125 from both 1:1 and 3:4, and all
        // three values are exact in f64, so this is a true tie. 1:1 is
        // declared first and wins.
        assert_eq!(snap(7.0, 8.0), (1, 1));
    }

    #[test]
    fn test_snap_degenerate_dimensions() {
        assert_eq!(snap(0.0, 100.0), (16, 9));
        assert_eq!(snap(100.0, 0.0), (16, 9));
        assert_eq!(snap(-4.0, 3.0), (16, 9));
        assert_eq!(snap(f64::NAN, 3.0), (16, 9));
    }

    #[test]
    fn test_default_before_load() {
        let aspect = ImageAspect::new();
        assert_eq!(aspect.preset(), (16, 9));
        assert_eq!(aspect.css(), "16 / 9");
    }

    #[test]
    fn test_observe_updates_preset() {
        let mut aspect = ImageAspect::new();
        aspect.observe(600.0, 900.0);
        assert_eq!(aspect.preset(), (2, 3));
        aspect.observe(500.0, 500.0);
        assert_eq!(aspect.preset(), (1, 1));
    }
}
