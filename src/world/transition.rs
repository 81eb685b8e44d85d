// transition.rs - Exterior cross-fade
//
// Zooming in fades the exterior shell so the interior cutaway shows through.
// A pure function of camera distance, recomputed every frame.

/// Material state applied to every exterior mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExteriorFade {
    pub opacity: f32,
    /// Half-transparent shells must not occlude the interior
    pub depth_write: bool,
    pub visible: bool,
}

impl ExteriorFade {
    pub const OPAQUE: Self = Self { opacity: 1.0, depth_write: true, visible: true };
}

/// Opacity at camera distance `d` (0 at or below `fade_end`, 1 at or above `fade_start`)
#[inline]
pub fn exterior_opacity(d: f32, fade_start: f32, fade_end: f32) -> f32 {
    ((d - fade_end) / (fade_start - fade_end)).clamp(0.0, 1.0)
}

/// Full material state at camera distance `d`
pub fn exterior_fade(d: f32, fade_start: f32, fade_end: f32) -> ExteriorFade {
    let opacity = exterior_opacity(d, fade_start, fade_end);
    ExteriorFade {
        opacity,
        depth_write: opacity > 0.5,
        visible: opacity > 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_half_opaque() {
        assert!((exterior_opacity(6.5, 8.0, 5.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn clamps_outside_thresholds() {
        assert_eq!(exterior_opacity(3.0, 8.0, 5.0), 0.0);
        assert_eq!(exterior_opacity(5.0, 8.0, 5.0), 0.0);
        assert_eq!(exterior_opacity(8.0, 8.0, 5.0), 1.0);
        assert_eq!(exterior_opacity(10.0, 8.0, 5.0), 1.0);
    }

    #[test]
    fn monotone_between_thresholds() {
        let mut last = 0.0;
        for i in 0..=300 {
            let d = 4.0 + i as f32 * 0.02;
            let o = exterior_opacity(d, 8.0, 5.0);
            assert!(o >= last, "opacity dropped at d={}", d);
            last = o;
        }
    }

    #[test]
    fn fully_faded_shell_is_hidden_and_skips_depth() {
        let fade = exterior_fade(4.0, 8.0, 5.0);
        assert!(!fade.visible);
        assert!(!fade.depth_write);

        let fade = exterior_fade(6.0, 8.0, 5.0);
        assert!(fade.visible);
        assert!(!fade.depth_write);

        assert_eq!(exterior_fade(20.0, 8.0, 5.0), ExteriorFade::OPAQUE);
    }
}
