// src/court_lib/config.rs

use super::error::{ConfigResult, ConfigurationError};
use super::generator::CENTER_CIRCLE_RADIUS;

pub const DEFAULT_COURT_WIDTH: f32 = 15.0;
pub const DEFAULT_COURT_LENGTH: f32 = 28.0;
pub const DEFAULT_FLOOR_THICKNESS: f32 = 0.2;
pub const DEFAULT_MARKING_THICKNESS: f32 = 0.1;
pub const DEFAULT_THREE_POINT_RADIUS_FACTOR: f32 = 0.4;
pub const DEFAULT_RING_SEGMENTS: u32 = 64;

/// Semantic court parameters. Every generated shape derives from these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CourtConfig {
    /// Court extent along Z (sideline to sideline).
    pub width: f32,
    /// Court extent along X (baseline to baseline).
    pub length: f32,
    pub floor_thickness: f32,
    /// Width of every painted line, circle and arc.
    pub marking_thickness: f32,
    /// Three-point arc radius as a fraction of `width`.
    pub three_point_radius_factor: f32,
    /// Angular steps used for the center circle and both arcs.
    pub ring_segments: u32,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_COURT_WIDTH,
            length: DEFAULT_COURT_LENGTH,
            floor_thickness: DEFAULT_FLOOR_THICKNESS,
            marking_thickness: DEFAULT_MARKING_THICKNESS,
            three_point_radius_factor: DEFAULT_THREE_POINT_RADIUS_FACTOR,
            ring_segments: DEFAULT_RING_SEGMENTS,
        }
    }
}

impl CourtConfig {
    /// Checks that the config produces on-court, non-degenerate geometry:
    /// every ring keeps a non-negative inner radius and each arc's outer
    /// edge stays short of midcourt.
    ///
    /// Zero marking thickness is accepted: it yields zero-width markings,
    /// which are invisible but well formed.
    pub fn validate(&self) -> ConfigResult<()> {
        let fields = [
            ("width", self.width),
            ("length", self.length),
            ("floor_thickness", self.floor_thickness),
            ("marking_thickness", self.marking_thickness),
            ("three_point_radius_factor", self.three_point_radius_factor),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigurationError::NonFinite { field, value });
            }
        }

        for (field, value) in [
            ("width", self.width),
            ("length", self.length),
            ("floor_thickness", self.floor_thickness),
        ] {
            if value <= 0.0 {
                return Err(ConfigurationError::NonPositive { field, value });
            }
        }

        if self.marking_thickness < 0.0 {
            return Err(ConfigurationError::NegativeMarkingThickness(self.marking_thickness));
        }

        if self.three_point_radius_factor <= 0.0 || self.three_point_radius_factor >= 1.0 {
            return Err(ConfigurationError::RadiusFactorOutOfRange(
                self.three_point_radius_factor,
            ));
        }

        let half_marking = self.marking_thickness / 2.0;
        let arc_radius = self.width * self.three_point_radius_factor;
        let tightest = CENTER_CIRCLE_RADIUS.min(arc_radius);
        if half_marking >= tightest {
            return Err(ConfigurationError::MarkingTooThick {
                thickness: self.marking_thickness,
                radius: tightest,
            });
        }

        let outer_edge = arc_radius + half_marking;
        let half_length = self.length / 2.0;
        if outer_edge >= half_length {
            return Err(ConfigurationError::ArcExceedsHalfCourt { radius: outer_edge, half_length });
        }

        if self.ring_segments < 3 {
            return Err(ConfigurationError::TooFewSegments(self.ring_segments));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CourtConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let config = CourtConfig { length: 0.0, ..CourtConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::NonPositive { field: "length", value: 0.0 })
        );

        let config = CourtConfig { floor_thickness: -0.2, ..CourtConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::NonPositive { field: "floor_thickness", .. })
        ));
    }

    #[test]
    fn rejects_nan() {
        let config = CourtConfig { width: f32::NAN, ..CourtConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::NonFinite { field: "width", .. })
        ));
    }

    #[test]
    fn zero_marking_thickness_is_allowed() {
        let config = CourtConfig { marking_thickness: 0.0, ..CourtConfig::default() };
        assert_eq!(config.validate(), Ok(()));

        let config = CourtConfig { marking_thickness: -0.1, ..CourtConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::NegativeMarkingThickness(-0.1))
        );
    }

    #[test]
    fn rejects_factor_outside_unit_interval() {
        for factor in [0.0, 1.0, 1.5, -0.2] {
            let config = CourtConfig { three_point_radius_factor: factor, ..CourtConfig::default() };
            assert_eq!(
                config.validate(),
                Err(ConfigurationError::RadiusFactorOutOfRange(factor))
            );
        }
    }

    #[test]
    fn rejects_arc_past_midcourt() {
        // 15 * 0.9 = 13.5 > 20 / 2
        let config = CourtConfig {
            length: 20.0,
            three_point_radius_factor: 0.9,
            ..CourtConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::ArcExceedsHalfCourt { .. })
        ));
    }

    #[test]
    fn rejects_marking_wider_than_center_circle() {
        let config = CourtConfig { marking_thickness: 4.0, ..CourtConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::MarkingTooThick { thickness: 4.0, radius: CENTER_CIRCLE_RADIUS })
        );

        // Exactly twice the radius collapses the inner edge onto the center.
        let config = CourtConfig {
            marking_thickness: 2.0 * CENTER_CIRCLE_RADIUS,
            ..CourtConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigurationError::MarkingTooThick { .. })));
    }

    #[test]
    fn rejects_marking_wider_than_small_arc() {
        // Arc radius 15 * 0.05 = 0.75 is tighter than the center circle.
        let config = CourtConfig {
            three_point_radius_factor: 0.05,
            marking_thickness: 2.0,
            ..CourtConfig::default()
        };
        match config.validate() {
            Err(ConfigurationError::MarkingTooThick { thickness, radius }) => {
                assert_eq!(thickness, 2.0);
                assert_abs_diff_eq!(radius, 0.75, epsilon = 1e-6);
            }
            other => panic!("expected MarkingTooThick, got {:?}", other),
        }
    }

    #[test]
    fn rejects_arc_whose_outer_edge_crosses_midcourt() {
        // Center radius 20 * 0.5 = 10 clears 20.2 / 2, the outer edge 10.25 does not.
        let config = CourtConfig {
            width: 20.0,
            length: 20.2,
            three_point_radius_factor: 0.5,
            marking_thickness: 0.5,
            ..CourtConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::ArcExceedsHalfCourt { .. })
        ));

        let thin = CourtConfig { marking_thickness: 0.0, ..config };
        assert_eq!(thin.validate(), Ok(()));
    }

    #[test]
    fn rejects_coarse_segmentation() {
        let config = CourtConfig { ring_segments: 2, ..CourtConfig::default() };
        assert_eq!(config.validate(), Err(ConfigurationError::TooFewSegments(2)));
    }
}
