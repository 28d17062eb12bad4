//! Command-line overrides for the court constants.

use clap::Parser;

use crate::court_lib::config::{
    CourtConfig, DEFAULT_COURT_LENGTH, DEFAULT_COURT_WIDTH, DEFAULT_FLOOR_THICKNESS,
    DEFAULT_MARKING_THICKNESS, DEFAULT_RING_SEGMENTS, DEFAULT_THREE_POINT_RADIUS_FACTOR,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "court_scene")]
#[command(about = "Procedural basketball court viewer", long_about = None)]
pub struct Args {
    /// Court width, sideline to sideline
    #[arg(long, value_name = "UNITS", default_value_t = DEFAULT_COURT_WIDTH)]
    pub width: f32,

    /// Court length, baseline to baseline
    #[arg(long, value_name = "UNITS", default_value_t = DEFAULT_COURT_LENGTH)]
    pub length: f32,

    /// Floor slab thickness
    #[arg(long, value_name = "UNITS", default_value_t = DEFAULT_FLOOR_THICKNESS)]
    pub floor_thickness: f32,

    /// Width of painted lines and arcs
    #[arg(long, value_name = "UNITS", default_value_t = DEFAULT_MARKING_THICKNESS)]
    pub marking_thickness: f32,

    /// Three-point radius as a fraction of the court width
    #[arg(long, value_name = "FACTOR", default_value_t = DEFAULT_THREE_POINT_RADIUS_FACTOR)]
    pub three_point_factor: f32,

    /// Angular segments for the center circle and arcs
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_RING_SEGMENTS)]
    pub segments: u32,

    /// Print the generated shapes and exit without opening a window
    #[arg(long)]
    pub print_scene: bool,
}

impl Args {
    pub fn court_config(&self) -> CourtConfig {
        CourtConfig {
            width: self.width,
            length: self.length,
            floor_thickness: self.floor_thickness,
            marking_thickness: self.marking_thickness,
            three_point_radius_factor: self.three_point_factor,
            ring_segments: self.segments,
        }
    }
}
