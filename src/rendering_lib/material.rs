// src/rendering_lib/material.rs

use crate::court_lib::MaterialKind;

/// How a `MaterialKind` is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialStyle {
    pub srgb_hex: u32,
    pub lit: bool,
    pub shininess: f32,
}

pub const FLOOR_STYLE: MaterialStyle = MaterialStyle {
    srgb_hex: 0xc68642, // Brown wood
    lit: true,
    shininess: 50.0,
};

pub const MARKING_STYLE: MaterialStyle = MaterialStyle {
    srgb_hex: 0xdddddd, // Painted white, flat shaded
    lit: false,
    shininess: 0.0,
};

pub fn style_for(kind: MaterialKind) -> MaterialStyle {
    match kind {
        MaterialKind::Floor => FLOOR_STYLE,
        MaterialKind::Marking => MARKING_STYLE,
    }
}

fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl MaterialStyle {
    /// Linear RGBA, since the surface format is sRGB.
    pub fn linear_color(&self) -> [f32; 4] {
        let r = ((self.srgb_hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.srgb_hex >> 8) & 0xff) as f32 / 255.0;
        let b = (self.srgb_hex & 0xff) as f32 / 255.0;
        [
            srgb_channel_to_linear(r),
            srgb_channel_to_linear(g),
            srgb_channel_to_linear(b),
            1.0,
        ]
    }

    pub fn vertex_material(&self) -> [f32; 2] {
        [if self.lit { 1.0 } else { 0.0 }, self.shininess]
    }
}
