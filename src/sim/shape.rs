//! Shape kinds, the colour palette and good/bad classification

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The eight primitive shapes that can be spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Box,
    Sphere,
    Pyramid,
    Torus,
    Capsule,
    Cylinder,
    Cone,
    Tube,
}

/// Primitive dimensions for each shape kind (scene units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Box { width: f32, height: f32, length: f32, chamfer_radius: f32 },
    Sphere { radius: f32 },
    Pyramid { width: f32, height: f32, length: f32 },
    Torus { ring_radius: f32, pipe_radius: f32 },
    Capsule { cap_radius: f32, height: f32 },
    Cylinder { radius: f32, height: f32 },
    Cone { top_radius: f32, bottom_radius: f32, height: f32 },
    Tube { inner_radius: f32, outer_radius: f32, height: f32 },
}

impl Geometry {
    /// Radius of a sphere enclosing the primitive, centred on its origin
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Geometry::Box { width, height, length, .. }
            | Geometry::Pyramid { width, height, length } => {
                0.5 * (width * width + height * height + length * length).sqrt()
            }
            Geometry::Sphere { radius } => radius,
            Geometry::Torus { ring_radius, pipe_radius } => ring_radius + pipe_radius,
            Geometry::Capsule { cap_radius, height } => cap_radius.max(height / 2.0),
            Geometry::Cylinder { radius, height } => radius.hypot(height / 2.0),
            Geometry::Cone { top_radius, bottom_radius, height } => {
                top_radius.max(bottom_radius).hypot(height / 2.0)
            }
            Geometry::Tube { outer_radius, height, .. } => outer_radius.hypot(height / 2.0),
        }
    }
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Box,
        ShapeKind::Sphere,
        ShapeKind::Pyramid,
        ShapeKind::Torus,
        ShapeKind::Capsule,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Tube,
    ];

    /// Pick a shape uniformly at random
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn geometry(&self) -> Geometry {
        match self {
            ShapeKind::Box => Geometry::Box {
                width: 1.0,
                height: 1.0,
                length: 1.0,
                chamfer_radius: 0.0,
            },
            ShapeKind::Sphere => Geometry::Sphere { radius: 1.0 },
            ShapeKind::Pyramid => Geometry::Pyramid {
                width: 1.0,
                height: 1.0,
                length: 1.0,
            },
            ShapeKind::Torus => Geometry::Torus {
                ring_radius: 1.0,
                pipe_radius: 0.25,
            },
            ShapeKind::Capsule => Geometry::Capsule {
                cap_radius: 0.5,
                height: 2.0,
            },
            ShapeKind::Cylinder => Geometry::Cylinder {
                radius: 0.25,
                height: 1.0,
            },
            ShapeKind::Cone => Geometry::Cone {
                top_radius: 0.0,
                bottom_radius: 1.0,
                height: 1.0,
            },
            ShapeKind::Tube => Geometry::Tube {
                inner_radius: 0.25,
                outer_radius: 0.5,
                height: 1.0,
            },
        }
    }
}

/// The fixed 18-colour spawn palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeColor {
    Black,
    White,
    Red,
    Lime,
    Blue,
    Yellow,
    Cyan,
    Silver,
    Gray,
    Maroon,
    Olive,
    Brown,
    Green,
    LightGray,
    Magenta,
    Orange,
    Purple,
    Teal,
}

impl ShapeColor {
    pub const ALL: [ShapeColor; 18] = [
        ShapeColor::Black,
        ShapeColor::White,
        ShapeColor::Red,
        ShapeColor::Lime,
        ShapeColor::Blue,
        ShapeColor::Yellow,
        ShapeColor::Cyan,
        ShapeColor::Silver,
        ShapeColor::Gray,
        ShapeColor::Maroon,
        ShapeColor::Olive,
        ShapeColor::Brown,
        ShapeColor::Green,
        ShapeColor::LightGray,
        ShapeColor::Magenta,
        ShapeColor::Orange,
        ShapeColor::Purple,
        ShapeColor::Teal,
    ];

    /// Sentinel colour marking a shape the player must not touch
    pub const BAD: ShapeColor = ShapeColor::Black;

    /// Pick a colour uniformly at random
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Linear RGB, 0..1
    pub fn rgb(&self) -> [f32; 3] {
        match self {
            ShapeColor::Black => [0.0, 0.0, 0.0],
            ShapeColor::White => [1.0, 1.0, 1.0],
            ShapeColor::Red => [1.0, 0.0, 0.0],
            ShapeColor::Lime => [0.0, 1.0, 0.0],
            ShapeColor::Blue => [0.0, 0.0, 1.0],
            ShapeColor::Yellow => [1.0, 1.0, 0.0],
            ShapeColor::Cyan => [0.0, 1.0, 1.0],
            ShapeColor::Silver => [192.0 / 255.0, 192.0 / 255.0, 192.0 / 255.0],
            ShapeColor::Gray => [0.5, 0.5, 0.5],
            ShapeColor::Maroon => [0.5, 0.0, 0.0],
            ShapeColor::Olive => [0.5, 0.5, 0.0],
            ShapeColor::Brown => [0.6, 0.4, 0.2],
            ShapeColor::Green => [0.0, 1.0, 0.0],
            ShapeColor::LightGray => [2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0],
            ShapeColor::Magenta => [1.0, 0.0, 1.0],
            ShapeColor::Orange => [1.0, 0.5, 0.0],
            ShapeColor::Purple => [0.5, 0.0, 0.5],
            ShapeColor::Teal => [0.0, 0.5, 0.5],
        }
    }
}

/// Whether touching a shape scores or costs a life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Good,
    Bad,
}

impl Classification {
    /// Bad iff the colour is the sentinel black
    pub fn of(color: ShapeColor) -> Self {
        if color == ShapeColor::BAD {
            Classification::Bad
        } else {
            Classification::Good
        }
    }
}
