//! Pieces module - the static piece catalog
//!
//! Every (kind, rotation) maps to exactly 4 mino offsets. Offsets are normalised so
//! the bounding box starts at (0, 0): the piece position is the top-left corner of
//! that box, which keeps the rightmost legal anchor column at `WIDTH - 1 - max_dx`.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => get_i_shape(rotation),
        PieceKind::O => get_o_shape(rotation),
        PieceKind::T => get_t_shape(rotation),
        PieceKind::S => get_s_shape(rotation),
        PieceKind::Z => get_z_shape(rotation),
        PieceKind::J => get_j_shape(rotation),
        PieceKind::L => get_l_shape(rotation),
    }
}

fn get_i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(0, 0), (1, 0), (2, 0), (3, 0)],
        Rotation::East | Rotation::West => [(0, 0), (0, 1), (0, 2), (0, 3)],
    }
}

fn get_o_shape(_rotation: Rotation) -> PieceShape {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

fn get_t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(0, 0), (0, 1), (1, 1), (0, 2)],
        Rotation::South => [(0, 0), (1, 0), (2, 0), (1, 1)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn get_s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East | Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn get_z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East | Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn get_j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(0, 0), (1, 0), (0, 1), (0, 2)],
        Rotation::South => [(0, 0), (1, 0), (2, 0), (2, 1)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn get_l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(0, 0), (0, 1), (0, 2), (1, 2)],
        Rotation::South => [(0, 0), (1, 0), (2, 0), (0, 1)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// Largest rightward offset of any mino for this rotation
pub fn max_dx(kind: PieceKind, rotation: Rotation) -> i8 {
    get_shape(kind, rotation)
        .iter()
        .map(|&(dx, _)| dx)
        .max()
        .unwrap_or(0)
}

/// Largest downward offset of any mino for this rotation
pub fn max_dy(kind: PieceKind, rotation: Rotation) -> i8 {
    get_shape(kind, rotation)
        .iter()
        .map(|&(_, dy)| dy)
        .max()
        .unwrap_or(0)
}

/// Get initial shape for a new piece at spawn position
pub fn get_spawn_shape(kind: PieceKind) -> PieceShape {
    get_shape(kind, Rotation::North)
}
