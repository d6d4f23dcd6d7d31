//! Piece module - tetromino masks and rotation
//!
//! A piece is its kind plus a 4x4 occupancy mask anchored at an (x, y)
//! board position. Rotation is a plain quarter-turn of the mask inside its
//! 4x4 bounding box with no kick table: the session rotates the mask in
//! place and reverts it wholesale if the result collides. This differs
//! from kick-based rotation systems on purpose; the O square, for example,
//! shifts within its box when turned.

use crate::types::{PieceKind, SPAWN_POSITION};

/// 4x4 occupancy mask, indexed `[y][x]` (row-major)
pub type PieceMask = [[bool; 4]; 4];

const fn from_bits(rows: [[u8; 4]; 4]) -> PieceMask {
    let mut mask = [[false; 4]; 4];
    let mut y = 0;
    while y < 4 {
        let mut x = 0;
        while x < 4 {
            mask[y][x] = rows[y][x] != 0;
            x += 1;
        }
        y += 1;
    }
    mask
}

const I_MASK: PieceMask = from_bits([
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const J_MASK: PieceMask = from_bits([
    [1, 0, 0, 0],
    [1, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const L_MASK: PieceMask = from_bits([
    [0, 0, 1, 0],
    [1, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const O_MASK: PieceMask = from_bits([
    [1, 1, 0, 0],
    [1, 1, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const S_MASK: PieceMask = from_bits([
    [0, 1, 1, 0],
    [1, 1, 0, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const T_MASK: PieceMask = from_bits([
    [0, 1, 0, 0],
    [1, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const Z_MASK: PieceMask = from_bits([
    [1, 1, 0, 0],
    [0, 1, 1, 0],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

/// The canonical (spawn-orientation) mask for a piece kind
pub const fn canonical_mask(kind: PieceKind) -> PieceMask {
    match kind {
        PieceKind::I => I_MASK,
        PieceKind::J => J_MASK,
        PieceKind::L => L_MASK,
        PieceKind::O => O_MASK,
        PieceKind::S => S_MASK,
        PieceKind::T => T_MASK,
        PieceKind::Z => Z_MASK,
    }
}

/// Quarter-turn of a mask about its 4x4 bounding box.
///
/// Cell (x, 3-y) of the result takes the value of cell (y, x) of the
/// input, so four applications are the identity.
pub fn rotated(mask: &PieceMask) -> PieceMask {
    let mut out = [[false; 4]; 4];
    for (y, row) in mask.iter().enumerate() {
        for (x, &filled) in row.iter().enumerate() {
            out[x][3 - y] = filled;
        }
    }
    out
}

/// The falling, player-controlled piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    /// Anchor column of the mask's left edge in board coordinates
    pub x: i8,
    /// Anchor row of the mask's top edge in board coordinates
    pub y: i8,
    /// Current occupancy mask; starts canonical, mutated by rotation
    pub mask: PieceMask,
}

impl Piece {
    /// Create a piece of the given kind at the spawn anchor with its
    /// canonical mask.
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            x,
            y,
            mask: canonical_mask(kind),
        }
    }

    /// Rotate the mask in place by a quarter turn.
    pub fn rotate(&mut self) {
        self.mask = rotated(&self.mask);
    }

    /// Absolute board cells the piece would occupy with its anchor shifted
    /// by (dx, dy).
    pub fn cells_at(&self, dx: i8, dy: i8) -> impl Iterator<Item = (i8, i8)> {
        let mask = self.mask;
        let px = self.x + dx;
        let py = self.y + dy;
        (0..4usize).flat_map(move |y| {
            (0..4usize).filter_map(move |x| mask[y][x].then_some((px + x as i8, py + y as i8)))
        })
    }

    /// Absolute board cells the piece currently occupies.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        self.cells_at(0, 0)
    }
}
