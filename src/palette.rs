//! Fixed five-colour palette. Exactly one entry is active at any time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PaletteColor {
    #[default]
    Black,
    Red,
    Blue,
    Green,
    Yellow,
}

impl PaletteColor {
    /// Palette order, as shown left to right in the swatch bar.
    pub const ALL: [PaletteColor; 5] = [
        PaletteColor::Black,
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Yellow,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            PaletteColor::Black => "#000000",
            PaletteColor::Red => "#FE3E36",
            PaletteColor::Blue => "#2E5BFF",
            PaletteColor::Green => "#2ED573",
            PaletteColor::Yellow => "#FFD700",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Case-insensitive lookup by `#RRGGBB`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.hex().eq_ignore_ascii_case(hex.trim()))
    }
}

/// Active-colour holder. Selecting is a pure state transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    active: PaletteColor,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> PaletteColor {
        self.active
    }

    pub fn select(&mut self, color: PaletteColor) {
        self.active = color;
    }

    pub fn is_active(&self, color: PaletteColor) -> bool {
        self.active == color
    }

    pub fn colors(&self) -> &'static [PaletteColor] {
        &PaletteColor::ALL
    }
}
