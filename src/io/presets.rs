//! Built-in tile sets for the command-line driver
//!
//! Each tile carries a single display glyph as its payload. The sets only
//! exist so the binary can run without a tile catalog file format.

use crate::spatial::tiles::{
    Edges, Reflection, ReflectionSet, Rotation, RotationSet, TileDefinition,
};
use clap::ValueEnum;
use std::fmt;

/// Named tile set
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Pipe network: empty sides carry 0, pipe openings carry 1
    Pipes,
    /// Grass, water, and shoreline tiles with two-segment side labels
    Coast,
}

impl Preset {
    /// Tile definitions of this set
    pub fn definitions(self) -> Vec<TileDefinition<char>> {
        match self {
            Self::Pipes => pipes(),
            Self::Coast => coast(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipes => f.write_str("pipes"),
            Self::Coast => f.write_str("coast"),
        }
    }
}

fn pipes() -> Vec<TileDefinition<char>> {
    vec![
        TileDefinition::new("blank", Edges::new([0u32, 0, 0, 0]), ' '),
        TileDefinition::new("straight", Edges::new([1u32, 0, 1, 0]), '│')
            .with_rotations(RotationSet::NONE.with(Rotation::Deg90)),
        TileDefinition::new("corner", Edges::new([1u32, 1, 0, 0]), '└')
            .with_rotations(RotationSet::ALL),
        TileDefinition::new("tee", Edges::new([1u32, 1, 1, 0]), '├').with_rotations(RotationSet::ALL),
        TileDefinition::new("cross", Edges::new([1u32, 1, 1, 1]), '┼'),
        TileDefinition::new("end", Edges::new([1u32, 0, 0, 0]), '╵').with_rotations(RotationSet::ALL),
    ]
}

const GRASS: [u32; 2] = [0, 0];
const WATER: [u32; 2] = [2, 2];
const SHORE: [u32; 2] = [0, 2];

fn coast() -> Vec<TileDefinition<char>> {
    vec![
        TileDefinition::new("grass", Edges::new([GRASS; 4]), ','),
        TileDefinition::new("water", Edges::new([WATER; 4]), '~'),
        TileDefinition::new("shore", Edges::new([GRASS, SHORE, WATER, SHORE]), '=')
            .with_rotations(RotationSet::ALL)
            .with_reflections(ReflectionSet::NONE.with(Reflection::Y)),
    ]
}
