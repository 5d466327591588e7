//! Tile definitions and the oriented variant catalog
//!
//! A `TileDefinition` lists the connection label of each side plus the
//! rotations and reflections the tile may appear in. `TileCatalog::build`
//! expands every definition into immutable `TileVariant`s, one per supported
//! transform, each derived directly from the base labels. Structurally
//! identical variants are kept as separate entries, so symmetric tiles are
//! drawn proportionally more often.

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::direction::Direction;
use std::fmt;
use std::sync::Arc;

/// Connection code sequence for one side of a tile
///
/// Two sides connect only when their labels are exactly equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeLabel(Box<[u32]>);

impl EdgeLabel {
    /// Build a label from its connection codes
    pub fn new(codes: impl Into<Box<[u32]>>) -> Self {
        Self(codes.into())
    }

    /// Connection codes in side order
    pub fn codes(&self) -> &[u32] {
        &self.0
    }
}

impl From<u32> for EdgeLabel {
    fn from(code: u32) -> Self {
        Self(Box::new([code]))
    }
}

impl<const N: usize> From<[u32; N]> for EdgeLabel {
    fn from(codes: [u32; N]) -> Self {
        Self(Box::new(codes))
    }
}

impl From<Vec<u32>> for EdgeLabel {
    fn from(codes: Vec<u32>) -> Self {
        Self(codes.into_boxed_slice())
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut codes = self.0.iter();
        if let Some(first) = codes.next() {
            write!(f, "{first}")?;
        }
        for code in codes {
            write!(f, "-{code}")?;
        }
        Ok(())
    }
}

/// The four side labels of a tile
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edges {
    up: EdgeLabel,
    right: EdgeLabel,
    down: EdgeLabel,
    left: EdgeLabel,
}

impl Edges {
    /// Build from labels ordered `[Up, Right, Down, Left]`
    pub fn new<L: Into<EdgeLabel>>(labels: [L; 4]) -> Self {
        let [up, right, down, left] = labels;
        Self {
            up: up.into(),
            right: right.into(),
            down: down.into(),
            left: left.into(),
        }
    }

    /// Label on the given side
    pub const fn get(&self, direction: Direction) -> &EdgeLabel {
        match direction {
            Direction::Up => &self.up,
            Direction::Right => &self.right,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
        }
    }

    /// Labels ordered `[Up, Right, Down, Left]`
    pub const fn labels(&self) -> [&EdgeLabel; 4] {
        [&self.up, &self.right, &self.down, &self.left]
    }

    /// Labels after applying a transform to the tile
    #[must_use]
    pub fn transformed(&self, transform: Transform) -> Self {
        let pick = |side: Direction| self.get(transform.source_side(side)).clone();
        Self {
            up: pick(Direction::Up),
            right: pick(Direction::Right),
            down: pick(Direction::Down),
            left: pick(Direction::Left),
        }
    }
}

/// Clockwise quarter-turn rotation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// One quarter turn
    Deg90,
    /// Half turn
    Deg180,
    /// Three quarter turns
    Deg270,
}

impl Rotation {
    /// All rotations in ascending angle order
    pub const ALL: [Self; 3] = [Self::Deg90, Self::Deg180, Self::Deg270];

    /// Number of clockwise quarter turns
    pub const fn steps(self) -> usize {
        match self {
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Rotation angle in degrees, for renderers
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    const fn bit(self) -> u8 {
        1 << (self.steps() - 1)
    }
}

/// Mirror transform across one of the tile's symmetry axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reflection {
    /// Swaps the up and down sides
    X,
    /// Swaps the right and left sides
    Y,
    /// Swaps up with right and down with left
    D1,
    /// Swaps up with left and right with down
    D2,
}

impl Reflection {
    /// All reflections in catalog emission order
    pub const ALL: [Self; 4] = [Self::X, Self::Y, Self::D1, Self::D2];

    /// Side whose label lands on `side` after reflecting
    ///
    /// Every reflection is its own inverse.
    pub const fn mirror(self, side: Direction) -> Direction {
        match (self, side) {
            (Self::X, Direction::Up | Direction::Down)
            | (Self::Y, Direction::Right | Direction::Left) => side.opposite(),
            (Self::D1, Direction::Up) | (Self::D2, Direction::Down) => Direction::Right,
            (Self::D1, Direction::Right) | (Self::D2, Direction::Left) => Direction::Up,
            (Self::D1, Direction::Down) | (Self::D2, Direction::Up) => Direction::Left,
            (Self::D1, Direction::Left) | (Self::D2, Direction::Right) => Direction::Down,
            (Self::X | Self::Y, _) => side,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::X => 1,
            Self::Y => 2,
            Self::D1 => 4,
            Self::D2 => 8,
        }
    }
}

/// Set of supported rotations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RotationSet(u8);

impl RotationSet {
    /// No rotations
    pub const NONE: Self = Self(0);
    /// All three rotations
    pub const ALL: Self = Self(0b111);

    /// Set extended with one rotation
    #[must_use]
    pub const fn with(self, rotation: Rotation) -> Self {
        Self(self.0 | rotation.bit())
    }

    /// Test membership
    pub const fn contains(self, rotation: Rotation) -> bool {
        self.0 & rotation.bit() != 0
    }

    /// Members in ascending angle order
    pub fn iter(self) -> impl Iterator<Item = Rotation> {
        Rotation::ALL.into_iter().filter(move |&r| self.contains(r))
    }
}

impl FromIterator<Rotation> for RotationSet {
    fn from_iter<I: IntoIterator<Item = Rotation>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

/// Set of supported reflections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReflectionSet(u8);

impl ReflectionSet {
    /// No reflections
    pub const NONE: Self = Self(0);
    /// All four reflections
    pub const ALL: Self = Self(0b1111);

    /// Set extended with one reflection
    #[must_use]
    pub const fn with(self, reflection: Reflection) -> Self {
        Self(self.0 | reflection.bit())
    }

    /// Test membership
    pub const fn contains(self, reflection: Reflection) -> bool {
        self.0 & reflection.bit() != 0
    }

    /// Members in `X, Y, D1, D2` order
    pub fn iter(self) -> impl Iterator<Item = Reflection> {
        Reflection::ALL
            .into_iter()
            .filter(move |&r| self.contains(r))
    }
}

impl FromIterator<Reflection> for ReflectionSet {
    fn from_iter<I: IntoIterator<Item = Reflection>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

/// Orientation applied to a base definition to obtain a variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Base orientation
    #[default]
    Identity,
    /// Clockwise rotation
    Rotate(Rotation),
    /// Mirror image
    Reflect(Reflection),
}

impl Transform {
    /// Side of the base tile whose label ends up on `side`
    ///
    /// A clockwise rotation by `k` quarter turns moves the label at index
    /// `i - k` onto index `i`.
    pub const fn source_side(self, side: Direction) -> Direction {
        match self {
            Self::Identity => side,
            Self::Rotate(rotation) => Direction::from_index(side.index() + 4 - rotation.steps()),
            Self::Reflect(reflection) => reflection.mirror(side),
        }
    }

    /// Rotation angle in degrees, zero for identity and reflections
    pub const fn rotation_degrees(self) -> u16 {
        match self {
            Self::Rotate(rotation) => rotation.degrees(),
            Self::Identity | Self::Reflect(_) => 0,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("identity"),
            Self::Rotate(rotation) => write!(f, "rot{}", rotation.degrees()),
            Self::Reflect(reflection) => write!(f, "reflect-{reflection:?}"),
        }
    }
}

/// Base tile as authored, before orientation expansion
#[derive(Debug)]
pub struct TileDefinition<P> {
    id: String,
    edges: Edges,
    rotations: RotationSet,
    reflections: ReflectionSet,
    payload: Arc<P>,
}

impl<P> TileDefinition<P> {
    /// Definition with no supported rotations or reflections
    pub fn new(id: impl Into<String>, edges: Edges, payload: P) -> Self {
        Self {
            id: id.into(),
            edges,
            rotations: RotationSet::NONE,
            reflections: ReflectionSet::NONE,
            payload: Arc::new(payload),
        }
    }

    /// Replace the supported rotation set
    #[must_use]
    pub const fn with_rotations(mut self, rotations: RotationSet) -> Self {
        self.rotations = rotations;
        self
    }

    /// Replace the supported reflection set
    #[must_use]
    pub const fn with_reflections(mut self, reflections: ReflectionSet) -> Self {
        self.reflections = reflections;
        self
    }

    /// Definition identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Base edge labels
    pub const fn edges(&self) -> &Edges {
        &self.edges
    }

    /// Supported rotations
    pub const fn rotations(&self) -> RotationSet {
        self.rotations
    }

    /// Supported reflections
    pub const fn reflections(&self) -> ReflectionSet {
        self.reflections
    }

    /// Opaque render payload
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Transforms emitted for this definition, identity first
    pub fn transforms(&self) -> impl Iterator<Item = Transform> + '_ {
        std::iter::once(Transform::Identity)
            .chain(self.rotations.iter().map(Transform::Rotate))
            .chain(self.reflections.iter().map(Transform::Reflect))
    }
}

impl<P> Clone for TileDefinition<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            edges: self.edges.clone(),
            rotations: self.rotations,
            reflections: self.reflections,
            payload: Arc::clone(&self.payload),
        }
    }
}

/// One concrete orientation of a tile definition
#[derive(Debug)]
pub struct TileVariant<P> {
    definition: usize,
    id: String,
    edges: Edges,
    transform: Transform,
    payload: Arc<P>,
}

impl<P> TileVariant<P> {
    fn derive(definition: usize, source: &TileDefinition<P>, transform: Transform) -> Self {
        Self {
            definition,
            id: source.id.clone(),
            edges: source.edges.transformed(transform),
            transform,
            payload: Arc::clone(&source.payload),
        }
    }

    /// Position of the originating definition in the build input
    pub const fn definition(&self) -> usize {
        self.definition
    }

    /// Identifier of the originating definition
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Oriented edge labels
    pub const fn edges(&self) -> &Edges {
        &self.edges
    }

    /// Label on one side
    pub const fn edge(&self, direction: Direction) -> &EdgeLabel {
        self.edges.get(direction)
    }

    /// Transform applied to the base definition
    pub const fn transform(&self) -> Transform {
        self.transform
    }

    /// Opaque render payload of the originating definition
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Whether `neighbor`, lying in `toward` from this tile, may sit next to it
    pub fn connects(&self, neighbor: &Self, toward: Direction) -> bool {
        self.edge(toward) == neighbor.edge(toward.opposite())
    }
}

/// Immutable list of every oriented variant for one solve run
#[derive(Debug)]
pub struct TileCatalog<P> {
    variants: Vec<TileVariant<P>>,
}

impl<P> TileCatalog<P> {
    /// Expand definitions into oriented variants
    ///
    /// Each definition contributes its identity variant, then one variant per
    /// supported rotation, then one per supported reflection.
    pub fn build(definitions: &[TileDefinition<P>]) -> Self {
        let variants = definitions
            .iter()
            .enumerate()
            .flat_map(|(index, definition)| {
                definition
                    .transforms()
                    .map(move |transform| TileVariant::derive(index, definition, transform))
            })
            .collect();

        Self { variants }
    }

    /// Number of variants
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the catalog holds no variants
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Variant by catalog index
    pub fn get(&self, index: usize) -> Option<&TileVariant<P>> {
        self.variants.get(index)
    }

    /// Variant by catalog index, failing for unknown indices
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileIndex` if `index` is past the end of the catalog
    pub fn variant(&self, index: usize) -> Result<&TileVariant<P>> {
        self.variants
            .get(index)
            .ok_or(AlgorithmError::InvalidTileIndex {
                index,
                max_tiles: self.variants.len(),
            })
    }

    /// All variants in catalog order
    pub fn variants(&self) -> &[TileVariant<P>] {
        &self.variants
    }
}
