use crate::error::{KeyPathError, KpResult};
use std::collections::HashMap;

/// A cell address on the grid. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Rows of keys, left aligned. Every row holds `row_length` keys except the
/// last, which may be shorter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    rows: Vec<Vec<char>>,
}

impl GridLayout {
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_len(&self, y: usize) -> usize {
        self.rows.get(y).map_or(0, Vec::len)
    }

    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Number of rows that have a cell at column `x`, counting from the top.
    /// Only the final row can be short, so this is the row count or one less.
    pub fn column_height(&self, x: usize) -> usize {
        let mut height = self.rows.len();
        while height > 0 && self.rows[height - 1].len() <= x {
            height -= 1;
        }
        height
    }
}

/// Character -> coordinate lookup for a `GridLayout`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionMap {
    coords: HashMap<char, Coord>,
}

impl PositionMap {
    pub fn get(&self, c: char) -> Option<Coord> {
        self.coords.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.coords.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

/// Chunks `alphabet` into rows of `row_length` keys and records where every
/// key landed.
///
/// An empty alphabet yields an empty layout. A non-positive `row_length` or a
/// repeated character is an `InvalidConfiguration`.
pub fn build(alphabet: &str, row_length: i64) -> KpResult<(GridLayout, PositionMap)> {
    if row_length <= 0 {
        return Err(KeyPathError::InvalidConfiguration(format!(
            "rowLength must be positive, got {}",
            row_length
        )));
    }
    let width = usize::try_from(row_length).map_err(|_| {
        KeyPathError::InvalidConfiguration(format!("rowLength {} is too large", row_length))
    })?;

    let chars: Vec<char> = alphabet.chars().collect();
    let mut coords = HashMap::with_capacity(chars.len());
    let mut rows = Vec::with_capacity(chars.len().div_ceil(width));

    for (y, chunk) in chars.chunks(width).enumerate() {
        for (x, &c) in chunk.iter().enumerate() {
            if coords.insert(c, Coord::new(x, y)).is_some() {
                return Err(KeyPathError::InvalidConfiguration(format!(
                    "duplicate key '{}' in alphabet",
                    c
                )));
            }
        }
        rows.push(chunk.to_vec());
    }

    Ok((GridLayout { rows }, PositionMap { coords }))
}

/// A layout together with its position lookup, built once per task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    layout: GridLayout,
    positions: PositionMap,
}

impl Keyboard {
    pub fn build(alphabet: &str, row_length: i64) -> KpResult<Self> {
        let (layout, positions) = build(alphabet, row_length)?;
        Ok(Self { layout, positions })
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn positions(&self) -> &PositionMap {
        &self.positions
    }

    pub fn rows(&self) -> &[Vec<char>] {
        self.layout.rows()
    }

    pub fn position(&self, c: char) -> Option<Coord> {
        self.positions.get(c)
    }

    /// Like `position`, but a missing key is an error.
    pub fn locate(&self, c: char) -> KpResult<Coord> {
        self.positions
            .get(c)
            .ok_or(KeyPathError::CharacterNotFound(c))
    }

    pub fn contains(&self, c: char) -> bool {
        self.positions.contains(c)
    }

    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        self.layout.char_at(x, y)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
