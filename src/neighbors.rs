use crate::grid::{GridLayout, Keyboard};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Direction {
    #[strum(serialize = "u")]
    #[serde(rename = "u")]
    Up,
    #[strum(serialize = "d")]
    #[serde(rename = "d")]
    Down,
    #[strum(serialize = "l")]
    #[serde(rename = "l")]
    Left,
    #[strum(serialize = "r")]
    #[serde(rename = "r")]
    Right,
}

impl Direction {
    /// Expansion order. BFS tie-breaks follow it.
    pub const ORDER: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn symbol(self) -> char {
        match self {
            Self::Up => 'u',
            Self::Down => 'd',
            Self::Left => 'l',
            Self::Right => 'r',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'u' => Some(Self::Up),
            'd' => Some(Self::Down),
            'l' => Some(Self::Left),
            'r' => Some(Self::Right),
            _ => None,
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

fn wrap(candidate: isize, modulus: usize) -> usize {
    let m = modulus as isize;
    if candidate < 0 {
        (candidate + m) as usize
    } else {
        (candidate % m) as usize
    }
}

/// The four toroidal neighbors of the key at `(x, y)`, in `Direction::ORDER`.
///
/// Both wrap moduli come from the origin cell: horizontal moves wrap on the
/// length of row `y`, vertical moves wrap on the number of rows that have a
/// cell at column `x`. Returns `None` if `(x, y)` is not a key.
pub fn neighbors(layout: &GridLayout, x: usize, y: usize) -> Option<[(char, Direction); 4]> {
    layout.char_at(x, y)?;

    let num_cols = layout.row_len(y);
    let num_rows = layout.column_height(x);

    let mut out = [('\0', Direction::Up); 4];
    for (slot, dir) in out.iter_mut().zip(Direction::ORDER) {
        let (dx, dy) = dir.delta();
        let nx = wrap(x as isize + dx, num_cols);
        let ny = wrap(y as isize + dy, num_rows);
        // Vertical moves keep x, horizontal moves keep y, so both stay in range.
        let c = layout.char_at(nx, ny)?;
        *slot = (c, dir);
    }
    Some(out)
}

/// The key reached from `c` by one move in `dir`.
pub fn step(keyboard: &Keyboard, c: char, dir: Direction) -> Option<char> {
    let pos = keyboard.position(c)?;
    neighbors(keyboard.layout(), pos.x, pos.y)?
        .into_iter()
        .find(|&(_, d)| d == dir)
        .map(|(n, _)| n)
}
