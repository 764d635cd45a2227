use crate::error::{KeyPathError, KpResult};
use crate::grid::{GridLayout, Keyboard, PositionMap};
use crate::neighbors::{step, Direction};
use crate::search::search;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A single output symbol: a navigation move or a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum PathToken {
    Move(Direction),
    Press,
}

impl PathToken {
    pub const PRESS: char = 'p';

    pub fn symbol(self) -> char {
        match self {
            Self::Move(dir) => dir.symbol(),
            Self::Press => Self::PRESS,
        }
    }

    pub fn is_press(self) -> bool {
        self == Self::Press
    }
}

impl From<PathToken> for char {
    fn from(token: PathToken) -> Self {
        token.symbol()
    }
}

impl TryFrom<char> for PathToken {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c == Self::PRESS {
            return Ok(Self::Press);
        }
        Direction::from_symbol(c)
            .map(Self::Move)
            .ok_or_else(|| format!("unknown path token '{}'", c))
    }
}

impl FromStr for PathToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut it = s.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(format!("path token must be one character, got '{}'", s)),
        }
    }
}

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The moves needed to go from one focused key to the next letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: char,
    pub to: char,
    pub moves: Vec<Direction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypedPath {
    pub distance: usize,
    pub path: Vec<PathToken>,
}

impl TypedPath {
    pub fn render(&self) -> String {
        self.path.iter().map(|t| t.symbol()).collect()
    }

    pub fn presses(&self) -> usize {
        self.path.iter().filter(|t| t.is_press()).count()
    }
}

/// Shortest hop sequence for every letter of `word`, starting at
/// `starting_focus`. Each search starts where the previous letter left off.
pub fn transitions(
    layout: &GridLayout,
    positions: &PositionMap,
    starting_focus: char,
    word: &str,
) -> KpResult<Vec<Transition>> {
    let mut cursor = starting_focus;
    let mut out = Vec::new();

    for c in word.chars() {
        let tree = search(layout, positions, cursor, c)?;
        let moves = tree.moves();
        debug!("{} -> {}: {} hops", cursor, c, moves.len());
        out.push(Transition {
            from: cursor,
            to: c,
            moves,
        });
        cursor = c;
    }

    Ok(out)
}

/// Total hop count and the literal move/press sequence to type `word`.
/// Every letter ends with a press, even when no move was needed.
pub fn assemble(
    layout: &GridLayout,
    positions: &PositionMap,
    starting_focus: char,
    word: &str,
) -> KpResult<TypedPath> {
    let mut typed = TypedPath::default();

    for t in transitions(layout, positions, starting_focus, word)? {
        typed.distance += t.moves.len();
        typed.path.extend(t.moves.into_iter().map(PathToken::Move));
        typed.path.push(PathToken::Press);
    }

    Ok(typed)
}

impl Keyboard {
    pub fn assemble(&self, starting_focus: char, word: &str) -> KpResult<TypedPath> {
        assemble(self.layout(), self.positions(), starting_focus, word)
    }

    pub fn transitions(&self, starting_focus: char, word: &str) -> KpResult<Vec<Transition>> {
        transitions(self.layout(), self.positions(), starting_focus, word)
    }
}

/// Walks `path` from `start` and returns the key under focus at each press.
pub fn replay(keyboard: &Keyboard, start: char, path: &[PathToken]) -> KpResult<Vec<char>> {
    let mut cursor = start;
    keyboard.locate(cursor)?;

    let mut typed = Vec::new();
    for token in path {
        match *token {
            PathToken::Press => typed.push(cursor),
            PathToken::Move(dir) => {
                cursor = step(keyboard, cursor, dir)
                    .ok_or(KeyPathError::CharacterNotFound(cursor))?;
            }
        }
    }
    Ok(typed)
}
