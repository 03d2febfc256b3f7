use grid_util::Point;

/// Search scores are whole hop counts since every move costs 1.
pub type Score = u32;

/// Score of a cell that has not been reached (g) or estimated (h) yet.
pub const INFINITE: Score = Score::MAX;

/// Builds the [Point] addressing the cell at `row`, `col`. Columns map to `x` and rows to `y`.
pub fn cell_pos(row: usize, col: usize) -> Point {
    Point::new(col as i32, row as i32)
}

/// The role or search state of a cell. Exactly one is active at a time; presentation layers
/// derive colours from it, never the other way around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Default,
    Wall,
    Start,
    End,
    Open,
    Closed,
    Path,
}

impl CellState {
    pub fn is_passable(self) -> bool {
        self != CellState::Wall
    }

    pub fn is_endpoint(self) -> bool {
        matches!(self, CellState::Start | CellState::End)
    }

    /// Glyph used by the text form of a grid.
    pub fn glyph(self) -> char {
        match self {
            CellState::Default => '.',
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Open => 'o',
            CellState::Closed => 'x',
            CellState::Path => '*',
        }
    }

    /// Inverse of [glyph](Self::glyph). Also accepts the `G`, `@` and `T` tiles of
    /// benchmark maps for goals and obstacles.
    pub fn from_glyph(glyph: char) -> Option<CellState> {
        match glyph {
            '.' => Some(CellState::Default),
            '#' | '@' | 'T' => Some(CellState::Wall),
            'S' => Some(CellState::Start),
            'E' | 'G' => Some(CellState::End),
            'o' => Some(CellState::Open),
            'x' => Some(CellState::Closed),
            '*' => Some(CellState::Path),
            _ => None,
        }
    }
}

/// A single grid unit. Its position is fixed at creation; `f` is never stored but derived from
/// `g` and `h` on every read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    state: CellState,
    g: Score,
    h: Score,
    predecessor: Option<usize>,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell {
            pos: cell_pos(row, col),
            state: CellState::Default,
            g: INFINITE,
            h: INFINITE,
            predecessor: None,
        }
    }

    pub fn pos(&self) -> Point {
        self.pos
    }
    pub fn row(&self) -> usize {
        self.pos.y as usize
    }
    pub fn col(&self) -> usize {
        self.pos.x as usize
    }
    pub fn state(&self) -> CellState {
        self.state
    }
    pub fn g(&self) -> Score {
        self.g
    }
    pub fn h(&self) -> Score {
        self.h
    }
    /// `g + h`, or [INFINITE] while either is unknown.
    pub fn f(&self) -> Score {
        self.g.saturating_add(self.h)
    }
    /// Arena index of the cell this one was reached from.
    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }
    pub fn is_reached(&self) -> bool {
        self.g != INFINITE
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
    pub(crate) fn set_scores(&mut self, g: Score, h: Score) {
        self.g = g;
        self.h = h;
    }
    pub(crate) fn set_predecessor(&mut self, predecessor: Option<usize>) {
        self.predecessor = predecessor;
    }
}
