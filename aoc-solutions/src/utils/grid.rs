//! Rectangular grids addressed by [`Point`]
//!
//! A thin layer over [`grid::Grid`] that speaks in `(x, y)` points, rejects
//! out-of-bounds positions instead of wrapping, and parses the character
//! blocks most puzzles use.

use std::fmt;
use std::ops::{Index, IndexMut};

use aoc_solver::ParseError;

use super::point::{NEIGHBORS4, NEIGHBORS8, Point};

#[derive(Clone)]
pub struct Grid<T> {
    cells: grid::Grid<T>,
}

impl<T> Grid<T> {
    /// Builds a grid from rows, which must all have the same non-zero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ParseError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(ParseError::MissingData("grid has no cells".into()));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ParseError::InvalidFormat(format!(
                "grid row {} has {} cells, expected {}",
                y + 1,
                row.len(),
                width
            )));
        }
        let cells = rows.into_iter().flatten().collect();
        Ok(Self {
            cells: grid::Grid::from_vec(cells, width),
        })
    }

    /// Parses a block of text, converting each character with `f`.
    pub fn parse_with<F>(input: &str, mut f: F) -> Result<Self, ParseError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let rows = input
            .trim()
            .lines()
            .enumerate()
            .map(|(y, line)| {
                line.trim_end()
                    .chars()
                    .map(|c| {
                        f(c).ok_or_else(|| {
                            ParseError::InvalidFormat(format!(
                                "unexpected {c:?} in grid line {}",
                                y + 1
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.cells.cols()
    }

    pub fn height(&self) -> usize {
        self.cells.rows()
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width() && (p.y as usize) < self.height()
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        if self.contains(p) {
            self.cells.get(p.y as usize, p.x as usize)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        if self.contains(p) {
            self.cells.get_mut(p.y as usize, p.x as usize)
        } else {
            None
        }
    }

    /// Every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Point> + use<T> {
        let (width, height) = (self.width() as i32, self.height() as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    /// Every cell with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    /// In-bounds orthogonal neighbours of `p`.
    pub fn neighbors4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        NEIGHBORS4
            .into_iter()
            .map(move |d| p + d)
            .filter(|n| self.contains(*n))
    }

    /// In-bounds neighbours of `p` including diagonals.
    pub fn neighbors8(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        NEIGHBORS8
            .into_iter()
            .map(move |d| p + d)
            .filter(|n| self.contains(*n))
    }

    /// First position (row by row) whose cell matches.
    pub fn find<F>(&self, mut pred: F) -> Option<Point>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|(_, v)| pred(v)).map(|(p, _)| p)
    }

    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(Point, &T) -> U,
    {
        let cells = self.iter().map(|(p, v)| f(p, v)).collect();
        Grid {
            cells: grid::Grid::from_vec(cells, self.width()),
        }
    }

    /// Renders one character per cell, rows separated by newlines.
    pub fn render<F>(&self, mut f: F) -> String
    where
        F: FnMut(&T) -> char,
    {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for (p, v) in self.iter() {
            if p.x == 0 && p.y > 0 {
                out.push('\n');
            }
            out.push(f(v));
        }
        out
    }
}

impl<T: Clone> Grid<T> {
    /// A `width` × `height` grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            cells: grid::Grid::from_vec(vec![value; width * height], width),
        }
    }
}

impl Grid<char> {
    pub fn parse_chars(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, Some)
    }
}

impl Grid<u8> {
    /// Parses a block of decimal digits.
    pub fn parse_digits(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, |c| c.to_digit(10).map(|d| d as u8))
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        match self.get(p) {
            Some(v) => v,
            None => panic!("{p} is outside a {}x{} grid", self.width(), self.height()),
        }
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        let (width, height) = (self.width(), self.height());
        match self.get_mut(p) {
            Some(v) => v,
            None => panic!("{p} is outside a {width}x{height} grid"),
        }
    }
}

impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.cells.iter().eq(other.cells.iter())
    }
}

impl<T: Eq> Eq for Grid<T> {}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_index() {
        let grid = Grid::parse_digits("123\n456\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid[Point::new(2, 1)], 6);
        assert_eq!(grid.get(Point::new(3, 0)), None);
        assert_eq!(grid.get(Point::new(-1, 0)), None);
        assert_eq!(grid.neighbors4(Point::new(0, 0)).count(), 2);
        assert_eq!(grid.neighbors8(Point::new(1, 0)).count(), 5);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(matches!(
            Grid::parse_chars("ab\nc"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(Grid::parse_chars(""), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_render_roundtrip() {
        let text = "#.#\n.#.";
        let grid = Grid::parse_chars(text).unwrap();
        assert_eq!(grid.render(|c| *c), text);
        assert_eq!(grid.find(|c| *c == '.'), Some(Point::new(1, 0)));
    }
}
