//! Integer points and compass directions
//!
//! Points use screen coordinates: `x` grows to the right, `y` grows downwards,
//! so [`Direction::North`] is `(0, -1)`.

use glam::{IVec2, IVec3};

pub type Point = IVec2;
pub type Point3 = IVec3;

/// Orthogonal neighbour offsets, clockwise from north.
pub const NEIGHBORS4: [Point; 4] = [
    IVec2::new(0, -1),
    IVec2::new(1, 0),
    IVec2::new(0, 1),
    IVec2::new(-1, 0),
];

/// All eight neighbour offsets, clockwise from north.
pub const NEIGHBORS8: [Point; 8] = [
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(1, 0),
    IVec2::new(1, 1),
    IVec2::new(0, 1),
    IVec2::new(-1, 1),
    IVec2::new(-1, 0),
    IVec2::new(-1, -1),
];

/// The six face-adjacent offsets in 3D.
pub const NEIGHBORS3D6: [Point3; 6] = [
    IVec3::new(1, 0, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 0, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit step in this direction.
    pub fn delta(self) -> Point {
        match self {
            Direction::North => IVec2::new(0, -1),
            Direction::East => IVec2::new(1, 0),
            Direction::South => IVec2::new(0, 1),
            Direction::West => IVec2::new(-1, 0),
        }
    }

    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub fn reverse(self) -> Self {
        self.turn_right().turn_right()
    }

    /// Accepts compass letters (`NESW`), arrows (`^>v<`) and `UDLR`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' | 'U' | '^' => Some(Direction::North),
            'E' | 'R' | '>' => Some(Direction::East),
            'S' | 'D' | 'v' => Some(Direction::South),
            'W' | 'L' | '<' => Some(Direction::West),
            _ => None,
        }
    }
}

pub fn manhattan(a: Point, b: Point) -> i32 {
    let d = (a - b).abs();
    d.x + d.y
}

pub fn manhattan3(a: Point3, b: Point3) -> i32 {
    let d = (a - b).abs();
    d.x + d.y + d.z
}

pub fn neighbors4(p: Point) -> impl Iterator<Item = Point> {
    NEIGHBORS4.into_iter().map(move |d| p + d)
}

pub fn neighbors8(p: Point) -> impl Iterator<Item = Point> {
    NEIGHBORS8.into_iter().map(move |d| p + d)
}
