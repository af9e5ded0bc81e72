//! Maze construction with interchangeable builders
//!
//! A [`GameDirector`](builder::GameDirector) drives a
//! [`MazeBuilder`](builder::MazeBuilder) through a fixed script: two
//! rooms, one connecting door. The builder variant decides wall
//! materials and where the door ends up.
//!
//! # Examples
//! ```
//! use mazebuilder::builder::{GameDirector, StandardMazeBuilder};
//!
//! let director = GameDirector::new(StandardMazeBuilder::new());
//! let maze = director.construct().unwrap();
//! print!("{}", maze);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;

pub mod builder;

/// Compass direction of one side of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the order room sides are reported
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        };
        write!(f, "{}", name)
    }
}

/// Material of an impassable wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Plain,
    Brick,
    Iron,
}

/// Passable connection between two rooms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Door {
    /// Room numbers on either side, in placement order
    pub rooms: (u32, u32),
    /// Doors start closed; nothing in the construction opens them
    pub is_open: bool,
}

impl Door {
    pub fn new(room1_no: u32, room2_no: u32) -> Self {
        Door {
            rooms: (room1_no, room2_no),
            is_open: false,
        }
    }
}

/// Handle to a door stored in the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorId(usize);

/// Occupant of one side of a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Side {
    /// Impassable wall
    Wall(Material),
    /// Door held by the maze, referenced from both connected rooms
    SharedDoor(DoorId),
    /// Wooden door held by this side alone
    WoodenDoor(Door),
}

impl Side {
    /// Whether this side can be passed through
    pub fn is_door(&self) -> bool {
        matches!(self, Side::SharedDoor(_) | Side::WoodenDoor(_))
    }
}

/// Room with a number and up to four occupied sides
///
/// Sides fill in incrementally as builder steps run; a room fresh from
/// [`Room::new`] has none.
#[derive(Debug, Clone)]
pub struct Room {
    room_no: u32,
    sides: [Option<Side>; 4],
}

impl Room {
    pub fn new(room_no: u32) -> Self {
        Room {
            room_no,
            sides: [None, None, None, None],
        }
    }

    pub fn room_no(&self) -> u32 {
        self.room_no
    }

    pub fn side(&self, direction: Direction) -> Option<&Side> {
        self.sides[direction as usize].as_ref()
    }

    pub fn side_mut(&mut self, direction: Direction) -> Option<&mut Side> {
        self.sides[direction as usize].as_mut()
    }

    /// Occupy a side, replacing whatever was there before
    pub fn set_side(&mut self, direction: Direction, side: Side) {
        self.sides[direction as usize] = Some(side);
    }
}

/// Rooms keyed by number, plus the doors they share
#[derive(Debug, Clone, Default)]
pub struct Maze {
    rooms: BTreeMap<u32, Room>,
    doors: Vec<Door>,
}

impl Maze {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a room under its own number, replacing any previous holder
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.room_no(), room);
    }

    pub fn room(&self, room_no: u32) -> Option<&Room> {
        self.rooms.get(&room_no)
    }

    pub fn room_mut(&mut self, room_no: u32) -> Option<&mut Room> {
        self.rooms.get_mut(&room_no)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Move a door into the maze, to be referenced from room sides
    pub fn add_door(&mut self, door: Door) -> DoorId {
        self.doors.push(door);
        DoorId(self.doors.len() - 1)
    }

    pub fn door(&self, id: DoorId) -> Option<&Door> {
        self.doors.get(id.0)
    }
}

impl fmt::Display for Maze {
    /// Rooms in ascending number order; an unset side renders as `None`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for room in self.rooms.values() {
            writeln!(f, "Room: {}", room.room_no())?;
            let sides = Direction::ALL
                .iter()
                .map(|&direction| {
                    let label = match room.side(direction) {
                        Some(side) if side.is_door() => "Door",
                        Some(_) => "Wall",
                        None => "None",
                    };
                    format!("{}: {}", direction, label)
                })
                .join("\n");
            writeln!(f, "{}", sides)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Direction, Door, Material, Maze, Room, Side};

    #[test]
    fn room_lookup_by_number() {
        let mut maze = Maze::new();
        maze.add_room(Room::new(1));
        maze.add_room(Room::new(7));

        assert_eq!(maze.room(1).unwrap().room_no(), 1);
        assert_eq!(maze.room(7).unwrap().room_no(), 7);
        assert!(maze.room(3).is_none());
        assert_eq!(maze.room_count(), 2);
    }

    #[test]
    fn add_room_replaces_previous_holder() {
        let mut maze = Maze::new();
        let mut first = Room::new(1);
        first.set_side(Direction::North, Side::Wall(Material::Brick));
        maze.add_room(first);
        maze.add_room(Room::new(1));

        assert_eq!(maze.room_count(), 1);
        assert!(maze.room(1).unwrap().side(Direction::North).is_none());
    }

    #[test]
    fn set_side_overwrites() {
        let mut room = Room::new(1);
        room.set_side(Direction::East, Side::Wall(Material::Plain));
        room.set_side(Direction::East, Side::Wall(Material::Iron));

        assert_eq!(
            room.side(Direction::East),
            Some(&Side::Wall(Material::Iron))
        );
        assert!(room.side(Direction::West).is_none());
    }

    #[test]
    fn shared_doors_live_in_the_maze() {
        let mut maze = Maze::new();
        let id = maze.add_door(Door::new(1, 2));

        assert_eq!(maze.door(id).unwrap().rooms, (1, 2));
        assert!(!maze.door(id).unwrap().is_open);
    }

    #[test]
    fn print_walled_and_bare_rooms() {
        let mut maze = Maze::new();
        let id = maze.add_door(Door::new(1, 2));
        let mut room1 = Room::new(1);
        for direction in Direction::ALL {
            room1.set_side(direction, Side::Wall(Material::Plain));
        }
        room1.set_side(Direction::North, Side::SharedDoor(id));
        maze.add_room(room1);
        maze.add_room(Room::new(2));

        let expected = "\
Room: 1
NORTH: Door
EAST: Wall
SOUTH: Wall
WEST: Wall

Room: 2
NORTH: None
EAST: None
SOUTH: None
WEST: None

";
        assert_eq!(maze.to_string(), expected);
    }

    #[test]
    fn wooden_door_counts_as_door() {
        let mut room = Room::new(1);
        room.set_side(Direction::East, Side::WoodenDoor(Door::new(1, 2)));

        assert!(room.side(Direction::East).unwrap().is_door());
    }
}
