//! Builder capability and the two construction policies

use anyhow::{anyhow, Result};

use crate::{Direction, Door, Material, Maze, Room, Side};

/// Construction operations a maze builder offers
///
/// Implementations decide placement and material policy; the director
/// only sees this contract.
pub trait MazeBuilder {
    /// Create room `room_no` and add it to the maze
    fn build_room(&mut self, room_no: u32);

    /// Place a wall according to the builder's material policy
    fn build_wall(&mut self, direction: Direction) -> Result<()>;

    /// Connect two rooms already in the maze with a door
    fn build_door_wall(&mut self, room1_no: u32, room2_no: u32) -> Result<()>;

    /// Hand the finished maze to the caller
    fn into_maze(self) -> Maze;
}

/// Builds fully walled rooms and one shared door per connection
///
/// Rooms come out of [`MazeBuilder::build_room`] with plain walls on
/// all four sides. A door connects room `a`'s north side to room `b`'s
/// south side through a single [`Door`] held by the maze.
#[derive(Debug, Default)]
pub struct StandardMazeBuilder {
    maze: Maze,
}

impl StandardMazeBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MazeBuilder for StandardMazeBuilder {
    fn build_room(&mut self, room_no: u32) {
        let mut room = Room::new(room_no);
        for direction in Direction::ALL {
            room.set_side(direction, Side::Wall(Material::Plain));
        }
        self.maze.add_room(room);
    }

    // Walls are already placed by `build_room`
    fn build_wall(&mut self, _direction: Direction) -> Result<()> {
        Ok(())
    }

    fn build_door_wall(&mut self, room1_no: u32, room2_no: u32) -> Result<()> {
        // Both ends are checked before the door is placed anywhere
        room_mut(&mut self.maze, room1_no)?;
        room_mut(&mut self.maze, room2_no)?;

        let door_id = self.maze.add_door(Door::new(room1_no, room2_no));
        room_mut(&mut self.maze, room1_no)?
            .set_side(Direction::North, Side::SharedDoor(door_id));
        room_mut(&mut self.maze, room2_no)?
            .set_side(Direction::South, Side::SharedDoor(door_id));
        Ok(())
    }

    fn into_maze(self) -> Maze {
        self.maze
    }
}

/// Builds bare rooms, picks materials per direction and places
/// independent wooden doors
///
/// `build_wall` targets room 1 only: north gets brick, south gets
/// iron, east and west get plain walls. A door connection stores two
/// separate [`Door`] values, one on room `a`'s east side and one on
/// room `b`'s west side.
#[derive(Debug, Default)]
pub struct NewMazeBuilder {
    maze: Maze,
}

impl NewMazeBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MazeBuilder for NewMazeBuilder {
    fn build_room(&mut self, room_no: u32) {
        self.maze.add_room(Room::new(room_no));
    }

    fn build_wall(&mut self, direction: Direction) -> Result<()> {
        let material = match direction {
            Direction::North => Material::Brick,
            Direction::South => Material::Iron,
            _ => Material::Plain,
        };
        room_mut(&mut self.maze, 1)?.set_side(direction, Side::Wall(material));
        Ok(())
    }

    fn build_door_wall(&mut self, room1_no: u32, room2_no: u32) -> Result<()> {
        // Both ends are checked before the door is placed anywhere
        room_mut(&mut self.maze, room1_no)?;
        room_mut(&mut self.maze, room2_no)?;

        room_mut(&mut self.maze, room1_no)?.set_side(
            Direction::East,
            Side::WoodenDoor(Door::new(room1_no, room2_no)),
        );
        room_mut(&mut self.maze, room2_no)?.set_side(
            Direction::West,
            Side::WoodenDoor(Door::new(room2_no, room1_no)),
        );
        Ok(())
    }

    fn into_maze(self) -> Maze {
        self.maze
    }
}

/// Look up a room that a build step needs to exist
fn room_mut(maze: &mut Maze, room_no: u32) -> Result<&mut Room> {
    maze.room_mut(room_no)
        .ok_or_else(|| anyhow!("Room {} is not found in the maze", room_no))
}

/// Runs the fixed construction script against any builder
pub struct GameDirector<B> {
    builder: B,
}

impl<B: MazeBuilder> GameDirector<B> {
    pub fn new(builder: B) -> Self {
        GameDirector { builder }
    }

    /// Build rooms 1 and 2 with a connecting door, hand over the maze
    ///
    /// A failing build step aborts the whole construction.
    pub fn construct(mut self) -> Result<Maze> {
        self.builder.build_room(1);
        self.builder.build_room(2);
        self.builder.build_door_wall(1, 2)?;
        Ok(self.builder.into_maze())
    }
}
