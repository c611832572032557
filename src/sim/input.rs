//! Keyboard input
//!
//! Key identifiers arrive as strings (`KeyboardEvent.key`). Only a fixed set is
//! recognized; everything else parses to `None` and is ignored.

/// A screen direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Recognized keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// w/a/s/d - held to move the square
    Hold(Direction),
    /// Arrow keys - each press steps the circle
    Step(Direction),
    /// "1" - start the loop if it isn't running
    Restart,
    /// "2" - stop the loop
    Stop,
}

impl Key {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" => Some(Key::Hold(Direction::Up)),
            "a" => Some(Key::Hold(Direction::Left)),
            "s" => Some(Key::Hold(Direction::Down)),
            "d" => Some(Key::Hold(Direction::Right)),
            "ArrowUp" => Some(Key::Step(Direction::Up)),
            "ArrowDown" => Some(Key::Step(Direction::Down)),
            "ArrowLeft" => Some(Key::Step(Direction::Left)),
            "ArrowRight" => Some(Key::Step(Direction::Right)),
            "1" => Some(Key::Restart),
            "2" => Some(Key::Stop),
            _ => None,
        }
    }
}

/// Which hold-to-move keys are currently down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Mark the direction for `key` as held (no-op for non w/a/s/d keys)
    pub fn set_direction(&mut self, key: &str) {
        if let Some(Key::Hold(dir)) = Key::from_key(key) {
            *self.flag_mut(dir) = true;
        }
    }

    /// Mark the direction for `key` as released (no-op for non w/a/s/d keys)
    pub fn unset_direction(&mut self, key: &str) {
        if let Some(Key::Hold(dir)) = Key::from_key(key) {
            *self.flag_mut(dir) = false;
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// True if no direction is held
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }

    fn flag_mut(&mut self, dir: Direction) -> &mut bool {
        match dir {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}
