//! Room domain entity
//!
//! Rooms carry no surrogate id: the room name is the natural key. The store
//! enforces that names are unique and non-empty.

/// A bookable clinic room, identified by its name
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub name: String,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
