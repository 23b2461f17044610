//! Entity handles with generational indices
//!
//! Every player, enemy and bullet gets a handle when it is created. A handle
//! is an index plus a generation:
//! - Freeing a handle bumps the generation of its slot
//! - The slot can then be reused for the next spawn
//! - Old handles to the slot stop matching, so a bullet's owner reference or
//!   a logged enemy id can never be mistaken for a newer entity

/// Handle to a game entity.
///
/// Handles are non-owning. The entity data itself lives in the collection
/// that owns it (the player's bullet list, the director's enemy list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Handle that never refers to a live entity.
    pub const NULL: Entity = Entity { index: u32::MAX, generation: 0 };

    pub fn is_null(&self) -> bool {
        self.index == u32::MAX
    }
}

impl Default for Entity {
    fn default() -> Self {
        Entity::NULL
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            write!(f, "#null")
        } else {
            write!(f, "#{}v{}", self.index, self.generation)
        }
    }
}

/// Hands out entity handles and tracks which ones are alive.
pub struct EntityAllocator {
    /// Current generation of each slot
    generations: Vec<u32>,
    /// Freed slots, reused LIFO
    free_indices: Vec<u32>,
    alive_count: u32,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            free_indices: Vec::new(),
            alive_count: 0,
        }
    }

    /// Allocate a handle, reusing a freed slot if there is one.
    pub fn allocate(&mut self) -> Entity {
        self.alive_count += 1;

        if let Some(index) = self.free_indices.pop() {
            // Generation was already bumped when the slot was freed
            Entity::new(index, self.generations[index as usize])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            Entity::new(index, 0)
        }
    }

    /// Free a handle. Returns false if it was already dead.
    pub fn free(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        self.generations[entity.index as usize] += 1;
        self.free_indices.push(entity.index);
        self.alive_count -= 1;
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        if entity.is_null() {
            return false;
        }
        self.generations
            .get(entity.index as usize)
            .is_some_and(|&gen| gen == entity.generation)
    }

    pub fn alive_count(&self) -> u32 {
        self.alive_count
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
