use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier shared by every stroke drawn in one press-to-release gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub i32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Supplies candidate ids. Candidates may repeat; the allocator re-draws.
pub trait IdSource {
    fn next_id(&mut self) -> i32;
}

impl<F: FnMut() -> i32> IdSource for F {
    fn next_id(&mut self) -> i32 {
        self()
    }
}

/// Draws ids from the system RNG via random (v4) uuids
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&mut self) -> i32 {
        uuid::Uuid::new_v4().as_u128() as i32
    }
}

/// Deterministic splitmix64 sequence, for tests and reproducible sessions
#[derive(Debug, Clone)]
pub struct SeededIdSource {
    state: u64,
}

impl SeededIdSource {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl IdSource for SeededIdSource {
    fn next_id(&mut self) -> i32 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        (z ^ (z >> 31)) as i32
    }
}

/// Hands out group ids that are unique within the session.
///
/// Tracks every id ever allocated or reserved until [`IdAllocator::clear`].
pub struct IdAllocator {
    used: HashSet<GroupId>,
    source: Box<dyn IdSource>,
}

impl fmt::Debug for IdAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdAllocator")
            .field("used", &format!("<{} ids>", self.used.len()))
            .finish()
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(RandomIdSource)
    }
}

impl IdAllocator {
    pub fn new(source: impl IdSource + 'static) -> Self {
        Self {
            used: HashSet::new(),
            source: Box::new(source),
        }
    }

    /// Returns a fresh id and marks it used
    pub fn allocate(&mut self) -> GroupId {
        loop {
            let id = GroupId(self.source.next_id());
            if self.used.insert(id) {
                return id;
            }
            log::debug!("Group id {id} already in use, drawing again");
        }
    }

    /// Marks `id` as used. Returns false if it already was, in which case the
    /// caller needs [`IdAllocator::allocate`] instead.
    pub fn reserve(&mut self, id: GroupId) -> bool {
        self.used.insert(id)
    }

    pub fn contains(&self, id: GroupId) -> bool {
        self.used.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    pub fn clear(&mut self) {
        self.used.clear();
    }
}
