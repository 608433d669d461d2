//! Keyboard snapshots and edge detection
//!
//! A key "just pressed" is down in the current snapshot and up in the previous
//! one. The previous snapshot is passed in explicitly every tick. A press the
//! game has acted on is "consumed": it stays suppressed for as long as the key
//! is held, even if the shell's previous snapshot is stale. The set of consumed
//! keys is carried between ticks by the caller (`consumed` / `carry`).

use serde::{Deserialize, Serialize};

/// Logical keys the game reacts to (the shell maps physical keys onto these)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Fire,
}

impl Key {
    pub const ALL: [Key; 7] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Enter,
        Key::Escape,
        Key::Fire,
    ];

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of keys held down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeySet(u8);

impl KeySet {
    pub const EMPTY: KeySet = KeySet(0);

    pub fn insert(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn contains(self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut set = KeySet::EMPTY;
        for key in iter {
            set.insert(key);
        }
        set
    }
}

/// Input state polled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub keys: KeySet,
    /// Controller back button: quits from any mode
    pub quit: bool,
}

impl InputSnapshot {
    pub fn pressed(keys: &[Key]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            quit: false,
        }
    }
}

/// `key` went down between `previous` and `current`
#[inline]
pub fn just_pressed(previous: KeySet, current: KeySet, key: Key) -> bool {
    current.contains(key) && !previous.contains(key)
}

/// The input a single tick sees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    pub current: InputSnapshot,
    pub previous: InputSnapshot,
    /// Held keys whose press has been acted on
    consumed: KeySet,
}

impl InputFrame {
    pub fn new(current: InputSnapshot, previous: InputSnapshot) -> Self {
        Self {
            current,
            previous,
            consumed: KeySet::EMPTY,
        }
    }

    /// Edge-triggered press
    pub fn just_pressed(&self, key: Key) -> bool {
        just_pressed(self.previous.keys, self.current.keys, key)
    }

    /// Level-triggered hold
    pub fn held(&self, key: Key) -> bool {
        self.current.keys.contains(key)
    }

    pub fn quit_requested(&self) -> bool {
        self.current.quit
    }

    /// Mark a press as handled: no edge is reported for it until released
    pub fn consume(&mut self, key: Key) {
        if self.current.keys.contains(key) {
            self.previous.keys.insert(key);
            self.consumed.insert(key);
        }
    }

    /// Re-apply presses consumed on an earlier tick; released keys drop out
    pub fn carry(&mut self, consumed: KeySet) {
        for key in Key::ALL {
            if consumed.contains(key) {
                self.consume(key);
            }
        }
    }

    /// Consumed keys still held, to be carried into the next tick
    pub fn consumed(&self) -> KeySet {
        self.consumed
    }
}
