use serde::{Deserialize, Serialize};

/// Edge-triggered control token. Only a change of identity matters, never the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ControlToken(pub u64);

impl ControlToken {
    /// A token that differs from `self`.
    pub fn next(self) -> Self {
        ControlToken(self.0.wrapping_add(1))
    }
}

/// What the view shows right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum DisplayMode {
    /// No script: show the empty-state message.
    #[default]
    Empty = 0,
    /// Script loaded but the session hasn't started.
    Ready = 1,
    /// Tiled script scrolling.
    Scrolling = 2,
}
