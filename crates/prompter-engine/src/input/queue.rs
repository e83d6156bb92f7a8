/// Control events the scroll engine reacts to.
/// Edge-triggered: each one describes a change, not a level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// The script text changed.
    TextChanged,
    /// The reset token changed.
    Reset,
    /// `has_started_session` went from false to true.
    SessionStarted,
    /// The viewport height changed.
    ViewportResized,
    /// The font size changed.
    FontResized,
    /// The jump-back token changed; rewind by `distance`.
    JumpBack { distance: f32 },
    /// `is_running` flipped.
    RunningChanged,
    /// `is_hovering` flipped.
    HoveringChanged,
}

impl ControlEvent {
    /// Application order within a frame. Lower runs first.
    pub fn order(&self) -> u8 {
        match self {
            ControlEvent::TextChanged => 0,
            ControlEvent::Reset => 1,
            ControlEvent::SessionStarted => 2,
            ControlEvent::ViewportResized => 3,
            ControlEvent::FontResized => 4,
            ControlEvent::JumpBack { .. } => 5,
            ControlEvent::RunningChanged => 6,
            ControlEvent::HoveringChanged => 7,
        }
    }
}

/// Events collected between frames.
/// The host (or the snapshot diff) pushes; the engine drains once per frame.
pub struct ControlQueue {
    events: Vec<ControlEvent>,
}

impl ControlQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: ControlEvent) {
        self.events.push(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = ControlEvent>) {
        self.events.extend(events);
    }

    /// Take all pending events in application order.
    /// The sort is stable, so repeated events keep their arrival order.
    pub fn drain(&mut self) -> Vec<ControlEvent> {
        let mut events = std::mem::take(&mut self.events);
        events.sort_by_key(ControlEvent::order);
        events
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &ControlEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for ControlQueue {
    fn default() -> Self {
        Self::new()
    }
}
