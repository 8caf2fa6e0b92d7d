use super::stage::StageEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Right,
}

#[inline]
pub fn arrow_for_key(key: &str) -> Option<Arrow> {
    match key {
        "ArrowLeft" => Some(Arrow::Left),
        "ArrowRight" => Some(Arrow::Right),
        _ => None,
    }
}

/// Keys that map directly onto the stage alphabet.
#[inline]
pub fn stage_event_for_key(key: &str) -> Option<StageEvent> {
    match key {
        "Escape" => Some(StageEvent::ClosePanel),
        _ => None,
    }
}

/// Held state of the orbit keys, written by keyboard listeners and read by
/// the manual orbit each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    pub fn press(&mut self, arrow: Arrow) {
        match arrow {
            Arrow::Left => self.left = true,
            Arrow::Right => self.right = true,
        }
    }

    pub fn release(&mut self, arrow: Arrow) {
        match arrow {
            Arrow::Left => self.left = false,
            Arrow::Right => self.right = false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// -1 for left, +1 for right, 0 when idle. Left wins if both are held.
    pub fn direction(&self) -> f32 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }
}
