pub mod keyboard;
pub mod pointer;

use crate::core::StageEvent;
use std::cell::RefCell;
use std::rc::Rc;

/// Stage events raised by listeners, drained once per frame.
pub type EventQueue = Rc<RefCell<Vec<StageEvent>>>;

pub use keyboard::wire_keyboard;
pub use pointer::{wire_canvas_resize, wire_navigation};
