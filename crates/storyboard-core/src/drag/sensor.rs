//! Gesture sensor configuration
//!
//! The coordinator never reads a device. The UI translates its native events
//! into [`DragInput`](super::DragInput) and hands over a [`SensorConfig`]
//! describing when those inputs start, move, drop, or cancel a drag.

/// Keys the keyboard sensor understands. Anything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Space,
    Enter,
    Escape,
    Tab,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

impl KeyCode {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            KeyCode::ArrowLeft => Some(Direction::Left),
            KeyCode::ArrowRight => Some(Direction::Right),
            KeyCode::ArrowUp => Some(Direction::Up),
            KeyCode::ArrowDown => Some(Direction::Down),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Pointer (mouse, touch, pen) activation
#[derive(Debug, Clone, PartialEq)]
pub struct PointerSensor {
    /// Pixels the pointer must travel after press before the drag starts.
    /// `0.0` starts the drag on press.
    pub activation_distance: f64,
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self {
            activation_distance: 0.0,
        }
    }
}

/// Keyboard activation and stepping
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardSensor {
    pub start: Vec<KeyCode>,
    pub cancel: Vec<KeyCode>,
    pub end: Vec<KeyCode>,
    /// Fallback step in pixels when no droppable lies in the arrow's direction
    pub step: f64,
}

impl Default for KeyboardSensor {
    fn default() -> Self {
        Self {
            start: vec![KeyCode::Space, KeyCode::Enter],
            cancel: vec![KeyCode::Escape],
            end: vec![KeyCode::Space, KeyCode::Enter, KeyCode::Tab],
            step: 25.0,
        }
    }
}

/// Both sensors, injected into the coordinator
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SensorConfig {
    pub pointer: PointerSensor,
    pub keyboard: KeyboardSensor,
}

impl SensorConfig {
    pub fn with_activation_distance(mut self, distance: f64) -> Self {
        self.pointer.activation_distance = distance.max(0.0);
        self
    }
}
