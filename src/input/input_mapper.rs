//! Input mapping from raw events to semantic actions

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit the application (Escape or Q)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Toggle the camera's vertical mirror (M key)
    ToggleMirror,
}

/// Maps raw keyboard events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Key releases return `None`; repeats count as presses.
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape | KeyCode::KeyQ => Some(InputAction::Exit),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::KeyM => Some(InputAction::ToggleMirror),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_q_exits() {
        let action = InputMapper::map_keyboard(KeyCode::KeyQ, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_f_toggles_fullscreen() {
        let action = InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::ToggleFullscreen));
    }

    #[test]
    fn test_m_toggles_mirror() {
        let action = InputMapper::map_keyboard(KeyCode::KeyM, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::ToggleMirror));
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released);
        assert_eq!(action, None);
    }

    #[test]
    fn test_other_keys_not_mapped() {
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::Space, KeyCode::Enter] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }
}
