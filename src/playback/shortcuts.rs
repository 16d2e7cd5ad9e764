/// Transport action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    TogglePlay,
    SkipBackward,
    SkipForward,
    Next,
    Previous,
    ToggleMute,
}

/// The parts of a keydown event the shortcut table looks at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyInput {
    pub key: String,
    pub code: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
    /// Already handled, mid-composition, or aimed at an editable element.
    pub ignored: bool,
}

pub fn shortcut_action(input: &KeyInput) -> Option<ShortcutAction> {
    if input.ignored {
        return None;
    }

    let key = input.key.as_str();
    let code = input.code.as_str();

    match key {
        "MediaTrackNext" | "MediaNextTrack" => return Some(ShortcutAction::Next),
        "MediaTrackPrevious" | "MediaPreviousTrack" => return Some(ShortcutAction::Previous),
        "MediaPlayPause" => return Some(ShortcutAction::TogglePlay),
        _ => {}
    }

    let meta_or_ctrl = input.meta || input.ctrl;
    if meta_or_ctrl {
        if input.alt || input.shift {
            return None;
        }
        return match key {
            "ArrowRight" => Some(ShortcutAction::Next),
            "ArrowLeft" => Some(ShortcutAction::Previous),
            _ => None,
        };
    }
    if input.alt {
        return None;
    }

    match key {
        " " | "Spacebar" => Some(ShortcutAction::TogglePlay),
        _ if code == "Space" => Some(ShortcutAction::TogglePlay),
        "ArrowLeft" => Some(ShortcutAction::SkipBackward),
        "ArrowRight" => Some(ShortcutAction::SkipForward),
        "m" | "M" => Some(ShortcutAction::ToggleMute),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: &str) -> KeyInput {
        KeyInput {
            key: key.to_string(),
            ..KeyInput::default()
        }
    }

    #[test]
    fn plain_keys() {
        assert_eq!(shortcut_action(&key(" ")), Some(ShortcutAction::TogglePlay));
        assert_eq!(
            shortcut_action(&key("ArrowLeft")),
            Some(ShortcutAction::SkipBackward)
        );
        assert_eq!(
            shortcut_action(&key("ArrowRight")),
            Some(ShortcutAction::SkipForward)
        );
        assert_eq!(shortcut_action(&key("m")), Some(ShortcutAction::ToggleMute));
        assert_eq!(shortcut_action(&key("q")), None);
    }

    #[test]
    fn space_is_matched_by_code() {
        let input = KeyInput {
            key: "Unidentified".into(),
            code: "Space".into(),
            ..KeyInput::default()
        };
        assert_eq!(shortcut_action(&input), Some(ShortcutAction::TogglePlay));
    }

    #[test]
    fn modified_arrows_change_track() {
        let next = KeyInput {
            ctrl: true,
            ..key("ArrowRight")
        };
        let prev = KeyInput {
            meta: true,
            ..key("ArrowLeft")
        };
        assert_eq!(shortcut_action(&next), Some(ShortcutAction::Next));
        assert_eq!(shortcut_action(&prev), Some(ShortcutAction::Previous));

        let with_shift = KeyInput {
            shift: true,
            ..next
        };
        assert_eq!(shortcut_action(&with_shift), None);
    }

    #[test]
    fn media_keys() {
        assert_eq!(
            shortcut_action(&key("MediaTrackNext")),
            Some(ShortcutAction::Next)
        );
        assert_eq!(
            shortcut_action(&key("MediaTrackPrevious")),
            Some(ShortcutAction::Previous)
        );
        assert_eq!(
            shortcut_action(&key("MediaPlayPause")),
            Some(ShortcutAction::TogglePlay)
        );
    }

    #[test]
    fn ignored_events_map_to_nothing() {
        let input = KeyInput {
            ignored: true,
            ..key(" ")
        };
        assert_eq!(shortcut_action(&input), None);
        let alt_space = KeyInput {
            alt: true,
            ..key(" ")
        };
        assert_eq!(shortcut_action(&alt_space), None);
    }
}
