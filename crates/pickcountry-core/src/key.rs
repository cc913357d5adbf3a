// crates/pickcountry-core/src/key.rs
use std::fmt;

/// Input vocabulary of the selection state machine.
///
/// `Confirm` and `Descend` share one meaning while a choice is open
/// (descend into a letter, or finalize a name); only `Confirm` dismisses a
/// finalized choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    MoveNext,
    MovePrev,
    PageNext,
    PagePrev,
    BackOne,
    Backspace,
    Confirm,
    Descend,
    Char(char),
}

impl Key {
    /// Parses a symbolic key identifier (`move-next`, `confirm`, ...) or a
    /// single printable character. Anything else is `None`.
    pub fn parse(id: &str) -> Option<Self> {
        let key = match id {
            "move-next" => Self::MoveNext,
            "move-prev" => Self::MovePrev,
            "page-next" => Self::PageNext,
            "page-prev" => Self::PagePrev,
            "back-one" => Self::BackOne,
            "backspace" => Self::Backspace,
            "confirm" => Self::Confirm,
            "descend" => Self::Descend,
            _ => return printable(id).map(Self::Char),
        };
        Some(key)
    }

    /// Normalizes a DOM `KeyboardEvent` (`key`, `code`) pair.
    ///
    /// Browser names such as `ArrowDown` or `Enter` map onto the symbolic
    /// vocabulary; anything else goes through [`Key::parse`]. `code` (the
    /// physical key) is not needed to decide.
    pub fn from_browser(key: &str, _code: &str) -> Option<Self> {
        let key = match key {
            "ArrowDown" => Self::MoveNext,
            "ArrowUp" => Self::MovePrev,
            "PageDown" => Self::PageNext,
            "PageUp" => Self::PagePrev,
            "ArrowLeft" => Self::BackOne,
            "ArrowRight" => Self::Descend,
            "Enter" => Self::Confirm,
            "Backspace" => Self::Backspace,
            other => return Self::parse(other),
        };
        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveNext => f.write_str("move-next"),
            Self::MovePrev => f.write_str("move-prev"),
            Self::PageNext => f.write_str("page-next"),
            Self::PagePrev => f.write_str("page-prev"),
            Self::BackOne => f.write_str("back-one"),
            Self::Backspace => f.write_str("backspace"),
            Self::Confirm => f.write_str("confirm"),
            Self::Descend => f.write_str("descend"),
            Self::Char(c) => write!(f, "{c}"),
        }
    }
}

fn printable(id: &str) -> Option<char> {
    let mut chars = id.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() => Some(c),
        _ => None,
    }
}
