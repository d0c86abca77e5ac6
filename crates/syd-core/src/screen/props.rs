//! The props contract between the core and the view components.
//!
//! The renderer is a pure function from `(current screen, language,
//! injected callbacks)` to a view. [`ScreenProps`] is the data half of that
//! contract: the screen resolved for the session language plus any one-shot
//! parameters injected by a navigation.

use super::model::Screen;
use crate::language::Language;

/// One-shot parameters carried through a single navigation.
///
/// Consumed by the next rendered screen and cleared when the following
/// transition commits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OneShotProps {
    /// Opens this note pre-selected on the agenda screen.
    pub initial_note_id: Option<String>,
}

impl OneShotProps {
    /// True when no one-shot parameter is pending.
    pub fn is_empty(&self) -> bool {
        self.initial_note_id.is_none()
    }
}

/// Everything a view component receives for one render pass.
#[derive(Debug, Clone)]
pub struct ScreenProps<'a> {
    pub screen: &'a Screen,
    /// Screen text resolved for the session language.
    pub text: &'a str,
    pub language: Language,
    pub one_shot: &'a OneShotProps,
}

impl<'a> ScreenProps<'a> {
    /// Projects a screen into render props for the given language.
    pub fn new(screen: &'a Screen, language: Language, one_shot: &'a OneShotProps) -> Self {
        Self {
            screen,
            text: screen.text.resolve(language),
            language,
            one_shot,
        }
    }

    /// Splits the resolved text on the newline convention:
    /// title, then subtitle/slogan lines.
    pub fn text_lines(&self) -> impl Iterator<Item = &'a str> {
        self.text.lines()
    }
}
