//! ``src/controller/command.rs``
//! ============================================================================
//! # Commands: closed per-mode command sets
//!
//! A raw key is decoded exactly once, against the key map of whatever is
//! receiving input (a popup if one is open, else the active mode). Handlers
//! then match the resulting command exhaustively.

use ahash::AHashMap;
use crossterm::event::{KeyCode, KeyEvent};

use crate::{
    controller::keys::{
        arrow_key, backspace_key, ctrl, enter_key, escape_key, is_ctrl_c, key, normalize,
        shift_key, typed_char,
    },
    model::{
        app_state::{AppState, Popup},
        filter::FilterKind,
        mode::Mode,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Top,
    Bottom,
    Enter,
    Parent,
    MarkAdvance,
    UnmarkUp,
    MarkAll,
    StartFilter(FilterKind),
    StartSearch,
    NextMatch,
    PreviousMatch,
    EnterReorder,
    EnterQuickMark,
    Concatenate,
    CopyConcatenation,
    CopyFile,
    CopyPath,
    PromptOutput,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCommand {
    Insert(char),
    Backspace,
    ToggleKind,
    Commit,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCommand {
    Insert(char),
    Backspace,
    Commit,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderCommand {
    Up,
    Down,
    MoveUp,
    MoveDown,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickMarkCommand {
    Toggle(char),
    NextPage,
    PreviousPage,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupCommand {
    Close,
    Insert(char),
    Backspace,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Browse(BrowseCommand),
    Filter(FilterCommand),
    Search(SearchCommand),
    Reorder(ReorderCommand),
    QuickMark(QuickMarkCommand),
    Popup(PopupCommand),
    Quit,
}

/// Which key map a key is decoded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Mode(Mode),
    /// Help or preview: any key closes.
    Viewer,
    Prompt,
}

impl InputContext {
    #[must_use]
    pub fn of(state: &AppState) -> Self {
        match &state.popup {
            Some(Popup::Help | Popup::Preview { .. }) => Self::Viewer,
            Some(Popup::OutputPrompt { .. }) => Self::Prompt,
            None => Self::Mode(state.mode()),
        }
    }
}

/// Static bindings for the non-typing contexts.
#[derive(Debug, Clone)]
pub struct Keymap {
    browse: AHashMap<KeyEvent, Command>,
    reorder: AHashMap<KeyEvent, Command>,
    quick_mark: AHashMap<KeyEvent, Command>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

impl Keymap {
    pub fn new() -> Self {
        use BrowseCommand as B;
        use ReorderCommand as R;

        let mut browse = AHashMap::with_capacity(48);
        let mut bind = |event: KeyEvent, cmd: BrowseCommand| {
            browse.insert(event, Command::Browse(cmd));
        };

        // Movement
        bind(arrow_key(KeyCode::Up), B::Up);
        bind(key('k'), B::Up);
        bind(arrow_key(KeyCode::Down), B::Down);
        bind(key('j'), B::Down);
        bind(arrow_key(KeyCode::Left), B::Left);
        bind(key('h'), B::Left);
        bind(arrow_key(KeyCode::Right), B::Right);
        bind(key('l'), B::Right);
        bind(arrow_key(KeyCode::PageUp), B::PageUp);
        bind(ctrl('b'), B::PageUp);
        bind(arrow_key(KeyCode::PageDown), B::PageDown);
        bind(ctrl('f'), B::PageDown);
        bind(arrow_key(KeyCode::Home), B::Top);
        bind(key('g'), B::Top);
        bind(arrow_key(KeyCode::End), B::Bottom);
        bind(key('G'), B::Bottom);

        // Directories
        bind(enter_key(), B::Enter);
        bind(backspace_key(), B::Parent);

        // Selection
        bind(key('m'), B::MarkAdvance);
        bind(key(' '), B::MarkAdvance);
        bind(key('u'), B::UnmarkUp);
        bind(key('a'), B::MarkAll);

        // Modes
        bind(key('f'), B::StartFilter(FilterKind::Name));
        bind(key('e'), B::StartFilter(FilterKind::Extension));
        bind(key('/'), B::StartSearch);
        bind(key('n'), B::NextMatch);
        bind(key('N'), B::PreviousMatch);
        bind(key('r'), B::EnterReorder);
        bind(key('v'), B::EnterQuickMark);

        // Output
        bind(key('c'), B::Concatenate);
        bind(key('y'), B::CopyConcatenation);
        bind(key('Y'), B::CopyFile);
        bind(key('p'), B::CopyPath);
        bind(key('o'), B::PromptOutput);
        bind(key('?'), B::Help);

        browse.insert(key('q'), Command::Quit);

        let mut reorder = AHashMap::with_capacity(16);
        for (event, cmd) in [
            (arrow_key(KeyCode::Up), R::Up),
            (key('k'), R::Up),
            (arrow_key(KeyCode::Down), R::Down),
            (key('j'), R::Down),
            (shift_key(KeyCode::Up), R::MoveUp),
            (key('K'), R::MoveUp),
            (key('u'), R::MoveUp),
            (shift_key(KeyCode::Down), R::MoveDown),
            (key('J'), R::MoveDown),
            (key('d'), R::MoveDown),
            (key('r'), R::Exit),
            (escape_key(), R::Exit),
        ] {
            reorder.insert(event, Command::Reorder(cmd));
        }
        reorder.insert(key('q'), Command::Quit);

        let mut quick_mark = AHashMap::with_capacity(8);
        for (event, cmd) in [
            (arrow_key(KeyCode::PageDown), QuickMarkCommand::NextPage),
            (arrow_key(KeyCode::Right), QuickMarkCommand::NextPage),
            (arrow_key(KeyCode::PageUp), QuickMarkCommand::PreviousPage),
            (arrow_key(KeyCode::Left), QuickMarkCommand::PreviousPage),
            (escape_key(), QuickMarkCommand::Exit),
        ] {
            quick_mark.insert(event, Command::QuickMark(cmd));
        }

        Self {
            browse,
            reorder,
            quick_mark,
        }
    }

    /// Decode one key for `ctx`. Unbound keys yield `None`.
    #[must_use]
    pub fn decode(&self, ctx: InputContext, event: KeyEvent) -> Option<Command> {
        if is_ctrl_c(&event) {
            return Some(Command::Quit);
        }
        let event = normalize(event);

        match ctx {
            InputContext::Mode(Mode::Browse) => self.browse.get(&event).copied(),
            InputContext::Mode(Mode::Reorder) => self.reorder.get(&event).copied(),
            InputContext::Mode(Mode::QuickMark) => {
                self.quick_mark.get(&event).copied().or_else(|| {
                    typed_char(&event)
                        .filter(char::is_ascii_alphabetic)
                        .map(|c| Command::QuickMark(QuickMarkCommand::Toggle(c)))
                })
            }
            InputContext::Mode(Mode::Filter) => decode_filter(&event).map(Command::Filter),
            InputContext::Mode(Mode::Search) => decode_search(&event).map(Command::Search),
            InputContext::Prompt => decode_prompt(&event).map(Command::Popup),
            InputContext::Viewer => Some(Command::Popup(PopupCommand::Close)),
        }
    }
}

fn decode_filter(event: &KeyEvent) -> Option<FilterCommand> {
    match event.code {
        KeyCode::Enter => Some(FilterCommand::Commit),
        KeyCode::Esc => Some(FilterCommand::Cancel),
        KeyCode::Backspace => Some(FilterCommand::Backspace),
        KeyCode::Tab => Some(FilterCommand::ToggleKind),
        _ => typed_char(event).map(FilterCommand::Insert),
    }
}

fn decode_search(event: &KeyEvent) -> Option<SearchCommand> {
    match event.code {
        KeyCode::Enter => Some(SearchCommand::Commit),
        KeyCode::Esc => Some(SearchCommand::Cancel),
        KeyCode::Backspace => Some(SearchCommand::Backspace),
        _ => typed_char(event).map(SearchCommand::Insert),
    }
}

fn decode_prompt(event: &KeyEvent) -> Option<PopupCommand> {
    match event.code {
        KeyCode::Enter => Some(PopupCommand::Submit),
        KeyCode::Esc => Some(PopupCommand::Close),
        KeyCode::Backspace => Some(PopupCommand::Backspace),
        _ => typed_char(event).map(PopupCommand::Insert),
    }
}
