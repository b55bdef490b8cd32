pub mod error;

pub mod config;

pub mod logging;
pub use logging::Logger;

pub mod fs {
    pub mod concat;
    pub mod listing;
    pub use listing::{Entry, EntryKind};
    pub mod probe;
    pub use probe::TextProbe;
}

pub mod model {
    pub mod app_state;
    pub use app_state::{AppState, Popup};

    pub mod cursor;
    pub use cursor::{Cursor, GridLayout, Viewport};

    pub mod filter;
    pub use filter::{FilterKind, FilterState};

    pub mod mode;
    pub use mode::Mode;

    pub mod quick_mark;
    pub use quick_mark::QuickMarkState;

    pub mod search;
    pub use search::SearchState;

    pub mod selection;
    pub use selection::{BulkOutcome, Direction, MarkOutcome, Selection};

    pub mod status;
    pub use status::{StatusLevel, StatusLine};
}

pub mod controller {
    pub mod command;
    pub use command::{Command, InputContext, Keymap};

    pub mod keys;

    pub mod mode_controller;
    pub use mode_controller::ModeController;

    pub mod handlers;
}

pub mod view {
    pub mod theme;

    pub mod ui;
    pub use ui::UIRenderer;

    pub mod components {
        pub mod file_grid;
        pub use file_grid::FileGrid;
        pub mod help_overlay;
        pub use help_overlay::HelpOverlay;
        pub mod order_list;
        pub use order_list::OrderList;
        pub mod preview_overlay;
        pub use preview_overlay::PreviewOverlay;
        pub mod prompt_bar;
        pub use prompt_bar::PromptBar;
        pub mod quick_mark_list;
        pub use quick_mark_list::QuickMarkList;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }
}

pub use error::AppError;

pub use model::app_state::AppState;
