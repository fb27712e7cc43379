//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: status line with language, status and the "↓ New" marker
//! - `MessageBubble`: one conversation turn
//! - `LandingPage`: hero screen
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: multi-line question composer
//! - `MessageList`: scrollable conversation view
//! - `LanguageSelector`: language overlay
//!
//! Components receive external data as props and report intents as events
//! (`InputEvent`, `LanguageEvent`). They never touch `App`.
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs
//! ├── landing.rs
//! ├── message.rs
//! ├── message_list.rs
//! ├── language_selector.rs
//! └── input_box/
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub mod message;
pub use input_box::{InputBox, InputEvent};
pub mod message_list;
pub use message_list::{MessageList, MessageListState};
pub mod landing;
pub use landing::LandingPage;
pub mod language_selector;
pub use language_selector::{LanguageEvent, LanguageSelector, LanguageSelectorState};
