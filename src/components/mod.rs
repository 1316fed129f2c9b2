//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `bot_selector` switches the visible panel, `chat_panel` and
//! `message_list` are the shared chat window, and the `*_panel` components
//! bind each assistant's filter controls to the submission controller.

pub mod bot_selector;
pub mod chat_panel;
pub mod cheap_panel;
pub mod lodging_panel;
pub mod message_list;
pub mod status_badge;
