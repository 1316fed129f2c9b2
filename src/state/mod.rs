//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` holds page chrome (which bot is showing, backend reachability) and
//! `panel` holds one assistant's transcript and submission flags. Each panel
//! owns its own `PanelState`; nothing is shared between the two.

pub mod panel;
pub mod ui;
