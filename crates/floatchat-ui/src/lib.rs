//! Draggable floating chat button.
//!
//! [`ChatWidget`] ties the pieces together: pointer events go through the
//! input disambiguator, positions through the [`MotionController`], and a
//! plain click toggles the [`ChatPanel`]. Drags and throws arm a short
//! suppression window so the click a host fires after the release does not
//! toggle the panel too.

pub mod chat_widget;
pub mod config;
pub mod motion;
pub mod panel;
pub mod viewport;

pub use chat_widget::{ChatWidget, CLOSE_LABEL, OPEN_LABEL};
pub use config::{
    ConfigError, WidgetConfig, WidgetConfigBuilder, BOT_REPLY_DELAY_MS, INITIAL_INSET,
    VIEWPORT_MARGIN, WIDGET_SIZE,
};
pub use motion::MotionController;
pub use panel::{
    greeting, ChatMessage, ChatPanel, Sender, Transcript, BOT_REPLY, EMPTY_HINT, PANEL_TITLE,
};
pub use viewport::ViewportBounds;
