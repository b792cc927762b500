//! Presentational components. They own no domain state: values come in as
//! props and changes go back out through callbacks.

mod button;
mod text_input;

pub use button::Button;
pub use text_input::TextInput;
