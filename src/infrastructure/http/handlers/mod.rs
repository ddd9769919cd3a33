//! HTTP Handlers

mod author;
mod editorial;
mod newsletter;
mod ping;
mod site;
mod theme;

pub use author::*;
pub use editorial::*;
pub use newsletter::*;
pub use ping::*;
pub use site::*;
pub use theme::*;
