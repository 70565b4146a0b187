// ClaimLens Core Services

pub mod text_input;
pub mod classify_client;
pub mod dispatcher;
pub mod highlights;
pub mod verdict;

pub use text_input::*;
pub use classify_client::*;
pub use dispatcher::*;
pub use highlights::*;
pub use verdict::*;
