//! Domain models shared with the backend services.

mod ids;
mod note;
mod patient;
mod risk;

pub use ids::*;
pub use note::*;
pub use patient::*;
pub use risk::*;
