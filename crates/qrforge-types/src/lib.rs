pub mod appearance;
pub mod content;
pub mod error;
pub mod fields;
pub mod history;
pub mod render;
mod util;

pub use appearance::*;
pub use content::*;
pub use error::{Error, Result};
pub use fields::*;
pub use history::*;
pub use render::*;
pub use util::*;
