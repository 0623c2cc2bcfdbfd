pub mod button;
pub mod card;
pub mod file_input;
pub mod page_header;

pub use button::*;
pub use card::*;
pub use file_input::*;
pub use page_header::*;
