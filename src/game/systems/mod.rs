pub mod countdown;
pub mod recall;
pub mod render;
pub mod timing;

pub use countdown::*;
pub use recall::*;
pub use render::*;
pub use timing::*;
