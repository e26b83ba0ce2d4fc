pub mod common;
pub mod distances2;
pub mod offset;
pub mod shapes2;
