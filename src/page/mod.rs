//! Page-script layer for the server-rendered pages.

pub mod dom;
pub mod helpers;
pub mod scripts;
