//! Scanner and rule table for robots.txt files.

pub mod console;
pub mod robots;
pub mod source;
