//! Use-Cases: die eigentliche Logik hinter den Commands.

pub mod edit;
pub mod file_io;
