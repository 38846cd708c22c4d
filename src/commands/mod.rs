pub mod csv;
pub mod ics;
pub mod windows;
