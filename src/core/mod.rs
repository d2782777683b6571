//! Core application primitives (pass coordinator, scheduler, HTTP surface)

pub mod dashboard;
pub mod http;
pub mod scanner;
pub mod scheduler;

pub use http::*;
pub use scanner::*;
pub use scheduler::*;
