pub mod finding;
pub mod phrase;
pub mod report;

pub use finding::*;
pub use phrase::*;
pub use report::*;
