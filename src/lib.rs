pub mod catalog;
pub mod cli;
pub mod ctx;
pub mod disposition;
pub mod io;
pub mod pipeline;
pub mod schema;
