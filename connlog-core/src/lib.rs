pub mod cli;
pub mod logging;
pub mod record;
pub mod scan;
