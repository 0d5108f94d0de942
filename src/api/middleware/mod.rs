mod logging;
mod panic;

pub use logging::request_logger;
pub use panic::handle_panic;
