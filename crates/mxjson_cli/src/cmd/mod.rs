/// Wire-format decode command.
pub mod decode;
/// Plain-array encode command.
pub mod encode;
/// Shared input, output, and error helpers.
pub mod util;
