mod serve;
mod validate;

pub use serve::serve;
pub use validate::validate;
