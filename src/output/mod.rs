pub mod encoder;
mod writer;

pub use encoder::{new_encoder, Encoder, Encoding};
pub use writer::{LineWriter, Writer};
