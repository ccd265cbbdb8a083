mod canonical;
mod encoder;
mod human;
mod json;

pub use canonical::CanonicalEncoder;
pub use encoder::{Encoder, Encoding};
pub use human::HumanReadableEncoder;
pub use json::JSONEncoder;

/// Builds the encoder for `encoding`.
pub fn new_encoder(encoding: Encoding, verbose: bool) -> Box<dyn Encoder> {
    match encoding {
        Encoding::Canonical => Box::new(CanonicalEncoder::new(verbose)),
        Encoding::JSON => Box::new(JSONEncoder::new(verbose)),
        Encoding::HumanReadable => Box::new(HumanReadableEncoder::new(verbose)),
    }
}
