//! Cross-crate behaviour of the codec, exercised through the public API the
//! host uses.

#[cfg(test)]
mod codec;
