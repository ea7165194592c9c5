//! # xmlcodec core
//!
//! Converts runs of text to and from their XML-escaped form.
//!
//! * **[`encode`]**: raw character data to escaped text.
//! * **[`decode`]**: escaped text back to raw character data, through a
//!   conformant XML parser.
//! * **[`action`]**: the named actions a host exposes to its users.
//! * **[`chars`]**: the XML 1.0 character rules both directions share.
//!
//! Every operation is a pure function of its input; nothing is cached or
//! shared between calls.

pub mod action;
pub mod chars;
pub mod decode;
pub mod encode;

pub use action::Action;
pub use decode::decode;
pub use encode::encode;
