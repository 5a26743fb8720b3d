//! # Magistrala Protocol
//!
//! Wire-level helpers shared by the SDK resource clients.
//!
//! ## SenML
//!
//! - [`SenMLRecord`]: one Sensor Markup Language record, packed into a JSON
//!   array before publishing
//!
//! ## Topics
//!
//! Dotted publish topics `{channel}.{sub}.{topic}` map onto the HTTP adapter
//! path `m/{domain}/c/{channel}/{sub}/{topic}`.
//!
//! ## Bootstrap cipher
//!
//! Secure bootstrap payloads are AES-256-CFB encrypted and hex encoded with
//! the IV prepended.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cipher;
pub mod senml;
pub mod topics;

pub use cipher::{decrypt, decrypt_json, encrypt, CipherError};
pub use senml::SenMLRecord;
pub use topics::{Topic, TopicError};
