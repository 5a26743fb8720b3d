//! # Magistrala SDK
//!
//! Typed async client for the REST APIs of the Magistrala IoT platform.
//!
//! ## Layout
//!
//! - [`Sdk`] bundles one client per service over a shared [`Transport`]
//! - Resource clients ([`Users`], [`Clients`], [`Channels`], ...) map one
//!   method to one HTTP request
//! - [`Roles`] is shared by every entity that carries roles
//! - Every non-2xx response becomes [`Error::Api`]
//!
//! ## Paths
//!
//! Ids are percent-encoded as single path segments, so an id containing `/`
//! or `?` never changes the route. Query parameters are built from the
//! records in [`magistrala_core::query`] and encoded by the transport.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alarms;
pub mod bootstrap;
pub mod certs;
pub mod channels;
pub mod client;
pub mod clients;
pub mod config;
pub mod domains;
pub mod encoding;
pub mod error;
pub mod groups;
pub mod health;
pub mod journals;
pub mod messages;
pub mod pats;
pub mod reports;
pub mod roles;
pub mod rules;
pub mod sdk;
pub mod users;

pub use alarms::Alarms;
pub use bootstrap::Bootstrap;
pub use certs::Certs;
pub use channels::Channels;
pub use client::{Auth, Call, Transport};
pub use clients::Clients;
pub use config::{SdkConfig, TlsConfig};
pub use domains::Domains;
pub use error::{handle_error, Error, Result};
pub use groups::Groups;
pub use health::{Health, Service};
pub use journals::Journals;
pub use messages::Messages;
pub use pats::Pats;
pub use reports::Reports;
pub use roles::Roles;
pub use rules::Rules;
pub use sdk::Sdk;
pub use users::Users;

pub use magistrala_core::*;
pub use magistrala_proto::{SenMLRecord, Topic};
