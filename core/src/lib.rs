//! Typed method registry and client for the Bitrix24 REST API.
//!
//! Every REST method is a zero-sized [`Wire`] marker binding its wire
//! identifier to an entity, params and payload. Listable and Gettable methods
//! are told apart at compile time, and [`Registry`] mirrors the same table at
//! runtime for validation and introspection.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod ops;

pub use client::{B24Client, Transport};
pub use config::ClientConfig;
pub use error::{BatchError, ClientError, RegistryError, ShapeError, UnknownMethod};
pub use infra::wire::{
	EntityOf, Gettable, Listable, Method, MethodKind, ParamsOf, PayloadOf, Wire,
};
pub use ops::registry::{MethodDescriptor, Registry};
