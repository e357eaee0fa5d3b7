//! Wire types for the Bitrix24 REST API
//!
//! This module holds the type-level half of the method registry:
//!
//! - **Method**: the closed set of wire identifiers and the Listable roster
//! - **Wire**: the trait every typed method implements, binding an identifier
//!   to its entity, params and payload
//! - **Shapes**: `Single`, `Listing` and `Composite` decide how a method's
//!   response body is wrapped
//! - **Params / Payload**: the request and response shapes themselves
//!
//! The runtime half (descriptor table, startup validation) lives in
//! [`crate::ops::registry`].

use serde::{de::DeserializeOwned, Serialize};

pub mod method;
pub mod params;
pub mod payload;
pub mod query_string;

pub use method::{Method, MethodKind, LISTABLE_METHODS};
pub use params::{
	AddParams, GetParams, ListFilter, ListParams, NoParams, OperationOptions, SelectField,
	SortOrder, StatusFilter, StatusListParams, UpdateParams,
};
pub use payload::{
	BatchCommandError, BatchPart, BatchPayload, BatchResults, FromBatchPart, GetPayload,
	ListPayload, PayloadTime,
};

use crate::domain::Entity;

/// A typed Bitrix24 method.
///
/// Implementors are zero-sized markers generated by [`crate::wire_method!`];
/// the response payload is not declared directly but derived from `Shape` and
/// `Output`, see [`PayloadOf`].
pub trait Wire {
	/// Identifier sent as the method name.
	const METHOD: Method;

	/// The domain entity the call concerns.
	type Entity: Entity;

	/// How the response body wraps `Output`.
	type Shape: Shape;

	/// The value carried in the response `result` field (per item for lists).
	type Output: DeserializeOwned + Send;

	/// Accepted request parameters.
	type Params: Serialize + DeserializeOwned + Send + Sync;
}

/// Response wrapping strategy.
pub trait Shape {
	const KIND: MethodKind;

	type Payload<R: DeserializeOwned + Send>: DeserializeOwned + Send;
}

/// Shapes whose methods are Gettable.
pub trait GettableShape: Shape {}

/// `{ result: T, time }`
#[derive(Debug, Clone, Copy)]
pub enum Single {}

/// `{ result: [T], next, total, time }`
#[derive(Debug, Clone, Copy)]
pub enum Listing {}

/// Aggregate response keyed by batch label.
#[derive(Debug, Clone, Copy)]
pub enum Composite {}

impl Shape for Single {
	const KIND: MethodKind = MethodKind::Gettable;

	type Payload<R: DeserializeOwned + Send> = GetPayload<R>;
}

impl Shape for Listing {
	const KIND: MethodKind = MethodKind::Listable;

	type Payload<R: DeserializeOwned + Send> = ListPayload<R>;
}

impl Shape for Composite {
	const KIND: MethodKind = MethodKind::Gettable;

	type Payload<R: DeserializeOwned + Send> = BatchPayload;
}

impl GettableShape for Single {}
impl GettableShape for Composite {}

/// Methods answering with a paginated collection.
pub trait Listable: Wire<Shape = Listing, Params = ListParams> {}

impl<M> Listable for M where M: Wire<Shape = Listing, Params = ListParams> {}

/// Methods answering with a single entity or composite payload.
pub trait Gettable: Wire {}

impl<M> Gettable for M
where
	M: Wire,
	M::Shape: GettableShape,
{
}

/// The entity type associated with `M`.
pub type EntityOf<M> = <M as Wire>::Entity;

/// The params `M` accepts.
pub type ParamsOf<M> = <M as Wire>::Params;

/// The payload `M` returns.
pub type PayloadOf<M> = <<M as Wire>::Shape as Shape>::Payload<<M as Wire>::Output>;
