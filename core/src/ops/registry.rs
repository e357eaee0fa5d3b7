//! Runtime method registry.
//!
//! Typed methods resolve their shapes at compile time through [`Wire`]. This
//! module builds the runtime counterpart: a descriptor per identifier, composed
//! from the per-domain tables and validated once when first used.
//!
//! ## Composition
//!
//! The registry is the disjoint union of the contacts, deals, leads and
//! statuses tables plus three entries defined here directly (`batch`,
//! `user.get`, `user.search`). Composition fails if two tables define the same
//! identifier, if an identifier has no descriptor, or if a descriptor's shape
//! disagrees with the Listable roster.
//!
//! ## Usage
//!
//! ```rust,ignore
//! wire_method! {
//!     /// Fetch one contact.
//!     ContactGet => CrmContactGet {
//!         entity: Contact,
//!         single: Contact,
//!         params: GetParams,
//!     }
//! }
//!
//! let registry = Registry::global()?;
//! registry.validate_params(Method::CrmContactGet, &json!({ "id": "1" }))?;
//! ```

use std::{any::type_name, collections::BTreeMap};

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value;
use strum::IntoEnumIterator;
use tracing::{debug, error};

use crate::{
	domain::{Entity, EntityType},
	error::{RegistryError, ShapeError},
	infra::wire::{Method, MethodKind, PayloadOf, Shape, Wire},
	ops::{batch::Batch, contacts, deals, leads, statuses, users},
};

/// Name of the source holding the entries defined directly in this module.
pub const DIRECT_SOURCE: &str = "direct";

/// Runtime description of one method.
#[derive(Debug, Clone, Copy)]
pub struct MethodDescriptor {
	pub method: Method,
	pub kind: MethodKind,
	pub entity: EntityType,
	/// Rust type name of the payload, for diagnostics.
	pub payload: &'static str,
	/// Rust type name of the params, for diagnostics.
	pub params: &'static str,
	validate_params: fn(&Value) -> Result<(), serde_json::Error>,
	validate_payload: fn(&Value) -> Result<(), serde_json::Error>,
}

impl MethodDescriptor {
	pub fn of<M: Wire>() -> Self {
		Self {
			method: M::METHOD,
			kind: <M::Shape as Shape>::KIND,
			entity: <M::Entity as Entity>::TYPE,
			payload: type_name::<PayloadOf<M>>(),
			params: type_name::<M::Params>(),
			validate_params: conforms::<M::Params>,
			validate_payload: conforms::<PayloadOf<M>>,
		}
	}
}

fn conforms<T: DeserializeOwned>(value: &Value) -> Result<(), serde_json::Error> {
	T::deserialize(value).map(drop)
}

/// Entries defined directly rather than by a domain table.
pub fn direct_methods() -> Vec<MethodDescriptor> {
	vec![
		MethodDescriptor::of::<Batch>(),
		MethodDescriptor::of::<users::UserGet>(),
		MethodDescriptor::of::<users::UserSearch>(),
	]
}

/// Every descriptor table, named after the domain defining it.
pub fn sources() -> Vec<(&'static str, Vec<MethodDescriptor>)> {
	vec![
		(contacts::SOURCE, contacts::methods()),
		(deals::SOURCE, deals::methods()),
		(leads::SOURCE, leads::methods()),
		(statuses::SOURCE, statuses::methods()),
		(DIRECT_SOURCE, direct_methods()),
	]
}

static REGISTRY: Lazy<Result<Registry, RegistryError>> = Lazy::new(|| Registry::compose(sources()));

/// Validated method-to-descriptor table.
#[derive(Debug, Clone)]
pub struct Registry {
	methods: BTreeMap<Method, MethodDescriptor>,
}

impl Registry {
	/// The process-wide registry, composed from [`sources`] on first access.
	pub fn global() -> Result<&'static Registry, RegistryError> {
		match &*REGISTRY {
			Ok(registry) => Ok(registry),
			Err(err) => Err(err.clone()),
		}
	}

	/// Merge descriptor tables into one registry.
	///
	/// Every [`Method`] must be described exactly once, with a shape matching
	/// its classification.
	pub fn compose<I>(sources: I) -> Result<Self, RegistryError>
	where
		I: IntoIterator<Item = (&'static str, Vec<MethodDescriptor>)>,
	{
		let mut methods = BTreeMap::new();
		let mut origins = BTreeMap::new();

		for (source, descriptors) in sources {
			for descriptor in descriptors {
				let method = descriptor.method;

				if descriptor.kind != method.kind() {
					error!(%method, source, "Method shape disagrees with its classification");
					return Err(RegistryError::KindMismatch {
						method,
						described: descriptor.kind,
						classified: method.kind(),
					});
				}

				if let Some(first) = origins.insert(method, source) {
					error!(%method, first, second = source, "Method defined twice");
					return Err(RegistryError::DuplicateMethod {
						method,
						first,
						second: source,
					});
				}

				methods.insert(method, descriptor);
			}
		}

		if let Some(method) = Method::iter().find(|method| !methods.contains_key(method)) {
			error!(%method, "Method has no descriptor");
			return Err(RegistryError::MissingMethod(method));
		}

		debug!(count = methods.len(), "Composed method registry");

		Ok(Self { methods })
	}

	pub fn get(&self, method: Method) -> Option<&MethodDescriptor> {
		self.methods.get(&method)
	}

	/// Like [`Registry::get`], failing for an unregistered method.
	pub fn descriptor(&self, method: Method) -> Result<&MethodDescriptor, ShapeError> {
		self.get(method).ok_or(ShapeError::Unregistered(method))
	}

	pub fn len(&self) -> usize {
		self.methods.len()
	}

	pub fn is_empty(&self) -> bool {
		self.methods.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &MethodDescriptor> {
		self.methods.values()
	}

	pub fn listable(&self) -> impl Iterator<Item = &MethodDescriptor> {
		self.iter()
			.filter(|descriptor| descriptor.kind == MethodKind::Listable)
	}

	pub fn gettable(&self) -> impl Iterator<Item = &MethodDescriptor> {
		self.iter()
			.filter(|descriptor| descriptor.kind == MethodKind::Gettable)
	}

	/// Check a JSON params object against the shape `method` accepts.
	pub fn validate_params(&self, method: Method, params: &Value) -> Result<(), ShapeError> {
		let descriptor = self.descriptor(method)?;
		(descriptor.validate_params)(params).map_err(|source| ShapeError::Params { method, source })
	}

	/// Check a JSON response body against the payload `method` returns.
	pub fn validate_payload(&self, method: Method, payload: &Value) -> Result<(), ShapeError> {
		let descriptor = self.descriptor(method)?;
		(descriptor.validate_payload)(payload)
			.map_err(|source| ShapeError::Payload { method, source })
	}
}

/// Declare a typed method.
///
/// `single: T` methods answer with `GetPayload<T>`; `list: T` methods take
/// `ListParams` and answer with `ListPayload<T>`. Declaring a shape that
/// disagrees with the Listable roster fails to compile.
#[macro_export]
macro_rules! wire_method {
	(
		$(#[$meta:meta])*
		$name:ident => $method:ident {
			entity: $entity:ty,
			single: $output:ty,
			params: $params:ty $(,)?
		}
	) => {
		$crate::wire_method!(@impl $(#[$meta])* $name, $method, $entity, Single, $output, $params);
	};
	(
		$(#[$meta:meta])*
		$name:ident => $method:ident {
			entity: $entity:ty,
			list: $output:ty $(,)?
		}
	) => {
		$crate::wire_method!(
			@impl $(#[$meta])* $name, $method, $entity, Listing, $output,
			$crate::infra::wire::ListParams
		);
	};
	(@impl $(#[$meta:meta])* $name:ident, $method:ident, $entity:ty, $shape:ident, $output:ty, $params:ty) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
		pub struct $name;

		impl $crate::infra::wire::Wire for $name {
			const METHOD: $crate::infra::wire::Method = $crate::infra::wire::Method::$method;
			type Entity = $entity;
			type Shape = $crate::infra::wire::$shape;
			type Output = $output;
			type Params = $params;
		}

		const _: () = assert!(
			$crate::infra::wire::Method::$method.is_listable()
				== matches!(
					<$crate::infra::wire::$shape as $crate::infra::wire::Shape>::KIND,
					$crate::infra::wire::MethodKind::Listable
				),
			concat!("`", stringify!($method), "` shape disagrees with the listable roster"),
		);
	};
}
