//! Closed enumeration of the Bitrix24 REST methods this crate knows about.
//!
//! Every variant maps to exactly one wire identifier, the literal string sent as
//! the method name. Classification into Listable and Gettable is driven by the
//! [`LISTABLE_METHODS`] roster alone: anything not on the roster is Gettable.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::error::UnknownMethod;

/// A remote method identifier.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	PartialOrd,
	Ord,
	Display,
	EnumCount,
	EnumIter,
	EnumString,
	IntoStaticStr,
)]
pub enum Method {
	#[strum(serialize = "batch")]
	Batch,

	#[strum(serialize = "crm.contact.get")]
	CrmContactGet,
	#[strum(serialize = "crm.deal.get")]
	CrmDealGet,
	#[strum(serialize = "crm.lead.get")]
	CrmLeadGet,
	#[strum(serialize = "crm.status.get")]
	CrmStatusGet,

	#[strum(serialize = "crm.contact.add")]
	CrmContactAdd,
	#[strum(serialize = "crm.deal.add")]
	CrmDealAdd,
	#[strum(serialize = "crm.lead.add")]
	CrmLeadAdd,
	#[strum(serialize = "crm.status.add")]
	CrmStatusAdd,

	#[strum(serialize = "crm.contact.update")]
	CrmContactUpdate,
	#[strum(serialize = "crm.deal.update")]
	CrmDealUpdate,
	#[strum(serialize = "crm.lead.update")]
	CrmLeadUpdate,
	#[strum(serialize = "crm.status.update")]
	CrmStatusUpdate,

	#[strum(serialize = "crm.contact.list")]
	CrmContactList,
	#[strum(serialize = "crm.deal.list")]
	CrmDealList,
	#[strum(serialize = "crm.lead.list")]
	CrmLeadList,
	#[strum(serialize = "crm.status.list")]
	CrmStatusList,

	// Bitrix has no `user.list`; `user.search` pages through every user.
	#[strum(serialize = "user.search")]
	UserSearch,
	#[strum(serialize = "user.get")]
	UserGet,

	#[strum(serialize = "crm.status.fields")]
	CrmStatusFields,
}

/// Methods whose response is a paginated collection.
///
/// `user.get` is not on it: it answers with one user, paging goes through `user.search`.
pub const LISTABLE_METHODS: [Method; 4] = [
	Method::CrmContactList,
	Method::CrmDealList,
	Method::CrmLeadList,
	Method::UserSearch,
];

/// How a method's response has to be unwrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MethodKind {
	/// Paginated collection: `result` is an array, `next` and `total` are present.
	Listable,
	/// Single entity or composite payload.
	Gettable,
}

impl Method {
	/// Wire identifier, e.g. `"crm.contact.get"`.
	pub fn as_str(self) -> &'static str {
		self.into()
	}

	/// Parse a wire identifier.
	pub fn from_wire(identifier: &str) -> Result<Self, UnknownMethod> {
		Self::from_str(identifier).map_err(|_| UnknownMethod(identifier.to_string()))
	}

	pub const fn is_listable(self) -> bool {
		let mut i = 0;
		while i < LISTABLE_METHODS.len() {
			if LISTABLE_METHODS[i] as usize == self as usize {
				return true;
			}
			i += 1;
		}
		false
	}

	pub const fn is_gettable(self) -> bool {
		!self.is_listable()
	}

	pub const fn kind(self) -> MethodKind {
		if self.is_listable() {
			MethodKind::Listable
		} else {
			MethodKind::Gettable
		}
	}
}

impl Serialize for Method {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for Method {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct MethodVisitor;

		impl<'de> de::Visitor<'de> for MethodVisitor {
			type Value = Method;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("a Bitrix24 method identifier")
			}

			fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
				Method::from_wire(v).map_err(E::custom)
			}
		}

		deserializer.deserialize_str(MethodVisitor)
	}
}
