//! `crm.contact.*` methods

use crate::{
	domain::{Contact, EntityId},
	infra::wire::{AddParams, GetParams, UpdateParams},
	ops::registry::MethodDescriptor,
	wire_method,
};

pub const SOURCE: &str = "contacts";

wire_method! {
	ContactGet => CrmContactGet {
		entity: Contact,
		single: Contact,
		params: GetParams,
	}
}

wire_method! {
	/// Answers with the id of the new contact.
	ContactAdd => CrmContactAdd {
		entity: Contact,
		single: EntityId,
		params: AddParams<Contact>,
	}
}

wire_method! {
	ContactUpdate => CrmContactUpdate {
		entity: Contact,
		single: bool,
		params: UpdateParams<Contact>,
	}
}

wire_method! {
	ContactList => CrmContactList {
		entity: Contact,
		list: Contact,
	}
}

pub fn methods() -> Vec<MethodDescriptor> {
	vec![
		MethodDescriptor::of::<ContactGet>(),
		MethodDescriptor::of::<ContactAdd>(),
		MethodDescriptor::of::<ContactUpdate>(),
		MethodDescriptor::of::<ContactList>(),
	]
}
