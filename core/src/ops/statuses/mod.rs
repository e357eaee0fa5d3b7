//! `crm.status.*` methods
//!
//! Reference books are small, so `crm.status.list` answers with the whole
//! book at once instead of a page; it is Gettable.

use crate::{
	domain::{EntityId, FieldMap, Status},
	infra::wire::{AddParams, GetParams, NoParams, StatusListParams, UpdateParams},
	ops::registry::MethodDescriptor,
	wire_method,
};

pub const SOURCE: &str = "statuses";

wire_method! {
	StatusGet => CrmStatusGet {
		entity: Status,
		single: Status,
		params: GetParams,
	}
}

wire_method! {
	StatusAdd => CrmStatusAdd {
		entity: Status,
		single: EntityId,
		params: AddParams<Status>,
	}
}

wire_method! {
	StatusUpdate => CrmStatusUpdate {
		entity: Status,
		single: bool,
		params: UpdateParams<Status>,
	}
}

wire_method! {
	StatusList => CrmStatusList {
		entity: Status,
		single: Vec<Status>,
		params: StatusListParams,
	}
}

wire_method! {
	/// Field descriptions of the status entity.
	StatusFields => CrmStatusFields {
		entity: Status,
		single: FieldMap,
		params: NoParams,
	}
}

pub fn methods() -> Vec<MethodDescriptor> {
	vec![
		MethodDescriptor::of::<StatusGet>(),
		MethodDescriptor::of::<StatusAdd>(),
		MethodDescriptor::of::<StatusUpdate>(),
		MethodDescriptor::of::<StatusList>(),
		MethodDescriptor::of::<StatusFields>(),
	]
}
