//! `crm.lead.*` methods

use crate::{
	domain::{EntityId, Lead},
	infra::wire::{AddParams, GetParams, UpdateParams},
	ops::registry::MethodDescriptor,
	wire_method,
};

pub const SOURCE: &str = "leads";

wire_method! {
	LeadGet => CrmLeadGet {
		entity: Lead,
		single: Lead,
		params: GetParams,
	}
}

wire_method! {
	LeadAdd => CrmLeadAdd {
		entity: Lead,
		single: EntityId,
		params: AddParams<Lead>,
	}
}

wire_method! {
	LeadUpdate => CrmLeadUpdate {
		entity: Lead,
		single: bool,
		params: UpdateParams<Lead>,
	}
}

wire_method! {
	LeadList => CrmLeadList {
		entity: Lead,
		list: Lead,
	}
}

pub fn methods() -> Vec<MethodDescriptor> {
	vec![
		MethodDescriptor::of::<LeadGet>(),
		MethodDescriptor::of::<LeadAdd>(),
		MethodDescriptor::of::<LeadUpdate>(),
		MethodDescriptor::of::<LeadList>(),
	]
}
