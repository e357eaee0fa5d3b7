//! `crm.deal.*` methods

use crate::{
	domain::{Deal, EntityId},
	infra::wire::{AddParams, GetParams, UpdateParams},
	ops::registry::MethodDescriptor,
	wire_method,
};

pub const SOURCE: &str = "deals";

wire_method! {
	DealGet => CrmDealGet {
		entity: Deal,
		single: Deal,
		params: GetParams,
	}
}

wire_method! {
	DealAdd => CrmDealAdd {
		entity: Deal,
		single: EntityId,
		params: AddParams<Deal>,
	}
}

wire_method! {
	DealUpdate => CrmDealUpdate {
		entity: Deal,
		single: bool,
		params: UpdateParams<Deal>,
	}
}

wire_method! {
	/// Filter with `ListFilter::probability_above` to skip long shots.
	DealList => CrmDealList {
		entity: Deal,
		list: Deal,
	}
}

pub fn methods() -> Vec<MethodDescriptor> {
	vec![
		MethodDescriptor::of::<DealGet>(),
		MethodDescriptor::of::<DealAdd>(),
		MethodDescriptor::of::<DealUpdate>(),
		MethodDescriptor::of::<DealList>(),
	]
}
