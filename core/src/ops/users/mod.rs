//! `user.*` methods
//!
//! These are registered directly by [`crate::ops::registry`] rather than
//! through a domain table of their own.

use crate::{domain::User, infra::wire::GetParams, wire_method};

wire_method! {
	UserGet => UserGet {
		entity: User,
		single: User,
		params: GetParams,
	}
}

wire_method! {
	/// Pages through every user of the portal; there is no `user.list`.
	UserSearch => UserSearch {
		entity: User,
		list: User,
	}
}
