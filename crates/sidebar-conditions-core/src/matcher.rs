//! Page condition matcher
//!
//! Turns a [`PageContext`] into the condition keys that apply to the page.
//! Body classes are passed through with a `bp-` prefix, then single member
//! and single group pages add their own keys.

use crate::registry::{group_key, NOT_IN_SCOPE, NO_MEMBER_TYPE};
use crate::types::{DisplayedMember, PageContext};
use log::{debug, trace};

const PREFIX: &str = "bp-";
const SCOPE_CLASS: &str = "buddypress";

/// Force the `bp-` prefix onto a body class.
///
/// Classes that contain `bp-` anywhere, and the literal `buddypress`, are
/// returned unchanged.
pub fn normalize_body_class(class: &str) -> String {
    if class.contains(PREFIX) || class == SCOPE_CLASS {
        class.to_string()
    } else {
        format!("{}{}", PREFIX, class)
    }
}

/// Page key of a member type.
///
/// Note the dash: catalog keys use `bp-member-type_<name>`.
pub fn member_type_page_key(name: &str) -> String {
    format!("bp-member-type-{}", name)
}

/// Condition keys for the current page, in insertion order. Duplicates are
/// kept.
pub fn match_conditions(ctx: &PageContext) -> Vec<String> {
    append_conditions(Vec::new(), ctx)
}

/// Append the condition keys for the current page to a list collected by
/// the host.
pub fn append_conditions(mut conditions: Vec<String>, ctx: &PageContext) -> Vec<String> {
    if !ctx.in_scope {
        debug!("Page is outside the social network");
        conditions.push(NOT_IN_SCOPE.to_string());
        return conditions;
    }

    for class in &ctx.body_classes {
        let key = normalize_body_class(class);
        trace!("Body class '{}' -> '{}'", class, key);
        conditions.push(key);
    }

    if let Some(member) = &ctx.displayed_member {
        push_member_types(&mut conditions, member);
    }

    if let Some(group_id) = ctx.current_group {
        conditions.push(group_key(group_id));
    }

    conditions
}

fn push_member_types(conditions: &mut Vec<String>, member: &DisplayedMember) {
    let Some(types) = &member.member_types else {
        return;
    };

    if types.is_empty() {
        conditions.push(NO_MEMBER_TYPE.to_string());
    } else {
        conditions.extend(types.iter().map(|t| member_type_page_key(t)));
    }
}
