//! Condition catalog builder
//!
//! The catalog mirrors the page types the social network reports through its
//! body classes. Which entries appear depends on the active components, the
//! member types and the groups of the installation.

use crate::condition::{group_keys, CatalogTree, ConditionDefinition, ConditionGroup};
use crate::types::{FeatureAvailability, GroupSummary, MemberType};
use log::debug;

/// Sentinel condition for a displayed member without any member type
pub const NO_MEMBER_TYPE: &str = "bp-member-type-none";

/// Condition that applies to every page outside the social network
pub const NOT_IN_SCOPE: &str = "not-buddypress";

type Entry = (&'static str, &'static str, &'static str);

const CORE: &[Entry] = &[
    ("buddypress", "BuddyPress pages", "Applies to all pages within BuddyPress."),
    (NOT_IN_SCOPE, "Not-BuddyPress pages", "Applies to all pages except those of BuddyPress."),
    ("bp-registration", "Registration page", "The member registration page."),
    ("bp-activation", "Activation page", "The member activation page."),
    ("bp-directory", "Directories", "Applies to all list pages."),
    ("bp-single-item", "Single items", "Applies to all pages of a single item (member/group)"),
];

const MEMBERS: &[Entry] = &[
    ("bp-members", "Members Directory", "The members list page."),
    ("bp-user", "Single member", "The pages of a single member."),
];

const ACTIVITY: &[Entry] = &[
    ("bp-activity-component", "Activity pages", "Applies to all pages of the activity component."),
    ("bp-activity", "Activity Directory", "The activity list page."),
    ("bp-activity-permalink", "Single Activity", "The single activity page."),
];

const GROUPS_ACTIVITY: Entry = ("bp-groups-activity", "Group Activity", "The activity page for a group");
const FRIENDS_ACTIVITY: Entry = ("bp-friends-activity", "Friends Activity", "The activity page for a member's friends");

const GROUPS: &[Entry] = &[
    ("bp-groups", "Groups Directory", "The groups list page."),
    ("bp-group-create", "Group Creation", "The groups creation pages."),
    ("bp-leave-group", "Leave Group", "The leave group page."),
    ("bp-group-invites", "Group Invites", "The group invites page."),
    ("bp-group-members", "Group Members", "The group members page."),
    ("bp-group-admin", "Group Administration", "The group administration pages."),
    ("bp-group-home", "Group Home", "The group home page."),
];

const FORUMS: &[Entry] = &[
    ("bp-group-forum-topic", "Group Forum Topic", "The group forum topic page."),
    ("bp-group-forum-topic-edit", "Group Forum Topic Edit", "The group forum topic edit page."),
    ("bp-group-forum", "Group Forum", "The group forum page."),
];

const PROFILE: &[Entry] = &[
    ("bp-xprofile", "Member Profile", "The member profile page."),
    ("bp-profile-edit", "Profile Edit", "The member profile edit page."),
    ("bp-change-avatar", "Change Avatar", "The member change avatar page."),
];

const FRIENDS: &[Entry] = &[
    ("bp-friends", "Friends pages", "The members friends page."),
    ("bp-friend-requests", "Friend Requests", "The members friends requests page."),
];

const MESSAGES: &[Entry] = &[
    ("bp-messages", "Messages pages", "The members messages pages."),
    ("bp-inbox", "Inbox", "The messages inbox page."),
    ("bp-sentbox", "Sentbox", "The messages sentbox page."),
    ("bp-compose", "Compose", "The messages compose page."),
    ("bp-notices", "Notices", "The messages notices page."),
];

const BLOGS: &[Entry] = &[
    ("bp-blogs", "Blogs", "The members blogs pages."),
    ("bp-create-blog", "Create blogs", "The blogs creation page."),
    ("bp-recent-comments", "Recent Comments", "The recent blog comments page."),
    ("bp-recent-posts", "Recent Posts", "The recent blog posts page."),
];

const MY_ACTIVITY: Entry = ("bp-my-activity", "My Activity", "The logged-in member's activity page.");
const MY_GROUPS: Entry = ("bp-my-groups", "My Groups", "The logged-in member's groups page.");
const MY_PROFILE: Entry = ("bp-my-profile", "My Profile", "The logged-in member's profile pages.");
const MY_FRIENDS: Entry = ("bp-my-friends", "My Friends", "The logged-in member's friends page.");
const MY_MESSAGES: Entry = ("bp-my-messages", "My Messages", "The logged-in member's messages page.");
const NOTIFICATIONS: Entry = ("bp-notifications", "Notifications", "The members notifications page.");
const SETTINGS: Entry = ("bp-settings", "Settings", "The members settings pages.");
const MY_BLOGS: Entry = ("bp-my-blogs", "My Blogs", "The logged-in member's blogs page.");

fn definition(entry: &Entry) -> ConditionDefinition {
    ConditionDefinition::new(entry.0, entry.1, entry.2)
}

fn definitions(entries: &[Entry]) -> Vec<ConditionDefinition> {
    entries.iter().map(definition).collect()
}

/// Catalog key of a member type
pub fn member_type_key(name: &str) -> String {
    format!("bp-member-type_{}", name)
}

/// Catalog and page key of a single group
pub fn group_key(id: u64) -> String {
    format!("bp-group-{}", id)
}

fn member_type_conditions(types: &[MemberType]) -> Vec<ConditionDefinition> {
    let mut group = ConditionGroup::new(group_keys::MEMBERS);

    group.extend(types.iter().map(|member_type| {
        ConditionDefinition::new(
            member_type_key(&member_type.name),
            format!("Member Type: {}", member_type.singular_name),
            format!("The displayed member is a {}.", member_type.singular_name),
        )
    }));

    group.insert(ConditionDefinition::new(
        NO_MEMBER_TYPE,
        "No member type",
        "The displayed member has no member type.",
    ));

    group.conditions
}

fn group_condition(group: &GroupSummary) -> ConditionDefinition {
    ConditionDefinition::new(
        group_key(group.id),
        format!("Group: {}", group.name),
        format!("The displayed group is {}.", group.name),
    )
}

/// Build the condition catalog for an installation.
///
/// `member_types` is `None` when the installation has no member type support.
/// `groups` is expected in alphabetical order; it is listed as given.
pub fn build_catalog(
    availability: &FeatureAvailability,
    member_types: Option<&[MemberType]>,
    groups: &[GroupSummary],
) -> CatalogTree {
    let mut tree = CatalogTree::new();

    tree.push_group(ConditionGroup::with_conditions(
        group_keys::BUDDYPRESS,
        definitions(CORE),
    ));

    let mut members = ConditionGroup::with_conditions(group_keys::MEMBERS, definitions(MEMBERS));
    let mut logged_in = ConditionGroup::new(group_keys::LOGGED_IN);

    if let Some(types) = member_types.filter(|t| !t.is_empty()) {
        members.merge(member_type_conditions(types));
    }

    let mut activity = None;
    if availability.activity {
        let mut group = ConditionGroup::with_conditions(group_keys::ACTIVITY, definitions(ACTIVITY));
        if availability.groups {
            group.insert(definition(&GROUPS_ACTIVITY));
        }
        if availability.friends {
            group.insert(definition(&FRIENDS_ACTIVITY));
        }
        activity = Some(group);
        logged_in.insert(definition(&MY_ACTIVITY));
    }

    let mut groups_group = None;
    if availability.groups {
        let mut group = ConditionGroup::with_conditions(group_keys::GROUPS, definitions(GROUPS));
        if availability.forums {
            group.extend(definitions(FORUMS));
        }
        group.extend(groups.iter().map(group_condition));
        groups_group = Some(group);
        logged_in.insert(definition(&MY_GROUPS));
    }

    if availability.profile {
        members.merge(definitions(PROFILE));
        logged_in.insert(definition(&MY_PROFILE));
    }

    if availability.friends {
        members.merge(definitions(FRIENDS));
        logged_in.insert(definition(&MY_FRIENDS));
    }

    let mut messages = None;
    if availability.messages {
        messages = Some(ConditionGroup::with_conditions(
            group_keys::MESSAGES,
            definitions(MESSAGES),
        ));
        logged_in.insert(definition(&MY_MESSAGES));
    }

    if availability.notifications {
        logged_in.insert(definition(&NOTIFICATIONS));
    }

    if availability.settings {
        logged_in.insert(definition(&SETTINGS));
    }

    if availability.blogs {
        members.merge(definitions(BLOGS));
        logged_in.insert(definition(&MY_BLOGS));
    }

    tree.push_group(members);
    for group in [activity, groups_group, messages].into_iter().flatten() {
        tree.push_group(group);
    }
    if !logged_in.is_empty() {
        tree.push_group(logged_in);
    }

    debug!(
        "Built condition catalog: {} groups, {} conditions",
        tree.groups.len(),
        tree.len()
    );

    tree
}
