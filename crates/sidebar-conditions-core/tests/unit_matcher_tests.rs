//! Unit tests for the page condition matcher

use sidebar_conditions_core::*;

// =============================================================================
// Scope Tests
// =============================================================================

#[test]
fn test_out_of_scope_is_exactly_not_buddypress() {
    let contexts = vec![
        PageContext::out_of_scope(),
        PageContext {
            in_scope: false,
            body_classes: vec!["members".to_string(), "directory".to_string()],
            displayed_member: Some(DisplayedMember::with_types(Vec::<String>::new())),
            current_group: Some(1),
        },
    ];

    for ctx in contexts {
        assert_eq!(match_conditions(&ctx), vec!["not-buddypress"]);
    }
}

#[test]
fn test_in_scope_without_classes_is_empty() {
    assert!(match_conditions(&PageContext::in_scope(Vec::<String>::new())).is_empty());
}

// =============================================================================
// Body Class Tests
// =============================================================================

#[test]
fn test_body_classes_prefixed_in_order() {
    let ctx = PageContext::in_scope(["buddypress", "directory", "members", "bp-user", "directory"]);

    assert_eq!(
        match_conditions(&ctx),
        vec![
            "buddypress",
            "bp-directory",
            "bp-members",
            "bp-user",
            "bp-directory"
        ]
    );
}

#[test]
fn test_prefix_rule_for_plain_tokens() {
    for token in ["activity", "inbox", "group-home", "single-item", "x"] {
        let ctx = PageContext::in_scope([token]);
        assert_eq!(match_conditions(&ctx), vec![format!("bp-{}", token)]);
    }
}

// =============================================================================
// Single Member Tests
// =============================================================================

#[test]
fn test_member_types_emitted() {
    let ctx = PageContext::in_scope(["xprofile"])
        .with_member(DisplayedMember::with_types(["teacher", "staff"]));

    let conditions = match_conditions(&ctx);
    assert_eq!(
        conditions,
        vec!["bp-xprofile", "bp-member-type-teacher", "bp-member-type-staff"]
    );
    assert!(!conditions.iter().any(|c| c == "bp-member-type-none"));
}

#[test]
fn test_member_without_types_gets_sentinel_once() {
    let ctx = PageContext::in_scope(["xprofile"])
        .with_member(DisplayedMember::with_types(Vec::<String>::new()));

    let conditions = match_conditions(&ctx);
    assert_eq!(conditions, vec!["bp-xprofile", "bp-member-type-none"]);
    assert_eq!(
        conditions
            .iter()
            .filter(|c| c.starts_with("bp-member-type"))
            .count(),
        1
    );
}

// =============================================================================
// Single Group Tests
// =============================================================================

#[test]
fn test_single_group_key() {
    let ctx = PageContext::in_scope(["groups", "group-home"]).with_group(5);
    assert_eq!(
        match_conditions(&ctx),
        vec!["bp-groups", "bp-group-home", "bp-group-5"]
    );
}

#[test]
fn test_member_and_group_order() {
    let ctx = PageContext::in_scope(["single-item"])
        .with_group(7)
        .with_member(DisplayedMember::with_types(["editor"]));

    assert_eq!(
        match_conditions(&ctx),
        vec!["bp-single-item", "bp-member-type-editor", "bp-group-7"]
    );
}

// =============================================================================
// Catalog Consistency Tests
// =============================================================================

#[test]
fn test_group_page_key_matches_catalog_key() {
    let availability = FeatureAvailability::none().with(Feature::Groups);
    let tree = build_catalog(&availability, None, &[GroupSummary::new(5, "Alpha")]);

    let ctx = PageContext::in_scope(["groups"]).with_group(5);
    let conditions = match_conditions(&ctx);
    assert!(conditions.iter().all(|c| tree.contains(c)));
}
