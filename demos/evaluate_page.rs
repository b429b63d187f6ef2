//! Evaluate a few pages against a small site
//!
//! Run with: RUST_LOG=debug cargo run --example evaluate_page

use sidebar_conditions_sdk::{
    ConditionEngineBuilder, DisplayedMember, Feature, FeatureAvailability, GroupSummary,
    MemberType, PageContext, Sidebar,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = ConditionEngineBuilder::new()
        .with_availability(
            FeatureAvailability::none()
                .with(Feature::Activity)
                .with(Feature::Groups)
                .with(Feature::Profile),
        )
        .with_member_types(vec![MemberType::new("teacher", "Teacher")])
        .with_groups(vec![
            GroupSummary::new(5, "Alpha"),
            GroupSummary::new(2, "Beta"),
        ])
        .build()?;

    println!("=== Catalog ===\n");
    let catalog = engine.catalog()?;
    for group in &catalog.groups {
        println!("{} ({})", group.heading, group.key);
        for condition in &group.conditions {
            println!("   {:<28} {}", condition.key, condition.label);
        }
    }

    println!("\n=== Pages ===\n");
    let sidebars = vec![
        Sidebar::new(1, "Community").with_condition("buddypress"),
        Sidebar::new(2, "Alpha group").with_condition("bp-group-5"),
        Sidebar::new(3, "Teachers").with_condition("bp-member-type-teacher"),
    ];

    let pages = vec![
        ("blog post", PageContext::out_of_scope()),
        (
            "group home",
            PageContext::in_scope(["buddypress", "groups", "group-home"]).with_group(5),
        ),
        (
            "teacher profile",
            PageContext::in_scope(["buddypress", "xprofile"])
                .with_member(DisplayedMember::with_types(["teacher"])),
        ),
        (
            "untyped profile",
            PageContext::in_scope(["buddypress", "xprofile"])
                .with_member(DisplayedMember::with_types(Vec::<String>::new())),
        ),
    ];

    for (name, page) in &pages {
        let conditions = engine.evaluate(page);
        let sidebar = engine
            .select_sidebar(&sidebars, page)
            .map(|s| s.name.as_str())
            .unwrap_or("(default)");
        println!("{:<16} {} -> {}", name, serde_json::to_string(&conditions)?, sidebar);
    }

    Ok(())
}
