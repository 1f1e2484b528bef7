use std::sync::Arc;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use super::addons_errors::AddonError;
use super::addons_model::{Addon, AddonFlags, ParsedAddonInfo, WorkshopItem};
use super::addons_repository::InMemoryCatalog;
use super::addons_service::AddonService;
use super::addons_traits::AddonCatalogTrait;

fn addon(filename: &str, title: &str, version: &str) -> Addon {
    let stamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    Addon {
        filename: filename.to_string(),
        updated_at: stamp,
        created_at: stamp,
        file_size: 1024,
        flags: AddonFlags::empty(),
        title: title.to_string(),
        author: Some("someone".to_string()),
        version: version.to_string(),
        tagline: None,
        chapter_ids: None,
        workshop_id: None,
    }
}

#[test]
fn flags_decode_to_content_tags() {
    let flags = AddonFlags::CAMPAIGN | AddonFlags::WEAPON;
    assert_eq!(flags.content_tags(), vec!["Map", "Weapon"]);

    assert_eq!(AddonFlags::empty().content_tags(), Vec::<&str>::new());

    // WORKSHOP marks origin, not content
    assert_eq!(AddonFlags::WORKSHOP.content_tags(), Vec::<&str>::new());

    let all = AddonFlags::CAMPAIGN
        | AddonFlags::SURVIVOR
        | AddonFlags::SCRIPT
        | AddonFlags::SKIN
        | AddonFlags::WEAPON;
    assert_eq!(
        all.content_tags(),
        vec!["Map", "Survivor", "Script", "Skin", "Weapon"]
    );
}

#[test]
fn flags_preserve_unknown_bits() {
    let raw = 0b1000000 | AddonFlags::CAMPAIGN.bits();
    let flags = AddonFlags::from(raw);
    assert_eq!(flags.bits(), raw);
    // Unmapped bits decode to nothing
    assert_eq!(flags.content_tags(), vec!["Map"]);
}

#[tokio::test]
async fn insert_and_get() {
    let catalog = InMemoryCatalog::new();
    let scan_id = Uuid::new_v4();
    catalog
        .insert(addon("camp.vpk", "Camp", "1.0"), scan_id)
        .await
        .unwrap();

    let entry = catalog.get_by_filename("camp.vpk").await.unwrap().unwrap();
    assert_eq!(entry.addon.title, "Camp");
    assert!(entry.enabled);
    assert!(entry.tags.is_empty());
    assert!(entry.workshop_info.is_none());

    assert!(catalog.get_by_filename("other.vpk").await.unwrap().is_none());

    let by_key = catalog.get_by_key("Camp", "1.0").await.unwrap().unwrap();
    assert_eq!(by_key.addon.filename, "camp.vpk");
    assert!(catalog.get_by_key("Camp", "2.0").await.unwrap().is_none());
}

#[tokio::test]
async fn insert_rejects_duplicate_filename() {
    let catalog = InMemoryCatalog::new();
    let scan_id = Uuid::new_v4();
    catalog
        .insert(addon("camp.vpk", "Camp", "1.0"), scan_id)
        .await
        .unwrap();

    let err = catalog
        .insert(addon("camp.vpk", "Other", "2.0"), scan_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AddonError::Duplicate(f) if f == "camp.vpk"));
}

#[tokio::test]
async fn list_is_sorted_by_filename() {
    let catalog = InMemoryCatalog::new();
    let scan_id = Uuid::new_v4();
    catalog
        .insert(addon("b.vpk", "B", "1"), scan_id)
        .await
        .unwrap();
    catalog
        .insert(addon("a.vpk", "A", "1"), scan_id)
        .await
        .unwrap();

    let names: Vec<String> = catalog
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.addon.filename)
        .collect();
    assert_eq!(names, vec!["a.vpk", "b.vpk"]);
}

#[tokio::test]
async fn update_file_info_refreshes_metadata_and_parsed_fields() {
    let catalog = InMemoryCatalog::new();
    let scan_id = Uuid::new_v4();
    catalog
        .insert(addon("camp.vpk", "Camp", "1.0"), scan_id)
        .await
        .unwrap();

    let later = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let info = ParsedAddonInfo {
        title: Some("Camp Redux".to_string()),
        version: Some("1.1".to_string()),
        ..Default::default()
    };
    catalog
        .update_file_info("camp.vpk", later, 2048, &info, Uuid::new_v4())
        .await
        .unwrap();

    let entry = catalog.get_by_filename("camp.vpk").await.unwrap().unwrap();
    assert_eq!(entry.addon.updated_at, later);
    assert_eq!(entry.addon.file_size, 2048);
    assert_eq!(entry.addon.title, "Camp Redux");
    assert_eq!(entry.addon.version, "1.1");
    // Fields absent from the parse keep their old values
    assert_eq!(entry.addon.author.as_deref(), Some("someone"));
}

#[tokio::test]
async fn rename_moves_entry_to_new_filename() {
    let catalog = InMemoryCatalog::new();
    let scan_id = Uuid::new_v4();
    catalog
        .insert(addon("old.vpk", "Camp", "1.0"), scan_id)
        .await
        .unwrap();

    let renamed = catalog
        .rename("Camp", "1.0", "new.vpk", Uuid::new_v4())
        .await
        .unwrap();
    assert!(renamed);
    assert!(catalog.get_by_filename("old.vpk").await.unwrap().is_none());
    let entry = catalog.get_by_filename("new.vpk").await.unwrap().unwrap();
    assert_eq!(entry.addon.title, "Camp");

    let renamed = catalog
        .rename("Nobody", "9.9", "x.vpk", Uuid::new_v4())
        .await
        .unwrap();
    assert!(!renamed);
}

#[tokio::test]
async fn prune_removes_entries_not_seen_by_scan() {
    let catalog = InMemoryCatalog::new();
    let old_scan = Uuid::new_v4();
    catalog
        .insert(addon("kept.vpk", "Kept", "1"), old_scan)
        .await
        .unwrap();
    catalog
        .insert(addon("gone.vpk", "Gone", "1"), old_scan)
        .await
        .unwrap();

    let new_scan = Uuid::new_v4();
    catalog.touch("kept.vpk", new_scan).await.unwrap();

    let removed = catalog.prune_unseen(new_scan).await.unwrap();
    assert_eq!(removed, vec!["gone.vpk"]);
    assert!(catalog.get_by_filename("gone.vpk").await.unwrap().is_none());
    assert!(catalog.get_by_filename("kept.vpk").await.unwrap().is_some());
}

#[tokio::test]
async fn set_enabled_toggles_flag_only() {
    let catalog = InMemoryCatalog::new();
    catalog
        .insert(addon("camp.vpk", "Camp", "1"), Uuid::new_v4())
        .await
        .unwrap();

    catalog.set_enabled("camp.vpk", false).await.unwrap();
    let entry = catalog.get_by_filename("camp.vpk").await.unwrap().unwrap();
    assert!(!entry.enabled);
    assert_eq!(entry.addon.title, "Camp");

    let err = catalog.set_enabled("nope.vpk", true).await.unwrap_err();
    assert!(matches!(err, AddonError::NotFound(_)));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let catalog = InMemoryCatalog::new();
    catalog
        .insert(addon("camp.vpk", "Camp", "1"), Uuid::new_v4())
        .await
        .unwrap();

    catalog.delete("camp.vpk").await.unwrap();
    assert!(catalog.get_by_filename("camp.vpk").await.unwrap().is_none());
    // Deleting an unknown filename is a no-op
    catalog.delete("camp.vpk").await.unwrap();
}

#[tokio::test]
async fn tags_are_deduplicated_and_sorted() {
    let catalog = InMemoryCatalog::new();
    catalog
        .insert(addon("camp.vpk", "Camp", "1"), Uuid::new_v4())
        .await
        .unwrap();

    catalog.add_tag("camp.vpk", "Fun").await.unwrap();
    catalog.add_tag("camp.vpk", "Coop").await.unwrap();
    catalog.add_tag("camp.vpk", "Fun").await.unwrap();

    let entry = catalog.get_by_filename("camp.vpk").await.unwrap().unwrap();
    assert_eq!(entry.tags, vec!["Coop", "Fun"]);

    catalog.remove_tag("camp.vpk", "Fun").await.unwrap();
    let entry = catalog.get_by_filename("camp.vpk").await.unwrap().unwrap();
    assert_eq!(entry.tags, vec!["Coop"]);
}

#[tokio::test]
async fn workshop_items_join_onto_entries() {
    let catalog = InMemoryCatalog::new();
    let mut workshop_addon = addon("123456.vpk", "Cool Map", "2");
    workshop_addon.workshop_id = Some(123456);
    catalog
        .insert(workshop_addon, Uuid::new_v4())
        .await
        .unwrap();

    assert!(catalog.workshop_ids().await.unwrap().is_empty());
    catalog
        .add_workshop_items(vec![WorkshopItem {
            published_file_id: 123456,
            title: "Cool Map (Workshop)".to_string(),
        }])
        .await
        .unwrap();
    assert_eq!(catalog.workshop_ids().await.unwrap(), vec![123456]);

    let entry = catalog
        .get_by_filename("123456.vpk")
        .await
        .unwrap()
        .unwrap();
    let info = entry.workshop_info.unwrap();
    assert_eq!(info.published_file_id, 123456);
    assert_eq!(info.title, "Cool Map (Workshop)");
}

#[tokio::test]
async fn service_trims_tags_and_rejects_empty_ones() {
    let catalog = Arc::new(InMemoryCatalog::new());
    catalog
        .insert(addon("camp.vpk", "Camp", "1"), Uuid::new_v4())
        .await
        .unwrap();
    let service = AddonService::new(catalog.clone());

    service.add_tag("camp.vpk", "  Fun  ").await.unwrap();
    let entry = service.get("camp.vpk").await.unwrap().unwrap();
    assert_eq!(entry.tags, vec!["Fun"]);

    let err = service.add_tag("camp.vpk", "   ").await.unwrap_err();
    assert!(matches!(err, AddonError::InvalidInput(_)));
}
