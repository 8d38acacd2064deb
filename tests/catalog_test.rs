#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mma_library::config::{DisplaySettings, MetadataConfig};
    use mma_library::library::Library;
    use mma_library::navigate::Navigator;
    use mma_library::records::EventRecord;
    use mma_library::store::{JsonStore, MetadataStore};
    use std::fs;
    use std::path::Path;

    fn event(id: &str, title: &str, promotion: &str, date: (i32, u32, u32)) -> EventRecord {
        EventRecord {
            id: id.to_string(),
            title: title.to_string(),
            promotion: promotion.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            venue: "Arena".to_string(),
            city: "Somewhere".to_string(),
            fights: Vec::new(),
        }
    }

    /// Lays out a library root with two event directories, a JSON index,
    /// and a populated JSON store, then builds a navigator over it all.
    fn build_catalog(root: &Path) -> Navigator {
        let ufc_dir = root.join("UFC 100");
        fs::create_dir_all(&ufc_dir).unwrap();
        fs::write(ufc_dir.join("01. Prelims.mkv"), b"").unwrap();
        fs::write(ufc_dir.join("02. Main Card.mkv"), b"").unwrap();
        fs::write(ufc_dir.join("cover.jpg"), b"").unwrap();

        let affliction_dir = root.join("Affliction Banned");
        fs::create_dir_all(&affliction_dir).unwrap();
        fs::write(affliction_dir.join("Affliction Banned.mkv"), b"").unwrap();

        fs::write(
            root.join("index.json"),
            r#"{ "9568": "UFC 100", "7379": "Affliction Banned" }"#,
        )
        .unwrap();

        let metadata = MetadataConfig {
            store_file: root.join("meta/store.json"),
            cache_dir: root.join("meta/cache"),
            promotion_dir: root.join("meta/promotions"),
        };
        fs::create_dir_all(&metadata.cache_dir).unwrap();
        fs::write(
            metadata.cache_dir.join("9568-description.txt"),
            "Two title fights on one card.",
        )
        .unwrap();

        let mut store = JsonStore::open(&metadata.store_file).unwrap();
        store
            .save_event(&event(
                "9568",
                "UFC 100",
                "Ultimate Fighting Championship",
                (2009, 7, 11),
            ))
            .unwrap();
        store
            .save_event(&event(
                "7379",
                "Affliction: Banned",
                "Affliction Entertainment",
                (2008, 7, 19),
            ))
            .unwrap();
        store
            .save_event(&event(
                "111",
                "Not In Library",
                "Ultimate Fighting Championship",
                (2009, 1, 1),
            ))
            .unwrap();

        // Reopen through the file to exercise persistence
        let store = JsonStore::open(&metadata.store_file).unwrap();
        let library = Library::load(&root.join("index.json"), root).unwrap();
        Navigator::new(
            Box::new(store),
            library,
            metadata,
            DisplaySettings {
                clean_filenames: true,
            },
        )
    }

    #[test]
    fn test_all_events_joins_store_and_library_in_date_order() {
        let dir = tempfile::tempdir().unwrap();
        let navigator = build_catalog(dir.path());

        let ids: Vec<String> = navigator
            .all_events()
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["7379", "9568"]);
    }

    #[test]
    fn test_event_video_listing_with_description_file() {
        let dir = tempfile::tempdir().unwrap();
        let navigator = build_catalog(dir.path());

        let listing = navigator.event_videos("9568").unwrap();
        assert_eq!(listing.videos.len(), 2);
        assert_eq!(listing.videos[0].display_title, "Prelims");
        assert_eq!(listing.videos[1].display_title, "Main Card");
        assert_eq!(listing.description, "Two title fights on one card.");
        assert!(listing.single().is_none());

        // cover.jpg was rejected by the extension allow-list
        assert!(listing.videos.iter().all(|v| v.extension == "mkv"));
    }

    #[test]
    fn test_single_file_event_uses_the_play_shortcut() {
        let dir = tempfile::tempdir().unwrap();
        let navigator = build_catalog(dir.path());

        let listing = navigator.event_videos("7379").unwrap();
        let only = listing.single().unwrap();
        assert_eq!(only.filename, "Affliction Banned.mkv");

        // No description file cached: outline fallback
        assert_eq!(
            listing.description,
            "Affliction Entertainment: Arena, Somewhere"
        );
    }

    #[test]
    fn test_promotions_and_search_come_from_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let navigator = build_catalog(dir.path());

        assert_eq!(
            navigator.promotions().unwrap(),
            vec!["Affliction Entertainment", "Ultimate Fighting Championship"]
        );

        let results = navigator.search("ultimate").unwrap();
        // Event 111 matches the promotion but is not on disk
        let ids: Vec<String> = results.events.into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["9568"]);
    }
}
