use crate::config::{DisplaySettings, MetadataConfig};
use crate::error::{LibraryError, Result};
use crate::library::Library;
use crate::reconcile::{self, Artwork};
use crate::records::{EventRecord, FighterRecord, VideoFile};
use crate::store::MetadataStore;
use tracing::info;

/// Browsing facade over the metadata store and the on-disk library.
/// Event listings only show events that exist in both; configuration is
/// passed in explicitly, nothing is read from process-wide state.
pub struct Navigator {
    store: Box<dyn MetadataStore>,
    library: Library,
    metadata: MetadataConfig,
    display: DisplaySettings,
}

/// A fighter row plus the career fight count listings show next to it.
#[derive(Debug)]
pub struct FighterListing {
    pub fighter: FighterRecord,
    pub fight_count: usize,
}

/// Matches for a search term across both record kinds.
#[derive(Debug)]
pub struct SearchResults {
    pub events: Vec<EventRecord>,
    pub fighters: Vec<FighterListing>,
}

/// One event's playable files plus its display trimmings.
#[derive(Debug)]
pub struct VideoListing {
    pub event: EventRecord,
    pub artwork: Artwork,
    pub description: String,
    pub videos: Vec<VideoFile>,
}

impl VideoListing {
    /// The exactly-one-video shortcut: callers play this directly instead
    /// of showing a one-item list.
    pub fn single(&self) -> Option<&VideoFile> {
        match self.videos.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

impl Navigator {
    pub fn new(
        store: Box<dyn MetadataStore>,
        library: Library,
        metadata: MetadataConfig,
        display: DisplaySettings,
    ) -> Self {
        Self {
            store,
            library,
            metadata,
            display,
        }
    }

    /// Every stored event with a library entry, ordered by (date, id).
    pub fn all_events(&self) -> Result<Vec<EventRecord>> {
        info!("Browsing: all events");
        Ok(self.in_library(self.store.all_events()?))
    }

    /// Distinct promotion names, alphabetical.
    pub fn promotions(&self) -> Result<Vec<String>> {
        info!("Browsing: promotions");
        self.store.promotions()
    }

    pub fn events_by_promotion(&self, name: &str) -> Result<Vec<EventRecord>> {
        info!("Listing events for promotion: {}", name);
        Ok(self.in_library(self.store.events_by_promotion(name)?))
    }

    /// All stored fighters with their fight counts, ordered by name.
    pub fn fighters(&self) -> Result<Vec<FighterListing>> {
        info!("Browsing: fighters");
        let fighters = self.store.all_fighters()?;
        self.with_fight_counts(fighters)
    }

    pub fn events_by_fighter(&self, fighter_id: &str) -> Result<Vec<EventRecord>> {
        info!("Listing events for fighter: {}", fighter_id);
        Ok(self.in_library(self.store.events_by_fighter(fighter_id)?))
    }

    /// Case-insensitive substring search. Event matches are joined against
    /// the library; fighter matches are not.
    pub fn search(&self, term: &str) -> Result<SearchResults> {
        info!("Searching library for: {}", term);
        let events = self.in_library(self.store.search_events(term)?);
        let fighters = self.with_fight_counts(self.store.search_fighters(term)?)?;
        Ok(SearchResults { events, fighters })
    }

    /// The video listing for one event. Fails with `MissingMetadata` when
    /// the store or the library index has no record of the id.
    pub fn event_videos(&self, event_id: &str) -> Result<VideoListing> {
        let event = self
            .store
            .event(event_id)?
            .ok_or_else(|| LibraryError::MissingMetadata(event_id.to_string()))?;
        let entry = self
            .library
            .entry(event_id)
            .ok_or_else(|| LibraryError::MissingMetadata(event_id.to_string()))?;

        info!("Listing video files for event: {}", event.title);
        let videos = reconcile::resolve_videos(entry, &self.display)?;
        let artwork = reconcile::resolve_artwork(&event, &self.metadata);
        let description = reconcile::resolve_description(&event, &self.metadata);

        Ok(VideoListing {
            event,
            artwork,
            description,
            videos,
        })
    }

    fn in_library(&self, events: Vec<EventRecord>) -> Vec<EventRecord> {
        events
            .into_iter()
            .filter(|event| self.library.contains(&event.id))
            .collect()
    }

    fn with_fight_counts(&self, fighters: Vec<FighterRecord>) -> Result<Vec<FighterListing>> {
        fighters
            .into_iter()
            .map(|fighter| {
                let fight_count = self.store.fight_count(&fighter.id)?;
                Ok(FighterListing {
                    fighter,
                    fight_count,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::FightRecord;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::Path;

    fn event(id: &str, title: &str, promotion: &str, date: (i32, u32, u32)) -> EventRecord {
        EventRecord {
            id: id.to_string(),
            title: title.to_string(),
            promotion: promotion.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            venue: "Arena".to_string(),
            city: "City".to_string(),
            fights: vec![FightRecord {
                id: "f1".to_string(),
                fighter1_id: "100".to_string(),
                fighter2_id: "200".to_string(),
                winner_id: String::new(),
                result: "Decision".to_string(),
                round: 3,
                time: "5:00".to_string(),
            }],
        }
    }

    fn library_with(root: &Path, ids_and_dirs: &[(&str, &str)]) -> Library {
        let pairs: Vec<String> = ids_and_dirs
            .iter()
            .map(|(id, dir)| format!(r#""{}": "{}""#, id, dir))
            .collect();
        let index_path = root.join("index.json");
        fs::write(&index_path, format!("{{ {} }}", pairs.join(", "))).unwrap();
        Library::load(&index_path, root).unwrap()
    }

    fn metadata_config(root: &Path) -> MetadataConfig {
        MetadataConfig {
            store_file: root.join("store.json"),
            cache_dir: root.join("cache"),
            promotion_dir: root.join("promotions"),
        }
    }

    fn navigator(root: &Path, store: MemoryStore, library: Library) -> Navigator {
        Navigator::new(
            Box::new(store),
            library,
            metadata_config(root),
            DisplaySettings {
                clean_filenames: true,
            },
        )
    }

    #[test]
    fn test_event_listings_join_against_the_library() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("UFC 100")).unwrap();

        let mut store = MemoryStore::new();
        store
            .save_event(&event("1", "UFC 100", "UFC", (2009, 7, 11)))
            .unwrap();
        store
            .save_event(&event("2", "Not On Disk", "UFC", (2009, 8, 1)))
            .unwrap();

        let library = library_with(dir.path(), &[("1", "UFC 100")]);
        let nav = navigator(dir.path(), store, library);

        let ids: Vec<String> = nav
            .all_events()
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["1"]);

        let by_promotion = nav.events_by_promotion("UFC").unwrap();
        assert_eq!(by_promotion.len(), 1);

        let by_fighter = nav.events_by_fighter("100").unwrap();
        assert_eq!(by_fighter.len(), 1);
    }

    #[test]
    fn test_search_joins_events_but_not_fighters() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = MemoryStore::new();
        store
            .save_event(&event("1", "UFC 100", "UFC", (2009, 7, 11)))
            .unwrap();
        let mut lesnar = FighterRecord::empty("100", "/img.jpg".to_string());
        lesnar.name = "Brock Lesnar".to_string();
        store.save_fighter(&lesnar).unwrap();

        // Library has no entry for event 1
        let library = library_with(dir.path(), &[]);
        let nav = navigator(dir.path(), store, library);

        let results = nav.search("UFC").unwrap();
        assert!(results.events.is_empty());

        let results = nav.search("lesnar").unwrap();
        assert_eq!(results.fighters.len(), 1);
        assert_eq!(results.fighters[0].fight_count, 1);
    }

    #[test]
    fn test_fighters_carry_fight_counts() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = MemoryStore::new();
        store
            .save_event(&event("1", "UFC 100", "UFC", (2009, 7, 11)))
            .unwrap();
        let mut fighter = FighterRecord::empty("100", "/img.jpg".to_string());
        fighter.name = "Brock Lesnar".to_string();
        store.save_fighter(&fighter).unwrap();
        let mut unbooked = FighterRecord::empty("999", "/img.jpg".to_string());
        unbooked.name = "Aldo Else".to_string();
        store.save_fighter(&unbooked).unwrap();

        let library = library_with(dir.path(), &[]);
        let nav = navigator(dir.path(), store, library);

        let fighters = nav.fighters().unwrap();
        assert_eq!(fighters.len(), 2);
        assert_eq!(fighters[0].fighter.name, "Aldo Else");
        assert_eq!(fighters[0].fight_count, 0);
        assert_eq!(fighters[1].fighter.name, "Brock Lesnar");
        assert_eq!(fighters[1].fight_count, 1);
    }

    #[test]
    fn test_event_videos_builds_a_full_listing() {
        let dir = tempfile::tempdir().unwrap();
        let video_dir = dir.path().join("UFC 100");
        fs::create_dir(&video_dir).unwrap();
        fs::write(video_dir.join("01. Prelims.mkv"), b"").unwrap();
        fs::write(video_dir.join("02. Main Card.mkv"), b"").unwrap();

        let mut store = MemoryStore::new();
        store
            .save_event(&event("1", "UFC 100", "UFC", (2009, 7, 11)))
            .unwrap();

        let library = library_with(dir.path(), &[("1", "UFC 100")]);
        let nav = navigator(dir.path(), store, library);

        let listing = nav.event_videos("1").unwrap();
        assert_eq!(listing.event.title, "UFC 100");
        assert_eq!(listing.videos.len(), 2);
        assert_eq!(listing.videos[0].display_title, "Prelims");
        assert_eq!(listing.description, "UFC: Arena, City");
        assert!(listing.single().is_none());
    }

    #[test]
    fn test_single_video_shortcut() {
        let dir = tempfile::tempdir().unwrap();
        let video_dir = dir.path().join("UFC 100");
        fs::create_dir(&video_dir).unwrap();
        fs::write(video_dir.join("UFC 100.mkv"), b"").unwrap();

        let mut store = MemoryStore::new();
        store
            .save_event(&event("1", "UFC 100", "UFC", (2009, 7, 11)))
            .unwrap();

        let library = library_with(dir.path(), &[("1", "UFC 100")]);
        let nav = navigator(dir.path(), store, library);

        let listing = nav.event_videos("1").unwrap();
        let only = listing.single().unwrap();
        assert_eq!(only.filename, "UFC 100.mkv");
    }

    #[test]
    fn test_unknown_event_id_is_missing_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let library = library_with(dir.path(), &[]);
        let nav = navigator(dir.path(), MemoryStore::new(), library);

        let err = nav.event_videos("404").unwrap_err();
        assert!(matches!(err, LibraryError::MissingMetadata(_)));
    }
}
