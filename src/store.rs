use crate::error::Result;
use crate::records::{EventRecord, FightRecord, FighterRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage interface for scraped metadata. The scrapers are the producers;
/// the navigator only queries.
pub trait MetadataStore {
    fn save_event(&mut self, event: &EventRecord) -> Result<()>;
    fn save_fighter(&mut self, fighter: &FighterRecord) -> Result<()>;

    // Event queries
    fn all_events(&self) -> Result<Vec<EventRecord>>;
    fn event(&self, id: &str) -> Result<Option<EventRecord>>;
    fn fights_by_event(&self, event_id: &str) -> Result<Vec<FightRecord>>;
    fn search_events(&self, term: &str) -> Result<Vec<EventRecord>>;
    fn promotions(&self) -> Result<Vec<String>>;
    fn events_by_promotion(&self, name: &str) -> Result<Vec<EventRecord>>;
    fn events_by_fighter(&self, fighter_id: &str) -> Result<Vec<EventRecord>>;

    // Fighter queries
    fn all_fighters(&self) -> Result<Vec<FighterRecord>>;
    fn fighter(&self, id: &str) -> Result<Option<FighterRecord>>;
    fn search_fighters(&self, term: &str) -> Result<Vec<FighterRecord>>;
    fn fight_count(&self, fighter_id: &str) -> Result<usize>;
}

/// Everything the store holds, keyed by source-assigned id.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    events: HashMap<String, EventRecord>,
    fighters: HashMap<String, FighterRecord>,
}

impl StoreData {
    /// Events ordered by (date, id) so listings are stable.
    fn sorted_events(&self, mut events: Vec<EventRecord>) -> Vec<EventRecord> {
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        events
    }

    fn all_events(&self) -> Vec<EventRecord> {
        self.sorted_events(self.events.values().cloned().collect())
    }

    fn event(&self, id: &str) -> Option<EventRecord> {
        self.events.get(id).cloned()
    }

    fn fights_by_event(&self, event_id: &str) -> Vec<FightRecord> {
        self.events
            .get(event_id)
            .map(|event| event.fights.clone())
            .unwrap_or_default()
    }

    fn search_events(&self, term: &str) -> Vec<EventRecord> {
        let term = term.to_lowercase();
        let matches = self
            .events
            .values()
            .filter(|e| {
                e.title.to_lowercase().contains(&term)
                    || e.promotion.to_lowercase().contains(&term)
            })
            .cloned()
            .collect();
        self.sorted_events(matches)
    }

    fn promotions(&self) -> Vec<String> {
        let names: BTreeSet<String> = self.events.values().map(|e| e.promotion.clone()).collect();
        names.into_iter().collect()
    }

    fn events_by_promotion(&self, name: &str) -> Vec<EventRecord> {
        let matches = self
            .events
            .values()
            .filter(|e| e.promotion == name)
            .cloned()
            .collect();
        self.sorted_events(matches)
    }

    fn events_by_fighter(&self, fighter_id: &str) -> Vec<EventRecord> {
        let matches = self
            .events
            .values()
            .filter(|e| e.fights.iter().any(|f| f.involves(fighter_id)))
            .cloned()
            .collect();
        self.sorted_events(matches)
    }

    fn all_fighters(&self) -> Vec<FighterRecord> {
        let mut fighters: Vec<FighterRecord> = self.fighters.values().cloned().collect();
        fighters.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        fighters
    }

    fn fighter(&self, id: &str) -> Option<FighterRecord> {
        self.fighters.get(id).cloned()
    }

    fn search_fighters(&self, term: &str) -> Vec<FighterRecord> {
        let term = term.to_lowercase();
        let mut matches: Vec<FighterRecord> = self
            .fighters
            .values()
            .filter(|f| {
                f.name.to_lowercase().contains(&term)
                    || f.nick_name.to_lowercase().contains(&term)
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        matches
    }

    fn fight_count(&self, fighter_id: &str) -> usize {
        self.events
            .values()
            .flat_map(|e| e.fights.iter())
            .filter(|f| f.involves(fighter_id))
            .count()
    }
}

/// In-memory store for tests and one-shot runs.
#[derive(Default)]
pub struct MemoryStore {
    data: StoreData,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataStore for MemoryStore {
    fn save_event(&mut self, event: &EventRecord) -> Result<()> {
        debug!("Saving event {} ({})", event.title, event.id);
        self.data.events.insert(event.id.clone(), event.clone());
        Ok(())
    }

    fn save_fighter(&mut self, fighter: &FighterRecord) -> Result<()> {
        debug!("Saving fighter {} ({})", fighter.name, fighter.id);
        self.data
            .fighters
            .insert(fighter.id.clone(), fighter.clone());
        Ok(())
    }

    fn all_events(&self) -> Result<Vec<EventRecord>> {
        Ok(self.data.all_events())
    }

    fn event(&self, id: &str) -> Result<Option<EventRecord>> {
        Ok(self.data.event(id))
    }

    fn fights_by_event(&self, event_id: &str) -> Result<Vec<FightRecord>> {
        Ok(self.data.fights_by_event(event_id))
    }

    fn search_events(&self, term: &str) -> Result<Vec<EventRecord>> {
        Ok(self.data.search_events(term))
    }

    fn promotions(&self) -> Result<Vec<String>> {
        Ok(self.data.promotions())
    }

    fn events_by_promotion(&self, name: &str) -> Result<Vec<EventRecord>> {
        Ok(self.data.events_by_promotion(name))
    }

    fn events_by_fighter(&self, fighter_id: &str) -> Result<Vec<EventRecord>> {
        Ok(self.data.events_by_fighter(fighter_id))
    }

    fn all_fighters(&self) -> Result<Vec<FighterRecord>> {
        Ok(self.data.all_fighters())
    }

    fn fighter(&self, id: &str) -> Result<Option<FighterRecord>> {
        Ok(self.data.fighter(id))
    }

    fn search_fighters(&self, term: &str) -> Result<Vec<FighterRecord>> {
        Ok(self.data.search_fighters(term))
    }

    fn fight_count(&self, fighter_id: &str) -> Result<usize> {
        Ok(self.data.fight_count(fighter_id))
    }
}

/// File-backed store: one JSON document, rewritten on every save.
pub struct JsonStore {
    path: PathBuf,
    data: StoreData,
}

impl JsonStore {
    /// Opens the store at `path`; a missing file starts empty.
    pub fn open(path: &Path) -> Result<Self> {
        let data = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            StoreData::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    /// Writes the whole document to a sibling temp file, then renames it
    /// into place so a crash never leaves a half-written store.
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl MetadataStore for JsonStore {
    fn save_event(&mut self, event: &EventRecord) -> Result<()> {
        debug!("Saving event {} ({})", event.title, event.id);
        self.data.events.insert(event.id.clone(), event.clone());
        self.persist()
    }

    fn save_fighter(&mut self, fighter: &FighterRecord) -> Result<()> {
        debug!("Saving fighter {} ({})", fighter.name, fighter.id);
        self.data
            .fighters
            .insert(fighter.id.clone(), fighter.clone());
        self.persist()
    }

    fn all_events(&self) -> Result<Vec<EventRecord>> {
        Ok(self.data.all_events())
    }

    fn event(&self, id: &str) -> Result<Option<EventRecord>> {
        Ok(self.data.event(id))
    }

    fn fights_by_event(&self, event_id: &str) -> Result<Vec<FightRecord>> {
        Ok(self.data.fights_by_event(event_id))
    }

    fn search_events(&self, term: &str) -> Result<Vec<EventRecord>> {
        Ok(self.data.search_events(term))
    }

    fn promotions(&self) -> Result<Vec<String>> {
        Ok(self.data.promotions())
    }

    fn events_by_promotion(&self, name: &str) -> Result<Vec<EventRecord>> {
        Ok(self.data.events_by_promotion(name))
    }

    fn events_by_fighter(&self, fighter_id: &str) -> Result<Vec<EventRecord>> {
        Ok(self.data.events_by_fighter(fighter_id))
    }

    fn all_fighters(&self) -> Result<Vec<FighterRecord>> {
        Ok(self.data.all_fighters())
    }

    fn fighter(&self, id: &str) -> Result<Option<FighterRecord>> {
        Ok(self.data.fighter(id))
    }

    fn search_fighters(&self, term: &str) -> Result<Vec<FighterRecord>> {
        Ok(self.data.search_fighters(term))
    }

    fn fight_count(&self, fighter_id: &str) -> Result<usize> {
        Ok(self.data.fight_count(fighter_id))
    }
}
