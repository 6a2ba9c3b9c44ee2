//! JavaScript bindings
//!
//! The page's drag-and-drop, forms and file input call into [`RsvpBoard`].
//! Rosters and counts cross the boundary as JSON strings; statuses as their
//! column labels ("Yes", "Maybe", "No", "No Response").

use wasm_bindgen::prelude::*;

use crate::board::{Board, PendingImport};
use crate::config::BoardConfig;
use crate::persistence::LocalStorage;
use crate::roster::{Roster, Status};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("RSVP board starting...");
    }
}

fn status(label: &str) -> Result<Status, JsError> {
    Status::from_label(label).ok_or_else(|| JsError::new(&format!("Unknown status: {label}")))
}

fn to_json(roster: &Roster) -> Result<String, JsError> {
    Ok(serde_json::to_string(roster)?)
}

/// Board backed by `window.localStorage`
#[wasm_bindgen]
pub struct RsvpBoard {
    board: Board<LocalStorage>,
    pending: Option<PendingImport>,
}

#[wasm_bindgen]
impl RsvpBoard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            board: Board::open(LocalStorage::new(), BoardConfig::default()),
            pending: None,
        }
    }

    /// Open with a JSON [`BoardConfig`]
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<RsvpBoard, JsError> {
        let config = BoardConfig::from_json(config_json)?;
        Ok(Self {
            board: Board::open(LocalStorage::new(), config),
            pending: None,
        })
    }

    pub fn roster(&self) -> Result<String, JsError> {
        to_json(self.board.roster())
    }

    pub fn metrics(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.board.metrics())?)
    }

    #[wasm_bindgen(js_name = moveName)]
    pub fn move_name(&mut self, name: &str, from: &str, to: &str) -> Result<String, JsError> {
        let (from, to) = (status(from)?, status(to)?);
        to_json(self.board.move_name(name, from, to))
    }

    /// Fails with the "already on the board" message on duplicates
    pub fn add(&mut self, name: &str) -> Result<String, JsError> {
        to_json(self.board.add(name)?)
    }

    pub fn rename(&mut self, old: &str, status_label: &str, new: &str) -> Result<String, JsError> {
        let status = status(status_label)?;
        to_json(self.board.rename(old, status, new)?)
    }

    pub fn remove(&mut self, name: &str, status_label: &str) -> Result<String, JsError> {
        let status = status(status_label)?;
        to_json(self.board.remove(name, status))
    }

    #[wasm_bindgen(js_name = replaceAll)]
    pub fn replace_all(&mut self, roster_json: &str) -> Result<String, JsError> {
        let roster: Roster = serde_json::from_str(roster_json)?;
        to_json(self.board.replace_all(roster))
    }

    pub fn reset(&mut self) -> Result<String, JsError> {
        to_json(self.board.reset())
    }

    pub fn clear(&mut self) -> Result<String, JsError> {
        to_json(self.board.clear())
    }

    #[wasm_bindgen(js_name = exportCsv)]
    pub fn export_csv(&self) -> Result<String, JsError> {
        Ok(self.board.export_csv()?)
    }

    /// Download name stamped with today's date
    #[wasm_bindgen(js_name = exportFileName)]
    pub fn export_file_name(&self) -> String {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        let date = iso.split('T').next().unwrap_or_default();
        self.board.export_file_name(date)
    }

    /// Parse file contents and hold them until `commitImport` or
    /// `cancelImport`. Returns the pending counts for the prompt.
    #[wasm_bindgen(js_name = stageImport)]
    pub fn stage_import(&mut self, text: &str) -> Result<String, JsError> {
        let pending = self.board.stage_import(text)?;
        let metrics = serde_json::to_string(&pending.metrics())?;
        self.pending = Some(pending);
        Ok(metrics)
    }

    #[wasm_bindgen(js_name = commitImport)]
    pub fn commit_import(&mut self) -> Result<String, JsError> {
        match self.pending.take() {
            Some(pending) => to_json(self.board.commit_import(pending)),
            None => to_json(self.board.roster()),
        }
    }

    #[wasm_bindgen(js_name = cancelImport)]
    pub fn cancel_import(&mut self) {
        if self.pending.take().is_some() {
            log::info!("Import cancelled");
        }
    }

    #[wasm_bindgen(js_name = saveSnapshot)]
    pub fn save_snapshot(&mut self) {
        self.board.save_snapshot();
    }

    #[wasm_bindgen(js_name = loadSnapshot)]
    pub fn load_snapshot(&mut self) -> Result<String, JsError> {
        to_json(self.board.load_snapshot())
    }

    #[wasm_bindgen(js_name = hasSnapshot)]
    pub fn has_snapshot(&self) -> bool {
        self.board.has_snapshot()
    }
}

impl Default for RsvpBoard {
    fn default() -> Self {
        Self::new()
    }
}
