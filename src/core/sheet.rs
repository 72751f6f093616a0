//! # Stat Sheets
//!
//! The inbound data source: a TOML file listing each screen's rows in
//! display order. Whatever scrapes the game writes one of these; the engine
//! only ever sees the resulting `Vec<Entry<G>>`.
//!
//! ```toml
//! [[status]]
//! label = "Level"
//! value = 12
//! group = "status"
//!
//! [[bestiary]]
//! label = "Fire"
//! value = "Weak"
//! group = "weaknesses"
//! visible = false     # filtered out before the engine sees it
//! ```
//!
//! Rows are never re-sorted. Unknown group names fail the whole sheet.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Deserializer};

use super::entry::{Entry, GroupTag};
use super::screens::{BestiaryGroup, StatusGroup};

#[derive(Debug, Default, Deserialize)]
pub struct StatSheet {
    #[serde(default)]
    pub status: Vec<SheetRow<StatusGroup>>,
    #[serde(default)]
    pub bestiary: Vec<SheetRow<BestiaryGroup>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetRow<G> {
    pub label: String,
    #[serde(deserialize_with = "value_as_string")]
    pub value: String,
    pub group: G,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// Accepts `value = "30/30"` as well as bare numbers and booleans.
fn value_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Text(s) => s,
        RawValue::Int(n) => n.to_string(),
        RawValue::Float(f) => f.to_string(),
        RawValue::Bool(b) => b.to_string(),
    })
}

/// Visible rows as entries, order preserved.
pub fn visible_entries<G: GroupTag>(rows: &[SheetRow<G>]) -> Vec<Entry<G>> {
    rows.iter()
        .filter(|row| row.visible)
        .map(|row| Entry::new(row.label.clone(), row.value.clone(), row.group.clone()))
        .collect()
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum SheetError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::Io(e) => write!(f, "stat sheet I/O error: {e}"),
            SheetError::Parse(e) => write!(f, "stat sheet parse error: {e}"),
        }
    }
}

impl std::error::Error for SheetError {}

// ============================================================================
// Loading
// ============================================================================

pub fn parse_sheet(contents: &str) -> Result<StatSheet, SheetError> {
    toml::from_str(contents).map_err(SheetError::Parse)
}

pub fn load_sheet(path: &Path) -> Result<StatSheet, SheetError> {
    let contents = fs::read_to_string(path).map_err(SheetError::Io)?;
    let sheet = parse_sheet(&contents)?;
    info!(
        "Loaded stat sheet from {} ({} status rows, {} bestiary rows)",
        path.display(),
        sheet.status.len(),
        sheet.bestiary.len()
    );
    Ok(sheet)
}

/// Loads `path` if given, otherwise (or on failure) the built-in demo sheet.
pub fn load_or_demo(path: Option<&Path>) -> StatSheet {
    match path {
        Some(p) => match load_sheet(p) {
            Ok(sheet) => sheet,
            Err(e) => {
                warn!("Falling back to demo sheet: {}", e);
                demo_sheet()
            }
        },
        None => {
            debug!("No stat sheet given, using demo sheet");
            demo_sheet()
        }
    }
}

const DEMO_SHEET: &str = r#"
[[status]]
label = "Level"
value = 12
group = "status"

[[status]]
label = "HP"
value = "30/30"
group = "status"

[[status]]
label = "MP"
value = "12/12"
group = "status"

[[status]]
label = "Strength"
value = 18
group = "attributes"

[[status]]
label = "Agility"
value = 11
group = "attributes"

[[status]]
label = "Vitality"
value = 14
group = "attributes"

[[status]]
label = "Magic"
value = 7
group = "attributes"

[[status]]
label = "Attack"
value = 42
group = "combat"

[[status]]
label = "Defense"
value = 27
group = "combat"

[[status]]
label = "Evasion"
value = "9%"
group = "combat"

[[status]]
label = "Weapon"
value = "Broadsword"
group = "equipment"

[[status]]
label = "Armor"
value = "Bronze Armor"
group = "equipment"

[[status]]
label = "Accessory"
value = "Empty"
group = "equipment"
visible = false

[[bestiary]]
label = "Name"
value = "Goblin"
group = "overview"

[[bestiary]]
label = "Level"
value = 6
group = "overview"

[[bestiary]]
label = "HP"
value = 180
group = "stats"

[[bestiary]]
label = "Attack"
value = 14
group = "stats"

[[bestiary]]
label = "Defense"
value = 6
group = "stats"

[[bestiary]]
label = "Poison"
value = "Immune"
group = "resistances"

[[bestiary]]
label = "Fire"
value = "Weak"
group = "weaknesses"

[[bestiary]]
label = "Common drop"
value = "Potion"
group = "drops"

[[bestiary]]
label = "Rare drop"
value = "Goblin Knife"
group = "drops"
"#;

/// A small sheet covering both screens, used when no file is supplied.
pub fn demo_sheet() -> StatSheet {
    parse_sheet(DEMO_SHEET).unwrap_or_else(|e| {
        warn!("Built-in demo sheet failed to parse: {}", e);
        StatSheet::default()
    })
}
