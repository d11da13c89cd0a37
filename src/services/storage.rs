use crate::domain::models::{BuildUp, Settings, State};
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("build-up not found: {0}")]
    BuildUpNotFound(String),
    #[error("layer index out of range: {0}")]
    LayerOutOfRange(usize),
}

/// Append-only audit trail of mutating actions. Best effort: a failure to
/// write never fails the command.
pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/buildup/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": epoch_secs(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn epoch_secs() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}

fn state_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/buildup/state.json"))
}

fn settings_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/buildup/config.toml"))
}

pub fn load_state() -> anyhow::Result<State> {
    let p = state_path()?;
    if !p.exists() {
        return Ok(State::default());
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_state(s: &State) -> anyhow::Result<()> {
    let p = state_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, serde_json::to_string_pretty(s)?)?;
    Ok(())
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let p = settings_path()?;
    if !p.exists() {
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(toml::from_str(&raw)?)
}

pub fn find_buildup<'a>(state: &'a State, name: &str) -> anyhow::Result<&'a BuildUp> {
    state
        .buildups
        .iter()
        .find(|b| b.name == name)
        .ok_or_else(|| StoreError::BuildUpNotFound(name.to_string()).into())
}

pub fn find_buildup_mut<'a>(state: &'a mut State, name: &str) -> anyhow::Result<&'a mut BuildUp> {
    state
        .buildups
        .iter_mut()
        .find(|b| b.name == name)
        .ok_or_else(|| StoreError::BuildUpNotFound(name.to_string()).into())
}
