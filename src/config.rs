//! User configuration — namespace override, reveal command, picker keys.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/monorepo-locator/config.toml`
//! (default `~/.config/monorepo-locator/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::namespace::DEFAULT_NAMESPACES;

// ───────────────────────────────────────── actions ───────────

/// Configurable actions in the package picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    ClearQuery,
}

impl Action {
    pub const ALL: &[Action] = &[
        Action::MoveUp,
        Action::MoveDown,
        Action::Confirm,
        Action::Cancel,
        Action::ClearQuery,
    ];

    fn config_key(self) -> &'static str {
        match self {
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::Confirm => "confirm",
            Action::Cancel => "cancel",
            Action::ClearQuery => "clear_query",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared; SUPER and friends are ignored.
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code && (self.modifiers & MODIFIER_MASK) == (event.modifiers & MODIFIER_MASK)
    }

    /// Status-bar form (`"↑"`, `"Ctrl+p"`).
    pub fn display(&self) -> String {
        self.render(true)
    }

    /// Config-file form (`"Up"`, `"Ctrl+p"`).
    fn to_config_string(&self) -> String {
        self.render(false)
    }

    fn render(&self, arrows: bool) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s.push_str(&match (self.code, arrows) {
            (KeyCode::Up, true) => "↑".into(),
            (KeyCode::Down, true) => "↓".into(),
            (KeyCode::Up, false) => "Up".into(),
            (KeyCode::Down, false) => "Down".into(),
            (KeyCode::Char(' '), _) => "Space".into(),
            (KeyCode::Char(c), _) => c.to_string(),
            (KeyCode::Enter, _) => "Enter".into(),
            (KeyCode::Esc, _) => "Esc".into(),
            (KeyCode::Tab, _) => "Tab".into(),
            (KeyCode::F(n), _) => format!("F{n}"),
            (other, _) => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+n"`, `"Up"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Effective configuration for one run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Namespace override; empty means auto-detect.
    pub namespace: String,
    /// Namespaces probed in order when auto-detecting.
    pub default_namespaces: Vec<String>,
    /// Command prefix that receives each revealed path as its last argument.
    /// Empty means print the path for the shell wrapper.
    pub reveal_command: Vec<String>,
    pub bindings: HashMap<Action, Vec<KeyBind>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            default_namespaces: DEFAULT_NAMESPACES.iter().map(|s| s.to_string()).collect(),
            reveal_command: Vec::new(),
            bindings: Self::default_bindings(),
        }
    }
}

impl AppConfig {
    /// Arrow keys plus emacs-style Ctrl bindings; plain letters are left free
    /// for the filter query.
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let mut m = HashMap::new();

        m.insert(MoveUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('p'), ctrl)]);
        m.insert(MoveDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('n'), ctrl)]);
        m.insert(Confirm, vec![KeyBind::new(Enter, n)]);
        m.insert(Cancel, vec![KeyBind::new(Esc, n)]);
        m.insert(ClearQuery, vec![KeyBind::new(Char('u'), ctrl)]);

        m
    }

    /// Find the action bound to a key event.  The binding with the most
    /// modifiers wins when several match.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, bind)| bind.matches(event))
            .max_by_key(|(_, bind)| bind.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Status-bar hint built from the current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: move | {}: reveal | {}: cancel | type to filter",
            self.short_binding(Action::MoveUp),
            self.short_binding(Action::MoveDown),
            self.short_binding(Action::Confirm),
            self.short_binding(Action::Cancel),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load from `path` (or the default location), falling back to defaults
    /// when the file is missing or unreadable.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "config loaded");
                Self::parse_config(&contents)
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "using default config");
                Self::default()
            }
        }
    }

    /// Persist to `path` (or the default location).
    pub fn save(&self, path: Option<&Path>) -> anyhow::Result<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(path)
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "namespace" => {
                    config.namespace = unquote(value).to_string();
                    continue;
                }
                "default_namespaces" => {
                    let list: Vec<String> = split_list(value).map(str::to_string).collect();
                    if !list.is_empty() {
                        config.default_namespaces = list;
                    }
                    continue;
                }
                "reveal_command" => {
                    config.reveal_command =
                        unquote(value).split_whitespace().map(str::to_string).collect();
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::debug!(key, "ignoring unknown config key");
                continue;
            };
            let parsed: Vec<KeyBind> = split_list(value).filter_map(KeyBind::parse).collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# monorepo-locator configuration".to_string(),
            String::new(),
            "# Namespace under node_modules (empty = auto-detect)".to_string(),
            format!("namespace = \"{}\"", self.namespace),
            "# Probed in order when namespace is empty".to_string(),
            format!("default_namespaces = {}", self.default_namespaces.join(", ")),
            "# Command that receives each revealed path (empty = print it)".to_string(),
            format!("reveal_command = \"{}\"", self.reveal_command.join(" ")),
            String::new(),
            "# Picker key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"')
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(unquote).filter(|part| !part.is_empty())
}

/// Return the config file path (`$XDG_CONFIG_HOME/monorepo-locator/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("monorepo-locator").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn defaults_auto_detect_builtin_namespaces() {
        let config = AppConfig::default();
        assert!(config.namespace.is_empty());
        assert_eq!(config.default_namespaces, vec!["@kbn", "@repo", "@app"]);
        assert!(config.reveal_command.is_empty());
    }

    #[test]
    fn parses_values_and_ignores_noise() {
        let config = AppConfig::parse_config(
            "# comment\n[locator]\nnamespace = \"@acme\"\n\
             default_namespaces = @a, \"@b\",\nreveal_command = \"code --goto\"\nbogus = 1\n",
        );
        assert_eq!(config.namespace, "@acme");
        assert_eq!(config.default_namespaces, vec!["@a", "@b"]);
        assert_eq!(config.reveal_command, vec!["code", "--goto"]);
    }

    #[test]
    fn empty_default_list_keeps_builtins() {
        let config = AppConfig::parse_config("default_namespaces = \n");
        assert_eq!(config.default_namespaces.len(), DEFAULT_NAMESPACES.len());
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let config = AppConfig::parse_config("move_down = Ctrl+j, Tab\n");
        assert_eq!(
            config.match_key(key(KeyCode::Char('j'), KeyModifiers::CONTROL)),
            Some(Action::MoveDown)
        );
        assert_eq!(config.match_key(key(KeyCode::Tab, KeyModifiers::NONE)), Some(Action::MoveDown));
        assert_eq!(config.match_key(key(KeyCode::Down, KeyModifiers::NONE)), None);
    }

    #[test]
    fn plain_letters_are_unbound_by_default() {
        let config = AppConfig::default();
        assert_eq!(config.match_key(key(KeyCode::Char('p'), KeyModifiers::NONE)), None);
        assert_eq!(
            config.match_key(key(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            Some(Action::MoveUp)
        );
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.namespace = "@acme".into();
        config.reveal_command = vec!["code".into(), "-r".into()];
        config.save(Some(&path)).unwrap();

        let loaded = AppConfig::load(Some(&path));
        assert_eq!(loaded.namespace, "@acme");
        assert_eq!(loaded.reveal_command, vec!["code", "-r"]);
        assert_eq!(loaded.bindings, AppConfig::default_bindings());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(config.namespace.is_empty());
    }

    #[test]
    fn status_hint_uses_first_binding() {
        let hint = AppConfig::default().status_bar_hint();
        assert!(hint.starts_with("↑/↓: move"));
        assert!(hint.contains("Enter: reveal"));
    }
}
