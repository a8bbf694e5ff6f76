//! Host-owned settings, behind a seam.
//!
//! The host stores plugin settings per context (journal) in its own
//! database; this crate only reads them through [`SettingsBackend`] and
//! memoizes the per-context enabled flag in an explicit, invalidatable
//! cache rather than ambient static state.

use std::{
  collections::HashMap,
  sync::{Arc, RwLock},
};

/// Read access to the host's per-context plugin settings.
pub trait SettingsBackend: Send + Sync {
  /// Whether the plugin is enabled for `context_id`.
  fn plugin_enabled(&self, context_id: i64) -> bool;

  /// The "required Frascati classes" setting for `context_id`: how many
  /// classification terms a submission must carry. Zero means no
  /// requirement.
  fn required_frascati_classes(&self, context_id: i64) -> u32;
}

/// Read-through memo of per-context enabled flags.
///
/// Safe for concurrent reads. Redundant concurrent population is a benign
/// last-write-wins race — every writer reads the same backend value. The
/// host adapter must call [`EnabledCache::invalidate`] after persisting a
/// settings change for a context.
pub struct EnabledCache {
  backend: Arc<dyn SettingsBackend>,
  flags:   RwLock<HashMap<i64, bool>>,
}

impl EnabledCache {
  pub fn new(backend: Arc<dyn SettingsBackend>) -> Self {
    Self {
      backend,
      flags: RwLock::new(HashMap::new()),
    }
  }

  /// Whether the plugin is enabled for `context_id`, reading through to the
  /// backend on first use.
  pub fn enabled(&self, context_id: i64) -> bool {
    if let Some(&flag) = self
      .flags
      .read()
      .unwrap_or_else(|e| e.into_inner())
      .get(&context_id)
    {
      return flag;
    }
    let flag = self.backend.plugin_enabled(context_id);
    self
      .flags
      .write()
      .unwrap_or_else(|e| e.into_inner())
      .insert(context_id, flag);
    flag
  }

  /// Drop the memo for one context, e.g. after the host toggles the plugin
  /// there.
  pub fn invalidate(&self, context_id: i64) {
    self
      .flags
      .write()
      .unwrap_or_else(|e| e.into_inner())
      .remove(&context_id);
  }

  /// Drop every memo.
  pub fn invalidate_all(&self) {
    self
      .flags
      .write()
      .unwrap_or_else(|e| e.into_inner())
      .clear();
  }

  /// Pass-through to the backend; not memoized — this is read only when the
  /// settings form is displayed or a submission is validated.
  pub fn required_frascati_classes(&self, context_id: i64) -> u32 {
    self.backend.required_frascati_classes(context_id)
  }
}
