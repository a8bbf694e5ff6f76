//! Locale-keyed loading of classification trees from a data directory, with
//! fallback substitution and a per-locale read-through cache.

use std::{
  collections::HashMap,
  fs,
  path::{Path, PathBuf},
  sync::{Arc, RwLock},
};

use frascati_core::taxonomy::ClassificationTree;

use crate::{
  error::{Error, Result},
  json::parse_json,
  xml::parse_legacy_xml,
};

/// The locale whose resource is guaranteed present; substituted whenever a
/// requested locale has no dedicated resource.
pub const FALLBACK_LOCALE: &str = "en";

/// Loads and caches per-locale classification trees.
///
/// Resources live in a single data directory as
/// `classifications.{locale}.json` (preferred) or the legacy
/// `classifications.{locale}.xml`. Each locale is parsed at most once per
/// store; the cache is safe for concurrent reads, and redundant concurrent
/// population is a benign last-write-wins race — every writer computes the
/// same value from the same immutable file.
pub struct ClassificationStore {
  data_dir: PathBuf,
  fallback: String,
  cache:    RwLock<HashMap<String, Arc<ClassificationTree>>>,
}

impl ClassificationStore {
  /// A store over `data_dir` with the standard [`FALLBACK_LOCALE`].
  pub fn new(data_dir: impl Into<PathBuf>) -> Self {
    Self::with_fallback(data_dir, FALLBACK_LOCALE)
  }

  pub fn with_fallback(
    data_dir: impl Into<PathBuf>,
    fallback: impl Into<String>,
  ) -> Self {
    Self {
      data_dir: data_dir.into(),
      fallback: fallback.into(),
      cache:    RwLock::new(HashMap::new()),
    }
  }

  /// The tree for `locale`, substituting the fallback locale's tree when
  /// `locale` has no dedicated resource.
  ///
  /// Fails with [`Error::DataUnavailable`] when the fallback resource is
  /// also missing — never a silently empty tree.
  pub fn load(&self, locale: &str) -> Result<Arc<ClassificationTree>> {
    if let Some(tree) = self.load_exact(locale)? {
      return Ok(tree);
    }
    tracing::debug!(
      locale,
      fallback = %self.fallback,
      "no dedicated classification resource; substituting fallback"
    );
    self
      .load_exact(&self.fallback)?
      .ok_or_else(|| Error::DataUnavailable {
        locale:   locale.to_string(),
        fallback: self.fallback.clone(),
      })
  }

  /// The tree for exactly `locale`, without fallback substitution;
  /// `Ok(None)` when the locale has no dedicated resource.
  ///
  /// The form injector uses this to omit locales rather than silently hand
  /// every locale the fallback vocabulary.
  pub fn load_exact(
    &self,
    locale: &str,
  ) -> Result<Option<Arc<ClassificationTree>>> {
    if let Some(tree) = self.cached(locale) {
      return Ok(Some(tree));
    }
    let Some(tree) = self.parse_locale(locale)? else {
      return Ok(None);
    };
    let tree = Arc::new(tree);
    self
      .cache
      .write()
      .unwrap_or_else(|e| e.into_inner())
      .insert(locale.to_string(), Arc::clone(&tree));
    Ok(Some(tree))
  }

  fn cached(&self, locale: &str) -> Option<Arc<ClassificationTree>> {
    self
      .cache
      .read()
      .unwrap_or_else(|e| e.into_inner())
      .get(locale)
      .cloned()
  }

  /// Parse the resource for `locale` if one exists. Parse failures of an
  /// existing file surface loudly; they are not folded into fallback
  /// substitution.
  fn parse_locale(&self, locale: &str) -> Result<Option<ClassificationTree>> {
    if !valid_locale_tag(locale) {
      return Ok(None);
    }
    let json_path = self
      .data_dir
      .join(format!("classifications.{locale}.json"));
    if json_path.exists() {
      tracing::debug!(locale, path = %json_path.display(), "parsing classification JSON");
      return parse_json(locale, &read_file(&json_path)?).map(Some);
    }
    let xml_path = self.data_dir.join(format!("classifications.{locale}.xml"));
    if xml_path.exists() {
      tracing::debug!(locale, path = %xml_path.display(), "parsing legacy classification XML");
      return parse_legacy_xml(locale, read_file(&xml_path)?.as_bytes())
        .map(Some);
    }
    Ok(None)
  }
}

/// Locale tags come from host request data; anything that could walk the
/// filesystem is treated as having no resource.
fn valid_locale_tag(locale: &str) -> bool {
  !locale.is_empty()
    && locale
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '@'))
}

fn read_file(path: &Path) -> Result<String> {
  fs::read_to_string(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn testdata() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/testdata")
  }

  #[test]
  fn loads_dedicated_json_resource() {
    let store = ClassificationStore::new(testdata());
    let tree = store.load("en").unwrap();
    assert_eq!(tree.locale(), "en");
    assert_eq!(tree.bases()[0].label, "Natural sciences");
  }

  #[test]
  fn loads_legacy_xml_resource() {
    let store = ClassificationStore::new(testdata());
    let tree = store.load_exact("fi").unwrap().expect("fi resource");
    assert_eq!(tree.locale(), "fi");
    assert_eq!(tree.bases()[0].label, "Luonnontieteet");
  }

  #[test]
  fn missing_locale_falls_back() {
    let store = ClassificationStore::new(testdata());
    let tree = store.load("pt_BR").unwrap();
    // The substituted tree is the fallback document, not an empty one.
    assert_eq!(tree.locale(), "en");
    assert!(!tree.is_empty());
  }

  #[test]
  fn load_exact_does_not_fall_back() {
    let store = ClassificationStore::new(testdata());
    assert!(store.load_exact("pt_BR").unwrap().is_none());
  }

  #[test]
  fn missing_fallback_is_data_unavailable() {
    let store =
      ClassificationStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/no-such-dir"));
    let result = store.load("en");
    assert!(matches!(
      result,
      Err(Error::DataUnavailable { ref locale, ref fallback })
        if locale == "en" && fallback == "en"
    ));
  }

  #[test]
  fn repeated_loads_share_one_tree() {
    let store = ClassificationStore::new(testdata());
    let first = store.load("en").unwrap();
    let second = store.load("en").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
  }

  #[test]
  fn hostile_locale_tags_have_no_resource() {
    let store = ClassificationStore::new(testdata());
    assert!(store.load_exact("../testdata/en").unwrap().is_none());
    assert!(store.load_exact("").unwrap().is_none());
  }

  #[test]
  fn bundled_legacy_xml_matches_bundled_json() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data");
    let json =
      fs::read_to_string(format!("{dir}/classifications.en.json")).unwrap();
    let xml = fs::read(format!("{dir}/classifications.en.xml")).unwrap();
    assert_eq!(
      parse_json("en", &json).unwrap(),
      parse_legacy_xml("en", &xml).unwrap(),
    );
  }

  #[test]
  fn bundled_data_loads_for_every_shipped_locale() {
    let store = ClassificationStore::new(concat!(
      env!("CARGO_MANIFEST_DIR"),
      "/../../data"
    ));
    for locale in ["en", "fr"] {
      let tree = store.load_exact(locale).unwrap().expect("shipped locale");
      assert_eq!(tree.bases().len(), 6, "six Frascati bases in {locale}");
      assert_eq!(tree.subheadings().count(), 42);
    }
  }
}
