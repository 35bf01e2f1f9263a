//! Section registry: loads section and field configuration from disk.
//!
//! Keeps every `SectionConfig` and `FieldConfig` in memory with a handle
//! index for each. Loading is async; lookups on a built registry are
//! synchronous and read-only.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;
use ulid::Ulid;

use crate::error::{ConfigError, Result};
use crate::types::{FieldConfig, SectionConfig};

/// Builder for `SectionRegistry`. Created by `SectionRegistry::open()`.
pub struct SectionRegistryBuilder {
    root: PathBuf,
}

impl SectionRegistryBuilder {
    /// Build the registry: create directories, then load every document.
    pub async fn build(self) -> Result<SectionRegistry> {
        let root = self.root;

        fs::create_dir_all(root.join("sections")).await?;
        fs::create_dir_all(root.join("fields")).await?;

        let mut registry = SectionRegistry {
            root,
            sections: Vec::new(),
            fields: Vec::new(),
            section_index: HashMap::new(),
            field_index: HashMap::new(),
        };

        registry.load_sections().await?;
        registry.load_fields().await?;

        debug!(
            sections = registry.sections.len(),
            fields = registry.fields.len(),
            "section registry opened"
        );

        Ok(registry)
    }
}

/// Registry of section and field configuration.
///
/// Owns a directory on disk with the structure:
/// ```text
/// config/
///   sections/    ← one .yaml per section, named by handle
///   fields/      ← one .yaml per field, named by handle
/// ```
pub struct SectionRegistry {
    root: PathBuf,
    sections: Vec<SectionConfig>,
    fields: Vec<FieldConfig>,
    section_index: HashMap<String, usize>,
    field_index: HashMap<String, usize>,
}

impl SectionRegistry {
    /// Open or create a config directory.
    ///
    /// ```rust,ignore
    /// let registry = SectionRegistry::open(path).build().await?;
    /// ```
    pub fn open(root: impl Into<PathBuf>) -> SectionRegistryBuilder {
        SectionRegistryBuilder { root: root.into() }
    }

    // --- Sections ---

    /// Get a section by handle.
    pub fn section(&self, handle: &str) -> Option<&SectionConfig> {
        self.section_index.get(handle).map(|&i| &self.sections[i])
    }

    pub fn all_sections(&self) -> &[SectionConfig] {
        &self.sections
    }

    /// Write (create or update) a section. Persists to YAML immediately.
    pub async fn write_section(&mut self, section: &SectionConfig) -> Result<()> {
        section.validate()?;
        let yaml = section.to_yaml()?;
        atomic_write(&self.section_path(&section.handle), yaml.as_bytes()).await?;

        if let Some(&idx) = self.section_index.get(&section.handle) {
            self.sections[idx] = section.clone();
        } else {
            let idx = self.sections.len();
            self.sections.push(section.clone());
            self.section_index.insert(section.handle.clone(), idx);
        }

        Ok(())
    }

    // --- Fields ---

    /// Get a field by handle.
    pub fn field(&self, handle: &str) -> Option<&FieldConfig> {
        self.field_index.get(handle).map(|&i| &self.fields[i])
    }

    pub fn all_fields(&self) -> &[FieldConfig] {
        &self.fields
    }

    /// Write (create or update) a field. Persists to YAML immediately.
    pub async fn write_field(&mut self, field: &FieldConfig) -> Result<()> {
        field.validate()?;
        let yaml = field.to_yaml()?;
        atomic_write(&self.field_path(&field.handle), yaml.as_bytes()).await?;

        if let Some(&idx) = self.field_index.get(&field.handle) {
            self.fields[idx] = field.clone();
        } else {
            let idx = self.fields.len();
            self.fields.push(field.clone());
            self.field_index.insert(field.handle.clone(), idx);
        }

        Ok(())
    }

    // --- Lookup helpers ---

    /// Resolve the fields of a section, in section order.
    ///
    /// Handles listed by the section but not present in the registry are skipped.
    pub fn fields_for_section(&self, handle: &str) -> Result<Vec<&FieldConfig>> {
        let section = self
            .section(handle)
            .ok_or_else(|| ConfigError::SectionNotFound {
                handle: handle.to_string(),
            })?;
        Ok(section
            .fields
            .iter()
            .filter_map(|field| self.field(field))
            .collect())
    }

    /// The root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // --- Internal ---

    fn section_path(&self, handle: &str) -> PathBuf {
        self.root.join("sections").join(format!("{handle}.yaml"))
    }

    fn field_path(&self, handle: &str) -> PathBuf {
        self.root.join("fields").join(format!("{handle}.yaml"))
    }

    async fn load_sections(&mut self) -> Result<()> {
        for (path, content) in read_yaml_documents(&self.root.join("sections")).await? {
            match SectionConfig::from_yaml(&content) {
                Ok(section) => {
                    if let Some(&idx) = self.section_index.get(&section.handle) {
                        tracing::warn!(?path, handle = %section.handle, "duplicate section handle, later file wins");
                        self.sections[idx] = section;
                    } else {
                        let idx = self.sections.len();
                        self.section_index.insert(section.handle.clone(), idx);
                        self.sections.push(section);
                    }
                }
                Err(e) => {
                    tracing::warn!(?path, %e, "skipping invalid section config");
                }
            }
        }
        Ok(())
    }

    async fn load_fields(&mut self) -> Result<()> {
        for (path, content) in read_yaml_documents(&self.root.join("fields")).await? {
            match FieldConfig::from_yaml(&content) {
                Ok(field) => {
                    if let Some(&idx) = self.field_index.get(&field.handle) {
                        tracing::warn!(?path, handle = %field.handle, "duplicate field handle, later file wins");
                        self.fields[idx] = field;
                    } else {
                        let idx = self.fields.len();
                        self.field_index.insert(field.handle.clone(), idx);
                        self.fields.push(field);
                    }
                }
                Err(e) => {
                    tracing::warn!(?path, %e, "skipping invalid field config");
                }
            }
        }
        Ok(())
    }
}

/// Read every `.yaml` file in a directory, sorted by path for a stable load order.
async fn read_yaml_documents(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let mut paths = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("yaml") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let content = fs::read_to_string(&path).await?;
        documents.push((path, content));
    }
    Ok(documents)
}

/// Write to a temp file then rename for atomic persistence.
async fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "no parent dir"))?;
    let tmp = dir.join(format!(".tmp_{}", Ulid::new()));
    fs::write(&tmp, data).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}
