use anyhow::{Context, Result};
use clap::Parser;
use notecase::cli::args::Args;
use notecase::cli::prompt::Always;
use notecase::infrastructure::{Config, FileStore, JsonRepository};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture: a throwaway data directory plus an isolated config file
#[allow(dead_code)]
pub struct TestWorkspace {
    _temp_dir: TempDir,
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub export_dir: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Empty workspace: no folders.json, no notes.json
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let data_dir = temp_dir.path().join("data");
        let export_dir = temp_dir.path().join("exports");
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.export.output_dir = export_dir.to_string_lossy().into_owned();
        config
            .save(&config_path)
            .context("Failed to write test config")?;

        Ok(Self {
            _temp_dir: temp_dir,
            data_dir,
            config_path,
            export_dir,
        })
    }

    /// Workspace seeded with the golden folders and notes
    pub fn with_fixture() -> Result<Self> {
        let workspace = Self::new()?;
        std::fs::create_dir_all(&workspace.data_dir)?;
        std::fs::write(workspace.data_dir.join("folders.json"), golden::FOLDERS_JSON)
            .context("Failed to seed folders")?;
        std::fs::write(workspace.data_dir.join("notes.json"), golden::NOTES_JSON)
            .context("Failed to seed notes")?;
        Ok(workspace)
    }

    pub fn open_repository(&self) -> Result<JsonRepository<FileStore>> {
        Ok(JsonRepository::new(FileStore::open(&self.data_dir)?))
    }

    pub fn read_raw(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.data_dir.join(format!("{key}.json"))).ok()
    }

    /// Run the CLI against this workspace, answering every confirmation with
    /// `answer`, and return what it printed
    pub fn run(&self, argv: &[&str], answer: bool) -> Result<String> {
        let data_dir = path_str(&self.data_dir);
        let config = path_str(&self.config_path);
        let mut full = vec!["notecase", "-d", data_dir.as_str(), "-c", config.as_str()];
        full.extend_from_slice(argv);

        let args = Args::try_parse_from(full)?;
        let mut out = Vec::new();
        notecase::run_with(args, &mut Always(answer), &mut out)?;
        Ok(String::from_utf8(out)?)
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Known records in the golden dataset
#[allow(dead_code)]
pub mod golden {
    pub const WORK_FOLDER: i64 = 1_717_000_000_000;
    pub const IDEAS_FOLDER: i64 = 1_717_000_000_500;

    pub const STANDUP_NOTE: i64 = 1_718_000_000_300; // in Work
    pub const GROCERIES_NOTE: i64 = 1_718_000_000_200; // no folder
    pub const ORPHAN_NOTE: i64 = 1_718_000_000_100; // folder long gone

    pub const MISSING_FOLDER: i64 = 1_600_000_000_000;
    pub const NONEXISTENT: i64 = 999_999_999;

    pub const FOLDERS_JSON: &str = r#"[
  {"id": 1717000000000, "name": "Work", "description": "Work stuff"},
  {"id": 1717000000500, "name": "Ideas", "description": ""}
]"#;

    pub const NOTES_JSON: &str = r#"[
  {
    "id": 1718000000300,
    "title": "Standup",
    "content": "Yesterday: parser. Today: exporter.",
    "folderId": 1717000000000
  },
  {"id": 1718000000200, "title": "Groceries", "content": "milk, eggs, bread", "folderId": null},
  {
    "id": 1718000000100,
    "title": "Orphan",
    "content": "My folder was deleted",
    "folderId": 1600000000000
  }
]"#;
}
