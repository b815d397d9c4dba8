//! Client output - the config archive the in-game client reads.
//!
//! The client expects a zip named `<player>_ccs_ap_config.zip` containing a
//! single `ap_config.lua` with a Lua return-table. The format is dictated by
//! the external client and is not negotiable here.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::WorldError;

/// The file the client looks for inside the archive.
const CONFIG_FILE_NAME: &str = "ap_config.lua";

/// Connection details written into the client config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectInfo {
    /// Host address; the client prompts when empty.
    #[serde(default)]
    pub host: String,
    /// The player's slot name.
    pub player: String,
    #[serde(default)]
    pub password: String,
    /// The multiworld seed.
    pub seed: u64,
}

impl ConnectInfo {
    /// Parse the generator config from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, WorldError> {
        Ok(toml::from_str(source)?)
    }

    /// The archive file name for this player.
    pub fn archive_file_name(&self) -> String {
        format!("{}_ccs_ap_config.zip", self.player)
    }

    /// Render the Lua return-table the client parses.
    pub fn lua_config(&self) -> String {
        let player = escape_lua(&self.player);
        let host = escape_lua(&self.host);
        let password = escape_lua(&self.password);
        format!(
            "return {{\n    host = \"{host}\",\n    player = \"{player}\",\n    password = \"{password}\",\n    seed = {seed},\n}}\n",
            seed = self.seed,
        )
    }

    /// Write the client archive into `output_dir` and return its path.
    pub fn write_client_archive(&self, output_dir: &Path) -> Result<PathBuf, WorldError> {
        let archive_path = output_dir.join(self.archive_file_name());
        let file = File::create(&archive_path)?;

        let mut archive = ZipWriter::new(file);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        archive.start_file(CONFIG_FILE_NAME, options)?;
        archive.write_all(self.lua_config().as_bytes())?;
        archive.finish()?;

        Ok(archive_path)
    }
}

fn escape_lua(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
