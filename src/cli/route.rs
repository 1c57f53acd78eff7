//! CLI route: single route table and run context. Dispatches to the library and
//! presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_demo_intro, format_demo_result, format_root_json, format_root_text,
    format_verification,
};
use crate::cli::sample::SAMPLE_TEXT;
use crate::config::{CommitConfig, SplitMode};
use crate::error::ApiError;
use crate::proof;
use crate::tree::builder::{Tree, TreeBuilder};
use crate::types::Digest;
use dialoguer::Input;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Result of one command: text to print and whether the process should exit cleanly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    pub fn success(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

/// Runtime context for CLI execution, built from the loaded configuration.
pub struct RunContext {
    config: CommitConfig,
    builder: TreeBuilder,
}

impl RunContext {
    pub fn new(config: CommitConfig) -> Self {
        let builder = TreeBuilder::new().with_config(config.tree.clone());
        Self { config, builder }
    }

    pub fn config(&self) -> &CommitConfig {
        &self.config
    }

    /// Execute a command and return its output
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        match command {
            Commands::Demo { word } => self.handle_demo(word.as_deref()),
            Commands::Root { input, format } => {
                let tree = self.build_from_input(input.as_deref())?;
                let text = match format.as_str() {
                    "json" => format_root_json(&tree)?,
                    _ => format_root_text(&tree),
                };
                Ok(CommandOutput::success(text))
            }
            Commands::Prove { item, input } => {
                let tree = self.build_from_input(input.as_deref())?;
                let proof = proof::generate(item.as_bytes(), &tree)
                    .ok_or_else(|| ApiError::ItemNotFound(item.clone()))?;
                Ok(CommandOutput::success(proof.to_json()?))
            }
            Commands::Verify { item, root, proof } => {
                let root = Digest::from_hex(root)?;
                let verified = proof::verify_json(item.as_bytes(), &root, proof);
                info!(verified, "Verification finished");
                Ok(CommandOutput {
                    text: format_verification(verified),
                    success: verified,
                })
            }
            Commands::ShowConfig => Ok(CommandOutput::success(self.config.to_toml()?)),
        }
    }

    /// Commit to the sample text, then prove and verify one word of it.
    ///
    /// The introduction is printed before prompting so the user sees the sample.
    fn handle_demo(&self, word: Option<&str>) -> Result<CommandOutput, ApiError> {
        let items = SplitMode::Words.split(SAMPLE_TEXT);
        let tree = self.builder.build(&items)?;
        let root = tree.root_digest();

        println!("{}", format_demo_intro(SAMPLE_TEXT, &root));
        let word = match word {
            Some(w) => w.to_string(),
            None => prompt_word()?,
        };

        let proof = proof::generate(word.as_bytes(), &tree);
        let verified = proof::verify(word.as_bytes(), &root, proof.as_ref());
        Ok(CommandOutput::success(format_demo_result(
            proof.as_ref(),
            verified,
        )?))
    }

    fn build_from_input(&self, input: Option<&Path>) -> Result<Tree, ApiError> {
        let text = read_input(input)?;
        let items = self.config.input.split.split(&text);
        debug!(item_count = items.len(), "Read items");
        Ok(self.builder.build(&items)?)
    }
}

fn read_input(input: Option<&Path>) -> Result<String, ApiError> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn prompt_word() -> Result<String, ApiError> {
    Input::<String>::new()
        .with_prompt("Word you want")
        .interact_text()
        .map_err(|e| ApiError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))
}
