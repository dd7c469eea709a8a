//! Hierarchy CLI commands

use clap::Subcommand;

use crate::display::{format_hierarchy_nodes, format_hierarchy_path};
use crate::error::MatreqResult;
use crate::storage::Storage;

/// Hierarchy subcommands
#[derive(Subcommand)]
pub enum HierarchyCommands {
    /// List the nodes below a parent (level 1 when omitted)
    Children {
        /// Parent node code
        #[arg(short, long)]
        parent: Option<String>,
    },
    /// Show the chain from level 1 down to a node
    Path {
        /// Node code
        code: String,
    },
}

/// Handle a hierarchy command
pub fn handle_hierarchy_command(storage: &Storage, cmd: HierarchyCommands) -> MatreqResult<()> {
    match cmd {
        HierarchyCommands::Children { parent } => {
            let nodes = storage.hierarchy.children(parent.as_deref())?;
            print!("{}", format_hierarchy_nodes(&nodes));
        }
        HierarchyCommands::Path { code } => {
            let path = storage.hierarchy.path(&code)?;
            println!("{}", format_hierarchy_path(&path));
        }
    }

    Ok(())
}
