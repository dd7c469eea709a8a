//! Schema CLI commands

use clap::Subcommand;

use crate::display::{format_attribute_details, format_attribute_list};
use crate::error::{MatreqError, MatreqResult};
use crate::schema::{AttrKey, Group};

/// Schema subcommands
#[derive(Subcommand)]
pub enum SchemaCommands {
    /// List attributes, optionally of one group
    List {
        /// Group name (basic, units, sales, purchasing, mrp, storage, quality,
        /// accounting, trade, classification, request)
        #[arg(short, long)]
        group: Option<String>,
    },
    /// Show one attribute
    Show {
        /// Attribute key, e.g. MAKTX
        key: String,
    },
}

/// Handle a schema command
pub fn handle_schema_command(cmd: SchemaCommands) -> MatreqResult<()> {
    match cmd {
        SchemaCommands::List { group } => {
            let group = group
                .map(|g| {
                    Group::parse(&g).ok_or_else(|| {
                        MatreqError::Validation(format!("Unknown attribute group: '{}'", g))
                    })
                })
                .transpose()?;
            print!("{}", format_attribute_list(group));
        }
        SchemaCommands::Show { key } => {
            let key: AttrKey = key.parse().map_err(MatreqError::Validation)?;
            print!("{}", format_attribute_details(key));
        }
    }

    Ok(())
}
