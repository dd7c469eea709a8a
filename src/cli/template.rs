//! Template CLI commands
//!
//! Lists requests that may seed a new one and previews a clone.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_request_list, truncate};
use crate::error::MatreqResult;
use crate::schema;
use crate::services::Session;

/// Template subcommands
#[derive(Subcommand)]
pub enum TemplateCommands {
    /// List requests that can be cloned
    List,
    /// Preview the attributes a clone would start from
    Clone {
        /// Source request ID (full or short)
        request: String,
        /// Text to replace in the cloned attributes
        #[arg(long)]
        find: Option<String>,
        /// Replacement text for --find
        #[arg(long, requires = "find")]
        replace: Option<String>,
    },
}

/// Handle a template command
pub fn handle_template_command(
    session: &Session<'_>,
    settings: &Settings,
    cmd: TemplateCommands,
) -> MatreqResult<()> {
    let service = session.templates();

    match cmd {
        TemplateCommands::List => {
            let templates = service.cloneable()?;
            println!("{}", format_request_list(&templates, &settings.date_format));
        }

        TemplateCommands::Clone {
            request,
            find,
            replace,
        } => {
            let seed = service.seed(&request, find.as_deref(), replace.as_deref())?;

            println!("Clone of {} ({} attributes)", request, seed.len());
            for (key, value) in seed.iter() {
                if value.is_blank() {
                    continue;
                }
                println!(
                    "  {:<12} {:<32} {}",
                    key.code(),
                    truncate(schema::label(key), 32),
                    schema::kind(key).render(value)
                );
            }
            println!();
            println!("Run 'matreq request create --clone-from {}' to submit it.", request);
        }
    }

    Ok(())
}
