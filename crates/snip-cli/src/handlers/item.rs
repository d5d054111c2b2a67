use crate::cli::Commands;
use crate::context::CliContext;
use crate::output;
use serde_json::json;

pub async fn handle(ctx: &mut CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Add { text } => match ctx.list.add(&text) {
            Ok(()) => {
                ctx.persist().await?;
                output::output_success(json!({
                    "added": text,
                    "item_count": ctx.list.len()
                }));
            }
            Err(e) => output::output_error(&e.to_string()),
        },
        Commands::List => {
            output::output_list(ctx.list.items().to_vec());
        }
        Commands::Edit { index, text } => match ctx.list.edit(Some(index), &text) {
            Ok(()) => {
                ctx.persist().await?;
                output::output_success(json!({
                    "index": index,
                    "text": text
                }));
            }
            Err(e) => output::output_error(&e.to_string()),
        },
        Commands::Remove { index } => match ctx.list.remove(Some(index)) {
            Ok(()) => {
                ctx.persist().await?;
                output::output_success(json!({
                    "removed": index,
                    "item_count": ctx.list.len()
                }));
            }
            Err(e) => output::output_error(&e.to_string()),
        },
        Commands::Clear => {
            let cleared = ctx.list.len();
            ctx.list.clear();
            ctx.persist().await?;
            output::output_success(json!({ "cleared": cleared }));
        }
        Commands::Copy { index } => {
            let text = match ctx.list.copy(Some(index)) {
                Ok(text) => text.to_string(),
                Err(e) => output::output_error(&e.to_string()),
            };
            if let Err(e) = snip_tui::clipboard::copy_to_clipboard(&text) {
                output::output_error(&e.to_string());
            }
            output::output_success(json!({
                "copied": text,
                "copy_count": ctx.list.copy_count()
            }));
        }
        Commands::Status => {
            output::output_success(ctx.list.status());
        }
        // Generated in main before a context exists.
        Commands::Completions { .. } => {}
    }
    Ok(())
}
