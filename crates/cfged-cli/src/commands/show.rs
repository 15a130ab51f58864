//! The show command

use crate::context::EditorContext;
use crate::error::Result;
use crate::render::render_form;

/// Print the form, or the config documents as JSON.
pub fn run_show(ctx: &EditorContext, advanced: bool, json: bool) -> Result<()> {
    if json {
        let documents = ctx.session.documents(ctx.config.document_options());
        println!("{}", serde_json::to_string_pretty(&documents)?);
        return Ok(());
    }

    print!("{}", render_form(&ctx.session, &ctx.manifest, advanced));
    Ok(())
}
