use super::HandlerContext;
use anyhow::Result;
use qrforge_engine::normalize_url;
use serde_json::json;

pub fn handle(ctx: &HandlerContext, text: &str) -> Result<()> {
    let url = normalize_url(text);

    if ctx.is_json() {
        return ctx.print_json(&json!({ "input": text, "url": url }));
    }

    println!("{}", url);
    Ok(())
}
