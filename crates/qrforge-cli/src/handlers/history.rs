use super::HandlerContext;
use super::generate::report;
use anyhow::Result;
use qrforge_runtime::{Workspace, generate};
use qrforge_types::{HistoryEntry, truncate};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct HistoryList<'a> {
    entries: &'a [HistoryEntry],
}

pub fn list(ctx: &HandlerContext, workspace: &Workspace) -> Result<()> {
    let history = workspace.history()?;

    if ctx.is_json() {
        return ctx.print_json(&HistoryList {
            entries: history.entries(),
        });
    }

    if history.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in history.entries() {
        println!(
            "{}  {}  {:<14} {}",
            short_id(&entry.id),
            entry.created_at.format("%Y-%m-%d %H:%M:%S"),
            entry.content_type.as_str(),
            truncate(&entry.original_input.replace('\n', " "), 60)
        );
    }
    Ok(())
}

pub fn show(ctx: &HandlerContext, workspace: &Workspace, id: &str) -> Result<()> {
    let history = workspace.history()?;
    let entry = history.resolve(id)?;

    if ctx.is_json() {
        return ctx.print_json(entry);
    }

    let a = &entry.appearance;
    println!("ID:         {}", entry.id);
    println!("Type:       {}", entry.content_type);
    println!("Created:    {}", entry.created_at.to_rfc3339());
    println!("Input:      {}", entry.original_input);
    println!(
        "Appearance: {} on {}, {}px, level {}, margin {}",
        a.foreground_color, a.background_color, a.size, a.error_correction, a.margin
    );
    if let Some(logo) = &a.logo {
        println!("Logo:       ratio {}, cutout {}", logo.size_ratio, logo.cutout);
    }
    if a.background_image.is_some() {
        println!("Background: image");
    }
    if let Some(frame) = &a.frame {
        match &frame.caption {
            Some(caption) => println!("Frame:      {} \"{}\"", frame.style, caption),
            None => println!("Frame:      {}", frame.style),
        }
    }
    println!();
    println!("{}", entry.encoded);
    Ok(())
}

/// Restore an entry's settings and run generation again; the result becomes the newest entry.
pub fn replay(ctx: &HandlerContext, workspace: &Workspace, id: &str) -> Result<()> {
    let mut history = workspace.history()?;
    let entry = history.resolve(id)?.clone();

    let mut settings = workspace.settings()?;
    settings.restore(&entry);

    let generated = generate(&mut settings, &mut history)?;
    report(ctx, &settings, &generated)
}

pub fn clear(ctx: &HandlerContext, workspace: &Workspace) -> Result<()> {
    let mut history = workspace.history()?;
    let cleared = history.len();
    history.clear()?;

    if ctx.is_json() {
        return ctx.print_json(&json!({ "cleared": cleared }));
    }

    println!("Cleared {} history entries.", cleared);
    Ok(())
}

fn short_id(id: &str) -> &str {
    // UUIDv7: 13 characters of timestamp, a dash, the version digit and 3 random ones.
    id.get(..18).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id_keeps_timestamp_and_version() {
        let id = "01939a4e-7c2f-7b3a-9d1e-5f6a7b8c9d0e";
        assert_eq!(short_id(id), "01939a4e-7c2f-7b3a");
        assert_eq!(short_id("abc"), "abc");
    }
}
