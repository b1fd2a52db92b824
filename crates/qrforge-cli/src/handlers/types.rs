use super::HandlerContext;
use anyhow::Result;
use qrforge_runtime::{KeyValueStore, VisibleTypes, Workspace};
use qrforge_types::ContentType;
use serde::Serialize;

#[derive(Serialize)]
struct TypesList<'a> {
    visible: &'a [ContentType],
    hidden: Vec<ContentType>,
}

pub fn list(ctx: &HandlerContext, workspace: &Workspace) -> Result<()> {
    print_types(ctx, &workspace.visible_types()?)
}

pub fn show(ctx: &HandlerContext, workspace: &Workspace, content_type: ContentType) -> Result<()> {
    let mut visible = workspace.visible_types()?;
    let changed = visible.show(content_type)?;

    if ctx.is_json() {
        return print_types(ctx, &visible);
    }
    if changed {
        println!("{} is now visible.", content_type);
    } else {
        println!("{} is already visible.", content_type);
    }
    Ok(())
}

pub fn hide(ctx: &HandlerContext, workspace: &Workspace, content_type: ContentType) -> Result<()> {
    let mut visible = workspace.visible_types()?;
    let changed = visible.hide(content_type)?;

    if ctx.is_json() {
        return print_types(ctx, &visible);
    }
    if changed {
        println!("{} is now hidden.", content_type);
    } else {
        println!("{} is already hidden.", content_type);
    }
    Ok(())
}

pub fn reset(ctx: &HandlerContext, workspace: &Workspace) -> Result<()> {
    let mut visible = workspace.visible_types()?;
    visible.reset()?;

    if ctx.is_json() {
        return print_types(ctx, &visible);
    }
    println!("Visible content types reset to defaults.");
    Ok(())
}

fn print_types<S: KeyValueStore>(ctx: &HandlerContext, visible: &VisibleTypes<S>) -> Result<()> {
    let hidden: Vec<ContentType> = ContentType::ALL
        .into_iter()
        .filter(|ty| !visible.is_visible(*ty))
        .collect();

    if ctx.is_json() {
        return ctx.print_json(&TypesList {
            visible: visible.types(),
            hidden,
        });
    }

    for ty in visible.types() {
        println!("[x] {}", ty);
    }
    for ty in hidden {
        println!("[ ] {}", ty);
    }
    Ok(())
}
