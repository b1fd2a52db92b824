use super::HandlerContext;
use crate::args::GenerateArgs;
use anyhow::{Context, Result};
use qrforge_runtime::{
    AppearanceEdit, ContentEdit, Generated, SettingsStore, Workspace, generate,
    read_image_data_uri,
};
use qrforge_types::{HistoryEntry, RenderRequest};
use serde::Serialize;
use std::path::Path;
use tracing::warn;

#[derive(Serialize)]
struct GenerateOutput<'a> {
    value: &'a str,
    entry: &'a HistoryEntry,
    render: Option<RenderRequest>,
}

pub fn handle(ctx: &HandlerContext, workspace: &Workspace, args: GenerateArgs) -> Result<()> {
    let content_type = args.content_type;

    if !workspace.visible_types()?.is_visible(content_type) {
        warn!(%content_type, "generating a hidden content type");
    }

    let mut settings = workspace.settings()?;
    settings.select_type(content_type);

    for (key, value) in &args.fields {
        settings.apply(ContentEdit::parse(content_type, key, value)?)?;
    }

    apply_appearance(&mut settings, &args)?;

    let mut history = workspace.history()?;
    let generated = generate(&mut settings, &mut history)?;
    report(ctx, &settings, &generated)
}

/// Print a generation: the encoded text alone, or value, entry and render request.
pub(super) fn report(
    ctx: &HandlerContext,
    settings: &SettingsStore,
    generated: &Generated,
) -> Result<()> {
    if ctx.is_json() {
        return ctx.print_json(&GenerateOutput {
            value: &generated.value,
            entry: &generated.entry,
            render: settings.render_request(),
        });
    }

    println!("{}", generated.value);
    Ok(())
}

fn apply_appearance(settings: &mut SettingsStore, args: &GenerateArgs) -> Result<()> {
    // Base options first: the background color locks once an image or frame is on.
    if let Some(fg) = &args.fg {
        settings.apply(AppearanceEdit::ForegroundColor(fg.clone()))?;
    }
    if let Some(bg) = &args.bg {
        settings.apply(AppearanceEdit::BackgroundColor(bg.clone()))?;
    }
    if let Some(size) = args.size {
        settings.apply(AppearanceEdit::Size(size))?;
    }
    if let Some(level) = args.ecl {
        settings.apply(AppearanceEdit::ErrorCorrection(level))?;
    }
    if let Some(margin) = args.margin {
        settings.apply(AppearanceEdit::Margin(margin))?;
    }

    if let Some(path) = &args.logo {
        let image = load_image(path)?;
        settings.apply(AppearanceEdit::LogoEnabled(true))?;
        settings.apply(AppearanceEdit::LogoImage(Some(image)))?;
        if let Some(ratio) = args.logo_ratio {
            settings.apply(AppearanceEdit::LogoSizeRatio(ratio))?;
        }
        settings.apply(AppearanceEdit::LogoCutout(args.logo_cutout))?;
    }

    if let Some(path) = &args.background_image {
        let image = load_image(path)?;
        settings.apply(AppearanceEdit::BackgroundImageEnabled(true))?;
        settings.apply(AppearanceEdit::BackgroundImage(Some(image)))?;
    }

    if let Some(style) = args.frame {
        settings.apply(AppearanceEdit::FrameEnabled(true))?;
        settings.apply(AppearanceEdit::FrameStyle(style))?;
        if let Some(caption) = &args.frame_caption {
            settings.apply(AppearanceEdit::FrameCaption(Some(caption.clone())))?;
        }
    }

    Ok(())
}

fn load_image(path: &Path) -> Result<String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start image reader")?;
    Ok(runtime.block_on(read_image_data_uri(path))?)
}
