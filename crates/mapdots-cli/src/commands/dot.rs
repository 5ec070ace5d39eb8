//! Dot command handlers
//!
//! The store silently ignores unknown ids, so every handler resolves the id
//! first and reports a missing dot itself.

use anyhow::{bail, Context, Result};

use mapdots_core::{ContentField, DotPersistence, DotStore};

use crate::args::{Pair, RectArg};
use crate::output::Output;

/// Place a new dot from a pointer position or a percentage
pub fn create<P: DotPersistence>(
    store: &mut DotStore<P>,
    at: Option<Pair>,
    rect: Option<RectArg>,
    pct: Option<Pair>,
    output: &Output,
) -> Result<()> {
    let dot = match (at, rect, pct) {
        (Some(at), Some(RectArg(rect)), _) => store
            .create_at_pointer(at.to_pointer(), rect)
            .context("Image box has no usable size")?,
        (None, _, Some(Pair(x, y))) => store.create(x, y),
        _ => bail!("Give either --pct X,Y or --at X,Y with --rect L,T,W,H"),
    };

    output.success(&format!("Created dot: {}", dot.id));
    output.print_dot(&dot);
    Ok(())
}

/// List all dots in insertion order
pub fn list<P: DotPersistence>(store: &DotStore<P>, output: &Output) -> Result<()> {
    output.print_dots(store.dots());
    Ok(())
}

/// Show a single dot
pub fn show<P: DotPersistence>(store: &DotStore<P>, id: &str, output: &Output) -> Result<()> {
    let id = resolve_id(store, id)?;
    if let Some(dot) = store.get(&id) {
        output.print_dot(dot);
    }
    Ok(())
}

/// Replace one content field
pub fn set<P: DotPersistence>(
    store: &mut DotStore<P>,
    id: &str,
    field: &str,
    value: String,
    output: &Output,
) -> Result<()> {
    let field: ContentField = field.parse()?;
    let id = resolve_id(store, id)?;

    store.update_content(&id, field, value);

    output.success(&format!("Updated {} of {}", field, id));
    if let Some(dot) = store.get(&id) {
        output.print_dot(dot);
    }
    Ok(())
}

/// Move to an absolute percentage or by a pixel delta
pub fn move_dot<P: DotPersistence>(
    store: &mut DotStore<P>,
    id: &str,
    to: Option<Pair>,
    by: Option<Pair>,
    rect: Option<RectArg>,
    output: &Output,
) -> Result<()> {
    let id = resolve_id(store, id)?;

    match (to, by, rect) {
        (Some(Pair(x, y)), None, _) => {
            store.move_to(&id, x, y);
        }
        (None, Some(Pair(dx, dy)), Some(RectArg(rect))) => {
            store.drag_by(&id, dx, dy, rect);
        }
        _ => bail!("Give either --to X,Y or --by DX,DY with --rect L,T,W,H"),
    }

    if let Some(dot) = store.get(&id) {
        output.success(&format!("Moved {} to {:.2}%, {:.2}%", dot.id, dot.x, dot.y));
        output.print_dot(dot);
    }
    Ok(())
}

/// Delete a dot
pub fn delete<P: DotPersistence>(store: &mut DotStore<P>, id: &str, output: &Output) -> Result<()> {
    let id = resolve_id(store, id)?;
    store.delete(&id);
    output.success(&format!("Deleted dot: {}", id));
    Ok(())
}

/// Resolve a full id or a unique prefix of one
///
/// The `dot_` prefix may be left off.
fn resolve_id<P: DotPersistence>(store: &DotStore<P>, id: &str) -> Result<String> {
    if store.contains(id) {
        return Ok(id.to_string());
    }

    let wanted = if id.starts_with("dot_") {
        id.to_string()
    } else {
        format!("dot_{}", id)
    };

    let matches: Vec<_> = store
        .dots()
        .iter()
        .filter(|d| d.id.starts_with(id) || d.id.starts_with(&wanted))
        .collect();

    match matches.len() {
        0 => bail!("No dot found matching: {}", id),
        1 => Ok(matches[0].id.clone()),
        _ => {
            eprintln!("Multiple dots match '{}':", id);
            for dot in &matches {
                eprintln!("  {} - {}", dot.id, dot.content.title);
            }
            bail!("Ambiguous ID. Please provide more characters.");
        }
    }
}
