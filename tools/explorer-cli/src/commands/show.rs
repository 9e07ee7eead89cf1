//! Product detail command.

use anyhow::{bail, Result};
use explorer_runtime::LOAD_DETAIL_FAILED;

use super::{render, ShowArgs};
use crate::context::Context;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let mut controller = ctx.detail()?;

    let spinner = ctx.output.spinner(&format!("Loading product {}...", args.id));
    let loaded = controller.load(args.id).await.is_some();
    spinner.finish_and_clear();

    if !loaded {
        // Surface the queued failure as the command error instead of
        // printing it twice.
        controller.take_notifications();
        bail!("{} (product {})", LOAD_DETAIL_FAILED, args.id);
    }

    if let Some(detail) = controller.detail_mut() {
        if let Some(index) = args.image {
            if !detail.select_image(index) {
                ctx.output.warn(&format!(
                    "Image {} does not exist; product has {} image(s)",
                    index,
                    detail.product().images.len()
                ));
            }
        }

        if let Some(quantity) = args.quantity {
            while detail.quantity() < quantity && detail.can_increment() {
                detail.increment();
            }
            if detail.quantity() < quantity {
                ctx.output.warn(&format!("Only {} in stock", detail.product().stock));
            }
        }

        render::detail(ctx, detail);
    }

    if args.add_to_cart {
        controller.add_to_cart();
    }
    render::detail_notifications(ctx, &mut controller);

    Ok(())
}
