//! Dashboard summary command.

use crate::context::AppContext;
use reembolso_application::format_brl;
use reembolso_core::Result;

pub async fn run(ctx: &AppContext) -> Result<()> {
    ctx.require_auth()?;

    let summary = ctx.client.dashboard_summary().await?;
    println!("Pending trips:     {}", summary.pending_trips);
    println!("Receivable:        {}", format_brl(summary.receivable));
    println!("Distance (month):  {:.1} km", summary.month_distance);
    Ok(())
}
