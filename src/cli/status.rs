//! Domain status command

use anyhow::Result;

use crate::api::GtmClient;
use crate::cli::DomainArg;
use crate::output;

pub async fn show(client: &GtmClient, args: DomainArg) -> Result<()> {
    let status = client.domain_status(&args.domain).await?;
    output::print_basic_table(&output::status_rows(&status));
    Ok(())
}
