//! serve command - run the NDJSON network service

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::server;
use crate::service::{SeedData, Service};
use crate::ui::output::{self, Verbosity};

/// Run the service until ctrl-c.
pub fn serve(
    config_path: Option<&Path>,
    listen: Option<&str>,
    seed: Option<&Path>,
    verbosity: Verbosity,
) -> Result<()> {
    let config = Config::load(config_path).context("failed to load configuration")?;

    let addr: SocketAddr = match listen {
        Some(listen) => listen
            .parse()
            .with_context(|| format!("invalid listen address '{listen}'"))?,
        None => config.listen(),
    };

    let service = Service::new(config.history_capacity());
    if let Some(path) = seed.or(config.seed()) {
        let data = SeedData::load(path)?;
        data.apply(&service)?;
        output::print(
            format!(
                "seeded {} stations, {} routes from {}",
                data.stations.len(),
                data.routes.len(),
                path.display()
            ),
            verbosity,
        );
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
    runtime.block_on(async {
        let listener = server::bind(addr).await?;
        let local = listener.local_addr().context("no local address")?;
        output::print(format!("metro listening on {local}"), verbosity);

        tokio::select! {
            result = server::serve(service, listener, verbosity) => result,
            _ = tokio::signal::ctrl_c() => {
                output::print("shutting down", verbosity);
                Ok(())
            }
        }
    })
}
