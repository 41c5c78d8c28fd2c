//! CLI runner - executes commands

use crate::authorizations::{AuthorizationsClient, ExpressRouteAuthorization, PrivateCloudId};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::context::RequestContext;
use crate::error::{Error, Result};
use futures::TryStreamExt;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

const REDACTED: &str = "<redacted>";

/// CLI runner
pub struct Runner {
    cli: Cli,
    config: ClientConfig,
}

impl Runner {
    /// Create a runner, loading and merging configuration from the flags
    pub fn new(cli: Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_uri) = &cli.base_uri {
            config.base_uri.clone_from(base_uri);
        }
        if let Some(token) = &cli.bearer_token {
            config
                .headers
                .insert("Authorization".to_string(), format!("Bearer {token}"));
        }
        config.validate()?;

        Ok(Self { cli, config })
    }

    /// The effective configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Log level to initialize tracing with
    pub fn log_level(&self) -> tracing::Level {
        if self.cli.verbose {
            tracing::Level::DEBUG
        } else {
            self.config.log_level.into()
        }
    }

    /// Run the CLI command, printing to stdout
    pub async fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out).await
    }

    /// Run the CLI command, printing to `out`
    pub async fn run_with_output<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Commands::List {
                private_cloud_id,
                name,
                stream,
                timeout_seconds,
            } => {
                let id = PrivateCloudId::parse_insensitively(private_cloud_id)?;
                let client = AuthorizationsClient::from_config(&self.config)?;
                let ctx = self.request_context(*timeout_seconds);
                let outcome = if *stream {
                    self.list_streaming(&client, &ctx, &id, name.as_deref(), out)
                        .await
                } else {
                    self.list_all(&client, &ctx, &id, name.as_deref(), out)
                        .await
                };
                // Stops the Ctrl-C watcher
                ctx.cancel();
                outcome
            }
            Commands::Config => self.print_config(out),
        }
    }

    /// Cancel on Ctrl-C and apply the optional timeout
    fn request_context(&self, timeout_seconds: Option<u64>) -> RequestContext {
        let mut ctx = RequestContext::new();
        if let Some(secs) = timeout_seconds {
            ctx = ctx.with_timeout(Duration::from_secs(secs));
        }

        let token = ctx.cancellation_token().clone();
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                result = tokio::signal::ctrl_c() => {
                    if result.is_ok() {
                        info!("Interrupted, cancelling listing");
                        token.cancel();
                    }
                }
            }
        });

        ctx
    }

    async fn list_all<W: Write>(
        &self,
        client: &AuthorizationsClient,
        ctx: &RequestContext,
        id: &PrivateCloudId,
        name: Option<&str>,
        out: &mut W,
    ) -> Result<()> {
        let result = match name {
            Some(name) => {
                client
                    .list_complete_matching_predicate(ctx, id, |a: &ExpressRouteAuthorization| {
                        a.name.as_deref() == Some(name)
                    })
                    .await
            }
            None => client.list_complete(ctx, id).await,
        }?;

        info!("Listed {} authorizations under {}", result.len(), id);

        match self.cli.format {
            OutputFormat::Json => {
                for item in &result.items {
                    self.write_item(out, item)?;
                }
            }
            OutputFormat::Pretty => {
                serde_json::to_writer_pretty(&mut *out, &result.items).map_err(Error::Output)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    async fn list_streaming<W: Write>(
        &self,
        client: &AuthorizationsClient,
        ctx: &RequestContext,
        id: &PrivateCloudId,
        name: Option<&str>,
        out: &mut W,
    ) -> Result<()> {
        let stream = client
            .list_stream(ctx, id)
            .try_filter(|a| futures::future::ready(name.is_none() || a.name.as_deref() == name));
        futures::pin_mut!(stream);

        let mut count = 0usize;
        while let Some(item) = stream.try_next().await? {
            count += 1;
            self.write_item(out, &item)?;
        }

        debug!("Streamed {count} authorizations under {id}");
        Ok(())
    }

    fn write_item<W: Write>(&self, out: &mut W, item: &ExpressRouteAuthorization) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => serde_json::to_writer(&mut *out, item),
            OutputFormat::Pretty => serde_json::to_writer_pretty(&mut *out, item),
        }
        .map_err(Error::Output)?;
        writeln!(out)?;
        Ok(())
    }

    fn print_config<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut config = self.config.clone();
        for (key, value) in &mut config.headers {
            if key.eq_ignore_ascii_case("authorization") {
                *value = REDACTED.to_string();
            }
        }
        let yaml = serde_yaml::to_string(&config)?;
        out.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
