#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Sends a one-off notification email through the product bridge

use std::{fs, path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use speakeasy_bridge::{
    domain::{
        email_addresses::EmailAddress,
        notifications::EmailOptions,
        product::{ConfluenceProductAccessor, ProductAccessor},
        templates::TemplateContext,
    },
    infrastructure::{
        directory::memory::InMemoryDirectory,
        email::smtp::{SmtpConfig, SmtpMailTransport},
        metadata::properties::BuildProperties,
        templates::tera::TeraTemplateRenderer,
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The SMTP configuration
    #[clap(flatten)]
    pub smtp: SmtpConfig,

    /// Path to the build properties file
    #[clap(long, env = "BUILD_PROPERTIES", default_value = "build.properties")]
    pub properties: PathBuf,

    /// Path to a JSON file seeding the user directory
    #[clap(long, env = "DIRECTORY_SEED")]
    pub directory: PathBuf,

    /// Glob the notification templates are loaded from
    #[clap(long, env = "TEMPLATE_GLOB", default_value = "templates/**/*")]
    pub templates: String,

    /// Username to notify
    #[clap(long)]
    pub to_username: String,

    /// Sender display name
    #[clap(long, default_value = "Speakeasy")]
    pub from_name: String,

    /// Sender address
    #[clap(long, env = "NOTIFICATION_FROM")]
    pub from_email: String,

    /// Subject template id
    #[clap(long, default_value = "emails/extension_enabled_subject.txt")]
    pub subject_template: String,

    /// Body template id
    #[clap(long, default_value = "emails/extension_enabled_body.txt")]
    pub body_template: String,

    /// Name of the extension the notification is about
    #[clap(long)]
    pub plugin_name: String,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let directory = Arc::new(InMemoryDirectory::from_json(&fs::read_to_string(
        &args.directory,
    )?)?);
    let renderer = Arc::new(TeraTemplateRenderer::from_glob(&args.templates)?);
    let transport = Arc::new(SmtpMailTransport::new(args.smtp));
    let metadata = Arc::new(BuildProperties::from_file(&args.properties)?);

    let accessor = ConfluenceProductAccessor::new(directory, renderer, transport, metadata);

    let version = accessor.version()?;
    let data_version = accessor.data_version()?;
    info!(sdk = accessor.sdk_name(), %version, %data_version, "Product bridge ready");

    let mut context = TemplateContext::new();
    context.insert(
        "pluginName".to_string(),
        serde_json::Value::String(args.plugin_name),
    );

    let options = EmailOptions::new(
        args.from_name,
        EmailAddress::new(&args.from_email)?,
        args.subject_template,
        args.body_template,
    )
    .to_username(args.to_username)
    .context(context);

    accessor.send_email(&options).await;

    Ok(())
}
