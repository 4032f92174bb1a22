//! Toolwiz CLI - drive the tool creation wizard from the command line.

mod host;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toolwiz_core::{DraftMutation, InputEvent, Integration};
use toolwiz_forms::{catalog, operation_table, FieldKind, FieldSpec, FormView, RendererRegistry};
use toolwiz_wizard::{StepValidator, ToolCreationWizard, WizardConfig, WizardHost, WizardStep};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::host::FileHost;

#[derive(Parser)]
#[command(name = "toolwiz")]
#[command(about = "Tool creation wizard", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tool types by group
    Types,
    /// Show the operation table of an integration
    Fields {
        /// Integration (salesforce, sap, workday, databricks)
        integration: String,
        /// Show only the fields of this operation
        #[arg(long)]
        operation: Option<String>,
    },
    /// Render the connection form of a draft
    Connection {
        /// Draft JSON file
        draft: PathBuf,
    },
    /// Apply one field edit to a draft
    Set {
        /// Draft JSON file
        draft: PathBuf,
        /// Field path, e.g. name or config.base_url
        path: String,
        /// New value
        value: String,
        /// Treat the value as a checkbox state (true/false)
        #[arg(long)]
        checkbox: bool,
    },
    /// Run one step validator
    Validate {
        /// Draft JSON file
        draft: PathBuf,
        /// Step key (type, basic, config, preview, review)
        #[arg(long)]
        step: String,
        /// Preview code file
        #[arg(long)]
        preview_file: Option<PathBuf>,
    },
    /// Walk the wizard to review and submit
    Walk {
        /// Draft JSON file
        draft: PathBuf,
        /// Edit an existing tool; starts after type selection
        #[arg(long)]
        editing: bool,
        /// File the preview code is read from when it must be generated
        #[arg(long)]
        preview_file: Option<PathBuf>,
        /// Where to write the submitted draft (default: the input file)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Wizard config JSON file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Types => {
            for (group, options) in catalog::grouped() {
                println!("{}", group);
                for option in options {
                    println!("  {:<12} {}", option.value.as_str(), option.label);
                }
            }
        }
        Commands::Fields { integration, operation } => {
            let integration: Integration = integration.parse()?;
            let table = operation_table(integration);
            println!("{}", table.title);

            match operation {
                Some(value) => {
                    let op = table
                        .operation(&value)
                        .ok_or_else(|| anyhow!("Unknown operation '{}' for {}", value, integration))?;
                    println!("{} ({})", op.label, op.value);
                    for field in op.fields {
                        print_field(field);
                    }
                }
                None => {
                    for op in table.operations {
                        let keys: Vec<&str> = op.fields.iter().map(|f| f.key).collect();
                        println!("  {:<16} {:<28} {}", op.value, op.label, keys.join(", "));
                    }
                }
            }
        }
        Commands::Connection { draft } => {
            let host = FileHost::open(&draft).await?;
            let draft = host.draft();
            let tool_type = draft.tool_type.ok_or_else(|| anyhow!("Draft has no tool type"))?;
            let form = RendererRegistry::with_builtin().render(tool_type, &draft.config)?;
            print_form(&form);

            if let Some(integration) = tool_type.integration() {
                let summary = toolwiz_forms::connection_table(integration).summary(&draft.name, &draft.config);
                println!();
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
        Commands::Set { draft, path, value, checkbox } => {
            let mut host = FileHost::open(&draft).await?;
            let event = if checkbox {
                let checked: bool = value
                    .parse()
                    .map_err(|_| anyhow!("Checkbox value must be true or false, got '{}'", value))?;
                InputEvent::checkbox(&path, checked)
            } else {
                InputEvent::text(&path, &value)
            };

            let mutation = DraftMutation::try_from(&event)?;
            host.on_input_change(mutation)?;
            host.save().await?;
            info!("Set {} in {}", path, draft.display());
        }
        Commands::Validate { draft, step, preview_file } => {
            let step: WizardStep = step.parse()?;
            let host = FileHost::open(&draft).await?;
            let preview = match preview_file {
                Some(path) => Some(tokio::fs::read_to_string(path).await?),
                None => None,
            };

            let config = WizardConfig::default();
            match StepValidator::new(&config).check(step, host.draft(), preview.as_deref()) {
                Ok(()) => println!("{}: valid", step.label()),
                Err(message) => anyhow::bail!("{}: {}", step.label(), message),
            }
        }
        Commands::Walk { draft, editing, preview_file, out, config } => {
            let config = match config {
                Some(path) => WizardConfig::load(path).await?,
                None => WizardConfig::default(),
            };
            let host = FileHost::open(&draft).await?;
            let mut host = host
                .with_preview_source(preview_file)
                .with_output(out.unwrap_or(draft));
            let mut wizard = ToolCreationWizard::new(editing).with_config(config);

            println!("{}", wizard.title());
            loop {
                let step = wizard.current_step();
                println!("[{}] {} - {}", wizard.progress_label(), step.label(), step.description());
                if step.is_last() {
                    break;
                }
                if let Err(e) = wizard.advance(&mut host).await {
                    warn!("Wizard stopped at {}", step);
                    wizard.cancel(&mut host);
                    if host.is_cancelled() {
                        info!("Session cancelled; {} left unchanged", host.output().display());
                    }
                    return Err(e.into());
                }
            }

            let content = wizard.content(&host, &RendererRegistry::with_builtin());
            println!("{}", serde_json::to_string_pretty(&content)?);

            wizard.submit(&mut host).await?;
            println!("Saved to {}", host.output().display());
        }
    }

    Ok(())
}

fn kind_name(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Url => "url",
        FieldKind::Password => "password",
        FieldKind::TextArea => "textarea",
        FieldKind::Json => "json",
        FieldKind::Select(_) => "select",
    }
}

fn print_field(field: &FieldSpec) {
    println!(
        "  {:<24} {:<28} {:<9} {}{}",
        field.key,
        field.label,
        kind_name(&field.kind),
        if field.required { "required " } else { "" },
        if field.default.is_empty() {
            String::new()
        } else {
            format!("(default: {})", field.default)
        },
    );
}

fn print_form(form: &FormView) {
    println!("{}", form.title);
    if let Some(notice) = &form.notice {
        println!("{}", notice);
    }
    for section in &form.sections {
        if let Some(title) = &section.title {
            println!();
            println!("{}", title);
        }
        for field in &section.fields {
            let marker = if field.required { "*" } else { "" };
            println!("  {}{}: {}", field.label, marker, field.value);
        }
    }
}
