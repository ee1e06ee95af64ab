use chrono::Utc;
use clap::Parser;
use review_seo::adapters::{storage, ReqwestTransport, SystemClipboard};
use review_seo::config::{cli::LogFormat, load_app_config, ResolvedConfig};
use review_seo::core::copy_state::copy_item;
use review_seo::core::render::render_report;
use review_seo::core::ConfigProvider;
use review_seo::domain::model::{FileKind, Payload};
use review_seo::utils::{logger, validation::Validate};
use review_seo::{CliConfig, CopyState, FormState, SubmissionPipeline};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting review-seo");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(cli: CliConfig) -> review_seo::Result<()> {
    cli.validate()?;

    let app_config = load_app_config(cli.config.as_deref())?;
    let config = ResolvedConfig::resolve(cli.endpoint.as_deref(), cli.output.as_deref(), &app_config);
    config.validate()?;
    tracing::info!("📡 Webhook endpoint: {}", config.webhook_endpoint());

    let mut form = FormState::new();
    if let Some(path) = &cli.file {
        let candidate = storage::read_selected_file(path, cli.mime_type.as_deref()).await?;
        form.select_file(candidate)?;
    } else if let Some(asin) = &cli.asin {
        form.set_asin(asin.clone());
    }

    if cli.dry_run {
        return perform_dry_run(&form, &config);
    }

    let transport = ReqwestTransport::new()?;
    let mut pipeline = SubmissionPipeline::new();
    pipeline
        .submit(&mut form, &transport, config.webhook_endpoint())
        .await;

    if let Some(e) = pipeline.take_error() {
        return Err(e);
    }
    let Some(result) = pipeline.result() else {
        return Ok(());
    };

    if let Some(directory) = config.output_directory() {
        let path = storage::save_result(Path::new(directory), result, Utc::now()).await?;
        println!("💾 Analysis saved to: {}", path.display());
    }

    let copy_state = CopyState::new();
    if result.success {
        for item in &cli.copy {
            copy_item(&SystemClipboard, result, *item, &copy_state);
        }
    }

    let report = render_report(result, cli.json, &copy_state)?;
    if let Some(body) = &report.body {
        println!("{}", body);
    }
    if let Some(warning) = &report.warning {
        tracing::warn!("Webhook answered with success: false");
        eprintln!("⚠️ {}", warning);
    }

    Ok(())
}

fn perform_dry_run(form: &FormState, config: &impl ConfigProvider) -> review_seo::Result<()> {
    println!("🔍 Dry Run Analysis:");
    println!("  Endpoint: {}", config.webhook_endpoint());
    println!("  Method: POST (Content-Type: application/json)");

    let payload = form.build_payload()?;
    println!("  Payload: {}", payload.describe());

    if let (Payload::File(file_payload), Some(file)) = (&payload, form.file()) {
        println!("  File size: {} bytes", file.bytes.len());
        if file_payload.file_type == FileKind::Csv {
            match storage::count_csv_records(&file.bytes) {
                Ok(records) => println!("  CSV records: {}", records),
                Err(e) => println!("  CSV records: unreadable ({})", e),
            }
        }
    }

    if let Some(directory) = config.output_directory() {
        println!("  Output directory: {}", directory);
    }

    println!();
    println!("✅ Dry run complete. Nothing was sent.");
    Ok(())
}
