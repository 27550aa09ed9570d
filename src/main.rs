use anyhow::Context;
use chrono::Timelike;
use clap::Parser;
use office_directory::utils::error::ErrorSeverity;
use office_directory::utils::logger::{self, LogFormat};
use office_directory::utils::validation::{self, Validate};
use office_directory::{
    CatalogConfig, CliConfig, DirectoryError, Language, LocalizedField, OfficeDirectory,
    StatusRefresher, StatusSnapshot, SystemClock, REFRESH_PERIOD,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(LogFormat::from_flag(args.log_json), args.verbose);

    tracing::info!("Starting office-directory CLI");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 載入目錄
    let config = match &args.catalog {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path);
            CatalogConfig::from_file(path)
                .with_context(|| format!("Failed to load catalog file '{}'", path))?
        }
        None => CatalogConfig::sample(),
    };

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let mut directory = match config.build_directory() {
        Ok(directory) => directory,
        Err(e) => fail(&e),
    };

    // --lang 接受 EN、en-US 等寫法，之後一律使用正規代碼
    let lang = match &args.lang {
        Some(raw) => Language::parse(raw).unwrap_or_else(|| {
            tracing::warn!("Unsupported language '{}', showing Spanish", raw);
            Language::FALLBACK
        }),
        None => config.default_language(),
    };
    let lang = lang.code();

    if let Some(id) = &args.select {
        if let Err(e) = directory.select_office(id) {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            if e.severity() > ErrorSeverity::Low {
                std::process::exit(exit_code(&e));
            }
        }
    }

    if !args.watch {
        let now = chrono::Local::now().naive_local();
        let now = match args.hour {
            Some(hour) => {
                if let Err(e) = validation::validate_range("--hour", hour, 0, 23) {
                    fail(&e);
                }
                now.with_hour(hour).unwrap_or(now)
            }
            None => now,
        };
        let snapshot = StatusSnapshot::at(now, 0);
        render(&directory, lang, &snapshot, args.json)?;
        return Ok(());
    }

    let handle = StatusRefresher::spawn(Arc::new(SystemClock), REFRESH_PERIOD);
    let mut status_rx = handle.subscribe();
    render(&directory, lang, &handle.current(), args.json)?;

    let mut refreshes = 0u64;
    loop {
        if args.ticks.is_some_and(|limit| refreshes >= limit) {
            break;
        }
        tokio::select! {
            changed = status_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                refreshes += 1;
                let snapshot = status_rx.borrow_and_update().clone();
                print_status(&directory, &snapshot, args.json)?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, stopping status refresher");
                break;
            }
        }
    }

    handle.shutdown().await;
    Ok(())
}

fn render(
    directory: &OfficeDirectory,
    lang: &str,
    snapshot: &StatusSnapshot,
    json: bool,
) -> anyhow::Result<()> {
    let office = directory.active_office();

    if json {
        let output = serde_json::json!({
            "office": office,
            "language": Language::from_code_or_fallback(lang),
            "title": office.localized(LocalizedField::Title, lang)?,
            "contact_actions": office.contact_actions(lang)?,
            "status": snapshot,
        });
        let pretty = serde_json::to_string_pretty(&output).map_err(DirectoryError::from)?;
        println!("{}", pretty);
        return Ok(());
    }

    println!("📋 Offices:");
    for candidate in directory.offices() {
        let marker = if directory.is_active(&candidate.id) { "▶" } else { " " };
        println!("  {} {:<18} [{}]  {}", marker, candidate.city, candidate.state, candidate.id);
    }
    println!();

    println!("🏛  {}", office.localized(LocalizedField::Title, lang)?);
    println!("   \"{}\"", office.localized(LocalizedField::Quote, lang)?);
    println!("   {}", office.localized(LocalizedField::Description, lang)?);
    println!("   ⚖  {}", office.localized_services(lang)?.join(" · "));
    for action in office.contact_actions(lang)? {
        println!("   {:<18} {}  <{}>", action.label, action.value, action.href);
    }
    println!();

    print_status(directory, snapshot, false)
}

fn print_status(directory: &OfficeDirectory, snapshot: &StatusSnapshot, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", snapshot.to_json()?);
    } else {
        println!(
            "STATUS [ {} ] {}  ({})",
            directory.active_office().state,
            snapshot.label(),
            snapshot.checked_at.format("%H:%M")
        );
    }
    Ok(())
}

fn exit_code(e: &DirectoryError) -> i32 {
    // 根據錯誤嚴重程度決定退出碼
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: &DirectoryError) -> ! {
    tracing::error!(
        "❌ Catalog setup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(exit_code(e).max(1));
}
