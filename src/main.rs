use clap::Parser;
use portfolio_admin::{admin, cli, config, error, logging};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("✖ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// ストア操作の失敗は表示済みのため`Ok(false)`で返る
async fn run(cli: Cli) -> Result<bool> {
    let config = Config::load()?;
    let mode = cli.mode.unwrap_or(config.default_mode);

    let succeeded = match cli.command {
        Commands::List => {
            let service = admin::build_service(&config, mode)?;
            admin::list(&service).await
        }

        Commands::Create { fields } => {
            let service = admin::build_service(&config, mode)?;
            admin::create(&service, &fields).await
        }

        Commands::Update { index, fields } => {
            let service = admin::build_service(&config, mode)?;
            admin::update(&service, index, &fields).await
        }

        Commands::Delete { index, yes } => {
            let service = admin::build_service(&config, mode)?;
            admin::delete(&service, index, yes).await?
        }

        Commands::Seed => {
            admin::seed(&admin::local_store(&config)?)?;
            true
        }

        Commands::Clear { yes } => {
            admin::clear(&admin::local_store(&config)?, yes)?;
            true
        }

        Commands::Render { output, title } => {
            let service = admin::build_service(&config, mode)?;
            admin::render(&service, &output, &title).await?
        }

        Commands::Showcase { fallback } => admin::showcase(&config, &fallback).await?,

        Commands::Config { set_remote_url, set_api_key, set_default_mode, show } => {
            let mut config = config;
            let changed = set_remote_url.is_some() || set_api_key.is_some() || set_default_mode.is_some();

            if let Some(url) = set_remote_url {
                config.remote_url = Some(url);
            }
            if let Some(key) = set_api_key {
                config.api_key = Some(key);
            }
            if let Some(mode) = set_default_mode {
                config.default_mode = mode;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  既定の保存先: {}", config.default_mode);
                println!("  データディレクトリ: {}", config.data_dir()?.display());
                println!("  リモートURL: {}", config.get_remote_url().unwrap_or_else(|| "未設定".into()));
                println!("  認証ヘッダー: {}", config.key_header);
                println!("  APIキー: {}", if config.get_api_key().is_some() { "設定済み" } else { "未設定" });
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
            true
        }
    };

    Ok(succeeded)
}
