mod cli;

use dlnaprofile::{
    common::MediaClass,
    config,
    engine::{catalog, ProfileRegistry},
    identify::{self, DescriptorFormat},
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "dlnaprofile=debug,dlnaprofile_engine=trace,dlnaprofile_probe=trace".to_string()
        } else {
            "dlnaprofile=warn,dlnaprofile_engine=warn,dlnaprofile_probe=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Identify {
            input,
            ffprobe,
            json,
        } => identify_file(&input, cli.config.as_deref(), ffprobe, json),
        Commands::Catalog { class } => list_catalog(class.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("dlnaprofile {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn identify_file(
    input: &std::path::Path,
    config_path: Option<&std::path::Path>,
    ffprobe: bool,
    json: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    if !input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", input);
    }

    let format = if ffprobe {
        DescriptorFormat::Ffprobe
    } else {
        DescriptorFormat::Descriptor
    };
    let descriptor = identify::load_descriptor(input, format)?;
    tracing::debug!("Descriptor: {:?}", descriptor);

    let registry = ProfileRegistry::from_config(config.engine.clone())?;
    let protocol = config::protocol_info(&config.output)?;
    let report = identify::identify(&registry, &protocol, &descriptor);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match (report.profile, report.protocol_info.as_deref()) {
        (Some(profile), Some(info)) => {
            println!("Profile: {}", profile.id);
            println!("MIME: {}", profile.mime);
            println!("Label: {}", profile.label);
            println!("Class: {}", profile.media_class);
            println!("UPnP class: {}", report.upnp_class);
            println!("protocolInfo: {}", info);
        }
        _ => {
            println!("No compliant DLNA profile found.");
        }
    }

    Ok(())
}

fn list_catalog(class: Option<&str>) -> Result<()> {
    let class: Option<MediaClass> = class.map(str::parse::<MediaClass>).transpose()?;

    for record in catalog::CATALOG
        .iter()
        .filter(|r| class.map_or(true, |c| r.media_class == c))
    {
        println!(
            "{:<24} {:<26} {:<6} {}",
            record.id, record.mime, record.media_class, record.label
        );
    }

    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            let families = config.engine.families.resolve()?;
            println!("✓ Configuration is valid");
            println!(
                "  Families: {}",
                families
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!("  Extension check: {}", config.engine.extension_check);
            println!("  Capability: {:?}", config.output.capability);
            println!("  Protocol: {:?}", config.output.protocol);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Extension check: {}", config.engine.extension_check);
            println!("  Capability: {:?}", config.output.capability);
        }
    }

    Ok(())
}
