//! # Vehiclelink CLI
//!
//! Command-line access to the vehicle-reference API: one subcommand per
//! resource, printing the decoded payload as pretty JSON.

use anyhow::{bail, Context, Result};
use serde_json::to_string_pretty;
use std::env;
use tracing_subscriber::EnvFilter;
use vehiclelink::{
    AttachmentQuery, FetchOptions, VariantQuery, VehicleQuery, VehiclelinkClient,
};

mod config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        return Ok(());
    }

    if matches!(args[1].as_str(), "help" | "--help" | "-h") {
        print_help();
        return Ok(());
    }

    let client = VehiclelinkClient::new(config::from_env()?)
        .context("Failed to create Vehiclelink client")?;
    let opts = FetchOptions::default();

    match args[1].as_str() {
        "segments" => {
            let segments = client.fetch_segments(&opts).await?;
            println!("{}", to_string_pretty(&segments)?);
        }
        "makes" => {
            let [segment] = expect_args(&args, &["segment"])?;
            let makes = client.fetch_makes(segment, &opts).await?;
            println!("{}", to_string_pretty(&makes)?);
        }
        "families" => {
            let [segment, make_code] = expect_args(&args, &["segment", "make-code"])?;
            let families = client.fetch_families(segment, make_code, &opts).await?;
            println!("{}", to_string_pretty(&families)?);
        }
        "vehicles" => {
            let [segment, make_code, family_code, body_style_code] = expect_args(
                &args,
                &["segment", "make-code", "family-code", "body-style-code"],
            )?;
            let query = VehicleQuery {
                size_unit: env_opt("VEHICLELINK_SIZE_UNIT"),
                weight_unit: env_opt("VEHICLELINK_WEIGHT_UNIT"),
                ..VehicleQuery::default()
            };
            let vehicles = client
                .fetch_vehicles(segment, make_code, family_code, body_style_code, &query)
                .await?;
            println!("{}", to_string_pretty(&vehicles)?);
        }
        "variant" => {
            let [segment, variant_code] = expect_args(&args, &["segment", "variant-code"])?;
            let variant = client.fetch_variant(segment, variant_code, &opts).await?;
            println!("{}", to_string_pretty(&variant)?);
        }
        "variants" => {
            let [segment, make_code, family_code, body_style_code, year_code] = expect_args(
                &args,
                &[
                    "segment",
                    "make-code",
                    "family-code",
                    "body-style-code",
                    "year-code",
                ],
            )?;
            let query = VariantQuery {
                size_unit: env_opt("VEHICLELINK_SIZE_UNIT"),
                weight_unit: env_opt("VEHICLELINK_WEIGHT_UNIT"),
                seat_capacity: env_opt("VEHICLELINK_SEAT_CAPACITY"),
                ..VariantQuery::default()
            };
            let variants = client
                .fetch_variants(
                    segment,
                    make_code,
                    family_code,
                    body_style_code,
                    year_code,
                    &query,
                )
                .await?;
            println!("{}", to_string_pretty(&variants)?);
        }
        "attachments" => {
            let query = AttachmentQuery {
                size_unit: env_opt("VEHICLELINK_SIZE_UNIT"),
                weight_unit: env_opt("VEHICLELINK_WEIGHT_UNIT"),
                ..AttachmentQuery::default()
            };
            let attachments = client.fetch_attachments(&query).await?;
            println!("{}", to_string_pretty(&attachments)?);
        }
        cmd => {
            eprintln!("Unknown command: {cmd}");
            print_help();
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Pull exactly `N` positional arguments after the subcommand.
fn expect_args<'a, const N: usize>(
    args: &'a [String],
    names: &[&str; N],
) -> Result<[&'a str; N]> {
    let supplied = &args[2..];
    if supplied.len() < N {
        bail!(
            "Usage: vehiclelink {} {}",
            args[1],
            names.map(|n| format!("<{n}>")).join(" ")
        );
    }
    let mut out = [""; N];
    for (slot, value) in out.iter_mut().zip(supplied) {
        *slot = value.as_str();
    }
    Ok(out)
}

/// Read an optional query value from the environment, treating empty as unset.
fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn print_help() {
    println!(
        r#"Vehiclelink CLI

USAGE:
    vehiclelink <COMMAND> [ARGS]

COMMANDS:
    segments                                                       List market segments
    makes <segment>                                                List makes in a segment
    families <segment> <make-code>                                 List families of a make
    vehicles <segment> <make-code> <family-code> <body-style-code> List matching vehicles
    variant <segment> <variant-code>                               Fetch a single variant
    variants <segment> <make-code> <family-code> <body-style-code> <year-code>
                                                                   List matching variants
    attachments                                                    List accessory attachments
    help                                                           Show this help message

ENVIRONMENT:
    VEHICLELINK_HOST           Base URL of the Vehiclelink server (required)
    VEHICLELINK_TOKEN          Bearer token (required)
    VEHICLELINK_TIMEOUT_SECS   Request timeout in seconds
    VEHICLELINK_SIZE_UNIT      Unit for dimensional values (vehicles/variants/attachments)
    VEHICLELINK_WEIGHT_UNIT    Unit for weight values (vehicles/variants/attachments)
    VEHICLELINK_SEAT_CAPACITY  Seat capacity filter (variants)

EXAMPLES:
    VEHICLELINK_HOST=https://api.example.com VEHICLELINK_TOKEN=token \
        vehiclelink makes vehicles
    VEHICLELINK_SIZE_UNIT=mm VEHICLELINK_WEIGHT_UNIT=kg \
        vehiclelink vehicles vehicles TOYO PRADO WAGON
"#
    );
}
