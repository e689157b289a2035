//! Command-line demo: query one category and print a sample.

use std::path::{Path, PathBuf};

use trafikinfo::schema::{CameraResult, ErrorMessage, SituationResult, TrainStationResult};
use trafikinfo::{Client, ClientConfig, Error, Query};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Get the API key from the environment
    let api_key = std::env::var("TRAFIKINFO_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: TRAFIKINFO_API_KEY not set. The service will reject queries.");
        String::new()
    });

    let mut args = std::env::args().skip(1);
    let category = args.next().unwrap_or_else(|| "camera".to_string());
    let save_to = args.next().map(PathBuf::from);

    let client = Client::new(ClientConfig::new(api_key)).expect("Failed to create client");

    let outcome = match category.as_str() {
        "camera" => show_cameras(&client, save_to.as_deref()).await,
        "trainstation" => show_stations(&client, save_to.as_deref()).await,
        "situation" => show_situations(&client, save_to.as_deref()).await,
        other => {
            eprintln!("Unknown category: {other}");
            eprintln!("Usage: trafikinfo [camera|trainstation|situation] [save-path]");
            std::process::exit(2);
        }
    };

    if let Err(e) = outcome {
        eprintln!("Query failed: {e}");
        std::process::exit(1);
    }
}

/// Fetch a handful of road cameras and print where their photos are.
async fn show_cameras(client: &Client, save_to: Option<&Path>) -> Result<(), Error> {
    let query = Query::new().with_attribute("limit", "5");

    for result in client.fetch::<CameraResult>(&query, save_to).await? {
        report_service_error(result.error.as_ref());
        println!("{} cameras", result.cameras.len());
        for camera in result.cameras {
            println!(
                "  {} ({})",
                camera.name.as_deref().unwrap_or("?"),
                camera.photo_url.as_deref().unwrap_or("no photo"),
            );
        }
    }

    Ok(())
}

/// Fetch a handful of train stations and print their signatures.
async fn show_stations(client: &Client, save_to: Option<&Path>) -> Result<(), Error> {
    let query = Query::new().with_attribute("limit", "10");

    for result in client.fetch::<TrainStationResult>(&query, save_to).await? {
        report_service_error(result.error.as_ref());
        println!("{} stations", result.train_stations.len());
        for station in result.train_stations {
            println!(
                "  {} {}",
                station.location_signature.as_deref().unwrap_or("?"),
                station.advertised_location_name.as_deref().unwrap_or(""),
            );
        }
    }

    Ok(())
}

/// Fetch current roadworks, filtered server-side by message type.
async fn show_situations(client: &Client, save_to: Option<&Path>) -> Result<(), Error> {
    let query = Query::new().with_attribute("limit", "5").with_body(
        "<FILTER>\n      <EQ name=\"Deviation.MessageType\" value=\"Vägarbete\" />\n    </FILTER>",
    );

    for result in client.fetch::<SituationResult>(&query, save_to).await? {
        report_service_error(result.error.as_ref());
        println!("{} situations", result.situations.len());
        for situation in result.situations {
            for deviation in situation.deviation {
                println!(
                    "  [{}] {}",
                    deviation.road_number.as_deref().unwrap_or("-"),
                    deviation.header.as_deref().unwrap_or(""),
                );
            }
        }
    }

    Ok(())
}

/// Print a service-level error block, if the result carries one.
fn report_service_error(error: Option<&ErrorMessage>) {
    if let Some(error) = error {
        eprintln!(
            "Service error from {}: {}",
            error.source.as_deref().unwrap_or("unknown"),
            error.message.as_deref().unwrap_or("no message"),
        );
    }
}
