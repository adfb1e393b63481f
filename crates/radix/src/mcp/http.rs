use crate::prelude::{eprintln, *};
use axum::{extract::State, routing::post, Json, Router};
use radix_core::{AllConversionsResult, ConversionResult};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use super::JsonRpcResponse;

/// Body of `POST /convert`, matching the desktop binding's argument names
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub input: String,
    pub from_base: i64,
    pub to_base: i64,
}

/// Body of `POST /convert/all`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertAllRequest {
    pub input: String,
    pub from_base: i64,
}

pub async fn run_http(options: super::cli::HttpOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    if global.verbose {
        eprintln!("Starting MCP server with HTTP transport on {addr}...");
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| Error::Bind {
            addr: addr.clone(),
            source,
        })?;

    if global.verbose {
        eprintln!("JSON-RPC endpoint: http://{addr}/message");
        eprintln!("Conversion endpoints: http://{addr}/convert, http://{addr}/convert/all");
    }

    axum::serve(listener, router(global))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

fn router(global: crate::Global) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/message", post(message_handler))
        .route("/convert", post(convert_handler))
        .route("/convert/all", post(convert_all_handler))
        .layer(cors)
        .with_state(Arc::new(global))
}

async fn message_handler(
    State(global): State<Arc<crate::Global>>,
    Json(request): Json<serde_json::Value>,
) -> Json<JsonRpcResponse> {
    Json(super::handle_request(&request.to_string(), &global))
}

async fn convert_handler(Json(request): Json<ConvertRequest>) -> Json<ConversionResult> {
    log::debug!(
        "POST /convert input={:?} from={} to={}",
        request.input,
        request.from_base,
        request.to_base
    );
    Json(radix_core::convert_number(
        &request.input,
        request.from_base,
        request.to_base,
    ))
}

async fn convert_all_handler(Json(request): Json<ConvertAllRequest>) -> Json<AllConversionsResult> {
    log::debug!(
        "POST /convert/all input={:?} from={}",
        request.input,
        request.from_base
    );
    Json(radix_core::convert_to_all_systems(
        &request.input,
        request.from_base,
    ))
}
