//! NFT Import Endpoints
//!
//! Reads the connected Tezos wallet through the backend proxy and imports
//! selected tokens into the catalog. Wallet connection itself is handled by
//! the backend's wallet SDK.

use serde::{Deserialize, Serialize};

use super::{get_json, post_json, ApiResult};
use crate::models::TezosNft;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportArgs<'a> {
    token_ids: &'a [String],
}

/// Outcome of an import batch
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    #[serde(default)]
    pub imported: u32,
    #[serde(default)]
    pub skipped: u32,
}

/// `GET /api/nfts/tezos`
pub async fn list_tezos_nfts() -> ApiResult<Vec<TezosNft>> {
    get_json("/api/nfts/tezos").await
}

/// `POST /api/nfts/tezos/import`
pub async fn import_tezos_nfts(token_ids: &[String]) -> ApiResult<ImportReport> {
    post_json("/api/nfts/tezos/import", &ImportArgs { token_ids }).await
}
