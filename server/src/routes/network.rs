//! `GET /api/network`: BSSID of the server host's Wi-Fi association.

use axum::response::Json;
use roster::NetworkInfo;

use crate::services::network;

pub async fn network_info() -> Json<NetworkInfo> {
    Json(NetworkInfo { bssid: network::detect_bssid().await })
}
