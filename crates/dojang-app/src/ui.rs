use std::sync::Arc;

use dojang_config::Config;
use dojang_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::RwLock;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    categories: Vec<String>,
) -> anyhow::Result<()> {
    dojang_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, config, categories).await
}
