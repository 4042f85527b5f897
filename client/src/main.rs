use anyhow::{Context, Result};
use kafka_connect::{ConnectorStatus, KafkaConnect};
use kafka_connect_observability::{init_tracing, TracingConfig};
use serde::Serialize;
use tracing::{info, warn};

/// Snapshot printed to stdout
#[derive(Serialize)]
struct Report {
    url: String,
    version: Option<String>,
    commit: Option<String>,
    kafka_cluster_id: Option<String>,
    connectors: Vec<ConnectorReport>,
    plugins: Vec<PluginReport>,
}

#[derive(Serialize)]
struct ConnectorReport {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ConnectorStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct PluginReport {
    class: String,
    #[serde(rename = "type")]
    plugin_type: String,
    version: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(TracingConfig::for_service("kafka-connect-inspect"));

    // Reads `.env` as well as the process environment
    let kc = KafkaConnect::from_env()
        .await
        .context("Failed to connect to Kafka Connect worker")?;

    info!("🔌 Inspecting Kafka Connect worker at {}", kc.api().url());

    let mut connectors = Vec::new();
    for connector in kc.connectors().list().await.context("Failed to list connectors")? {
        // A connector deleted between listing and status is reported, not fatal
        let report = match connector.status().await {
            Ok(status) => ConnectorReport {
                name: connector.name().to_string(),
                status: Some(status),
                error: None,
            },
            Err(e) => {
                warn!("⚠️ Could not read status of {}: {}", connector.name(), e);
                ConnectorReport {
                    name: connector.name().to_string(),
                    status: None,
                    error: Some(e.to_string()),
                }
            }
        };
        connectors.push(report);
    }

    let plugins = kc
        .plugins()
        .await
        .context("Failed to list connector plugins")?
        .into_iter()
        .map(|p| PluginReport {
            class: p.class_name,
            plugin_type: p.type_name,
            version: p.version,
        })
        .collect();

    let info = kc.info();
    let report = Report {
        url: kc.api().url().to_string(),
        version: info.version.clone(),
        commit: info.commit.clone(),
        kafka_cluster_id: info.kafka_cluster_id.clone(),
        connectors,
        plugins,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
