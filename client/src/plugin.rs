use std::fmt;

use crate::api::{segment, Api};
use crate::error::ConnectResult;
use crate::models::{ConfigInfos, ConfigMap, PluginInfo};

/// A connector plugin installed on the worker
#[derive(Debug, Clone)]
pub struct Plugin {
    api: Api,
    pub class_name: String,
    pub type_name: String,
    pub version: Option<String>,
}

impl Plugin {
    pub(crate) fn from_info(api: Api, info: PluginInfo) -> Self {
        Self {
            api,
            class_name: info.class,
            type_name: info.plugin_type,
            version: info.version,
        }
    }

    /// Class name without its package, e.g. `FileStreamSinkConnector`
    pub fn short_name(&self) -> &str {
        self.class_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.class_name)
    }

    /// Ask the worker to validate `config` against this plugin
    pub async fn validate(&self, config: &ConfigMap) -> ConnectResult<ConfigInfos> {
        let endpoint = format!(
            "/connector-plugins/{}/config/validate/",
            segment(self.short_name())
        );
        self.api.put_as(&endpoint, config).await
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kafka_connect_config::ClientConfig;

    fn plugin(class: &str) -> Plugin {
        let api = Api::new(&ClientConfig::default()).unwrap();
        Plugin::from_info(
            api,
            PluginInfo {
                class: class.to_string(),
                plugin_type: "sink".to_string(),
                version: Some("3.6.0".to_string()),
            },
        )
    }

    #[test]
    fn test_short_name() {
        let p = plugin("org.apache.kafka.connect.file.FileStreamSinkConnector");
        assert_eq!(p.short_name(), "FileStreamSinkConnector");
        assert_eq!(p.to_string(), "org.apache.kafka.connect.file.FileStreamSinkConnector");

        assert_eq!(plugin("Bare").short_name(), "Bare");
    }
}
