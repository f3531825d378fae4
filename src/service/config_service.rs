use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::Result;

// 配置服務，透過注入的配置適配器取得配置
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> Result<AppConfig> {
        let config = self.config_port.get_config()?;
        log::debug!("取得配置：{:?}", config);
        Ok(config)
    }
}
