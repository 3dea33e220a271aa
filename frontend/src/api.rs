use async_trait::async_trait;
use gloo_net::http::Request;
use log::{debug, error};
use shared::constants::{wheel_config_endpoint, wheel_spin_endpoint};
use shared::wheel_config::transform_config;
use shared::{OutcomeSource, RouletteConfig, SpinResponse, WheelConfiguration, WheelError, WheelResult};

/// Talks to the remote wheel service over HTTP.
pub struct HttpOutcomeSource {
    base_url: String,
    wheel_id: u32,
}

impl HttpOutcomeSource {
    pub fn new(base_url: impl Into<String>, wheel_id: u32) -> Self {
        Self {
            base_url: base_url.into(),
            wheel_id,
        }
    }

    pub async fn fetch_roulette_config(&self) -> WheelResult<RouletteConfig> {
        let url = format!("{}{}", self.base_url, wheel_config_endpoint(self.wheel_id));
        let response = Request::get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(http_error)?;

        if !response.ok() {
            error!("Error fetching roulette configuration: status {}", response.status());
            return Err(WheelError::Http(format!("HTTP error! status: {}", response.status())));
        }

        response
            .json::<RouletteConfig>()
            .await
            .map_err(|e| WheelError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl OutcomeSource for HttpOutcomeSource {
    async fn request_spin_outcome(&self) -> WheelResult<SpinResponse> {
        let url = format!("{}{}", self.base_url, wheel_spin_endpoint(self.wheel_id));
        let response = Request::post(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(http_error)?;

        if !response.ok() {
            error!("Error spinning roulette: status {}", response.status());
            return Err(WheelError::Http(format!("HTTP error! status: {}", response.status())));
        }

        let spin = response
            .json::<SpinResponse>()
            .await
            .map_err(|e| WheelError::Decode(e.to_string()))?;
        debug!("Spin response: prize {} ({}), success {}", spin.prize_won.id, spin.prize_won.name, spin.success);
        Ok(spin)
    }

    async fn fetch_wheel_configuration(&self) -> WheelResult<WheelConfiguration> {
        let config = self.fetch_roulette_config().await?;
        Ok(transform_config(&config))
    }
}

fn http_error(err: gloo_net::Error) -> WheelError {
    WheelError::Http(format!("Network error: {}", err))
}
