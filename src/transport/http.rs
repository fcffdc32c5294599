//! Blocking HTTPS transport built on `ureq`.

use std::io::Read;
use std::time::Duration;

use url::Url;

use crate::models::config::ClientConfig;
use crate::transport::rate_limit::RateLimiter;
use crate::transport::{ApiRequest, Transport, TransportError, TransportResult};

pub struct HttpTransport {
    base_url: Url,
    api_key: String,
    agent: ureq::Agent,
    limiter: Option<RateLimiter>,
}

impl HttpTransport {
    /// Builds a transport for `https://{host}`, rejecting hosts that do not
    /// form a valid URL.
    pub fn new(config: &ClientConfig) -> TransportResult<Self> {
        let base_url = base_url(&config.host)?;
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Ok(Self {
            base_url,
            api_key: config.api_key.clone(),
            agent,
            limiter: config.requests_per_second.and_then(RateLimiter::per_second),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn url_for(&self, request: &ApiRequest) -> TransportResult<Url> {
        build_url(&self.base_url, request)
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &ApiRequest) -> TransportResult<Vec<u8>> {
        let url = self.url_for(request)?;
        let call = self
            .agent
            .request(request.method.as_str(), url.as_str())
            .set("Authorization", &format!("Bearer {}", self.api_key));

        if let Some(limiter) = &self.limiter {
            limiter.take();
        }
        log::debug!("{} {}", request.method, url.path());

        let response = match &request.body {
            Some(body) => call
                .set("Content-Type", "application/json")
                .send_string(&body.to_string()),
            None => call.call(),
        };

        match response {
            Ok(resp) if (200..300).contains(&resp.status()) => {
                let mut body = Vec::new();
                resp.into_reader().read_to_end(&mut body)?;
                Ok(body)
            }
            Ok(resp) => Err(unexpected_status(request, resp.status())),
            Err(ureq::Error::Status(code, _)) => Err(unexpected_status(request, code)),
            Err(ureq::Error::Transport(err)) => Err(TransportError::Request(err.to_string())),
        }
    }
}

fn unexpected_status(request: &ApiRequest, code: u16) -> TransportError {
    log::warn!("{} {} returned status {code}", request.method, request.path);
    TransportError::Status { code }
}

fn base_url(host: &str) -> TransportResult<Url> {
    let url = Url::parse(&format!("https://{host}"))?;
    if url.cannot_be_a_base() || url.host_str().is_none_or(str::is_empty) {
        return Err(TransportError::InvalidUrl(url::ParseError::EmptyHost));
    }
    Ok(url)
}

fn build_url(base_url: &Url, request: &ApiRequest) -> TransportResult<Url> {
    let mut url = base_url.clone();
    {
        let mut path = url.path_segments_mut().map_err(|_| {
            TransportError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
        })?;
        path.pop_if_empty();
        path.extend(request.segments());
    }
    if !request.query.is_empty() {
        url.query_pairs_mut().extend_pairs(&request.query);
    }
    Ok(url)
}
