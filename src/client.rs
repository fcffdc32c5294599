//! Facade bundling a transport with the client-wide settings.

use crate::domain::channel::Channel;
use crate::domain::criteria::{SearchCriteria, SearchData};
use crate::domain::prospect::Prospect;
use crate::domain::quick_search::{ProspectPreview, QuickSearch};
use crate::domain::search::Search;
use crate::domain::types::{ChannelId, ChannelKind, QuickSearchId, SearchId};
use crate::dto::api::ExportFormat;
use crate::models::config::ClientConfig;
use crate::models::prospect::{ListDecodeMode, ProspectBatch};
use crate::services::{ServiceResult, channels, prospects, quick_searches, searches};
use crate::transport::{HttpTransport, Transport, TransportResult};

pub struct Client<T> {
    transport: T,
    list_decode_mode: ListDecodeMode,
}

impl Client<HttpTransport> {
    /// Connects to the configured host over HTTPS.
    pub fn from_config(config: &ClientConfig) -> TransportResult<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(transport).with_list_decode_mode(config.list_decode_mode))
    }
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            list_decode_mode: ListDecodeMode::default(),
        }
    }

    pub fn with_list_decode_mode(mut self, mode: ListDecodeMode) -> Self {
        self.list_decode_mode = mode;
        self
    }

    pub fn list_decode_mode(&self) -> ListDecodeMode {
        self.list_decode_mode
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list_channels(&self) -> ServiceResult<Vec<Channel>> {
        channels::list_channels(&self.transport)
    }

    pub fn get_channel(&self, id: ChannelId) -> ServiceResult<Channel> {
        channels::get_channel(&self.transport, id)
    }

    pub fn list_quick_searches(&self) -> ServiceResult<Vec<QuickSearch>> {
        quick_searches::list_quick_searches(&self.transport)
    }

    pub fn get_quick_search(&self, id: QuickSearchId) -> ServiceResult<QuickSearch> {
        quick_searches::get_quick_search(&self.transport, id)
    }

    pub fn create_quick_search(&self, channel: ChannelKind, url: &str) -> ServiceResult<()> {
        quick_searches::create_quick_search(&self.transport, channel, url)
    }

    pub fn delete_quick_search(&self, id: QuickSearchId) -> ServiceResult<()> {
        quick_searches::delete_quick_search(&self.transport, id)
    }

    pub fn count_potential_prospects(&self, criteria: &SearchCriteria) -> ServiceResult<u64> {
        searches::count_potential_prospects(&self.transport, criteria)
    }

    pub fn preview_potential_prospects(
        &self,
        criteria: &SearchCriteria,
    ) -> ServiceResult<Vec<ProspectPreview>> {
        searches::preview_potential_prospects(&self.transport, criteria)
    }

    pub fn list_searches(&self) -> ServiceResult<Vec<Search>> {
        searches::list_searches(&self.transport)
    }

    pub fn get_search(&self, id: SearchId) -> ServiceResult<Search> {
        searches::get_search(&self.transport, id)
    }

    pub fn create_search(&self, title: &str, limit: i64, data: &SearchData) -> ServiceResult<()> {
        searches::create_search(&self.transport, title, limit, data)
    }

    pub fn update_search(
        &self,
        id: SearchId,
        title: &str,
        limit: i64,
        data: &SearchData,
    ) -> ServiceResult<()> {
        searches::update_search(&self.transport, id, title, limit, data)
    }

    pub fn delete_search(&self, id: SearchId) -> ServiceResult<()> {
        searches::delete_search(&self.transport, id)
    }

    pub fn start_search(&self, id: SearchId) -> ServiceResult<()> {
        searches::start_search(&self.transport, id)
    }

    pub fn pause_search(&self, id: SearchId) -> ServiceResult<()> {
        searches::pause_search(&self.transport, id)
    }

    pub fn finish_search(&self, id: SearchId) -> ServiceResult<()> {
        searches::finish_search(&self.transport, id)
    }

    /// Prospects of a search, decoded with the client's list decode mode.
    /// Rejected records are logged and dropped.
    pub fn get_prospects(&self, id: SearchId) -> ServiceResult<Vec<Prospect>> {
        self.get_prospect_batch(id).map(|batch| batch.prospects)
    }

    pub fn get_prospect_batch(&self, id: SearchId) -> ServiceResult<ProspectBatch> {
        prospects::get_prospects(&self.transport, id, self.list_decode_mode)
    }

    pub fn export_prospects(&self, id: SearchId, format: &ExportFormat) -> ServiceResult<Vec<u8>> {
        prospects::export_prospects(&self.transport, id, format)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::transport::mock::MockTransport;

    #[test]
    fn from_config_carries_decode_mode() {
        let mut config = ClientConfig::new("secret");
        config.list_decode_mode = ListDecodeMode::Skip;

        let client = Client::from_config(&config).expect("should build client");

        assert_eq!(client.list_decode_mode(), ListDecodeMode::Skip);
        assert_eq!(
            client.transport().base_url().as_str(),
            "https://app.prospety.com/api"
        );
    }

    #[test]
    fn get_prospects_uses_configured_mode() {
        let mut transport = MockTransport::new();
        transport.expect_execute().times(1).returning(|_| {
            Ok(json!({"total": 1, "data": [{"video_keywords": [], "photo": 1}]})
                .to_string()
                .into_bytes())
        });
        let client = Client::new(transport).with_list_decode_mode(ListDecodeMode::Skip);

        let prospects = client
            .get_prospects(SearchId::new(1).unwrap())
            .expect("skip mode should not fail");

        assert!(prospects.is_empty());
    }
}
