//! Mock transport for isolating services in tests.

use mockall::mock;

use crate::transport::{ApiRequest, Transport, TransportResult};

mock! {
    pub Transport {}

    impl Transport for Transport {
        fn execute(&self, request: &ApiRequest) -> TransportResult<Vec<u8>>;
    }
}
