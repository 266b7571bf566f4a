mod builders;
mod http_server_mock;

pub use builders::*;
pub use http_server_mock::MockHttpServer;
pub use transport_mock::{FailingTransport, MockTransport};
