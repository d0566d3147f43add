#![cfg(test)]

use std::net::TcpListener;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock server answering every GET with the same status code
pub(crate) async fn get_mock_server(response_code: u16) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(response_code))
        .mount(&mock_server)
        .await;

    mock_server
}

/// Mock server answering the n-th GET with the n-th status code.
/// Requests beyond the end of the list get a 404.
pub(crate) async fn get_sequenced_mock_server(response_codes: &[u16]) -> MockServer {
    let mock_server = MockServer::start().await;
    for code in response_codes {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(*code))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
    }

    mock_server
}

/// URL of a local port nobody listens on
pub(crate) fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Couldn't bind a local port");
    let port = listener
        .local_addr()
        .expect("Couldn't read the local address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}
