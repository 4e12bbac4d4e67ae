//! Global subscriber installation. Kept in its own test binary because the
//! subscriber can only be installed once per process.

use lc_chaincode::prelude::*;
use lc_chaincode::telemetry::{init_tracing, TelemetryError};

#[tokio::test]
async fn tracing_installs_once_and_service_logs_through_it() {
    let config = ChaincodeConfig {
        log_level: "lc_chaincode=debug".to_string(),
        json_logs: true,
        ..ChaincodeConfig::default()
    };

    init_tracing(&config).unwrap();
    assert!(matches!(
        init_tracing(&config),
        Err(TelemetryError::Install(_))
    ));

    let service = ChaincodeService::new(InMemoryState::new(), config);
    service.init("init", &["[]".to_string()]).await.unwrap();
    assert!(service.invoke("delete", &[]).await.is_err());
}
