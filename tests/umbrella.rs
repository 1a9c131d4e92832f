//! The umbrella crate exposes everything a host needs to stand up the bridge.

use release_logger::{
    bootstrap, BridgeConfig, DeviceMetadata, FixedStorageRoots, ReleaseLoggerModule,
    StaticDeviceMetadata, ERROR_CODE,
};
use serde_json::json;
use std::sync::Arc;

#[core_async::test]
async fn test_bootstrap_from_reexports() {
    let dir = tempfile::tempdir().unwrap();
    let config = BridgeConfig::builder()
        .app_name("com.example.app")
        .storage_roots(Arc::new(FixedStorageRoots::new(dir.path())))
        .device_metadata(Arc::new(StaticDeviceMetadata::new(
            "ios",
            DeviceMetadata::new("Apple", "iPhone15,2", "17.2", 0).with_system_name("iOS"),
        )))
        .build()
        .unwrap();

    let module = bootstrap(&config);
    assert_eq!(module.name(), ReleaseLoggerModule::NAME);

    let info = module.dispatch("getDeviceInfo", vec![]).await.unwrap();
    assert_eq!(info["platform"], "ios");
    assert_eq!(info["systemName"], "iOS");

    let log = dir.path().join("app-log.log");
    let written = module
        .dispatch(
            "writeLogEntry",
            vec![json!(log.to_string_lossy()), json!("hello")],
        )
        .await
        .unwrap();
    assert_eq!(written, json!(true));

    let rejection = module
        .dispatch("getFileSize", vec![json!(1), json!(2)])
        .await
        .unwrap_err();
    assert_eq!(rejection.code, ERROR_CODE);
}
