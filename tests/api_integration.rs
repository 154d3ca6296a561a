//! Integration tests for the wallet service API types and client.
//!
//! These tests verify serialization/deserialization of the wire types, the
//! envelope-to-receipt conversions, and client configuration. For live
//! service tests, enable the `live_tests` feature and set the
//! `AXCHAIN_API_URL` environment variable.

use axchain_wallet_sdk::api::*;
use axchain_wallet_sdk::shared::{DidStatus, Identifier};

// =============================================================================
// Type Serialization/Deserialization Tests
// =============================================================================

mod wallet_types {
    use super::*;

    #[test]
    fn test_register_body_wire_format() {
        let body = RegisterWalletBody::new(WalletType::Independent, "alice", "pw")
            .with_phone("12345")
            .with_email("alice@example.com")
            .with_meta_data(serde_json::json!({"department": "finance"}));

        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "Independent");
        assert_eq!(json["access"], "alice");
        assert_eq!(json["secret"], "pw");
        assert_eq!(json["meta_data"]["department"], "finance");
        // No caller key: field omitted so the service generates a keypair
        assert!(json.get("public_key").is_none());
    }

    #[test]
    fn test_register_body_with_public_key() {
        let body = RegisterWalletBody::new(WalletType::Organization, "acme", "pw")
            .with_id("did:axn:acme")
            .with_public_key("AAAA");

        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["id"], "did:axn:acme");
        assert_eq!(json["type"], "Organization");
        assert_eq!(json["public_key"], "AAAA");
    }

    #[test]
    fn test_sub_wallet_body_wire_format() {
        let body = RegisterSubWalletBody::new("did:axn:main", SubWalletType::Fee);
        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["id"], "did:axn:main");
        assert_eq!(json["type"], "fee");
    }

    #[test]
    fn test_wallet_balance_deserialize() {
        let json = r#"{
            "colored_tokens": {
                "tok-1": {"id": "tok-1", "amount": 500}
            },
            "digital_assets": {
                "asset-1": {"id": "asset-1", "amount": 1, "name": "deed", "status": 0}
            }
        }"#;
        let balance: WalletBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.colored_tokens["tok-1"].amount, 500);
        assert_eq!(balance.digital_assets["asset-1"].name, "deed");
    }

    #[test]
    fn test_wallet_balance_empty() {
        let balance: WalletBalance = serde_json::from_str("{}").unwrap();
        assert!(balance.colored_tokens.is_empty());
        assert!(balance.digital_assets.is_empty());
    }

    #[test]
    fn test_wallet_info_deserialize() {
        let json = r#"{
            "id": "did:axn:alice",
            "type": "Independent",
            "endpoint": "ep-1",
            "status": "active",
            "created": 1700000000,
            "updated": 1700000100,
            "hds": {
                "did:axn:alice#cash": {
                    "id": "did:axn:alice#cash",
                    "type": "cash",
                    "endpoint": "ep-1",
                    "status": "active",
                    "created": 1700000000,
                    "updated": 1700000000
                }
            }
        }"#;
        let info: WalletInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id.as_str(), "did:axn:alice");
        assert_eq!(info.wallet_type, WalletType::Independent);
        assert_eq!(info.status, DidStatus::Active);
        assert_eq!(info.hds.len(), 1);

        let sub = &info.hds[&Identifier::new("did:axn:alice#cash")];
        assert_eq!(sub.sub_type, SubWalletType::Cash);
    }
}

mod poe_types {
    use super::*;

    #[test]
    fn test_poe_body_wire_format() {
        let body = PoeBody::new("contract", "did:axn:owner")
            .with_parent("poe-root")
            .with_expire_time(1800000000)
            .with_content(b"document bytes")
            .with_metadata(b"notes".to_vec());

        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["name"], "contract");
        assert_eq!(json["parent_id"], "poe-root");
        assert_eq!(json["owner"], "did:axn:owner");
        assert_eq!(json["expire_time"], 1800000000i64);
        // metadata crosses the wire base64 encoded
        assert_eq!(json["metadata"], "bm90ZXM=");
        assert_eq!(json["hash"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn test_poe_payload_deserialize() {
        let json = r#"{
            "id": "poe-1",
            "name": "contract",
            "parent_id": "",
            "owner": "did:axn:owner",
            "expire_time": 0,
            "hash": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            "metadata": "bm90ZXM=",
            "created": 1700000000,
            "updated": 1700000200,
            "status": "active"
        }"#;
        let payload: PoePayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.id.as_str(), "poe-1");
        assert_eq!(payload.metadata, b"notes");
        assert!(payload.updated >= payload.created);
        assert_eq!(payload.status, DidStatus::Active);
    }

    #[test]
    fn test_offchain_metadata_wire_names() {
        let json = r#"{
            "filename": "doc.pdf",
            "endpoint": "storage-1",
            "storageType": "s3",
            "contentHash": "abcd",
            "size": 2048
        }"#;
        let meta: OffchainMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.storage_type, "s3");
        assert_eq!(meta.content_hash, "abcd");
        assert_eq!(meta.size, 2048);

        let back: serde_json::Value = serde_json::to_value(&meta).unwrap();
        assert!(back.get("storageType").is_some());
        assert!(back.get("contentHash").is_some());
    }

    #[test]
    fn test_upload_form_field_constants() {
        assert_eq!(OFFCHAIN_POE_ID, "poe_id");
        assert_eq!(OFFCHAIN_POE_FILE, "poe_file");
        assert_eq!(SIGNATURE_CREATOR, "signature.creator");
        assert_eq!(SIGNATURE_CREATED, "signature.created");
        assert_eq!(SIGNATURE_NONCE, "signature.nonce");
        assert_eq!(SIGNATURE_SIGNATURE_VALUE, "signature.signatureValue");
    }
}

mod transaction_types {
    use super::*;

    #[test]
    fn test_axt_denomination_ladder() {
        assert_eq!(AxtAmount::from_micro_axt(1).unwrap(), AxtAmount::from_atom(1_000));
        assert_eq!(AxtAmount::from_axt(1).unwrap(), AxtAmount::from_atom(1_000_000));
        assert_eq!(
            AxtAmount::from_axt(2).unwrap(),
            AxtAmount::from_micro_axt(2_000).unwrap()
        );
        assert!(AxtAmount::from_axt(i64::MAX).is_none());
    }

    #[test]
    fn test_issue_ctoken_body_wire_format() {
        let body = IssueCTokenBody {
            issuer: "did:axn:issuer".into(),
            owner: "did:axn:owner".into(),
            asset_id: "asset-1".into(),
            amount: 1000,
            fee: Some(Fee::new(AxtAmount::from_atom(10))),
        };
        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["issuer"], "did:axn:issuer");
        assert_eq!(json["asset_id"], "asset-1");
        assert_eq!(json["amount"], 1000);
        assert_eq!(json["fee"]["amount"], 10);
    }

    #[test]
    fn test_transfer_ctoken_body_wire_format() {
        let body = TransferCTokenBody {
            from: "did:axn:alice".into(),
            to: "did:axn:bob".into(),
            asset_id: "asset-1".into(),
            tokens: vec![TokenAmount::new("tok-1", 25)],
            fee: None,
        };
        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["from"], "did:axn:alice");
        assert_eq!(json["tokens"][0]["token_id"], "tok-1");
        assert_eq!(json["tokens"][0]["amount"], 25);
        // Absent fee is omitted, not null
        assert!(json.get("fee").is_none());
    }

    #[test]
    fn test_transfer_asset_body_wire_format() {
        let body = TransferAssetBody {
            from: "did:axn:alice".into(),
            to: "did:axn:bob".into(),
            assets: vec!["asset-1".into(), "asset-2".into()],
            fee: Some(Fee::new(AxtAmount::from_micro_axt(1).unwrap())),
        };
        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["assets"].as_array().unwrap().len(), 2);
        assert_eq!(json["fee"]["amount"], 1000);
    }
}

mod txlog_types {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_utxo_deserialize_wire_names() {
        let json = r#"{
            "sourceTxDataHash": "hash-1",
            "ix": 0,
            "cTokenId": "tok-1",
            "cType": 1,
            "value": 500,
            "addr": "did:axn:alice",
            "until": -1,
            "script": "c2NyaXB0",
            "createdAt": {"seconds": 1700000000, "nanos": 0},
            "founder": "did:axn:issuer",
            "txType": 0,
            "bcTxID": "bc-tx-1"
        }"#;
        let utxo: Utxo = serde_json::from_str(json).unwrap();
        assert_eq!(utxo.source_tx_data_hash, "hash-1");
        assert_eq!(utxo.c_token_id, "tok-1");
        assert_eq!(utxo.value, 500);
        assert_eq!(utxo.until, -1);
        assert_eq!(utxo.script, b"script");
        assert_eq!(utxo.created_at.unwrap().seconds, 1700000000);
        assert_eq!(utxo.bc_tx_id, "bc-tx-1");
    }

    #[test]
    fn test_spent_txout_deserialize() {
        let json = r#"{
            "sourceTxDataHash": "hash-1",
            "ix": 0,
            "cTokenId": "tok-1",
            "value": 500,
            "addr": "did:axn:alice",
            "spentTxDataHash": "hash-2",
            "spentAt": {"seconds": 1700000500, "nanos": 0},
            "bcTxID": "bc-tx-2"
        }"#;
        let stxo: SpentTxOut = serde_json::from_str(json).unwrap();
        assert_eq!(stxo.spent_tx_data_hash, "hash-2");
        assert_eq!(stxo.spent_at.unwrap().seconds, 1700000500);
        assert!(stxo.created_at.is_none());
    }

    #[test]
    fn test_transaction_logs_keyed_by_endpoint() {
        let json = r#"{
            "ep-1": {
                "utxo": [{"sourceTxDataHash": "h1", "value": 100, "addr": "did:axn:alice"}],
                "stxo": []
            },
            "ep-2": {}
        }"#;
        let logs: TransactionLogs = serde_json::from_str(json).unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs["ep-1"].utxo.len(), 1);
        assert_eq!(logs["ep-1"].utxo[0].addr, "did:axn:alice");
        assert!(logs["ep-2"].utxo.is_empty());
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!(TxDirection::from_str("in").unwrap(), TxDirection::In);
        assert_eq!(TxDirection::from_str("out").unwrap(), TxDirection::Out);
        assert!(TxDirection::from_str("both").is_err());
        assert!(TxDirection::from_str("").is_err());
    }
}

// =============================================================================
// Envelope and Error Mapping Tests
// =============================================================================

mod response_envelope {
    use super::*;

    #[test]
    fn test_success_envelope_to_registration_receipt() {
        let json = r#"{
            "code": 200,
            "message": "ok",
            "id": "did:axn:alice",
            "endpoint": "ep-1",
            "key_pair": {"private_key": "cHJpdg==", "public_key": "cHVi"},
            "created": 1700000000,
            "token_id": "",
            "transaction_ids": ["tx-1"]
        }"#;
        let envelope: WalletResponse = serde_json::from_str(json).unwrap();
        let receipt: RegistrationReceipt = envelope.ensure_success().unwrap().into();

        assert_eq!(receipt.id.as_str(), "did:axn:alice");
        assert_eq!(receipt.endpoint, "ep-1");
        assert_eq!(receipt.transaction_ids, vec!["tx-1"]);
        let key_pair = receipt.key_pair.unwrap();
        assert_eq!(key_pair.public_key, "cHVi");
    }

    #[test]
    fn test_envelope_without_keypair() {
        // Caller supplied the public key, so no keypair comes back
        let json = r#"{"code": 200, "message": "ok", "id": "did:axn:bob", "created": 1}"#;
        let envelope: WalletResponse = serde_json::from_str(json).unwrap();
        let receipt: RegistrationReceipt = envelope.ensure_success().unwrap().into();
        assert!(receipt.key_pair.is_none());
    }

    #[test]
    fn test_not_found_envelope_becomes_error() {
        let json = r#"{"code": 404, "message": "no such poe"}"#;
        let envelope: WalletResponse = serde_json::from_str(json).unwrap();
        let err = envelope.ensure_success().unwrap_err();
        assert!(matches!(err, WalletError::NotFound(msg) if msg == "no such poe"));
    }

    #[test]
    fn test_insufficient_funds_envelope_becomes_error() {
        let json = r#"{"code": 402, "message": "balance too low"}"#;
        let envelope: WalletResponse = serde_json::from_str(json).unwrap();
        let err = envelope.ensure_success().unwrap_err();
        assert!(matches!(err, WalletError::InsufficientFunds(_)));
        assert_eq!(err.status_code(), Some(402));
    }

    #[test]
    fn test_issue_ctoken_receipt_carries_token_id() {
        let json = r#"{"code": 200, "message": "ok", "token_id": "tok-9", "transaction_ids": ["tx-1", "tx-2"]}"#;
        let envelope: WalletResponse = serde_json::from_str(json).unwrap();
        let receipt: IssueCTokenReceipt = envelope.ensure_success().unwrap().into();
        assert_eq!(receipt.token_id, "tok-9");
        assert_eq!(receipt.transaction_ids.len(), 2);
    }

    #[test]
    fn test_transfer_receipt() {
        let json = r#"{"code": 200, "message": "ok", "transaction_ids": ["tx-7"]}"#;
        let envelope: WalletResponse = serde_json::from_str(json).unwrap();
        let receipt: TransferReceipt = envelope.ensure_success().unwrap().into();
        assert_eq!(receipt.transaction_ids, vec!["tx-7"]);
    }
}

// =============================================================================
// Client Configuration Tests
// =============================================================================

mod client_config {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builder_configuration() {
        let client = WalletClient::builder("https://wallet.axchain.io/")
            .timeout(Duration::from_secs(60))
            .header("X-Tenant", "acme")
            .with_retry(RetryConfig::new(2))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://wallet.axchain.io");
    }

    #[test]
    fn test_invalid_default_header_rejected() {
        let err = WalletClient::builder("https://wallet.axchain.io")
            .header("bad header name", "v")
            .build()
            .unwrap_err();
        assert!(matches!(err, WalletError::InvalidInput(_)));
    }

    #[test]
    fn test_invoke_options() {
        let opts = InvokeOptions::sync().with_timeout(Duration::from_secs(120));
        assert_eq!(opts.mode, InvokeMode::Sync);
        assert_eq!(opts.timeout, Some(Duration::from_secs(120)));

        let opts = InvokeOptions::new();
        assert_eq!(opts.mode, InvokeMode::Async);
        assert!(opts.timeout.is_none());
    }

    #[tokio::test]
    async fn test_query_validation_before_network() {
        let client = WalletClient::new("http://192.0.2.1").unwrap();
        let opts = InvokeOptions::default();

        let err = client
            .get_wallet_balance(&opts, &Identifier::default())
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::InvalidInput(_)));

        let err = client.query_poe(&opts, &Identifier::default()).await.unwrap_err();
        assert!(matches!(err, WalletError::InvalidInput(_)));
    }
}

// =============================================================================
// Live Service Tests (require AXCHAIN_API_URL)
// =============================================================================

#[cfg(feature = "live_tests")]
mod live {
    use super::*;

    fn live_client() -> WalletClient {
        let url = std::env::var("AXCHAIN_API_URL").expect("AXCHAIN_API_URL must be set");
        WalletClient::new(url).unwrap()
    }

    #[tokio::test]
    async fn test_live_register_and_query() {
        let client = live_client();
        let opts = InvokeOptions::default();

        let access = format!("sdk-test-{}", axchain_wallet_sdk::signing::generate_nonce());
        let body = RegisterWalletBody::new(WalletType::Independent, access, "password");
        let receipt = client.register(&opts, &body).await.unwrap();

        assert!(!receipt.id.is_empty());
        let key_pair = receipt.key_pair.expect("service-generated keypair");
        assert!(!key_pair.private_key.is_empty());

        let info = client.get_wallet_info(&opts, &receipt.id).await.unwrap();
        assert_eq!(info.id, receipt.id);
        assert_eq!(info.status, DidStatus::Active);
    }

    #[tokio::test]
    async fn test_live_poe_round_trip() {
        let client = live_client();
        let opts = InvokeOptions::sync();

        let body = RegisterWalletBody::new(WalletType::Independent, "poe-owner", "password");
        let wallet = client.register(&opts, &body).await.unwrap();
        let key_pair = wallet.key_pair.unwrap();

        let poe = PoeBody::new("live-test-doc", wallet.id.clone()).with_content(b"live document");
        let param = axchain_wallet_sdk::signing::SignatureParam::new(
            wallet.id.clone(),
            key_pair.private_key.clone(),
        );
        let receipt = client.create_poe_sign(&opts, &poe, &param).await.unwrap();

        let payload = client.query_poe(&opts, &receipt.id).await.unwrap();
        assert_eq!(payload.name, "live-test-doc");
        assert_eq!(payload.owner, wallet.id);
        assert_eq!(payload.hash, poe.hash);
    }

    #[tokio::test]
    async fn test_live_unknown_wallet_not_found() {
        let client = live_client();
        let opts = InvokeOptions::default();

        let err = client
            .get_wallet_info(&opts, &Identifier::new("did:axn:does-not-exist"))
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::NotFound(_)));
    }
}
